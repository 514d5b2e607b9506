//! Script document validation.
//!
//! Re-parses arbitrary script text against the line grammar, independent of
//! the emitter, and accumulates every violation with its 1-based line
//! number. Validation never fails and never stops at the first error.
//!
//! The accepted grammar is deliberately looser than what the emitter
//! produces: any line containing a `/` separator is treated as an exercise
//! line, since users hand-edit exported documents. Do not tighten this.

use once_cell::sync::Lazy;
use regex::Regex;

/// RPE annotation, stripped before matching set groups.
static RPE_ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@RPE\d+\.?\d*").unwrap());

/// A single set group: `4x5`, `3x8-10`, `1x5+`.
static SET_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+x\d+(-\d+)?(\+)?$").unwrap());

/// A progression clause: `lp(...)`, `dp(...)`, `sum(...)` with non-empty args.
static PROGRESSION_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(lp|dp|sum)\([^)]+\)$").unwrap());

/// A structural violation found in a script document.
///
/// Each variant carries the 1-based source line and, where useful, the
/// offending substring. The rendered form is `Line {n}: {message}`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("Line {line}: Invalid line format (missing /)")]
    MissingSeparator { line: usize },

    #[error("Line {line}: Exercise needs at least name and sets")]
    MissingParts { line: usize },

    #[error("Line {line}: Missing exercise name")]
    MissingName { line: usize },

    #[error("Line {line}: Invalid sets format: {notation}")]
    InvalidSetsFormat { line: usize, notation: String },

    #[error("Line {line}: Invalid progression: {clause}")]
    InvalidProgression { line: usize, clause: String },
}

impl ScriptError {
    /// The 1-based source line this error refers to.
    pub fn line(&self) -> usize {
        match self {
            ScriptError::MissingSeparator { line }
            | ScriptError::MissingParts { line }
            | ScriptError::MissingName { line }
            | ScriptError::InvalidSetsFormat { line, .. }
            | ScriptError::InvalidProgression { line, .. } => *line,
        }
    }
}

/// Outcome of validating a script document.
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    /// Errors in source order.
    pub errors: Vec<ScriptError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Rendered `Line {n}: {message}` strings, in source order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Validate a script document.
///
/// Blank lines, `//` comments, and `#`/`##` headers are structurally
/// insignificant. Every other line must be an exercise line: a `/`-separated
/// list whose first part is a name, second part matches the sets grammar,
/// and any `progress:` part matches the progression grammar.
pub fn validate(script: &str) -> ValidationReport {
    let mut errors: Vec<ScriptError> = Vec::new();

    for (index, raw_line) in script.trim().lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        // Structurally insignificant lines.
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        if line.starts_with("# ") || line.starts_with("## ") {
            continue;
        }

        if line.contains('/') {
            check_exercise_line(line, line_number, &mut errors);
        } else if !line.starts_with('#') {
            errors.push(ScriptError::MissingSeparator { line: line_number });
        }
    }

    tracing::debug!("Validated script: {} error(s)", errors.len());
    ValidationReport { errors }
}

fn check_exercise_line(line: &str, line_number: usize, errors: &mut Vec<ScriptError>) {
    let parts: Vec<&str> = line.split('/').map(str::trim).collect();

    if parts.len() < 2 {
        errors.push(ScriptError::MissingParts { line: line_number });
        return;
    }

    let name = parts[0];
    if name.is_empty() || name.starts_with("//") {
        errors.push(ScriptError::MissingName { line: line_number });
    }

    let notation = parts[1];
    if !sets_notation_is_valid(notation) {
        errors.push(ScriptError::InvalidSetsFormat {
            line: line_number,
            notation: notation.to_string(),
        });
    }

    for part in &parts[2..] {
        if let Some(clause) = part.strip_prefix("progress:") {
            let clause = clause.trim();
            if !PROGRESSION_CLAUSE.is_match(clause) {
                errors.push(ScriptError::InvalidProgression {
                    line: line_number,
                    clause: clause.to_string(),
                });
            }
        }
    }
}

/// Check a sets notation, e.g. `4x5`, `3x8-10 @RPE8`, `1x5, 1x5, 1x5+`.
fn sets_notation_is_valid(notation: &str) -> bool {
    let stripped = RPE_ANNOTATION.replace_all(notation, "");
    let stripped = stripped.trim();

    stripped
        .split(',')
        .all(|group| SET_GROUP.is_match(group.trim()))
}
