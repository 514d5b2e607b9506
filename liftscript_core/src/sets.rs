//! Set-group formatting.
//!
//! Collapses an exercise's working sets into the compact set x rep
//! notation used by exercise lines, e.g. `4x5`, `3x8-10`, `1x5, 1x5, 1x5+`
//! or `3x10 @RPE8`.

use crate::types::{Exercise, SetScheme};

/// Fallback notation when an exercise has no working sets.
const DEFAULT_SETS: &str = "3x10";

/// Format an exercise's working sets as script notation.
///
/// Warm-up sets never appear in notation. A homogeneous group (same reps
/// and same AMRAP flag throughout) collapses to `{count}x{reps}`, keeping
/// the first set's RPE annotation if present. A mixed group renders each
/// set as its own `1x{reps}` entry, comma separated, without RPE.
pub fn format_sets(exercise: &Exercise) -> String {
    let working = exercise.working_sets();

    let Some(first) = working.first() else {
        return DEFAULT_SETS.to_string();
    };

    let homogeneous = working
        .iter()
        .all(|s| s.reps == first.reps && s.is_amrap == first.is_amrap);

    if homogeneous {
        let mut result = format!("{}x{}", working.len(), rep_notation(first));
        if let Some(rpe) = first.rpe {
            result.push_str(&format!(" @RPE{}", rpe));
        }
        result
    } else {
        working
            .iter()
            .map(|s| format!("1x{}", rep_notation(s)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn rep_notation(set: &SetScheme) -> String {
    let mut reps = set.reps.to_string();
    if set.is_amrap {
        reps.push('+');
    }
    reps
}
