//! Script document emission.
//!
//! Assembles a complete script document from a [`Program`]: program header
//! comments, week headers, day headers, and one exercise line per exercise.
//! Emission is total over well-typed programs: every missing field has a
//! documented default, so this module has no error path.
//!
//! Example output:
//! ```text
//! // Strength Block
//! # Week 1
//! ## Day 1 - Push
//! Bench Press / 4x5 / progress: lp(5lb)
//! ```

use crate::progression::format_progression;
use crate::sets::format_sets;
use crate::types::{Day, GeneratorConfig, Program};

/// Compile a program into a script document.
///
/// Weeks, days, and exercises are emitted in list order; nothing is
/// re-sorted. `week_number` is printed as a label only.
pub fn compile(program: &Program, config: &GeneratorConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    if config.include_comments {
        lines.push(format!("// {}", program.name));
        if !program.description.is_empty() {
            lines.push(format!("// {}", program.description));
        }
        lines.push(String::new());
    }

    for week in &program.weeks {
        if config.include_week_headers {
            let mut header = format!("# Week {}", week.week_number);
            if week.is_deload {
                header.push_str(" (Deload)");
            }
            lines.push(header);
            lines.push(String::new());
        }

        for (position, day) in week.days.iter().enumerate() {
            emit_day(&mut lines, day, position + 1, config);
            lines.push(String::new());
        }
    }

    lines.join("\n").trim().to_string()
}

/// Compile a single day, for previews outside a full program context.
pub fn compile_day(day: &Day, config: &GeneratorConfig) -> String {
    let mut lines: Vec<String> = Vec::new();
    emit_day(&mut lines, day, 1, config);
    lines.join("\n")
}

fn emit_day(lines: &mut Vec<String>, day: &Day, position: usize, config: &GeneratorConfig) {
    let mut header = if day.name.is_empty() {
        format!("## Day {}", position)
    } else {
        format!("## {}", day.name)
    };
    if !day.focus.is_empty() {
        header.push_str(&format!(" - {}", day.focus));
    }
    lines.push(header);

    if config.include_comments && !day.notes.is_empty() {
        lines.push(format!("// {}", day.notes));
    }

    for exercise in &day.exercises {
        let mut line = format!("{} / {}", exercise.name, format_sets(exercise));

        let progression = format_progression(exercise, config);
        if !progression.is_empty() {
            line.push_str(&format!(" / progress: {}", progression));
        }

        if config.include_comments && !exercise.notes.is_empty() {
            line.push_str(&format!("  // {}", exercise.notes));
        }

        lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Exercise, ProgressionScheme, Reps, SetScheme, Week};
    use crate::validator::validate;
    use crate::weight::Weight;

    fn bench_press() -> Exercise {
        Exercise {
            name: "Bench Press".into(),
            sets: vec![SetScheme::working(Reps::Count(5)); 4],
            progression: ProgressionScheme::Linear {
                increment: Some(Weight::from_f64(5.0)),
            },
            notes: String::new(),
        }
    }

    fn single_day_program() -> Program {
        Program {
            name: "Test Program".into(),
            description: "A test program".into(),
            weeks: vec![Week {
                week_number: 1,
                is_deload: false,
                days: vec![Day {
                    name: "Day 1".into(),
                    focus: "Push".into(),
                    notes: String::new(),
                    exercises: vec![bench_press()],
                }],
            }],
        }
    }

    #[test]
    fn test_end_to_end_exercise_line() {
        let script = compile(&single_day_program(), &GeneratorConfig::standard());

        assert!(script.contains("// Test Program"));
        assert!(script.contains("# Week 1"));
        assert!(script.contains("## Day 1 - Push"));
        assert!(script.contains("Bench Press / 4x5 / progress: lp(5lb)"));
    }

    #[test]
    fn test_compiled_script_validates() {
        let script = compile(&single_day_program(), &GeneratorConfig::standard());
        let report = validate(&script);
        assert!(report.is_valid(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_deload_week_header() {
        let mut program = single_day_program();
        program.weeks[0].is_deload = true;

        let script = compile(&program, &GeneratorConfig::standard());
        assert!(script.contains("# Week 1 (Deload)"));
    }

    #[test]
    fn test_week_number_is_a_label_not_a_sort_key() {
        let mut program = single_day_program();
        let mut second = program.weeks[0].clone();
        second.week_number = 5;
        program.weeks.insert(0, second);

        let script = compile(&program, &GeneratorConfig::standard());
        let week5 = script.find("# Week 5").unwrap();
        let week1 = script.find("# Week 1").unwrap();
        assert!(week5 < week1);
    }

    #[test]
    fn test_day_fallback_label() {
        let mut program = single_day_program();
        program.weeks[0].days[0].name = String::new();
        program.weeks[0].days[0].focus = String::new();

        let script = compile(&program, &GeneratorConfig::standard());
        assert!(script.contains("## Day 1"));
    }

    #[test]
    fn test_no_comments_config() {
        let mut config = GeneratorConfig::standard();
        config.include_comments = false;

        let mut program = single_day_program();
        program.weeks[0].days[0].exercises[0].notes = "keep elbows tucked".into();

        let script = compile(&program, &config);
        assert!(!script.contains("//"));
    }

    #[test]
    fn test_no_week_headers_config() {
        let mut config = GeneratorConfig::standard();
        config.include_week_headers = false;

        let script = compile(&single_day_program(), &config);
        assert!(!script.contains("# Week"));
        assert!(script.contains("## Day 1"));
    }

    #[test]
    fn test_exercise_notes_inline_comment() {
        let mut program = single_day_program();
        program.weeks[0].days[0].exercises[0].notes = "pause at the chest".into();

        let script = compile(&program, &GeneratorConfig::standard());
        assert!(script.contains("Bench Press / 4x5 / progress: lp(5lb)  // pause at the chest"));
    }

    #[test]
    fn test_day_notes_emitted_as_comment() {
        let mut program = single_day_program();
        program.weeks[0].days[0].notes = "short on time? drop the last set".into();

        let script = compile(&program, &GeneratorConfig::standard());
        assert!(script.contains("// short on time? drop the last set"));
    }

    #[test]
    fn test_custom_progression_omits_clause() {
        let mut program = single_day_program();
        program.weeks[0].days[0].exercises[0].progression = ProgressionScheme::Custom {
            params: serde_json::Value::Null,
        };

        let script = compile(&program, &GeneratorConfig::standard());
        assert!(script.contains("Bench Press / 4x5"));
        assert!(!script.contains("progress:"));
    }

    #[test]
    fn test_empty_description_skipped() {
        let mut program = single_day_program();
        program.description = String::new();

        let script = compile(&program, &GeneratorConfig::standard());
        assert!(script.contains("// Test Program"));
        assert!(!script.contains("// A test program"));
    }

    #[test]
    fn test_document_is_trimmed() {
        let script = compile(&single_day_program(), &GeneratorConfig::standard());
        assert_eq!(script, script.trim());
    }

    #[test]
    fn test_compile_day_preview() {
        let day = Day {
            name: "Upper".into(),
            focus: "Pull".into(),
            notes: String::new(),
            exercises: vec![bench_press()],
        };

        let preview = compile_day(&day, &GeneratorConfig::standard());
        assert!(preview.starts_with("## Upper - Pull"));
        assert!(preview.contains("Bench Press / 4x5"));
    }

    #[test]
    fn test_multi_week_multi_day_validates() {
        let deadlift = Exercise {
            name: "Deadlift".into(),
            sets: {
                let mut sets = vec![SetScheme::working(Reps::Count(5)); 2];
                let mut amrap = SetScheme::working(Reps::Count(5));
                amrap.is_amrap = true;
                sets.push(amrap);
                sets
            },
            progression: ProgressionScheme::Sum {
                increment: Some(Weight::from_f64(10.0)),
                target_reps: None,
            },
            notes: "touch and go".into(),
        };

        let ohp = Exercise {
            name: "Overhead Press".into(),
            sets: vec![SetScheme::working(Reps::Range(8, 10)); 3],
            progression: ProgressionScheme::Double {
                increment: Some(Weight::from_f64(2.5)),
            },
            notes: String::new(),
        };

        let week = Week {
            week_number: 1,
            is_deload: false,
            days: vec![
                Day {
                    name: "Day 1".into(),
                    focus: "Push".into(),
                    notes: String::new(),
                    exercises: vec![bench_press(), ohp],
                },
                Day {
                    name: "Day 2".into(),
                    focus: "Pull".into(),
                    notes: "deadlift day".into(),
                    exercises: vec![deadlift],
                },
            ],
        };

        let mut week2 = week.clone();
        week2.week_number = 2;
        week2.is_deload = true;

        let program = Program {
            name: "Two Weeks".into(),
            description: String::new(),
            weeks: vec![week, week2],
        };

        let script = compile(&program, &GeneratorConfig::standard());
        assert!(script.contains("Overhead Press / 3x8-10 / progress: dp(2.5lb, 8, 10)"));
        assert!(script.contains("1x5, 1x5, 1x5+"));
        assert!(script.contains("# Week 2 (Deload)"));

        let report = validate(&script);
        assert!(report.is_valid(), "errors: {:?}", report.errors);
    }
}
