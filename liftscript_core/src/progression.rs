//! Progression clause selection.
//!
//! Maps an exercise's progression scheme onto a script progression clause:
//! - Linear: `lp(5lb)` - add weight each session
//! - Double: `dp(5lb, 8, 10)` - climb the rep range, then add weight
//! - Sum: `sum(5lb, 25)` - total reps across sets drives the increase
//! - Custom: no clause; callers omit `progress:` entirely

use crate::types::{Exercise, GeneratorConfig, ProgressionScheme, Reps};
use crate::weight::Weight;
use crate::EquipmentConfig;

/// Increment used when a scheme does not configure one.
fn fallback_increment() -> Weight {
    Weight::from_f64(5.0)
}

/// Target used by sum progression when not configured.
const DEFAULT_SUM_TARGET_REPS: u32 = 25;

/// Rep range assumed by double progression when an exercise has no
/// working sets at all.
const DEFAULT_DOUBLE_RANGE: (u32, u32) = (8, 12);

/// Format the progression clause for an exercise.
///
/// Returns an empty string for `Custom`; the emitter drops the clause.
pub fn format_progression(exercise: &Exercise, config: &GeneratorConfig) -> String {
    let unit = config.weight_unit;
    let increment = exercise
        .progression
        .increment()
        .unwrap_or_else(fallback_increment);
    let increment = quantize_increment(increment, config.equipment.as_ref());

    match &exercise.progression {
        ProgressionScheme::Linear { .. } => format!("lp({}{})", increment, unit),

        ProgressionScheme::Double { .. } => {
            let (min, max) = double_progression_range(exercise);
            format!("dp({}{}, {}, {})", increment, unit, min, max)
        }

        ProgressionScheme::Sum { target_reps, .. } => {
            let target = target_reps.unwrap_or(DEFAULT_SUM_TARGET_REPS);
            format!("sum({}{}, {})", increment, unit, target)
        }

        ProgressionScheme::Custom { .. } => String::new(),
    }
}

/// Snap an increment onto what the equipment can actually load.
///
/// Without equipment the increment passes through unchanged. Otherwise,
/// increments below the minimum achievable step are raised to it, and
/// anything else is rounded to the nearest multiple of that step.
pub fn quantize_increment(increment: Weight, equipment: Option<&EquipmentConfig>) -> Weight {
    let Some(equipment) = equipment else {
        return increment;
    };

    let min_increment = equipment.min_increment();
    if increment < min_increment {
        tracing::debug!(
            "Raising increment {} to minimum achievable {}",
            increment,
            min_increment
        );
        return min_increment;
    }

    increment.round_to_multiple_of(min_increment)
}

/// Rep range for a double progression clause.
///
/// Uses the first working set: a range maps through directly, a scalar `r`
/// becomes `(r, r+2)`. With no working sets, falls back to 8-12.
fn double_progression_range(exercise: &Exercise) -> (u32, u32) {
    match exercise.working_sets().first().map(|s| s.reps) {
        Some(Reps::Range(min, max)) => (min, max),
        Some(Reps::Count(r)) => (r, r + 2),
        None => DEFAULT_DOUBLE_RANGE,
    }
}
