//! Core domain types for the Liftscript compiler.
//!
//! This module defines the fundamental types used throughout the system:
//! - Rep prescriptions and set schemes
//! - Progression schemes and their parameters
//! - The program hierarchy (program, weeks, days, exercises)
//! - Generator configuration
//!
//! All values are immutable inputs to the compiler core; nothing here is
//! mutated or persisted by the core itself.

use crate::weight::Weight;
use crate::EquipmentConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Rep and Set Types
// ============================================================================

/// A rep prescription: either a fixed count or an inclusive range.
///
/// Serialized as a bare integer (`5`) or a range string (`"8-10"`). The
/// range invariant min <= max is enforced at deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReps", into = "RawReps")]
pub enum Reps {
    Count(u32),
    Range(u32, u32),
}

/// Wire encoding for [`Reps`]: integer or "min-max" string.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawReps {
    Count(u32),
    Text(String),
}

impl TryFrom<RawReps> for Reps {
    type Error = String;

    fn try_from(raw: RawReps) -> Result<Self, Self::Error> {
        match raw {
            RawReps::Count(n) if n > 0 => Ok(Reps::Count(n)),
            RawReps::Count(n) => Err(format!("reps must be positive, got {}", n)),
            RawReps::Text(text) => text.parse(),
        }
    }
}

impl From<Reps> for RawReps {
    fn from(reps: Reps) -> Self {
        match reps {
            Reps::Count(n) => RawReps::Count(n),
            Reps::Range(min, max) => RawReps::Text(format!("{}-{}", min, max)),
        }
    }
}

impl std::str::FromStr for Reps {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((min, max)) = s.split_once('-') {
            let min: u32 = min
                .trim()
                .parse()
                .map_err(|_| format!("invalid rep range bound: {:?}", s))?;
            let max: u32 = max
                .trim()
                .parse()
                .map_err(|_| format!("invalid rep range bound: {:?}", s))?;
            if min == 0 || min > max {
                return Err(format!("rep range must satisfy 0 < min <= max: {:?}", s));
            }
            Ok(Reps::Range(min, max))
        } else {
            let count: u32 = s
                .trim()
                .parse()
                .map_err(|_| format!("invalid reps: {:?}", s))?;
            if count == 0 {
                return Err("reps must be positive".into());
            }
            Ok(Reps::Count(count))
        }
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Count(n) => write!(f, "{}", n),
            Reps::Range(min, max) => write!(f, "{}-{}", min, max),
        }
    }
}

/// Defines a single set within an exercise.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SetScheme {
    pub reps: Reps,

    /// Rate of perceived exertion annotation, rendered as given.
    #[serde(default)]
    pub rpe: Option<f64>,

    #[serde(default)]
    pub is_amrap: bool,

    /// Warm-up sets are kept for provenance but excluded from notation.
    #[serde(default)]
    pub is_warmup: bool,

    #[serde(default)]
    pub rest_seconds: Option<u32>,
}

impl SetScheme {
    pub fn working(reps: Reps) -> Self {
        SetScheme {
            reps,
            rpe: None,
            is_amrap: false,
            is_warmup: false,
            rest_seconds: None,
        }
    }
}

// ============================================================================
// Progression Types
// ============================================================================

/// Progression scheme attached to an exercise.
///
/// Each variant carries its own parameters; `Custom` carries opaque data
/// and never produces a progression clause.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressionScheme {
    /// Linear progression: add weight each session.
    Linear {
        #[serde(default)]
        increment: Option<Weight>,
    },
    /// Double progression: increase reps through a range, then weight.
    Double {
        #[serde(default)]
        increment: Option<Weight>,
    },
    /// Sum progression: total reps across sets drives the increase.
    Sum {
        #[serde(default)]
        increment: Option<Weight>,
        #[serde(default)]
        target_reps: Option<u32>,
    },
    /// Opaque user-supplied progression logic; never rendered as a
    /// progression clause.
    Custom {
        #[serde(default)]
        params: serde_json::Value,
    },
}

impl Default for ProgressionScheme {
    fn default() -> Self {
        ProgressionScheme::Double { increment: None }
    }
}

impl ProgressionScheme {
    /// The configured increment, if this scheme carries one.
    pub fn increment(&self) -> Option<Weight> {
        match self {
            ProgressionScheme::Linear { increment }
            | ProgressionScheme::Double { increment }
            | ProgressionScheme::Sum { increment, .. } => *increment,
            ProgressionScheme::Custom { .. } => None,
        }
    }
}

// ============================================================================
// Program Hierarchy
// ============================================================================

/// An exercise within a training day.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub name: String,

    /// Ordered set list; order is significant.
    pub sets: Vec<SetScheme>,

    #[serde(default)]
    pub progression: ProgressionScheme,

    #[serde(default)]
    pub notes: String,
}

impl Exercise {
    /// The sets that count toward the prescribed stimulus.
    pub fn working_sets(&self) -> Vec<&SetScheme> {
        self.sets.iter().filter(|s| !s.is_warmup).collect()
    }
}

/// A single training day.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Day {
    pub name: String,

    /// Focus label, e.g. "Push" or "Lower Body".
    #[serde(default)]
    pub focus: String,

    pub exercises: Vec<Exercise>,

    #[serde(default)]
    pub notes: String,
}

/// A week in the program.
///
/// `week_number` is a display label, unique within a program but not
/// required to be contiguous; list order is the authoritative emission
/// order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Week {
    pub week_number: u32,
    pub days: Vec<Day>,

    #[serde(default)]
    pub is_deload: bool,
}

/// A complete training program.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Program {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub weeks: Vec<Week>,
}

// ============================================================================
// Generator Configuration
// ============================================================================

/// Weight unit for script output and quantization.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Lb,
    Kg,
}

impl Default for WeightUnit {
    fn default() -> Self {
        WeightUnit::Lb
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Lb => write!(f, "lb"),
            WeightUnit::Kg => write!(f, "kg"),
        }
    }
}

/// Options controlling script generation.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub include_warmups: bool,
    pub include_rest_times: bool,
    pub include_week_headers: bool,
    pub include_comments: bool,
    pub weight_unit: WeightUnit,

    /// Equipment for weight and increment quantization, if known.
    pub equipment: Option<EquipmentConfig>,
}

impl Default for GeneratorConfig {
    /// Defaults matching typical export behavior: headers and comments on,
    /// warm-ups and rest times off, pounds, no equipment.
    fn default() -> Self {
        GeneratorConfig {
            include_warmups: false,
            include_rest_times: false,
            include_week_headers: true,
            include_comments: true,
            weight_unit: WeightUnit::Lb,
            equipment: None,
        }
    }
}

impl GeneratorConfig {
    /// The standard export options.
    pub fn standard() -> Self {
        GeneratorConfig::default()
    }
}
