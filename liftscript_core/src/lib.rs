#![forbid(unsafe_code)]

//! Core compiler and validator for the Liftscript program notation.
//!
//! This crate provides:
//! - Domain types (programs, weeks, days, exercises, sets)
//! - Weight quantization against a plate inventory
//! - Set-group and progression-clause formatting
//! - The script emitter
//! - An independent script validator
//!
//! Every component is a pure, synchronous function over immutable inputs;
//! no state is retained between calls.

pub mod config;
pub mod emitter;
pub mod equipment;
pub mod error;
pub mod logging;
pub mod progression;
pub mod sets;
pub mod types;
pub mod validator;
pub mod weight;

// Re-export commonly used types
pub use config::Config;
pub use emitter::{compile, compile_day};
pub use equipment::{standard_plate_set, EquipmentConfig, PlateInventory, StandardPlateSet};
pub use error::{Error, Result};
pub use progression::{format_progression, quantize_increment};
pub use sets::format_sets;
pub use types::*;
pub use validator::{validate, ScriptError, ValidationReport};
pub use weight::Weight;
