//! Error types for the liftscript_core library.
//!
//! The compiler and validator themselves are total: compilation always
//! produces a document and validation always produces a report. These
//! errors cover the boundary work around them (config files, program
//! decoding, CLI outcomes).

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for liftscript operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A script failed validation with this many errors
    #[error("Script failed validation with {0} error(s)")]
    ScriptInvalid(usize),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
