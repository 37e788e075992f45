//! Error types for the fitstat_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitstat_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Packet carried a workout tag not present in the registry
    #[error("unknown workout type '{0}'")]
    UnknownWorkoutType(String),

    /// Packet data length did not match the tag's field count
    #[error("workout type '{workout_type}' expects {expected} values, got {got}")]
    PacketArity {
        workout_type: String,
        expected: usize,
        got: usize,
    },

    /// Workout field violated a domain invariant
    #[error("invalid workout data: {0}")]
    Validation(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
