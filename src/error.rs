//! Error types for terrapoint

use thiserror::Error;

/// Main error type for terrapoint operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("No countries selected")]
    NoSelection,

    #[error("Gave up sampling {country} after {attempts} attempts")]
    SamplingTimeout { country: String, attempts: u32 },

    #[error("Failed to write output: {0}")]
    OutputWrite(#[source] std::io::Error),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for terrapoint operations
pub type Result<T> = std::result::Result<T, Error>;
