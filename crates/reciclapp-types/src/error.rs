//! Error types for reciclapp

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Negative or non-finite dimension / capacity
    #[error("Invalid measurement for {field}: {value}")]
    InvalidMeasurement { field: &'static str, value: f64 },

    /// Numbered catalog choice outside `1..=max` (or not a number)
    #[error("Invalid selection '{input}': choose a number between 1 and {max}")]
    SelectionOutOfRange { input: String, max: usize },

    /// Arguments that do not fit together (e.g. capacity for a non-bottle)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl Error {
    /// Whether the caller can recover by asking for corrected input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidMeasurement { .. }
                | Error::SelectionOutOfRange { .. }
                | Error::InvalidArgument(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
