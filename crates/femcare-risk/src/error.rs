//! Error types for the screening core

use thiserror::Error;

/// Errors that can occur while validating input or loading configuration
#[derive(Debug, Error)]
pub enum RiskError {
    /// A form field is outside its declared domain
    #[error("Invalid input: {field} = {value} is outside [{min}, {max}]")]
    InvalidInput {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// Heuristic weights or thresholds are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Reading a configuration or input file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON could not be parsed into the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RiskError {
    /// Name of the offending field, if this is an input error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RiskError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
