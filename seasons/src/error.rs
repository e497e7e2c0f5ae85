//! Error types for scan requests and configuration.

/// Result type for fallible crate operations
pub type SeasonsResult<T> = Result<T, SeasonsError>;

/// Error type for validated scans and configuration loading
#[derive(Debug, thiserror::Error)]
pub enum SeasonsError {
    /// The scan range is empty or reversed.
    #[error("Invalid range: start {start} must be before end {end}")]
    InvalidRange { start: f64, end: f64 },

    /// The scan step is zero or negative.
    #[error("Invalid step: {0} days (must be positive)")]
    InvalidStep(f64),

    /// An input is NaN or infinite.
    #[error("Non-finite input: {field} = {value}")]
    NonFiniteInput { field: &'static str, value: f64 },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl SeasonsError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError(message.into())
    }
}
