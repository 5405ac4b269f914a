use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Metadata endpoint probing
    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Probe error types
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The HTTP request (or client) could not be constructed at all
    #[error("Request construction failed: {0}")]
    RequestBuild(String),

    /// Transport-level failure (connection refused, timeout, DNS)
    #[error("Transport failure: {0}")]
    Transport(String),
}

impl ProbeError {
    /// Transport failures are transient; a request that cannot even be
    /// constructed will not get better on a second attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProbeError::Transport(_))
    }
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for metadata probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;

// Additional From implementations for common error types
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
