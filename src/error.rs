use thiserror::Error;

/// Unified error type for releng-tools operations
#[derive(Error, Debug)]
pub enum RelengError {
    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in releng-tools
pub type Result<T> = std::result::Result<T, RelengError>;

impl RelengError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RelengError::Config(msg.into())
    }
}
