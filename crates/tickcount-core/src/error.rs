//! Shared error type across tickcount crates.

use thiserror::Error;

/// Stable error codes, used in logs and by callers that match on failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config is malformed or out of range.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Writing a progress line failed.
    Output,
}

impl ErrorCode {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Output => "OUTPUT",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TickerError>;

/// Unified error type used by core and runner.
#[derive(Debug, Error)]
pub enum TickerError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("output failed: {0}")]
    Output(String),
}

impl TickerError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            TickerError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            TickerError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            TickerError::Output(_) => ErrorCode::Output,
        }
    }
}
