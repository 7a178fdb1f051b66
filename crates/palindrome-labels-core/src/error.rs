//! Shared error type across palindrome-labels crates.

use thiserror::Error;

/// Status code attached to rejections caused by malformed input.
pub const BAD_REQUEST: u16 = 400;

/// Status code for failures that are not the caller's fault.
pub const INTERNAL_ERROR: u16 = 500;

/// Shared result type.
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Unified error type used by core and host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Input bytes are not a JSON document.
    #[error("{0}")]
    MalformedInput(String),
    /// Settings parsed fine but break an invariant.
    #[error("{0}")]
    InvalidSettings(String),
    /// Host configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl PolicyError {
    /// Map an error to the numeric code reported in verdicts.
    pub fn status_code(&self) -> u16 {
        match self {
            PolicyError::MalformedInput(_)
            | PolicyError::InvalidSettings(_)
            | PolicyError::InvalidConfig(_)
            | PolicyError::UnsupportedVersion => BAD_REQUEST,
            PolicyError::Internal(_) => INTERNAL_ERROR,
        }
    }
}

impl From<serde_json::Error> for PolicyError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_syntax() || e.is_eof() {
            PolicyError::MalformedInput(e.to_string())
        } else {
            PolicyError::Internal(e.to_string())
        }
    }
}
