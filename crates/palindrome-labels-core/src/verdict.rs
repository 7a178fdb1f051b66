//! Accept/reject outcomes produced by the core.

use crate::error::PolicyError;

/// Outcome of evaluating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected {
        message: String,
        /// `None` for policy violations; set for malformed-input rejections.
        code: Option<u16>,
    },
}

impl Verdict {
    pub fn rejected(message: impl Into<String>) -> Self {
        Verdict::Rejected {
            message: message.into(),
            code: None,
        }
    }

    pub fn rejected_with_code(message: impl Into<String>, code: u16) -> Self {
        Verdict::Rejected {
            message: message.into(),
            code: Some(code),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl From<PolicyError> for Verdict {
    fn from(e: PolicyError) -> Self {
        Verdict::rejected_with_code(e.to_string(), e.status_code())
    }
}

/// Outcome of validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsVerdict {
    Valid,
    Invalid { message: String },
}
