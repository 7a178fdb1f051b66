//! Response payloads handed back to the host.

use serde::{Deserialize, Serialize};

use crate::verdict::{SettingsVerdict, Verdict};

/// Outcome of the request-validation entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub accepted: bool,
    /// Present on rejection only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Present only when the rejection carries an explicit status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl From<Verdict> for ValidationResponse {
    fn from(v: Verdict) -> Self {
        match v {
            Verdict::Accepted => Self {
                accepted: true,
                message: None,
                code: None,
            },
            Verdict::Rejected { message, code } => Self {
                accepted: false,
                message: Some(message),
                code,
            },
        }
    }
}

/// Outcome of the configuration-validation entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsValidationResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<SettingsVerdict> for SettingsValidationResponse {
    fn from(v: SettingsVerdict) -> Self {
        match v {
            SettingsVerdict::Valid => Self {
                valid: true,
                message: None,
            },
            SettingsVerdict::Invalid { message } => Self {
                valid: false,
                message: Some(message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_omits_optional_fields() {
        let body = serde_json::to_string(&ValidationResponse::from(Verdict::Accepted)).unwrap();
        assert_eq!(body, r#"{"accepted":true}"#);
    }

    #[test]
    fn malformed_rejection_carries_code() {
        let v = Verdict::rejected_with_code("Not a valid JSON document", 400);
        let body = serde_json::to_string(&ValidationResponse::from(v)).unwrap();
        assert_eq!(
            body,
            r#"{"accepted":false,"message":"Not a valid JSON document","code":400}"#
        );
    }

    #[test]
    fn policy_rejection_has_no_code() {
        let v = Verdict::rejected("nope");
        let body = serde_json::to_string(&ValidationResponse::from(v)).unwrap();
        assert_eq!(body, r#"{"accepted":false,"message":"nope"}"#);
    }

    #[test]
    fn settings_responses() {
        let ok = serde_json::to_string(&SettingsValidationResponse::from(SettingsVerdict::Valid)).unwrap();
        assert_eq!(ok, r#"{"valid":true}"#);

        let bad = SettingsVerdict::Invalid { message: "bad".into() };
        let body = serde_json::to_string(&SettingsValidationResponse::from(bad)).unwrap();
        assert_eq!(body, r#"{"valid":false,"message":"bad"}"#);
    }
}
