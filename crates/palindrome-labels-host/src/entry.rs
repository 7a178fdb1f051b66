//! Host-callable entry points.
//!
//! Both functions take raw payload bytes and always return a JSON response
//! payload; failures are encoded as rejections, never returned or raised.

use palindrome_labels_core::error::BAD_REQUEST;
use palindrome_labels_core::protocol::{parse_document, SettingsValidationResponse, ValidationResponse};
use palindrome_labels_core::{evaluate, LabelSet, Settings, SettingsShape, SettingsVerdict, Verdict};

use crate::obs::PolicyLogger;

/// Message returned when the request payload is not JSON.
pub const NOT_JSON: &str = "Not a valid JSON document";

const FALLBACK_VALIDATION: &[u8] =
    br#"{"accepted":false,"message":"failed to encode verdict","code":500}"#;
const FALLBACK_SETTINGS: &[u8] = br#"{"valid":false,"message":"failed to encode verdict"}"#;

/// Configuration-validation entry point.
pub fn validate_settings(payload: &[u8], logger: &dyn PolicyLogger) -> Vec<u8> {
    let verdict = check_settings(payload, logger);
    serde_json::to_vec(&SettingsValidationResponse::from(verdict))
        .unwrap_or_else(|_| FALLBACK_SETTINGS.to_vec())
}

/// Decide whether a standalone settings payload is acceptable.
pub fn check_settings(payload: &[u8], logger: &dyn PolicyLogger) -> SettingsVerdict {
    logger.info("validating settings");

    let settings = match Settings::from_settings_payload(payload) {
        Ok(s) => s,
        Err(e) => {
            logger.warn("settings payload is not valid JSON");
            return SettingsVerdict::Invalid {
                message: e.to_string(),
            };
        }
    };

    match settings.validate() {
        Ok(()) => SettingsVerdict::Valid,
        Err(e) => {
            logger.warn("rejecting settings");
            SettingsVerdict::Invalid {
                message: format!("Provided settings are not valid: {e}"),
            }
        }
    }
}

/// Request-validation entry point.
pub fn validate(payload: &[u8], logger: &dyn PolicyLogger) -> Vec<u8> {
    let verdict = evaluate_request(payload, logger);
    serde_json::to_vec(&ValidationResponse::from(verdict))
        .unwrap_or_else(|_| FALLBACK_VALIDATION.to_vec())
}

/// Evaluate a `{"request": .., "settings": ..}` payload.
pub fn evaluate_request(payload: &[u8], logger: &dyn PolicyLogger) -> Verdict {
    let Ok(doc) = parse_document(payload) else {
        logger.warn("rejecting request: payload is not valid JSON");
        return Verdict::rejected_with_code(NOT_JSON, BAD_REQUEST);
    };

    let settings = Settings::from_document(&doc, SettingsShape::REQUEST_EMBEDDED);
    let labels = LabelSet::from_document(&doc);
    logger.debug(&format!("evaluating {} labels", labels.len()));

    let verdict = evaluate(&labels, &settings);

    match &verdict {
        Verdict::Accepted => logger.debug("request accepted"),
        Verdict::Rejected { message, .. } => logger.info(message),
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obs::NoopLogger;

    fn response(payload: &[u8]) -> ValidationResponse {
        serde_json::from_slice(&validate(payload, &NoopLogger)).unwrap()
    }

    fn settings_response(payload: &[u8]) -> SettingsValidationResponse {
        serde_json::from_slice(&validate_settings(payload, &NoopLogger)).unwrap()
    }

    #[test]
    fn non_json_request_is_bad_request() {
        let r = response(b"definitely not json");
        assert!(!r.accepted);
        assert_eq!(r.message.as_deref(), Some(NOT_JSON));
        assert_eq!(r.code, Some(400));
    }

    #[test]
    fn non_palindrome_whitelist_does_not_reject_empty_labels() {
        let r = response(br#"{"request": {"object": {"metadata": {}}}, "settings": {"whitelisted_labels": ["foo"]}}"#);
        assert_eq!(r, ValidationResponse { accepted: true, message: None, code: None });
    }

    #[test]
    fn non_palindrome_whitelist_does_not_reject_plain_labels() {
        let r = response(
            br#"{"request": {"object": {"metadata": {"labels": {"app": "x"}}}}, "settings": {"whitelisted_labels": ["foo", "level"], "threshold": 3}}"#,
        );
        assert!(r.accepted);
    }

    #[test]
    fn negative_embedded_threshold_counts_as_zero() {
        let empty = response(br#"{"request": {}, "settings": {"threshold": -2}}"#);
        assert!(empty.accepted);

        let r = response(
            br#"{"request": {"object": {"metadata": {"labels": {"level": "1"}}}}, "settings": {"threshold": -2}}"#,
        );
        assert!(!r.accepted);
        assert_eq!(
            r.message.as_deref(),
            Some("Too many palindrome labels that are not-whitelisted: level. Max allowed [0]")
        );
        assert_eq!(r.code, None);
    }

    #[test]
    fn policy_rejection_has_no_code() {
        let r = response(
            br#"{"request": {"object": {"metadata": {"labels": {"level": "1"}}}}, "settings": {}}"#,
        );
        assert!(!r.accepted);
        assert_eq!(
            r.message.as_deref(),
            Some("Too many palindrome labels that are not-whitelisted: level. Max allowed [0]")
        );
        assert_eq!(r.code, None);
    }

    #[test]
    fn missing_labels_are_accepted() {
        let r = response(br#"{"request": "doesn't matter here", "settings": {"threshold": 1}}"#);
        assert_eq!(r, ValidationResponse { accepted: true, message: None, code: None });
    }

    #[test]
    fn settings_valid() {
        let r = settings_response(br#"{"whitelisted_labels": ["level", "radar"], "threshold": 3}"#);
        assert_eq!(r, SettingsValidationResponse { valid: true, message: None });
    }

    #[test]
    fn settings_empty_is_valid() {
        assert!(settings_response(b"{}").valid);
    }

    #[test]
    fn settings_not_palindrome() {
        let r = settings_response(br#"{"whitelisted_labels": ["foo"]}"#);
        assert!(!r.valid);
        assert_eq!(
            r.message.as_deref(),
            Some("Provided settings are not valid: The following whitelisted labels are not palindromes: foo")
        );
    }

    #[test]
    fn settings_negative_threshold() {
        let r = settings_response(br#"{"threshold": -1}"#);
        assert!(!r.valid);
        assert!(r.message.unwrap().contains("Threshold cannot be negative: -1"));
    }

    #[test]
    fn settings_not_json() {
        let r = settings_response(b"[");
        assert!(!r.valid);
        assert!(r.message.is_some());
    }
}
