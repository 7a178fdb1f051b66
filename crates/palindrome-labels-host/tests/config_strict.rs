#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use palindrome_labels_core::PolicyError;
use palindrome_labels_host::{app_state::AppState, config, obs::NoopLogger};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
host:
  listen: "0.0.0.0:3000"
policy:
  whitelisted_lables: ["level"] # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, PolicyError::MalformedInput(_)));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.host.listen, "0.0.0.0:3000");
    assert!(cfg.policy.whitelisted_labels().is_empty());
    assert_eq!(cfg.policy.threshold(), 0);
}

#[test]
fn policy_section_is_parsed() {
    let ok = r#"
version: 1
host:
  listen: "127.0.0.1:8443"
policy:
  whitelisted_labels: ["level", "radar"]
  threshold: 2
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.host.listen_addr().unwrap().port(), 8443);
    assert!(cfg.policy.whitelisted_labels().contains("radar"));
    assert_eq!(cfg.policy.threshold(), 2);

    let state = AppState::new(cfg, Arc::new(NoopLogger)).expect("valid policy");
    assert_eq!(state.cfg().policy.threshold(), 2);
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err, PolicyError::UnsupportedVersion);
}

#[test]
fn bad_listen_address() {
    let bad = r#"
version: 1
host:
  listen: "not-an-addr"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, PolicyError::InvalidConfig(_)));
}

#[test]
fn invalid_policy_settings_fail_startup() {
    let cfg = config::load_from_str(
        r#"
version: 1
policy:
  whitelisted_labels: ["foo", "level"]
"#,
    )
    .expect("yaml itself is fine");

    let err = AppState::new(cfg, Arc::new(NoopLogger)).err().expect("must fail");
    assert_eq!(
        err.to_string(),
        "invalid config: Provided settings are not valid: The following whitelisted labels are not palindromes: foo"
    );
}
