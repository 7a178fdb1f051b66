//! Policy settings: parsing from either payload shape, plus validation.
//!
//! Parsing is lenient on content (missing or oddly typed fields degrade to an
//! empty whitelist / zero threshold) and strict only on structure: bytes that
//! are not JSON are reported as `PolicyError::MalformedInput`. Invariants are
//! checked separately by [`Settings::validate`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PolicyError, Result};
use crate::palindrome::is_palindrome;
use crate::protocol::document::{lookup, parse_document};

/// Field paths locating the settings inside a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsShape {
    pub whitelisted_labels: &'static str,
    pub threshold: &'static str,
}

impl SettingsShape {
    /// Settings embedded in a validation request: `{"request": .., "settings": {..}}`.
    pub const REQUEST_EMBEDDED: SettingsShape = SettingsShape {
        whitelisted_labels: "settings.whitelisted_labels",
        threshold: "settings.threshold",
    };

    /// A bare settings document: `{"whitelisted_labels": [..], "threshold": N}`.
    pub const STANDALONE: SettingsShape = SettingsShape {
        whitelisted_labels: "whitelisted_labels",
        threshold: "threshold",
    };
}

/// Immutable policy configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    whitelisted_labels: BTreeSet<String>,
    threshold: i64,
}

impl Settings {
    pub fn new<I, S>(whitelisted_labels: I, threshold: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            whitelisted_labels: whitelisted_labels.into_iter().map(Into::into).collect(),
            threshold,
        }
    }

    /// Parse settings from raw bytes using the field paths of `shape`.
    pub fn parse(payload: &[u8], shape: SettingsShape) -> Result<Self> {
        let doc = parse_document(payload)?;
        Ok(Self::from_document(&doc, shape))
    }

    /// Build settings from a validation request payload.
    pub fn from_validation_request(payload: &[u8]) -> Result<Self> {
        Self::parse(payload, SettingsShape::REQUEST_EMBEDDED)
    }

    /// Build settings from a standalone settings payload.
    pub fn from_settings_payload(payload: &[u8]) -> Result<Self> {
        Self::parse(payload, SettingsShape::STANDALONE)
    }

    /// Extract settings from an already parsed document. Never fails.
    pub fn from_document(doc: &Value, shape: SettingsShape) -> Self {
        let whitelisted_labels = match lookup(doc, shape.whitelisted_labels) {
            None | Some(Value::Null) => BTreeSet::new(),
            Some(Value::Array(items)) => items.iter().map(stringify).collect(),
            Some(Value::Object(members)) => members.values().map(stringify).collect(),
            Some(scalar) => BTreeSet::from([stringify(scalar)]),
        };

        let threshold = lookup(doc, shape.threshold).map_or(0, coerce_int);

        Self {
            whitelisted_labels,
            threshold,
        }
    }

    pub fn whitelisted_labels(&self) -> &BTreeSet<String> {
        &self.whitelisted_labels
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Check the settings invariants.
    ///
    /// Every whitelisted label must itself be a palindrome and the threshold
    /// cannot be negative. Offending labels are listed in set order.
    pub fn validate(&self) -> Result<()> {
        let not_palindromes: Vec<&str> = self
            .whitelisted_labels
            .iter()
            .filter(|label| !is_palindrome(label))
            .map(String::as_str)
            .collect();

        if !not_palindromes.is_empty() {
            return Err(PolicyError::InvalidSettings(format!(
                "The following whitelisted labels are not palindromes: {}",
                not_palindromes.join(",")
            )));
        }

        if self.threshold < 0 {
            return Err(PolicyError::InvalidSettings(format!(
                "Threshold cannot be negative: {}",
                self.threshold
            )));
        }

        Ok(())
    }
}

fn stringify(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn coerce_int(v: &Value) -> i64 {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        Value::Bool(true) => 1,
        _ => 0,
    }
}
