//! Label-name extraction from a validation request.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::error::Result;
use crate::protocol::document::{lookup, parse_document};

/// Path of the label map inside a validation request.
pub const LABELS_PATH: &str = "request.object.metadata.labels";

/// Names (not values) of the labels carried by the resource under review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet(BTreeSet<String>);

impl LabelSet {
    pub fn from_validation_request(payload: &[u8]) -> Result<Self> {
        let doc = parse_document(payload)?;
        Ok(Self::from_document(&doc))
    }

    /// Missing path or a non-object label map yields an empty set.
    pub fn from_document(doc: &Value) -> Self {
        match lookup(doc, LABELS_PATH) {
            Some(Value::Object(labels)) => Self(labels.keys().cloned().collect()),
            _ => Self::default(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
