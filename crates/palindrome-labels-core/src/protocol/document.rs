//! JSON document access.

use serde_json::Value;

use crate::error::{PolicyError, Result};

/// Parse raw bytes into a JSON document.
pub fn parse_document(payload: &[u8]) -> Result<Value> {
    serde_json::from_slice(payload).map_err(PolicyError::from)
}

/// Resolve a dotted path (`"settings.threshold"`) against `doc`.
///
/// Only object members are traversed; a segment that hits a non-object value
/// or a missing key resolves to `None`.
pub fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(doc, |cur, key| cur.as_object()?.get(key))
}
