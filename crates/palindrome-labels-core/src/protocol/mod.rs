//! Wire-level contracts with the policy host.
//!
//! - `document`: parse raw payload bytes once, then walk dotted field paths.
//! - `response`: JSON shapes returned to the host for both entry points.
//!
//! Nothing here panics: malformed bytes surface as `PolicyError` so a hostile
//! payload can only ever produce a rejection.

pub mod document;
pub mod response;

pub use document::{lookup, parse_document};
pub use response::{SettingsValidationResponse, ValidationResponse};
