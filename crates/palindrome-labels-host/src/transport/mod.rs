//! Transport layer (HTTP).
//!
//! Exposes the axum handlers that feed request bodies into the entry points.

pub mod http;
