//! palindrome-labels host library entry.
//!
//! This crate exposes the policy's host-callable entry points and wires them
//! into an HTTP host: config loading, injected logging, and the axum router.
//! It is consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod entry;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;
