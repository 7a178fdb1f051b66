//! Observability for the host boundary.
//!
//! The core crate never logs. Entry points receive a `PolicyLogger` and
//! report through it, so tests can run silent and the binary can route
//! everything into `tracing`.

pub mod logger;

pub use logger::{NoopLogger, PolicyLogger, TracingLogger};
