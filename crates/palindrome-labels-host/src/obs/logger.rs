//! Narrow logging capability injected into the entry points.

/// Log target shared by every message the policy emits.
pub const LOG_TARGET: &str = "palindrome_labels";

pub trait PolicyLogger: Send + Sync {
    fn debug(&self, msg: &str);
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
}

/// Forwards to the process-wide `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl PolicyLogger for TracingLogger {
    fn debug(&self, msg: &str) {
        tracing::debug!(target: LOG_TARGET, "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!(target: LOG_TARGET, "{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!(target: LOG_TARGET, "{msg}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl PolicyLogger for NoopLogger {
    fn debug(&self, _msg: &str) {}
    fn info(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
}
