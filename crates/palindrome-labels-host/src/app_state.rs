//! Shared application state for the policy host.
//!
//! Built once at startup and shared read-only across requests. Startup errors
//! are returned as `Result` instead of panicking.

use std::sync::Arc;

use serde_json::Value;

use palindrome_labels_core::error::{PolicyError, Result};
use palindrome_labels_core::SettingsVerdict;

use crate::config::HostConfig;
use crate::entry;
use crate::obs::PolicyLogger;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: HostConfig,
    /// Configured policy settings, pre-rendered for envelope building.
    settings: Value,
    logger: Arc<dyn PolicyLogger>,
}

impl AppState {
    /// Build application state.
    /// The configured policy settings go through the same check as the
    /// settings-validation entry point; invalid settings fail startup.
    pub fn new(cfg: HostConfig, logger: Arc<dyn PolicyLogger>) -> Result<Self> {
        let settings = serde_json::to_value(&cfg.policy)
            .map_err(|e| PolicyError::Internal(format!("encode policy settings failed: {e}")))?;
        let raw = serde_json::to_vec(&settings)
            .map_err(|e| PolicyError::Internal(format!("encode policy settings failed: {e}")))?;

        if let SettingsVerdict::Invalid { message } = entry::check_settings(&raw, logger.as_ref()) {
            return Err(PolicyError::InvalidConfig(message));
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                settings,
                logger,
            }),
        })
    }

    pub fn cfg(&self) -> &HostConfig {
        &self.inner.cfg
    }

    pub fn logger(&self) -> &dyn PolicyLogger {
        self.inner.logger.as_ref()
    }

    /// Wrap an admission request object with the configured settings.
    pub fn envelope(&self, request: Value) -> Result<Vec<u8>> {
        let doc = serde_json::json!({
            "request": request,
            "settings": &self.inner.settings,
        });
        serde_json::to_vec(&doc).map_err(|e| PolicyError::Internal(format!("encode envelope failed: {e}")))
    }
}
