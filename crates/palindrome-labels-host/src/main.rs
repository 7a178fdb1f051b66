//! palindrome-labels host
//!
//! - Loads the YAML host config (first CLI argument, or `palindrome-labels.yaml`)
//! - Rejects invalid policy settings before binding
//! - Serves `/validate`, `/validate_raw`, `/validate_settings`, `/healthz`

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use palindrome_labels_core::error::{PolicyError, Result};
use palindrome_labels_host::{app_state, config, obs::TracingLogger, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "palindrome-labels-host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());

    let cfg = config::load_from_file(&path)?;
    let state = app_state::AppState::new(cfg, Arc::new(TracingLogger))?;
    let listen = state.cfg().host.listen_addr()?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "palindrome-labels-host starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| PolicyError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| PolicyError::Internal(format!("server failed: {e}")))
}
