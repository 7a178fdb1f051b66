//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/validate", post(transport::http::validate))
        .route("/validate_raw", post(transport::http::validate_raw))
        .route("/validate_settings", post(transport::http::validate_settings))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
