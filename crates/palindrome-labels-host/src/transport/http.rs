//! HTTP handlers for the two entry points.
//!
//! Verdicts always travel with `200 OK`; the accept/reject outcome and any
//! status code live inside the JSON body.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use palindrome_labels_core::protocol::ValidationResponse;
use palindrome_labels_core::Verdict;

use crate::{app_state::AppState, entry};

/// `POST /validate`: body is the admission request; configured settings are attached.
pub async fn validate(State(state): State<AppState>, body: Bytes) -> Response {
    let payload = match serde_json::from_slice::<Value>(&body) {
        Ok(request) => match state.envelope(request) {
            Ok(p) => p,
            Err(e) => return verdict_response(Verdict::from(e)),
        },
        // Let the entry point produce the malformed-input rejection.
        Err(_) => body.to_vec(),
    };

    json_response(entry::validate(&payload, state.logger()))
}

/// `POST /validate_raw`: body is a full `{"request", "settings"}` envelope.
pub async fn validate_raw(State(state): State<AppState>, body: Bytes) -> Response {
    json_response(entry::validate(&body, state.logger()))
}

/// `POST /validate_settings`: body is a standalone settings document.
pub async fn validate_settings(State(state): State<AppState>, body: Bytes) -> Response {
    json_response(entry::validate_settings(&body, state.logger()))
}

fn verdict_response(v: Verdict) -> Response {
    match serde_json::to_vec(&ValidationResponse::from(v)) {
        Ok(body) => json_response(body),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

fn json_response(body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
