//! REST API handlers for session intents
//!
//! This module implements HTTP endpoints that apply user intents to a
//! session and return the derived storefront view.

use super::{
    helpers::*,
    models::{Intent, Notice, StorefrontView},
    state::{Dispatch, SharedState},
};
use crate::error::StoreError;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Creates routes for session operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/intent", post(apply_intent))
        .route("/session/:session_id", get(session_view))
}

/// Body of `POST /intent`: the intent fields plus an optional session id
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub session_id: Option<String>,

    #[serde(flatten)]
    pub intent: Intent,
}

/// Response for intent operations
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResponse {
    pub session_id: String,
    pub notice: Option<Notice>,
    pub view: StorefrontView,
}

/// Endpoint: POST /intent
/// Applies a single intent to the caller's session.
async fn apply_intent(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<IntentRequest>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(payload.session_id, &headers);

    let Dispatch { mut notices, view } = state.dispatch(&session_id, [payload.intent]);

    let mut response = Json(IntentResponse {
        session_id: session_id.clone(),
        notice: notices.pop(),
        view,
    })
    .into_response();

    if is_new_session {
        if let Ok(cookie) = HeaderValue::from_str(&session_cookie(&session_id)) {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
    }

    response
}

/// Endpoint: GET /session/:session_id
async fn session_view(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<StorefrontView>, StoreError> {
    state.view(&session_id).map(Json)
}
