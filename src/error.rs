//! Error types for the storefront service
//!
//! Storefront operations themselves never fail; these errors only arise where
//! requests are decoded or routed.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// JSON-RPC code for malformed tool parameters
pub const INVALID_PARAMS: i32 = -32602;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    #[error("Unknown session: {0}")]
    SessionNotFound(String),
}

impl StoreError {
    /// JSON-RPC error code reported for this error
    pub fn rpc_code(&self) -> i32 {
        INVALID_PARAMS
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Self::UnknownTool(_) | Self::InvalidArguments(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
