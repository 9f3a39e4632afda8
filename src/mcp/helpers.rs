//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication and tool
//! result construction.

use crate::session::{Dispatch, Notice};
use serde_json::{json, Value};

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC success envelope.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// One-line text for a notice
pub fn describe_notice(notice: &Notice) -> String {
    match notice {
        Notice::AddedToCart { name, .. } => format!("Added to cart: {}", name),
        Notice::UnknownProduct { product_id } => format!("No product with id {}.", product_id),
        Notice::PromoCodeAccepted { code } => format!("Promo code {} accepted.", code),
        Notice::PromoCodeRejected => "Promo code rejected: no code given.".to_string(),
        Notice::CheckoutUnavailable {
            summary,
            total_price,
        } if summary.is_empty() => {
            format!("Cart is empty. Checkout is not available (total {}).", total_price)
        }
        Notice::CheckoutUnavailable {
            summary,
            total_price,
        } => format!(
            "Checkout is not available. Cart: {} (total {}).",
            summary, total_price
        ),
    }
}

/// Wraps a dispatch outcome as an MCP tool result.
///
/// Text content carries the notices, or a cart/catalog summary when none were
/// raised; the full view goes into `structuredContent`.
pub fn tool_result(session_id: &str, dispatch: &Dispatch) -> Value {
    let text = if dispatch.notices.is_empty() {
        format!(
            "Showing {} product(s). Cart has {} item(s), total {}.",
            dispatch.view.products.len(),
            dispatch.view.cart_count,
            dispatch.view.total_price
        )
    } else {
        dispatch
            .notices
            .iter()
            .map(describe_notice)
            .collect::<Vec<_>>()
            .join(" ")
    };

    json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": {
            "sessionId": session_id,
            "notices": dispatch.notices,
            "view": dispatch.view,
        }
    })
}
