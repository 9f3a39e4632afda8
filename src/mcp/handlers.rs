//! MCP (Model Context Protocol) route handlers
//!
//! This module exposes the storefront intents as MCP tools over JSON-RPC.
//! It exports `handle_tool_call` publicly to make it accessible for tests.

use super::{helpers::*, models::*};
use crate::error::StoreError;
use crate::session::{helpers::get_or_create_session_id, AppState, Intent, SharedState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{info, warn};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            warn!("JSON parse error: {}", e.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    info!(method = method_name, id = %id, "MCP call");

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(e) => rpc_error(id, e.rpc_code(), e.to_string()),
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            warn!(method = method_name, "unknown method");
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    let session_id = json!({ "type": "string" });
    let product_id = json!({ "type": "integer", "minimum": 1 });

    json!({
        "tools": [
            {
                "name": BROWSE_TOOL_NAME,
                "title": "Browse catalog",
                "description": "Sets category, platform, search text and sort order, then returns the matching products.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "sessionId": session_id,
                        "category": { "type": "string", "description": "all, games, topups, subscriptions, giftcards, dlc or software" },
                        "platform": { "type": "string", "description": "all, steam, playstation, xbox, nintendo, epicgames or battlenet" },
                        "query": { "type": "string" },
                        "sort": { "type": "string", "enum": ["popular", "price-asc", "price-desc", "rating", "newest"] }
                    },
                    "additionalProperties": false
                }
            },
            {
                "name": ADD_TOOL_NAME,
                "title": "Add to cart",
                "description": "Adds one unit of a product to the cart and returns the cart state.",
                "inputSchema": {
                    "type": "object",
                    "properties": { "sessionId": session_id, "productId": product_id },
                    "required": ["productId"],
                    "additionalProperties": false
                }
            },
            {
                "name": REMOVE_TOOL_NAME,
                "title": "Remove from cart",
                "description": "Removes a product's line from the cart.",
                "inputSchema": {
                    "type": "object",
                    "properties": { "sessionId": session_id, "productId": product_id },
                    "required": ["productId"],
                    "additionalProperties": false
                }
            },
            {
                "name": UPDATE_QUANTITY_TOOL_NAME,
                "title": "Update quantity",
                "description": "Changes a cart line's quantity by delta; lines reaching zero are removed.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "sessionId": session_id,
                        "productId": product_id,
                        "delta": { "type": "integer" }
                    },
                    "required": ["productId", "delta"],
                    "additionalProperties": false
                }
            },
            {
                "name": PROMO_TOOL_NAME,
                "title": "Apply promo code",
                "description": "Records a promo code. Promo codes do not change prices.",
                "inputSchema": {
                    "type": "object",
                    "properties": { "sessionId": session_id, "code": { "type": "string" } },
                    "required": ["code"],
                    "additionalProperties": false
                }
            },
            {
                "name": CHECKOUT_TOOL_NAME,
                "title": "Checkout",
                "description": "Summarizes the cart. Payment is not available, so the cart is kept.",
                "inputSchema": {
                    "type": "object",
                    "properties": { "sessionId": session_id },
                    "additionalProperties": false
                }
            }
        ]
    })
}

/// Handles `tools/call` request (Business Logic).
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, StoreError> {
    let (session_id, intents) = match name {
        BROWSE_TOOL_NAME => {
            let input: BrowseCatalogInput = parse_args(args)?;
            (input.session_id.clone(), input.into_intents())
        }
        ADD_TOOL_NAME => {
            let input: ProductInput = parse_args(args)?;
            let intent = Intent::AddToCart {
                product_id: input.product_id,
            };
            (input.session_id, vec![intent])
        }
        REMOVE_TOOL_NAME => {
            let input: ProductInput = parse_args(args)?;
            let intent = Intent::RemoveFromCart {
                product_id: input.product_id,
            };
            (input.session_id, vec![intent])
        }
        UPDATE_QUANTITY_TOOL_NAME => {
            let input: UpdateQuantityInput = parse_args(args)?;
            let intent = Intent::UpdateQuantity {
                product_id: input.product_id,
                delta: input.delta,
            };
            (input.session_id, vec![intent])
        }
        PROMO_TOOL_NAME => {
            let input: PromoCodeInput = parse_args(args)?;
            let intent = Intent::ApplyPromoCode { code: input.code };
            (input.session_id, vec![intent])
        }
        CHECKOUT_TOOL_NAME => {
            let input: CheckoutInput = parse_args(args)?;
            (input.session_id, vec![Intent::Checkout])
        }
        _ => return Err(StoreError::UnknownTool(name.to_string())),
    };

    let session_id = get_or_create_session_id(session_id);
    let dispatch = state.dispatch(&session_id, intents);

    Ok(tool_result(&session_id, &dispatch))
}

/// Decodes tool arguments; a missing `arguments` object counts as empty.
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, StoreError> {
    let args = if args.is_null() { json!({}) } else { args };
    Ok(serde_json::from_value(args)?)
}
