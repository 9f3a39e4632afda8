//! MCP Protocol Models and Constants
//!
//! This module contains the JSON-RPC envelope and the argument shapes of the
//! storefront tools.

use crate::catalog::ProductId;
use crate::session::Intent;
use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Tool narrowing and ordering the catalog view
pub const BROWSE_TOOL_NAME: &str = "browse_catalog";
/// Tool adding one unit of a product
pub const ADD_TOOL_NAME: &str = "add_to_cart";
/// Tool dropping a cart line
pub const REMOVE_TOOL_NAME: &str = "remove_from_cart";
/// Tool adjusting a cart line by a delta
pub const UPDATE_QUANTITY_TOOL_NAME: &str = "update_quantity";
/// Tool recording a promo code
pub const PROMO_TOOL_NAME: &str = "apply_promo_code";
/// Name of the checkout tool
pub const CHECKOUT_TOOL_NAME: &str = "checkout";
/// Server identifier
pub const SERVER_NAME: &str = "storefront";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

// =============================================================================
// Tool Inputs
// =============================================================================

/// Input for the browse_catalog tool; omitted fields keep their current value
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BrowseCatalogInput {
    pub session_id: Option<String>,
    pub category: Option<String>,
    pub platform: Option<String>,
    pub query: Option<String>,
    pub sort: Option<String>,
}

impl BrowseCatalogInput {
    pub fn into_intents(self) -> Vec<Intent> {
        let mut intents = Vec::new();
        if let Some(category) = self.category {
            intents.push(Intent::SelectCategory { category });
        }
        if let Some(platform) = self.platform {
            intents.push(Intent::SelectPlatform { platform });
        }
        if let Some(query) = self.query {
            intents.push(Intent::Search { query });
        }
        if let Some(sort) = self.sort {
            intents.push(Intent::SortBy { sort });
        }
        intents
    }
}

/// Input for tools addressing a single product
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductInput {
    pub session_id: Option<String>,
    pub product_id: ProductId,
}

/// Input for the update_quantity tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateQuantityInput {
    pub session_id: Option<String>,
    pub product_id: ProductId,
    pub delta: i64,
}

/// Input for the apply_promo_code tool
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PromoCodeInput {
    pub session_id: Option<String>,
    pub code: String,
}

/// Input for the checkout tool
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CheckoutInput {
    pub session_id: Option<String>,
}
