//! Session Domain Models
//!
//! A session bundles the user's catalog selection, cart and promo code.
//! Sessions only change by applying an [`Intent`].

use crate::cart::{Cart, CartLine};
use crate::catalog::{Catalog, Product, ProductId, Selection};
use serde::{Deserialize, Serialize};

// =============================================================================
// Intents
// =============================================================================

/// A discrete user action
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Intent {
    SelectCategory { category: String },
    SelectPlatform { platform: String },
    Search { query: String },
    SortBy { sort: String },
    AddToCart { product_id: ProductId },
    RemoveFromCart { product_id: ProductId },
    UpdateQuantity { product_id: ProductId, delta: i64 },
    ApplyPromoCode { code: String },
    Checkout,
}

/// User-visible feedback produced by an intent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Notice {
    AddedToCart { product_id: ProductId, name: String },
    UnknownProduct { product_id: ProductId },
    PromoCodeAccepted { code: String },
    PromoCodeRejected,
    /// Checkout is a stub; the cart is left as it was
    CheckoutUnavailable { summary: String, total_price: u64 },
}

// =============================================================================
// Session
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub selection: Selection,
    pub cart: Cart,

    /// Last accepted promo code. Never affects prices.
    pub promo_code: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the view a client renders from this session.
    pub fn view(&self, catalog: &Catalog) -> StorefrontView {
        let products: Vec<Product> = catalog
            .select(&self.selection)
            .into_iter()
            .cloned()
            .collect();

        StorefrontView {
            selection: self.selection.clone(),
            products,
            cart: self.cart.lines().to_vec(),
            cart_count: self.cart.len(),
            unit_count: self.cart.unit_count(),
            total_price: self.cart.total_price(),
            promo_code: self.promo_code.clone(),
        }
    }
}

/// Derived, render-ready snapshot of a session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontView {
    pub selection: Selection,

    /// Filtered then sorted products; may be empty
    pub products: Vec<Product>,

    pub cart: Vec<CartLine>,

    /// Number of cart lines
    pub cart_count: usize,

    /// Sum of quantities across cart lines
    pub unit_count: u64,

    pub total_price: u64,
    pub promo_code: Option<String>,
}
