//! Shopping Cart Domain Models
//!
//! This module contains the cart data structures and the operations that
//! mutate them.

use crate::catalog::{Product, ProductId};
use serde::Serialize;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A product snapshot paired with a quantity
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Copy of the product taken when it was first added
    pub product: Product,

    /// Always at least 1
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        u64::from(self.product.price) * u64::from(self.quantity)
    }
}

/// Ordered cart; lines appear in the order products were first added.
///
/// Every operation preserves two invariants: at most one line per product id
/// and no line with a quantity below 1.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines
    pub fn unit_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Increments the existing line for `product`, or appends a new line of 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Drops the line for `product_id`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != before
    }

    /// Adjusts a line by `delta`, removing it when the result is not positive.
    ///
    /// Returns the new quantity, `Some(0)` when the line was removed, or `None`
    /// when no line exists for `product_id`.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> Option<u32> {
        let index = self.lines.iter().position(|l| l.product.id == product_id)?;
        let next = i64::from(self.lines[index].quantity).saturating_add(delta);
        if next > 0 {
            let quantity = u32::try_from(next).unwrap_or(u32::MAX);
            self.lines[index].quantity = quantity;
            Some(quantity)
        } else {
            self.lines.remove(index);
            Some(0)
        }
    }

    /// Sum of price × quantity; zero when empty
    pub fn total_price(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
