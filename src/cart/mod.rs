//! Shopping Cart Domain Module
//!
//! This module contains the session cart, including:
//! - Domain models (CartLine, Cart) and their mutations
//! - Formatting helpers

pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use helpers::format_item_summary;
pub use models::{Cart, CartLine};
