//! Catalog Domain Module
//!
//! This module contains the read-only product catalog, including:
//! - Domain models (Product, Category, Platform, SortKey)
//! - The built-in seed data
//! - Filtering and sorting of product views
//! - The user's view selection
//! - REST API handlers for browsing

pub mod filter;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod selection;
pub mod sort;

pub use filter::{filter_products, Facet, ProductFilter};
pub use handlers::routes;
pub use models::{Badge, Category, Platform, Product, ProductId, SortKey};
pub use selection::{Selection, SortSelection};
pub use sort::sort_products;

/// Immutable product list shared by all sessions
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wraps a product list. Ids must be unique.
    pub fn new(products: Vec<Product>) -> Self {
        debug_assert!(
            products
                .iter()
                .enumerate()
                .all(|(i, p)| products[..i].iter().all(|q| q.id != p.id)),
            "duplicate product id in catalog"
        );
        Self { products }
    }

    /// Catalog holding the built-in product list
    pub fn seeded() -> Self {
        Self::new(seed::seed_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Filters then sorts the catalog.
    pub fn view(&self, filter: &ProductFilter, key: SortKey) -> Vec<&Product> {
        sort_products(&filter_products(&self.products, filter), key)
    }

    /// Products visible under `selection`; empty for an unrecognized sort key.
    pub fn select(&self, selection: &Selection) -> Vec<&Product> {
        match &selection.sort {
            SortSelection::Key(key) => self.view(&selection.filter, *key),
            SortSelection::Unrecognized(_) => Vec::new(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
