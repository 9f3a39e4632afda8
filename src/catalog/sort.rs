//! Catalog ordering

use super::models::{Product, SortKey};
use std::cmp::Ordering;

fn compare(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        SortKey::Popular => b.reviews.cmp(&a.reviews),
        SortKey::PriceAsc => a.price.cmp(&b.price),
        SortKey::PriceDesc => b.price.cmp(&a.price),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Newest => b.id.cmp(&a.id),
    }
}

/// Returns a new ordering of `products` by `key`.
///
/// The sort is stable: equal elements keep their relative input order.
pub fn sort_products<'a>(products: &[&'a Product], key: SortKey) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| compare(key, a, b));
    sorted
}
