//! Shopping Cart Formatting Helpers

use super::models::CartLine;

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Cyberpunk 2077, 1x Xbox Game Pass"`.
pub fn format_item_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}
