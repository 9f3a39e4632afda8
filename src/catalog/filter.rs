//! Catalog filtering
//!
//! Narrows a product sequence by category, platform and a free-text name query.
//! Surviving products keep their input order.

use super::models::{Category, Platform, Product};
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// Wildcard identifier accepted for category and platform selections
pub const ALL: &str = "all";

/// A category or platform selection.
///
/// Identifiers that are neither `all` nor a known value are kept verbatim in
/// `Unrecognized` and match no product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet<T> {
    All,
    Only(T),
    Unrecognized(String),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: FromStr> Facet<T> {
    /// Parses a wire identifier; never fails.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL {
            return Self::All;
        }
        match T::from_str(raw) {
            Ok(value) => Self::Only(value),
            Err(_) => Self::Unrecognized(raw.to_string()),
        }
    }
}

impl<T: PartialEq> Facet<T> {
    /// Whether `value` satisfies this selection
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
            Self::Unrecognized(_) => false,
        }
    }
}

impl<T: AsRef<str>> Facet<T> {
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value.as_ref(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl<T: AsRef<str>> Serialize for Facet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Filter key: the (category, platform, search text) triple
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub category: Facet<Category>,
    pub platform: Facet<Platform>,
    pub search_query: String,
}

impl ProductFilter {
    /// Whether a single product passes every predicate
    pub fn matches(&self, product: &Product) -> bool {
        self.category.admits(&product.category)
            && self.platform.admits(&product.platform)
            && name_contains(&product.name, &self.search_query)
    }
}

fn name_contains(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Returns the products passing `filter`, in input order.
pub fn filter_products<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_products;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    fn filter(category: &str, platform: &str, query: &str) -> ProductFilter {
        ProductFilter {
            category: Facet::parse(category),
            platform: Facet::parse(platform),
            search_query: query.to_string(),
        }
    }

    #[test]
    fn test_facet_parse() {
        assert_eq!(Facet::<Category>::parse("all"), Facet::All);
        assert_eq!(Facet::<Category>::parse("dlc"), Facet::Only(Category::Dlc));
        assert_eq!(
            Facet::<Platform>::parse("sega"),
            Facet::Unrecognized("sega".into())
        );
        assert_eq!(Facet::<Platform>::parse("sega").as_str(), "sega");
    }

    #[test]
    fn test_default_filter_returns_everything_in_order() {
        let products = seed_products();
        let result = filter_products(&products, &ProductFilter::default());
        assert_eq!(result.len(), products.len());
        assert_eq!(ids(&result), products.iter().map(|p| p.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_category_filter() {
        let products = seed_products();
        for category in [
            "games",
            "topups",
            "subscriptions",
            "giftcards",
            "dlc",
            "software",
        ] {
            let result = filter_products(&products, &filter(category, "all", ""));
            let expected: Vec<u32> = products
                .iter()
                .filter(|p| p.category.as_ref() == category)
                .map(|p| p.id)
                .collect();
            assert!(!expected.is_empty());
            assert_eq!(ids(&result), expected, "category {category}");
        }
    }

    #[test]
    fn test_every_category_has_products() {
        use strum::IntoEnumIterator;

        let products = seed_products();
        for category in Category::iter() {
            let selection = ProductFilter {
                category: Facet::Only(category),
                ..ProductFilter::default()
            };
            assert!(
                !filter_products(&products, &selection).is_empty(),
                "{category:?} tab is empty"
            );
        }
    }

    #[test]
    fn test_platform_and_category_combined() {
        let products = seed_products();
        let result = filter_products(&products, &filter("games", "steam", ""));
        assert_eq!(ids(&result), vec![1, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = seed_products();
        let result = filter_products(&products, &filter("all", "all", "CYBER"));
        assert_eq!(ids(&result), vec![1, 11]);

        let result = filter_products(&products, &filter("games", "all", "cyber"));
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_unrecognized_selection_matches_nothing() {
        let products = seed_products();
        assert!(filter_products(&products, &filter("hardware", "all", "")).is_empty());
        assert!(filter_products(&products, &filter("all", "sega", "")).is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let products = seed_products();
        let result = filter_products(&products, &filter("all", "all", "minecraft"));
        assert!(result.is_empty());
    }
}
