//! Combined filter and sort selection driving a catalog view

use super::filter::ProductFilter;
use super::models::SortKey;
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// Sort selection; unknown identifiers are retained and yield an empty view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortSelection {
    Key(SortKey),
    Unrecognized(String),
}

impl Default for SortSelection {
    fn default() -> Self {
        Self::Key(SortKey::default())
    }
}

impl SortSelection {
    pub fn parse(raw: &str) -> Self {
        match SortKey::from_str(raw) {
            Ok(key) => Self::Key(key),
            Err(_) => Self::Unrecognized(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Key(key) => key.as_ref(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl Serialize for SortSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Everything the user has chosen about the catalog view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(flatten)]
    pub filter: ProductFilter,
    pub sort: SortSelection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category, Facet};
    use serde_json::json;

    #[test]
    fn test_sort_selection_parse() {
        assert_eq!(SortSelection::parse("rating"), SortSelection::Key(SortKey::Rating));
        assert_eq!(
            SortSelection::parse("cheapest"),
            SortSelection::Unrecognized("cheapest".into())
        );
        assert_eq!(SortSelection::default().as_str(), "popular");
    }

    #[test]
    fn test_selection_serializes_flat() {
        let mut selection = Selection::default();
        selection.filter.category = Facet::Only(Category::Games);
        selection.filter.search_query = "cyber".into();
        assert_eq!(
            serde_json::to_value(&selection).unwrap(),
            json!({
                "category": "games",
                "platform": "all",
                "searchQuery": "cyber",
                "sort": "popular"
            })
        );
    }

    #[test]
    fn test_unrecognized_sort_yields_empty_view() {
        let catalog = Catalog::seeded();
        let selection = Selection {
            sort: SortSelection::parse("cheapest"),
            ..Selection::default()
        };
        assert!(catalog.select(&selection).is_empty());
        assert_eq!(catalog.select(&Selection::default()).len(), 13);
    }
}
