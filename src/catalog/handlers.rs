//! REST API handlers for catalog browsing
//!
//! These endpoints are stateless: every request carries its own selection.

use super::{filter::Facet, filter::ALL, Category, Platform, Product, Selection, SortSelection};
use crate::session::state::SharedState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Creates routes for catalog browsing
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/catalog", get(list_products))
        .route("/categories", get(list_categories))
        .route("/platforms", get(list_platforms))
}

/// Query string accepted by `GET /catalog`
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub platform: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
}

impl CatalogQuery {
    /// Missing parameters fall back to the default selection.
    pub fn selection(&self) -> Selection {
        let mut selection = Selection::default();
        if let Some(category) = &self.category {
            selection.filter.category = Facet::parse(category);
        }
        if let Some(platform) = &self.platform {
            selection.filter.platform = Facet::parse(platform);
        }
        if let Some(q) = &self.q {
            selection.filter.search_query = q.clone();
        }
        if let Some(sort) = &self.sort {
            selection.sort = SortSelection::parse(sort);
        }
        selection
    }
}

/// Response for `GET /catalog`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub selection: Selection,
    pub total: usize,
    pub products: Vec<Product>,
}

/// An entry of a filter tab bar
#[derive(Serialize)]
pub struct FacetOption {
    pub id: &'static str,
    pub name: &'static str,
}

/// Endpoint: GET /catalog
async fn list_products(
    State(state): State<SharedState>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogResponse> {
    let selection = query.selection();
    let products: Vec<Product> = state
        .catalog
        .select(&selection)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        category = selection.filter.category.as_str(),
        platform = selection.filter.platform.as_str(),
        sort = selection.sort.as_str(),
        matches = products.len(),
        "catalog query"
    );

    Json(CatalogResponse {
        selection,
        total: products.len(),
        products,
    })
}

/// Endpoint: GET /categories
async fn list_categories() -> Json<Vec<FacetOption>> {
    let all = FacetOption {
        id: ALL,
        name: "All products",
    };
    let options = std::iter::once(all)
        .chain(Category::iter().map(|c| FacetOption {
            id: c.into(),
            name: c.display_name(),
        }))
        .collect();
    Json(options)
}

/// Endpoint: GET /platforms
async fn list_platforms() -> Json<Vec<FacetOption>> {
    let all = FacetOption {
        id: ALL,
        name: "All platforms",
    };
    let options = std::iter::once(all)
        .chain(Platform::iter().map(|p| FacetOption {
            id: p.into(),
            name: p.display_name(),
        }))
        .collect();
    Json(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortKey;

    #[test]
    fn test_query_selection() {
        let query = CatalogQuery {
            category: Some("games".into()),
            platform: None,
            q: Some("red".into()),
            sort: Some("price-desc".into()),
        };
        let selection = query.selection();
        assert_eq!(selection.filter.category, Facet::Only(Category::Games));
        assert_eq!(selection.filter.platform, Facet::All);
        assert_eq!(selection.filter.search_query, "red");
        assert_eq!(selection.sort, SortSelection::Key(SortKey::PriceDesc));

        assert_eq!(CatalogQuery::default().selection(), Selection::default());
    }
}
