//! Intent reducer
//!
//! `reduce` is the only way a [`Session`] changes. It is pure and total: every
//! intent yields a next session, and ids that match nothing are no-ops.

use super::models::{Intent, Notice, Session};
use crate::cart::format_item_summary;
use crate::catalog::{Catalog, Facet, SortSelection};

/// Result of applying one intent
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub session: Session,
    pub notice: Option<Notice>,
}

/// Applies `intent` to `session`, resolving product ids against `catalog`.
pub fn reduce(mut session: Session, intent: Intent, catalog: &Catalog) -> Transition {
    let notice = match intent {
        Intent::SelectCategory { category } => {
            session.selection.filter.category = Facet::parse(&category);
            None
        }
        Intent::SelectPlatform { platform } => {
            session.selection.filter.platform = Facet::parse(&platform);
            None
        }
        Intent::Search { query } => {
            session.selection.filter.search_query = query;
            None
        }
        Intent::SortBy { sort } => {
            session.selection.sort = SortSelection::parse(&sort);
            None
        }
        Intent::AddToCart { product_id } => match catalog.get(product_id) {
            Some(product) => {
                session.cart.add(product);
                Some(Notice::AddedToCart {
                    product_id,
                    name: product.name.clone(),
                })
            }
            None => Some(Notice::UnknownProduct { product_id }),
        },
        Intent::RemoveFromCart { product_id } => {
            session.cart.remove(product_id);
            None
        }
        Intent::UpdateQuantity { product_id, delta } => {
            session.cart.update_quantity(product_id, delta);
            None
        }
        Intent::ApplyPromoCode { code } => {
            if code.is_empty() {
                Some(Notice::PromoCodeRejected)
            } else {
                session.promo_code = Some(code.clone());
                Some(Notice::PromoCodeAccepted { code })
            }
        }
        Intent::Checkout => Some(Notice::CheckoutUnavailable {
            summary: format_item_summary(session.cart.lines()),
            total_price: session.cart.total_price(),
        }),
    };

    Transition { session, notice }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Platform, Product};

    fn product(id: u32, name: &str, price: u32, category: Category) -> Product {
        Product {
            id,
            name: name.into(),
            category,
            platform: Platform::Xbox,
            price,
            original_price: None,
            description: String::new(),
            region: String::new(),
            delivery_time: String::new(),
            badges: Vec::new(),
            rating: 4.0,
            reviews: 10,
        }
    }

    fn small_catalog() -> Catalog {
        Catalog::new(vec![
            product(1, "Cyberpunk 2077", 2499, Category::Games),
            product(2, "Xbox Game Pass", 699, Category::Subscriptions),
        ])
    }

    fn apply_all(catalog: &Catalog, intents: Vec<Intent>) -> (Session, Vec<Notice>) {
        let mut session = Session::new();
        let mut notices = Vec::new();
        for intent in intents {
            let transition = reduce(session, intent, catalog);
            session = transition.session;
            notices.extend(transition.notice);
        }
        (session, notices)
    }

    #[test]
    fn test_cart_scenario() {
        let catalog = small_catalog();
        let (session, notices) = apply_all(
            &catalog,
            vec![
                Intent::AddToCart { product_id: 1 },
                Intent::AddToCart { product_id: 1 },
                Intent::AddToCart { product_id: 2 },
            ],
        );

        let lines: Vec<(u32, u32)> = session
            .cart
            .lines()
            .iter()
            .map(|l| (l.product.id, l.quantity))
            .collect();
        assert_eq!(lines, vec![(1, 2), (2, 1)]);
        assert_eq!(session.cart.total_price(), 5697);
        assert_eq!(notices.len(), 3);
        assert_eq!(
            notices[2],
            Notice::AddedToCart {
                product_id: 2,
                name: "Xbox Game Pass".into()
            }
        );
    }

    #[test]
    fn test_filter_scenario() {
        let catalog = small_catalog();
        let (session, notices) = apply_all(
            &catalog,
            vec![
                Intent::SelectCategory {
                    category: "games".into(),
                },
                Intent::Search {
                    query: "cyber".into(),
                },
            ],
        );
        assert!(notices.is_empty());

        let view = session.view(&catalog);
        let names: Vec<&str> = view.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cyberpunk 2077"]);
    }

    #[test]
    fn test_unknown_selection_values_empty_the_view() {
        let catalog = small_catalog();
        for intent in [
            Intent::SelectCategory {
                category: "hardware".into(),
            },
            Intent::SelectPlatform {
                platform: "dreamcast".into(),
            },
            Intent::SortBy {
                sort: "cheapest".into(),
            },
        ] {
            let transition = reduce(Session::new(), intent, &catalog);
            assert!(transition.notice.is_none());
            assert!(transition.session.view(&catalog).products.is_empty());
        }
    }

    #[test]
    fn test_sort_intent_orders_view() {
        let catalog = small_catalog();
        let transition = reduce(
            Session::new(),
            Intent::SortBy {
                sort: "price-asc".into(),
            },
            &catalog,
        );
        let ids: Vec<u32> = transition
            .session
            .view(&catalog)
            .products
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_quantity_to_zero_removes_line() {
        let catalog = small_catalog();
        let (session, _) = apply_all(
            &catalog,
            vec![
                Intent::AddToCart { product_id: 1 },
                Intent::AddToCart { product_id: 2 },
                Intent::UpdateQuantity {
                    product_id: 1,
                    delta: -1,
                },
            ],
        );
        assert_eq!(session.cart.len(), 1);
        assert!(session.cart.line(1).is_none());
    }

    #[test]
    fn test_noops_leave_session_unchanged() {
        let catalog = small_catalog();
        let (session, _) = apply_all(&catalog, vec![Intent::AddToCart { product_id: 1 }]);

        for intent in [
            Intent::RemoveFromCart { product_id: 9 },
            Intent::UpdateQuantity {
                product_id: 9,
                delta: -1,
            },
        ] {
            let transition = reduce(session.clone(), intent, &catalog);
            assert_eq!(transition.session, session);
            assert!(transition.notice.is_none());
        }
    }

    #[test]
    fn test_add_unknown_product() {
        let catalog = small_catalog();
        let transition = reduce(Session::new(), Intent::AddToCart { product_id: 99 }, &catalog);
        assert!(transition.session.cart.is_empty());
        assert_eq!(
            transition.notice,
            Some(Notice::UnknownProduct { product_id: 99 })
        );
    }

    #[test]
    fn test_promo_code_is_inert() {
        let catalog = small_catalog();
        let (session, notices) = apply_all(
            &catalog,
            vec![
                Intent::AddToCart { product_id: 1 },
                Intent::ApplyPromoCode { code: "".into() },
                Intent::ApplyPromoCode {
                    code: "SALE50".into(),
                },
            ],
        );
        assert_eq!(notices[1], Notice::PromoCodeRejected);
        assert_eq!(
            notices[2],
            Notice::PromoCodeAccepted {
                code: "SALE50".into()
            }
        );
        assert_eq!(session.promo_code.as_deref(), Some("SALE50"));
        assert_eq!(session.cart.total_price(), 2499);
    }

    #[test]
    fn test_promo_code_accepted_verbatim() {
        let catalog = small_catalog();
        for code in ["   ", " sale50 "] {
            let transition = reduce(
                Session::new(),
                Intent::ApplyPromoCode { code: code.into() },
                &catalog,
            );
            assert_eq!(
                transition.notice,
                Some(Notice::PromoCodeAccepted { code: code.into() })
            );
            assert_eq!(transition.session.promo_code.as_deref(), Some(code));
        }
    }

    #[test]
    fn test_checkout_keeps_cart() {
        let catalog = small_catalog();
        let (session, notices) = apply_all(
            &catalog,
            vec![
                Intent::AddToCart { product_id: 2 },
                Intent::AddToCart { product_id: 2 },
                Intent::Checkout,
            ],
        );
        assert_eq!(
            notices.last(),
            Some(&Notice::CheckoutUnavailable {
                summary: "2x Xbox Game Pass".into(),
                total_price: 1398,
            })
        );
        assert_eq!(session.cart.len(), 1);
    }
}
