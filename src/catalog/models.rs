//! Catalog Domain Models
//!
//! Product records and the closed enumerations used to classify them.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

// =============================================================================
// Enumerations
// =============================================================================

/// Stable identity key of a product
pub type ProductId = u32;

/// Product category shown as a filter tab
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Games,
    Topups,
    Subscriptions,
    Giftcards,
    Dlc,
    Software,
}

impl Category {
    /// Human readable label for the category tab
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Games => "Games",
            Self::Topups => "Top-ups",
            Self::Subscriptions => "Subscriptions",
            Self::Giftcards => "Gift cards",
            Self::Dlc => "DLC",
            Self::Software => "Software",
        }
    }
}

/// Platform the product is redeemed on
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    Steam,
    Playstation,
    Xbox,
    Nintendo,
    Epicgames,
    Battlenet,
}

impl Platform {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Steam => "Steam",
            Self::Playstation => "PlayStation",
            Self::Xbox => "Xbox",
            Self::Nintendo => "Nintendo",
            Self::Epicgames => "Epic Games",
            Self::Battlenet => "Battle.net",
        }
    }
}

/// Presentational tag; has no effect on pricing or filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Badge {
    Popular,
    New,
    Discount,
    CommissionFree,
}

/// Ordering criterion for the catalog view
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortKey {
    /// Most reviewed first
    #[default]
    Popular,
    PriceAsc,
    PriceDesc,
    /// Highest rated first
    Rating,
    /// Highest id first
    Newest,
}

// =============================================================================
// Product
// =============================================================================

/// A purchasable catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub platform: Platform,

    /// Current price in whole currency units
    pub price: u32,

    /// Price before discount, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,

    pub description: String,
    pub region: String,
    pub delivery_time: String,

    #[serde(default)]
    pub badges: Vec<Badge>,

    /// Average rating in [0, 5]
    pub rating: f32,
    pub reviews: u32,
}

impl Product {
    /// True when `original_price` is present and above the current price.
    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// Whole-percent discount relative to `original_price`, rounded down.
    pub fn discount_percent(&self) -> Option<u32> {
        match self.original_price {
            Some(original) if original > self.price => {
                let saved = u64::from(original - self.price) * 100;
                Some((saved / u64::from(original)) as u32)
            }
            _ => None,
        }
    }
}
