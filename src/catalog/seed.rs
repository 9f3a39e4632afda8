//! Built-in catalog content

use super::models::{Badge, Category, Platform, Product};

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    category: Category,
    platform: Platform,
    price: u32,
    original_price: Option<u32>,
    description: &str,
    region: &str,
    delivery_time: &str,
    badges: &[Badge],
    rating: f32,
    reviews: u32,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category,
        platform,
        price,
        original_price,
        description: description.to_string(),
        region: region.to_string(),
        delivery_time: delivery_time.to_string(),
        badges: badges.to_vec(),
        rating,
        reviews,
    }
}

/// The fixed product list served by every storefront instance.
pub fn seed_products() -> Vec<Product> {
    use Badge::*;
    use Category::*;
    use Platform::*;

    vec![
        product(
            1,
            "Cyberpunk 2077",
            Games,
            Steam,
            2499,
            Some(3499),
            "Activation key",
            "Global",
            "Instant",
            &[Popular, Discount],
            4.6,
            15420,
        ),
        product(
            2,
            "Xbox Game Pass",
            Subscriptions,
            Xbox,
            699,
            None,
            "1 month subscription",
            "Global",
            "Instant",
            &[Popular],
            4.8,
            23890,
        ),
        product(
            3,
            "PlayStation Store 1000",
            Giftcards,
            Playstation,
            1000,
            None,
            "Gift card worth 1000",
            "RU",
            "Instant",
            &[CommissionFree],
            4.9,
            8730,
        ),
        product(
            4,
            "Red Dead Redemption 2",
            Games,
            Steam,
            1999,
            Some(2999),
            "Activation key",
            "Global",
            "Instant",
            &[Discount],
            4.8,
            18900,
        ),
        product(
            5,
            "Steam Wallet 500",
            Giftcards,
            Steam,
            500,
            None,
            "Gift card worth 500",
            "Global",
            "Instant",
            &[CommissionFree, Popular],
            4.9,
            31200,
        ),
        product(
            6,
            "PlayStation Plus Essential",
            Subscriptions,
            Playstation,
            849,
            None,
            "3 month subscription",
            "TR",
            "Up to 15 minutes",
            &[],
            4.7,
            6540,
        ),
        product(
            7,
            "Genshin Impact Genesis Crystals",
            Topups,
            Epicgames,
            1290,
            Some(1490),
            "6480 crystals top-up",
            "Global",
            "Up to 30 minutes",
            &[Discount],
            4.5,
            4210,
        ),
        product(
            8,
            "Nintendo eShop 2000",
            Giftcards,
            Nintendo,
            2000,
            None,
            "Gift card worth 2000",
            "EU",
            "Instant",
            &[],
            4.7,
            2980,
        ),
        product(
            9,
            "The Legend of Zelda: Tears of the Kingdom",
            Games,
            Nintendo,
            4999,
            None,
            "Digital code",
            "EU",
            "Instant",
            &[New],
            4.9,
            9870,
        ),
        product(
            10,
            "Diablo IV",
            Games,
            Battlenet,
            3999,
            Some(4999),
            "Activation key",
            "Global",
            "Instant",
            &[New, Discount],
            4.2,
            7650,
        ),
        product(
            11,
            "Cyberpunk 2077: Phantom Liberty",
            Dlc,
            Steam,
            1499,
            None,
            "Expansion activation key",
            "Global",
            "Instant",
            &[New],
            4.7,
            5320,
        ),
        product(
            12,
            "Fortnite V-Bucks 2800",
            Topups,
            Epicgames,
            1599,
            None,
            "2800 V-Bucks top-up",
            "Global",
            "Up to 30 minutes",
            &[Popular, CommissionFree],
            4.4,
            12100,
        ),
        product(
            13,
            "Wallpaper Engine",
            Software,
            Steam,
            299,
            None,
            "Application activation key",
            "Global",
            "Instant",
            &[CommissionFree],
            4.8,
            2100,
        ),
    ]
}
