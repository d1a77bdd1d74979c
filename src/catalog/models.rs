//! Product Catalog Domain Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// The catalog is read-only at runtime. Prices are decimals in natural
/// currency units ("49.99"); conversion to integer minor units happens
/// only at the payment boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price in natural currency units
    pub price: Decimal,

    /// Pre-markdown price, present when the product is on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,

    /// Image reference
    pub image: String,

    /// Category name
    pub category: String,

    /// Display description
    pub description: String,

    /// Average review rating
    pub rating: f64,

    /// Number of reviews behind the rating
    pub reviews: u32,

    /// Size options, when the product is sized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,

    /// Color options, when the product comes in colorways
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,

    /// Whether the product can currently be purchased
    pub in_stock: bool,

    /// Whether the product is surfaced on the featured shelf
    #[serde(default)]
    pub featured: bool,
}
