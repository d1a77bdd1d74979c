//! Checkout Domain Models
//!
//! Request shapes accepted from the client, the line-item wire shape sent
//! to the payment provider, and the order summary computed for the
//! checkout view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Currency for every line item.
pub const CURRENCY: &str = "usd";

/// Orders at or below this subtotal pay the flat shipping rate.
const FREE_SHIPPING_THRESHOLD: u32 = 100;

/// Flat shipping rate in minor units (9.99).
const FLAT_SHIPPING_CENTS: i64 = 999;

/// Flat tax rate applied to the subtotal (0.08).
const TAX_RATE_PERCENT: i64 = 8;

// =============================================================================
// Data Models
// =============================================================================

/// One client-declared cart entry. Untrusted: carries no price, since
/// price must never be trusted from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLineRequest {
    /// Catalog id of the requested product
    pub product_id: String,

    /// Requested quantity; must be positive
    pub quantity: i64,

    /// Selected size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Selected color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A priced line item derived from the catalog, in the provider's wire
/// shape. Field names are the provider's, hence snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Price and display data derived server-side
    pub price_data: PriceData,

    /// Quantity passed through from the request, unchanged
    pub quantity: u64,
}

/// Server-derived pricing for one line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceData {
    /// ISO currency code
    pub currency: String,

    /// Unit amount in integer minor units (cents)
    pub unit_amount: i64,

    /// Display data for the provider's hosted UI
    pub product_data: ProductData,
}

/// Display name and description for one line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductData {
    /// Product display name
    pub name: String,

    /// Product description with optional size/color qualifiers
    pub description: String,
}

/// Opaque session handle returned by the payment provider. The session's
/// internal state machine (pending/paid/expired) is the provider's
/// responsibility, not modeled here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    /// Client secret used to render the hosted payment UI
    pub client_secret: String,
}

/// Input for the session-creation endpoint
#[derive(Debug, Deserialize)]
pub struct CreateSessionInput {
    /// Client-declared cart contents
    pub items: Vec<CheckoutLineRequest>,
}

/// Response of the session-creation endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    /// Client secret for the embedded payment widget
    pub client_secret: String,
}

/// Subtotal, shipping, tax and total for the checkout view.
///
/// Computed from cart contents on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Sum of unit price × quantity across all lines
    pub subtotal: Decimal,

    /// Free over the threshold, flat rate otherwise
    pub shipping: Decimal,

    /// Flat-rate tax on the subtotal, rounded to cents
    pub tax: Decimal,

    /// subtotal + shipping + tax
    pub total: Decimal,
}

impl OrderSummary {
    /// Derives shipping, tax and total from a subtotal.
    pub fn for_subtotal(subtotal: Decimal) -> Self {
        let shipping = if subtotal > Decimal::from(FREE_SHIPPING_THRESHOLD) {
            Decimal::ZERO
        } else {
            Decimal::new(FLAT_SHIPPING_CENTS, 2)
        };
        let tax = (subtotal * Decimal::new(TAX_RATE_PERCENT, 2)).round_dp(2);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}
