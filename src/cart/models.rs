//! Shopping Cart Domain Models
//!
//! This module contains the cart state machine and the request/response
//! shapes of the cart REST surface. Cart operations are total functions:
//! they define no error paths over well-formed input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::checkout::models::OrderSummary;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for cart lines
fn default_quantity() -> u32 {
    1
}

/// One line of a cart: a product plus quantity and variant selection.
///
/// Two lines are the same entry when their identity key (product id,
/// selected size, selected color) matches. Additions with an identical
/// key merge by incrementing quantity instead of duplicating the line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The product this line refers to, flattened into the line itself
    #[serde(flatten)]
    pub product: Product,

    /// Quantity of this line (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Selected size, when the product is sized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,

    /// Selected color, when the product comes in colorways
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
}

impl CartLine {
    /// Whether this line matches the given identity key.
    fn matches(&self, product_id: &str, size: Option<&str>, color: Option<&str>) -> bool {
        self.product.id == product_id
            && self.selected_size.as_deref() == size
            && self.selected_color.as_deref() == color
    }
}

/// The state of one session's cart: ordered lines plus the visibility
/// flag of the cart panel. Persisted verbatim and restored on startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Cart lines in insertion order
    #[serde(default)]
    pub items: Vec<CartLine>,

    /// Whether the cart panel is open
    #[serde(default)]
    pub is_open: bool,
}

impl CartState {
    /// Adds one unit of `product` with the given variant selection.
    ///
    /// Merges into an existing line when the identity key matches,
    /// otherwise appends a new line with quantity 1. Always opens the
    /// cart panel so the UI surfaces the addition.
    pub fn add_item(&mut self, product: Product, size: Option<String>, color: Option<String>) {
        let existing = self
            .items
            .iter_mut()
            .find(|line| line.matches(&product.id, size.as_deref(), color.as_deref()));
        match existing {
            Some(line) => line.quantity += 1,
            None => self.items.push(CartLine {
                product,
                quantity: 1,
                selected_size: size,
                selected_color: color,
            }),
        }
        self.is_open = true;
    }

    /// Removes every line for `product_id`, regardless of variant
    /// selection. Removing an absent id is a no-op.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|line| line.product.id != product_id);
    }

    /// Sets the quantity on every line for `product_id`. A quantity of
    /// zero or less removes the line(s) entirely; quantities in a cart
    /// are always at least 1.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        for line in self.items.iter_mut().filter(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Empties the line sequence unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of unit price × quantity across all lines, as an exact
    /// decimal. Excludes shipping and tax.
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(|line| line.product.price * Decimal::from(line.quantity))
            .sum()
    }

    /// Opens the cart panel.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Closes the cart panel.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Toggles the cart panel.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }
}

// =============================================================================
// Request / Response Shapes
// =============================================================================

/// Input for adding a product to the cart
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    /// Catalog id of the product to add
    pub product_id: String,

    /// Selected size
    pub size: Option<String>,

    /// Selected color
    pub color: Option<String>,
}

/// Input for changing a line's quantity
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityInput {
    /// New quantity; zero or negative removes the line(s)
    pub quantity: i64,
}

/// Input for the cart panel visibility endpoint
#[derive(Debug, Default, Deserialize)]
pub struct VisibilityInput {
    /// Desired state; omitted toggles the current state
    pub open: Option<bool>,
}

/// Response shape for all cart endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Session cart identifier
    pub cart_id: String,

    /// Cart lines in insertion order
    pub items: Vec<CartLine>,

    /// Whether the cart panel is open
    pub is_open: bool,

    /// Sum of quantities across all lines
    pub total_items: u64,

    /// Subtotal, shipping, tax and total for the current contents
    pub summary: OrderSummary,
}

impl CartView {
    /// Projects a cart into its response shape.
    pub fn of(cart_id: &str, cart: &CartState) -> Self {
        Self {
            cart_id: cart_id.to_string(),
            items: cart.items.clone(),
            is_open: cart.is_open,
            total_items: cart.total_items(),
            summary: OrderSummary::for_subtotal(cart.total_price()),
        }
    }
}
