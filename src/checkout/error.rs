//! Checkout errors
//!
//! Validation failures abort the whole session-creation attempt before
//! the provider is contacted; provider failures are surfaced as a generic
//! error and never retried automatically.

use thiserror::Error;

use crate::payments::ProviderError;

/// Errors raised while building or creating a checkout session.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A requested product id has no catalog match.
    #[error("product with id \"{0}\" not found")]
    ProductNotFound(String),

    /// A non-positive quantity was requested.
    #[error("invalid quantity {quantity} for product \"{product_id}\"")]
    InvalidQuantity {
        /// Id of the offending request line
        product_id: String,

        /// The requested quantity
        quantity: i64,
    },

    /// A catalog price could not be converted to integer minor units.
    #[error("price of product \"{0}\" cannot be expressed in minor units")]
    InvalidPrice(String),

    /// No line items were requested.
    #[error("checkout requires at least one line item")]
    Empty,

    /// The payment provider rejected the session request.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl CheckoutError {
    /// Whether this is a client-side validation failure (as opposed to a
    /// provider-side one).
    pub fn is_validation(&self) -> bool {
        !matches!(self, CheckoutError::Provider(_))
    }
}
