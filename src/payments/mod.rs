//! Payment Provider Module
//!
//! Abstracts session creation behind an object-safe trait so the
//! application state can carry any provider: the Stripe client in
//! production, a counting mock in tests.

pub mod stripe;

use async_trait::async_trait;
use thiserror::Error;

use crate::checkout::models::{CheckoutSession, LineItem};

// Re-export the production implementation
pub use stripe::StripeClient;

/// Errors surfaced by a payment provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No provider was configured at startup.
    #[error("payment provider is not configured")]
    NotConfigured,

    /// The HTTP request to the provider failed outright.
    #[error("payment provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with an error status.
    #[error("payment provider rejected the request ({status}): {message}")]
    Api {
        /// HTTP status returned by the provider
        status: u16,

        /// Provider-supplied error message, when present
        message: String,
    },
}

/// Payment provider abstraction.
///
/// One operation: create an embedded payment-mode session for the given
/// line items. The provider owns the session's lifecycle (pending, paid,
/// expired); callers only consume the returned client secret.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Creates an embedded checkout session.
    async fn create_embedded_session(
        &self,
        line_items: &[LineItem],
    ) -> Result<CheckoutSession, ProviderError>;
}
