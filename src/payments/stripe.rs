//! Stripe implementation of the payment provider seam
//!
//! One call: create an embedded checkout session. The request is the
//! provider's form-encoded wire format; the response is reduced to the
//! session's client secret. No retry or backoff policy lives here.

use async_trait::async_trait;
use serde::Deserialize;

use super::{PaymentProvider, ProviderError};
use crate::checkout::models::{CheckoutSession, LineItem};

/// Countries shipping addresses may be collected for.
const ALLOWED_SHIPPING_COUNTRIES: &[&str] = &["US", "CA", "GB"];

/// Environment variable holding the API secret key.
const SECRET_KEY_ENV: &str = "STRIPE_SECRET_KEY";

/// Default API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// Thin client for the provider's checkout-session API.
#[derive(Debug, Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    base_url: String,
}

/// Error envelope returned by the provider on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

impl StripeClient {
    /// Creates a client with the given secret key.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a client from `STRIPE_SECRET_KEY`, or `None` when the
    /// variable is absent or empty.
    pub fn from_env() -> Option<Self> {
        match std::env::var(SECRET_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Some(Self::new(key)),
            _ => None,
        }
    }

    /// Overrides the API endpoint (stripe-mock, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Flattens line items and session parameters into the provider's
/// bracketed form encoding.
fn session_form(line_items: &[LineItem]) -> Vec<(String, String)> {
    let mut form = vec![
        ("mode".to_string(), "payment".to_string()),
        ("ui_mode".to_string(), "embedded".to_string()),
        ("redirect_on_completion".to_string(), "never".to_string()),
    ];

    for (i, country) in ALLOWED_SHIPPING_COUNTRIES.iter().enumerate() {
        form.push((
            format!("shipping_address_collection[allowed_countries][{i}]"),
            (*country).to_string(),
        ));
    }

    for (i, item) in line_items.iter().enumerate() {
        form.push((format!("line_items[{i}][quantity]"), item.quantity.to_string()));
        form.push((
            format!("line_items[{i}][price_data][currency]"),
            item.price_data.currency.clone(),
        ));
        form.push((
            format!("line_items[{i}][price_data][unit_amount]"),
            item.price_data.unit_amount.to_string(),
        ));
        form.push((
            format!("line_items[{i}][price_data][product_data][name]"),
            item.price_data.product_data.name.clone(),
        ));
        form.push((
            format!("line_items[{i}][price_data][product_data][description]"),
            item.price_data.product_data.description.clone(),
        ));
    }

    form
}

#[async_trait]
impl PaymentProvider for StripeClient {
    async fn create_embedded_session(
        &self,
        line_items: &[LineItem],
    ) -> Result<CheckoutSession, ProviderError> {
        let response = self
            .http
            .post(format!("{}/v1/checkout/sessions", self.base_url))
            .bearer_auth(&self.secret_key)
            .form(&session_form(line_items))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<CheckoutSession>().await?)
    }
}
