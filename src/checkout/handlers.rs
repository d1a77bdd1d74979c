//! REST API handler for checkout session creation
//!
//! Validation failures map to 422 with a descriptive message; provider
//! failures map to 502 with a generic message (detail is logged
//! server-side) and a manual retry is left to the caller; nothing is
//! retried automatically.

use super::builder::create_checkout_session;
use super::error::CheckoutError;
use super::models::{CreateSessionInput, CreateSessionResponse};
use crate::cart::state::SharedState;
use crate::payments::ProviderError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

/// Creates routes for checkout-related operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/checkout/session", post(create_session))
}

impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        if self.is_validation() {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response();
        }

        tracing::error!(error = %self, "checkout session creation failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": "payment provider is unavailable; please try again" })),
        )
            .into_response()
    }
}

/// Endpoint: POST /checkout/session
/// Revalidates the declared line items against the catalog and creates an
/// embedded payment session, returning its client secret.
async fn create_session(
    State(state): State<SharedState>,
    Json(payload): Json<CreateSessionInput>,
) -> Response {
    let Some(payments) = state.payments.clone() else {
        return CheckoutError::from(ProviderError::NotConfigured).into_response();
    };

    match create_checkout_session(&state.catalog, payments.as_ref(), &payload.items).await {
        Ok(session) => Json(CreateSessionResponse {
            client_secret: session.client_secret,
        })
        .into_response(),
        Err(error) => error.into_response(),
    }
}
