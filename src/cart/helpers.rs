//! Shopping Cart Session Helpers
//!
//! Carts are scoped to a browser session through the `cart_session`
//! cookie. These helpers resolve the session id from request headers and
//! build the Set-Cookie value for newly minted sessions.

use axum::http::{header, HeaderMap};
use uuid::Uuid;

use super::models::CartLine;

/// Cookie carrying the session's cart identifier.
pub const SESSION_COOKIE: &str = "cart_session";

/// Resolves the cart session id from the request's Cookie header.
///
/// Returns the id plus whether it was newly minted; new ids must be sent
/// back via Set-Cookie so follow-up requests land on the same cart.
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    let existing = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|cookie| {
                let (name, value) = cookie.trim().split_once('=')?;
                (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
            })
        });

    match existing {
        Some(id) => (id, false),
        None => (Uuid::new_v4().simple().to_string(), true),
    }
}

/// Builds the Set-Cookie value for a newly minted session id.
pub fn session_cookie(session_id: &str) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly")
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Classic Trench Coat, 1x Relaxed Linen Shirt"`.
pub fn format_item_summary(items: &[CartLine]) -> String {
    items
        .iter()
        .map(|line| format!("{}x {}", line.quantity, line.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}
