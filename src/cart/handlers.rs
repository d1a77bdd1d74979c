//! REST API handlers for shopping cart operations
//!
//! Every mutating endpoint resolves the session cart, applies exactly one
//! store operation, persists the snapshot, and responds with the updated
//! cart view. Persistence happens after the mutation and before the
//! response, so a restored state always reflects the last acknowledged
//! change.

use super::{helpers::*, models::*, state::SharedState};
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde_json::json;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(view_cart).delete(clear_cart))
        .route("/cart/items", post(add_item))
        .route("/cart/items/:id", patch(update_quantity).delete(remove_item))
        .route("/cart/visibility", post(set_visibility))
}

/// Attaches the session cookie to a response when the id was just minted.
fn with_session_cookie(mut response: Response, session_id: &str, is_new: bool) -> Response {
    if is_new {
        if let Ok(value) = session_cookie(session_id).parse() {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

/// Endpoint: GET /cart
/// The session's cart with derived totals and order summary.
async fn view_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new) = resolve_session_id(&headers);

    let view = match state.carts.get(&session_id) {
        Some(cart) => CartView::of(&session_id, &cart),
        None => CartView::of(&session_id, &CartState::default()),
    };

    with_session_cookie(Json(view).into_response(), &session_id, is_new)
}

/// Endpoint: POST /cart/items
/// Adds one unit of a catalog product with an optional variant selection.
/// Unknown product ids are rejected with 404.
async fn add_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<AddItemInput>,
) -> Response {
    let (session_id, is_new) = resolve_session_id(&headers);

    let Some(product) = state.catalog.get(&payload.product_id).cloned() else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("product with id \"{}\" not found", payload.product_id)
            })),
        )
            .into_response();
    };

    let view = {
        let mut cart = state.carts.entry(session_id.clone()).or_default();
        cart.add_item(product, payload.size, payload.color);
        tracing::debug!(cart = %session_id, contents = %format_item_summary(&cart.items), "added item");
        CartView::of(&session_id, &cart)
    };
    state.persist().await;

    with_session_cookie(Json(view).into_response(), &session_id, is_new)
}

/// Endpoint: PATCH /cart/items/:id
/// Sets the quantity on every line of the product; zero or negative
/// removes the line(s).
async fn update_quantity(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(product_id): Path<String>,
    Json(payload): Json<UpdateQuantityInput>,
) -> Response {
    let (session_id, is_new) = resolve_session_id(&headers);

    let view = {
        let mut cart = state.carts.entry(session_id.clone()).or_default();
        cart.update_quantity(&product_id, payload.quantity);
        CartView::of(&session_id, &cart)
    };
    state.persist().await;

    with_session_cookie(Json(view).into_response(), &session_id, is_new)
}

/// Endpoint: DELETE /cart/items/:id
/// Removes every line of the product; absent ids are a no-op.
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(product_id): Path<String>,
) -> Response {
    let (session_id, is_new) = resolve_session_id(&headers);

    let view = {
        let mut cart = state.carts.entry(session_id.clone()).or_default();
        cart.remove_item(&product_id);
        CartView::of(&session_id, &cart)
    };
    state.persist().await;

    with_session_cookie(Json(view).into_response(), &session_id, is_new)
}

/// Endpoint: DELETE /cart
/// Empties the session's cart unconditionally.
async fn clear_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new) = resolve_session_id(&headers);

    let view = {
        let mut cart = state.carts.entry(session_id.clone()).or_default();
        cart.clear();
        CartView::of(&session_id, &cart)
    };
    state.persist().await;

    with_session_cookie(Json(view).into_response(), &session_id, is_new)
}

/// Endpoint: POST /cart/visibility
/// Opens or closes the cart panel; an omitted `open` field toggles it.
async fn set_visibility(
    State(state): State<SharedState>,
    headers: HeaderMap,
    payload: Option<Json<VisibilityInput>>,
) -> Response {
    let (session_id, is_new) = resolve_session_id(&headers);
    let input = payload.map(|Json(input)| input).unwrap_or_default();

    let view = {
        let mut cart = state.carts.entry(session_id.clone()).or_default();
        match input.open {
            Some(true) => cart.open(),
            Some(false) => cart.close(),
            None => cart.toggle(),
        }
        CartView::of(&session_id, &cart)
    };
    state.persist().await;

    with_session_cookie(Json(view).into_response(), &session_id, is_new)
}
