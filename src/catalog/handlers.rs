//! REST API handlers for catalog browsing
//!
//! These endpoints back the storefront's product listing, product detail
//! and category navigation. The catalog is read-only, so every handler is
//! a pure projection of application state.

use super::store::ListFilter;
use crate::cart::state::SharedState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

/// Creates routes for catalog-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(product_detail))
        .route("/categories", get(list_categories))
}

/// Endpoint: GET /products
/// Lists catalog products, optionally filtered by category or search query
/// and sorted (`featured`, `price-low`, `price-high`, `rating`).
async fn list_products(
    State(state): State<SharedState>,
    Query(filter): Query<ListFilter>,
) -> impl IntoResponse {
    let products: Vec<_> = state.catalog.search(&filter).into_iter().cloned().collect();
    Json(products)
}

/// Endpoint: GET /products/:id
/// A single product plus up to four related products from its category.
async fn product_detail(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.get(&id) {
        Some(product) => {
            let related: Vec<_> = state.catalog.related(&id).into_iter().cloned().collect();
            Json(json!({ "product": product, "relatedProducts": related })).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("product with id \"{id}\" not found") })),
        )
            .into_response(),
    }
}

/// Endpoint: GET /categories
/// Distinct category names in catalog order.
async fn list_categories(State(state): State<SharedState>) -> impl IntoResponse {
    let categories: Vec<String> = state
        .catalog
        .categories()
        .into_iter()
        .map(String::from)
        .collect();
    Json(categories)
}
