use std::net::SocketAddr;
use std::sync::Arc;
use storefront_rust::cart::AppState;
use storefront_rust::router::create_app_router;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Initialize application state (catalog, persisted carts, provider)
    let state = Arc::new(AppState::new().await);

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
