//! Shopping Cart Domain Module
//!
//! This module contains the cart business logic, including:
//! - Domain models (CartLine, CartState, inputs, views)
//! - Session helpers (cookie resolution, formatting)
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
