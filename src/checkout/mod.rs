//! Checkout Domain Module
//!
//! The one trust boundary in the system: client-declared cart contents
//! are re-priced from the authoritative catalog before a payment session
//! is requested from the external provider. Client payloads never carry
//! prices.

pub mod builder;
pub mod error;
pub mod handlers;
pub mod models;

// Re-export commonly used items for convenience
pub use builder::{build_line_items, create_checkout_session};
pub use error::CheckoutError;
pub use handlers::routes;
