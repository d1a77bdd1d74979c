//! Product Catalog Domain Module
//!
//! Read-only product data for the storefront: point lookup by id,
//! related-product selection, and the filtered/sorted listing behind the
//! product pages.

pub mod handlers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::Product;
pub use store::{Catalog, ListFilter, SortKey};
