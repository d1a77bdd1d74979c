//! Storefront Backend Library
//!
//! This library provides the core functionality for a storefront backend:
//! session-scoped shopping carts, a read-only product catalog, and a
//! checkout flow that creates embedded payment sessions with an external
//! payment provider.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod payments;

// Infrastructure
pub mod router;
pub mod storage;
