//! Application State Management
//!
//! This module manages the application state: the per-session cart map,
//! the product catalog, the durable cart storage, and the injected
//! payment provider. State is owned by the application's root scope and
//! handed to handlers through axum's `State` extractor; there is no
//! ambient global.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;

use super::models::CartState;
use crate::catalog::Catalog;
use crate::payments::{PaymentProvider, StripeClient};
use crate::storage::{CartSnapshot, CartStorage};

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing carts and their collaborators
pub struct AppState {
    /// In-memory carts, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, CartState>,

    /// Read-only product catalog.
    pub catalog: Catalog,

    /// Durable cart storage; written after every mutation.
    storage: CartStorage,

    /// Payment provider, absent when no secret key is configured.
    /// Checkout fails with a provider error until one is supplied.
    pub payments: Option<Arc<dyn PaymentProvider>>,
}

impl AppState {
    /// Creates the application state from the environment: locates the
    /// data directory, loads the catalog and any persisted carts, and
    /// configures the payment provider from `STRIPE_SECRET_KEY`.
    pub async fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let data_dir = Self::locate_data_directory(&current_dir);
        tracing::info!(data_dir = %data_dir.display(), "using data directory");

        let catalog = Catalog::load_or_default(&data_dir).await;
        let storage = CartStorage::new(&data_dir);

        let payments = match StripeClient::from_env() {
            Some(client) => Some(Arc::new(client) as Arc<dyn PaymentProvider>),
            None => {
                tracing::warn!("STRIPE_SECRET_KEY is not set; checkout is disabled until it is");
                None
            }
        };

        Self::with_parts(catalog, storage, payments).await
    }

    /// Assembles state from explicit collaborators and restores persisted
    /// carts. Tests inject a fixture catalog, a temp-dir storage and a
    /// mock provider through this constructor.
    pub async fn with_parts(
        catalog: Catalog,
        storage: CartStorage,
        payments: Option<Arc<dyn PaymentProvider>>,
    ) -> Self {
        let snapshot = storage.load().await;
        let carts: DashMap<String, CartState> = snapshot.carts.into_iter().collect();

        Self {
            carts,
            catalog,
            storage,
            payments,
        }
    }

    /// Attempts to locate the data directory using a multi-step strategy
    fn locate_data_directory(current_dir: &Path) -> PathBuf {
        // Strategy to locate data:
        // 1. ./data
        // 2. ../data (if running from a subdir)
        // 3. Fallback to "data" relative path

        if current_dir.join("data").exists() {
            return current_dir.join("data");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("data").exists() {
                return parent.join("data");
            }
        }

        PathBuf::from("data") // Fallback
    }

    /// Writes the full cart snapshot to durable storage.
    ///
    /// Called after every mutation, so a restored state always reflects
    /// the most recent mutation prior to the last successful write. Write
    /// failures are logged and tolerated; the in-memory cart stays
    /// correct for the session.
    pub async fn persist(&self) {
        let carts: BTreeMap<String, CartState> = self
            .carts
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        if let Err(e) = self.storage.save(&CartSnapshot::new(carts)).await {
            tracing::warn!(error = %e, "failed to persist carts");
        }
    }
}
