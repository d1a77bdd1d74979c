//! Durable Cart Storage
//!
//! All cart sessions are serialized into one versioned JSON snapshot
//! under a fixed namespace key (`cart-storage.json`). Every write is a
//! full-file overwrite (last writer wins, no merging). Restoration
//! tolerates a missing, unreadable or mismatched snapshot by starting
//! empty instead of crashing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::models::CartState;

/// Fixed namespace key the snapshot is stored under.
const STORAGE_KEY: &str = "cart-storage";

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors raised by snapshot reads and writes.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem failure.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot (de)serialization failure.
    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The persisted shape: every session's cart, plus a schema version tag
/// so a future layout change can be detected instead of misread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    /// Schema version of this snapshot
    pub version: u32,

    /// Cart state per session id
    pub carts: BTreeMap<String, CartState>,
}

impl CartSnapshot {
    /// Wraps the given carts in a current-version snapshot.
    pub fn new(carts: BTreeMap<String, CartState>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            carts,
        }
    }
}

impl Default for CartSnapshot {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

/// File-backed store for the cart snapshot.
#[derive(Debug, Clone)]
pub struct CartStorage {
    path: PathBuf,
}

impl CartStorage {
    /// Storage rooted in the given directory; the snapshot lives at
    /// `<dir>/cart-storage.json`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restores the snapshot, degrading to an empty one when the file is
    /// absent (first run), unreadable, or carries a different schema
    /// version.
    pub async fn load(&self) -> CartSnapshot {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return CartSnapshot::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read cart snapshot, starting empty");
                return CartSnapshot::default();
            }
        };

        match serde_json::from_str::<CartSnapshot>(&json) {
            Ok(snapshot) if snapshot.version == SNAPSHOT_VERSION => snapshot,
            Ok(snapshot) => {
                tracing::warn!(
                    found = snapshot.version,
                    expected = SNAPSHOT_VERSION,
                    "cart snapshot version mismatch, starting empty"
                );
                CartSnapshot::default()
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable cart snapshot, starting empty");
                CartSnapshot::default()
            }
        }
    }

    /// Overwrites the snapshot file with the given state.
    pub async fn save(&self, snapshot: &CartSnapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(snapshot)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use rust_decimal::Decimal;

    fn product(id: &str, price: &str) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            price: price.parse::<Decimal>().unwrap(),
            original_price: Some("59.99".parse().unwrap()),
            image: format!("/images/{id}.jpg"),
            category: "Shirts".into(),
            description: format!("Description of {id}"),
            rating: 4.5,
            reviews: 10,
            sizes: Some(vec!["S".into(), "M".into()]),
            colors: None,
            in_stock: true,
            featured: true,
        }
    }

    fn populated_snapshot() -> CartSnapshot {
        let mut cart = CartState::default();
        cart.add_item(product("shirt", "19.99"), Some("M".into()), None);
        cart.add_item(product("shirt", "19.99"), Some("M".into()), None);
        cart.add_item(product("coat", "189.99"), None, Some("Black".into()));
        cart.close();

        let mut carts = BTreeMap::new();
        carts.insert("session-1".to_string(), cart);
        carts.insert("session-2".to_string(), CartState::default());
        CartSnapshot::new(carts)
    }

    #[tokio::test]
    async fn round_trip_is_field_for_field_identical() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path());

        let snapshot = populated_snapshot();
        storage.save(&snapshot).await.unwrap();
        let restored = storage.load().await;

        assert_eq!(restored, snapshot);
    }

    #[tokio::test]
    async fn missing_file_restores_an_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path());

        let restored = storage.load().await;
        assert_eq!(restored, CartSnapshot::default());
        assert!(restored.carts.is_empty());
    }

    #[tokio::test]
    async fn version_mismatch_restores_an_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path());

        let mut snapshot = populated_snapshot();
        snapshot.version = SNAPSHOT_VERSION + 1;
        storage.save(&snapshot).await.unwrap();

        let restored = storage.load().await;
        assert!(restored.carts.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_restores_an_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path());

        tokio::fs::write(storage.path(), "not json {{{").await.unwrap();
        let restored = storage.load().await;
        assert!(restored.carts.is_empty());
    }

    #[tokio::test]
    async fn save_overwrites_the_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path());

        storage.save(&populated_snapshot()).await.unwrap();
        storage.save(&CartSnapshot::default()).await.unwrap();

        let restored = storage.load().await;
        assert!(restored.carts.is_empty());
    }
}
