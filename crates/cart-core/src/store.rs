//! # Persistent Store Adapter
//!
//! Write-through persistence for the cart. The cart lives under a single
//! key in a key-value backend (the stand-in for browser local storage):
//! every save overwrites the full serialized sequence, and anything
//! unreadable on load is treated as an empty cart rather than an error.

use crate::cart::Cart;
use crate::error::{CartError, CartResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Key-value storage seam. Implementations must tolerate concurrent
/// readers; writes are whole-value overwrites (last write wins).
pub trait StorageBackend: Send + Sync {
    /// Read the value under `key`, if any.
    fn read(&self, key: &str) -> CartResult<Option<String>>;

    /// Overwrite the value under `key`.
    fn write(&self, key: &str, value: &str) -> CartResult<()>;
}

/// In-memory backend for tests and embedding.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> CartResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CartError::Storage("memory store poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> CartResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CartError::Storage("memory store poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed backend: one JSON file per key under a directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> CartResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)
            .map_err(|e| CartError::Storage(format!("create {}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> CartResult<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CartError::Storage(format!(
                "read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn write(&self, key: &str, value: &str) -> CartResult<()> {
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .map_err(|e| CartError::Storage(format!("write {}: {}", path.display(), e)))
    }
}

/// Cart persistence over a storage backend and a fixed key.
pub struct CartStore {
    backend: Box<dyn StorageBackend>,
    key: String,
}

impl CartStore {
    pub fn new(backend: Box<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Load the persisted cart. Missing state, a failed read, or an
    /// unreadable payload all hydrate as an empty cart — never a
    /// user-visible error.
    pub fn load(&self) -> Cart {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored cart, starting empty");
                return Cart::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "cart read failed, starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding unreadable cart payload");
                Cart::new()
            }
        }
    }

    /// Serialize and overwrite the stored cart. No partial writes, no
    /// versioning.
    pub fn save(&self, cart: &Cart) -> CartResult<()> {
        let payload = serde_json::to_string(cart)
            .map_err(|e| CartError::Serialization(format!("serialize cart: {}", e)))?;
        self.backend.write(&self.key, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Price;

    const KEY: &str = "shopping-cart";

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add("sku1", "Shoe", Price::from_rupees(600.0));
        cart.add("sku2", "Boot", Price::from_rupees(900.0));
        cart.add("sku1", "Shoe", Price::from_rupees(600.0));
        cart
    }

    #[test]
    fn test_round_trip_preserves_items_and_order() {
        let store = CartStore::new(Box::new(MemoryBackend::new()), KEY);
        let cart = sample_cart();

        store.save(&cart).unwrap();
        assert_eq!(store.load(), cart);
    }

    #[test]
    fn test_missing_state_loads_empty() {
        let store = CartStore::new(Box::new(MemoryBackend::new()), KEY);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_payload_loads_empty() {
        let backend = MemoryBackend::new();
        backend.write(KEY, "{not json").unwrap();

        let store = CartStore::new(Box::new(backend), KEY);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_overwrites_fully() {
        let store = CartStore::new(Box::new(MemoryBackend::new()), KEY);
        store.save(&sample_cart()).unwrap();
        store.save(&Cart::new()).unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::new(Box::new(FileBackend::new(dir.path()).unwrap()), KEY);
        let cart = sample_cart();

        store.save(&cart).unwrap();
        assert_eq!(store.load(), cart);

        // A second store over the same directory sees the same state
        let reopened = CartStore::new(Box::new(FileBackend::new(dir.path()).unwrap()), KEY);
        assert_eq!(reopened.load(), cart);
    }
}
