//! Cart persistence.
//!
//! The cart is stored as one JSON array of [`CartLine`](super::CartLine) under a fixed key in a
//! small client-local key/value store, rewritten in full after every mutation.

use std::{
    fs, io,
    path::PathBuf,
    sync::Mutex,
};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::warn;

use super::Cart;

/// Key the cart is stored under.
pub const CART_STORAGE_KEY: &str = "shopease_cart";

/// Errors raised by a [`CartStorage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The cart could not be encoded.
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),

    /// A previous writer panicked while holding the store.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Client-local string key/value store.
pub trait CartStorage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Restores the cart, falling back to an empty cart when nothing usable is stored.
pub fn load_cart(storage: &dyn CartStorage) -> Cart {
    let stored = match storage.read(CART_STORAGE_KEY) {
        Ok(Some(stored)) => stored,
        Ok(None) => return Cart::new(),
        Err(error) => {
            warn!("could not read stored cart, starting empty: {error}");

            return Cart::new();
        }
    };

    serde_json::from_str(&stored).unwrap_or_else(|error| {
        warn!("discarding invalid stored cart: {error}");

        Cart::new()
    })
}

/// Writes the whole cart under [`CART_STORAGE_KEY`].
///
/// # Errors
///
/// Returns an error when encoding or writing fails.
pub fn save_cart(storage: &dyn CartStorage, cart: &Cart) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(cart)?;

    storage.write(CART_STORAGE_KEY, &encoded)
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        // Write-then-rename so a crash never leaves a half-written cart behind.
        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");

        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;

        Ok(())
    }
}

/// In-process store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<FxHashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_poisoned| StorageError::Poisoned)?;

        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_poisoned| StorageError::Poisoned)?;

        entries.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use testresult::TestResult;

    use crate::cart::fixtures::product;

    use super::*;

    fn sample_cart() -> Result<Cart, crate::cart::CartError> {
        let mut cart = Cart::new();

        cart.add(&product(1, 18_00, 5))?;
        cart.add(&product(1, 18_00, 5))?;
        cart.add(&product(4, 22_00, 53))?;

        Ok(cart)
    }

    #[test]
    fn load_from_empty_storage_gives_empty_cart() {
        let storage = MemoryStorage::new();

        assert!(load_cart(&storage).is_empty());
    }

    #[test]
    fn save_then_load_restores_identical_lines() -> TestResult {
        let storage = MemoryStorage::new();
        let cart = sample_cart()?;

        save_cart(&storage, &cart)?;

        assert_eq!(load_cart(&storage), cart);

        Ok(())
    }

    #[test]
    fn unparseable_value_gives_empty_cart() -> TestResult {
        let storage = MemoryStorage::new();

        storage.write(CART_STORAGE_KEY, "{not json")?;

        assert!(load_cart(&storage).is_empty());

        Ok(())
    }

    #[test]
    fn stored_line_violating_ceiling_gives_empty_cart() -> TestResult {
        let storage = MemoryStorage::new();

        storage.write(
            CART_STORAGE_KEY,
            r#"[{
                "product_id": 1, "product_name": "Chai", "unit_price": 1800,
                "quantity": 9, "supplier_name": "Exotic Liquids", "max_quantity": 2
            }]"#,
        )?;

        assert!(load_cart(&storage).is_empty());

        Ok(())
    }

    #[test]
    fn file_storage_round_trips_cart() -> TestResult {
        let dir = tempdir()?;
        let nested = dir.path().join("nested");
        let storage = FileStorage::new(&nested);
        let cart = sample_cart()?;

        save_cart(&storage, &cart)?;

        assert!(nested.join("shopease_cart.json").exists(), "cart file missing");
        assert_eq!(load_cart(&storage), cart);

        Ok(())
    }

    #[test]
    fn file_storage_overwrites_previous_value() -> TestResult {
        let dir = tempdir()?;
        let storage = FileStorage::new(dir.path());

        storage.write(CART_STORAGE_KEY, "[1]")?;
        storage.write(CART_STORAGE_KEY, "[]")?;

        assert_eq!(storage.read(CART_STORAGE_KEY)?.as_deref(), Some("[]"));
        assert!(
            !dir.path().join("shopease_cart.json.tmp").exists(),
            "staging file left behind"
        );

        Ok(())
    }
}
