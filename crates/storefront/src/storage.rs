//! Durable cart persistence.
//!
//! The full cart state (line items + customer draft) is written as a single
//! JSON blob after every mutation, under a fixed namespace. On startup the
//! record is loaded back; an absent or corrupt record hydrates to the empty
//! cart instead of failing.
//!
//! Persistence is write-through and non-fatal: a read or write failure is
//! logged and the store keeps operating in-memory for the rest of the
//! session, accepting that a restart may lose state.

use std::path::{Path, PathBuf};

use wakehealth_core::cart::Cart;

/// Fixed storage namespace; the record lives at `<state_dir>/wakehealth-cart.json`.
pub const STORAGE_NAMESPACE: &str = "wakehealth-cart";

/// File-backed storage for the cart record.
#[derive(Debug, Clone)]
pub struct CartStorage {
    /// `None` disables persistence entirely (in-memory mode, used in tests).
    path: Option<PathBuf>,
}

impl CartStorage {
    /// Storage backed by a JSON file inside `state_dir`.
    #[must_use]
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: Some(state_dir.join(format!("{STORAGE_NAMESPACE}.json"))),
        }
    }

    /// Storage that never touches the filesystem.
    #[must_use]
    pub const fn in_memory() -> Self {
        Self { path: None }
    }

    /// Load the persisted cart record.
    ///
    /// Returns the empty cart when no record exists, when the file cannot be
    /// read, or when the record does not parse. Never fails.
    #[must_use]
    pub fn load(&self) -> Cart {
        let Some(path) = self.path.as_deref() else {
            return Cart::new();
        };
        if !path.exists() {
            return Cart::new();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Failed to read cart record {}: {e}", path.display());
                return Cart::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!(
                    "Discarding corrupt cart record {}: {e}",
                    path.display()
                );
                Cart::new()
            }
        }
    }

    /// Persist the full cart state.
    ///
    /// A failure is logged and swallowed; the caller keeps its in-memory
    /// state and the session continues without durability.
    pub fn save(&self, cart: &Cart) {
        let Some(path) = self.path.as_deref() else {
            return;
        };

        if let Err(e) = write_record(path, cart) {
            tracing::warn!(
                "Failed to persist cart to {}; continuing in-memory: {e}",
                path.display()
            );
        }
    }
}

fn write_record(path: &Path, cart: &Cart) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(cart).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use wakehealth_core::cart::{CartItem, CustomerDraft};

    fn populated_cart(n: u32) -> Cart {
        let mut cart = Cart::new();
        for i in 0..n {
            cart.add_item(CartItem {
                product_id: format!("product-{i}"),
                name: format!("Product {i}"),
                price: Decimal::new(1500 + i64::from(i), 2),
                size: "M".to_string(),
                color: "Azul".to_string(),
                quantity: i + 1,
                custom_note: if i % 2 == 0 {
                    String::new()
                } else {
                    format!("nota {i}")
                },
                image: String::new(),
            });
        }
        cart.set_customer(CustomerDraft {
            name: "Ana Li".to_string(),
            whatsapp: "+1 555 0100".to_string(),
            email: "ana@example.com".to_string(),
            address: "123 Main St".to_string(),
        });
        cart
    }

    #[test]
    fn round_trip_recovers_an_identical_cart() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path());

        let cart = populated_cart(4);
        storage.save(&cart);

        let reloaded = storage.load();
        assert_eq!(reloaded, cart);

        // Idempotent: saving what was loaded changes nothing.
        storage.save(&reloaded);
        assert_eq!(storage.load(), cart);
    }

    #[test]
    fn missing_record_hydrates_to_the_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path());
        assert_eq!(storage.load(), Cart::new());
    }

    #[test]
    fn corrupt_record_is_discarded_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path());

        let path = dir.path().join(format!("{STORAGE_NAMESPACE}.json"));
        std::fs::write(&path, "{not json at all").unwrap();

        assert_eq!(storage.load(), Cart::new());
    }

    #[test]
    fn record_with_unknown_shape_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path());

        // A future/foreign record: valid JSON, unexpected fields.
        let path = dir.path().join(format!("{STORAGE_NAMESPACE}.json"));
        std::fs::write(&path, r#"{"version": 2, "entries": []}"#).unwrap();

        assert_eq!(storage.load(), Cart::new());
    }

    #[test]
    fn unwritable_target_degrades_without_panicking() {
        // Parent "directory" is a file, so create_dir_all and write fail.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "file in the way").unwrap();

        let storage = CartStorage::new(&blocker.join("nested"));
        storage.save(&populated_cart(1));
        assert_eq!(storage.load(), Cart::new());
    }

    #[test]
    fn in_memory_storage_never_persists() {
        let storage = CartStorage::in_memory();
        storage.save(&populated_cart(2));
        assert_eq!(storage.load(), Cart::new());
    }
}
