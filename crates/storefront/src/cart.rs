//! The owned cart state container.
//!
//! [`CartHandle`] is the single source of truth for cart contents during a
//! session. It wraps the pure [`Cart`] aggregate in a mutex and writes the
//! full state through to [`CartStorage`] after every mutation, so each
//! operation reads-then-writes the whole state atomically.
//!
//! The handle is constructed once at startup (hydrating from storage) and
//! handed to the router via `AppState`; nothing here is a global.

use std::sync::{Mutex, MutexGuard, PoisonError};

use wakehealth_core::cart::{Cart, CartItem, CustomerDraft};

use crate::storage::CartStorage;

/// Thread-safe, write-through handle over the cart aggregate.
#[derive(Debug)]
pub struct CartHandle {
    cart: Mutex<Cart>,
    storage: CartStorage,
}

impl CartHandle {
    /// Construct the handle by hydrating prior state from storage.
    ///
    /// An absent or corrupt record yields the empty cart; hydration never
    /// fails.
    #[must_use]
    pub fn hydrate(storage: CartStorage) -> Self {
        let cart = storage.load();
        Self {
            cart: Mutex::new(cart),
            storage,
        }
    }

    /// Add an item, merging by (`product_id`, `size`, `color`).
    pub fn add_item(&self, item: CartItem) {
        self.mutate(|cart| cart.add_item(item));
    }

    /// Remove the matching entry; no-op if absent.
    pub fn remove_item(&self, product_id: &str, size: &str, color: &str) {
        self.mutate(|cart| cart.remove_item(product_id, size, color));
    }

    /// Quantity-change boundary: below one removes the entry.
    pub fn change_quantity(&self, product_id: &str, size: &str, color: &str, quantity: i64) {
        self.mutate(|cart| cart.change_quantity(product_id, size, color, quantity));
    }

    /// Replace the customer draft wholesale.
    pub fn set_customer(&self, customer: CustomerDraft) {
        self.mutate(|cart| cart.set_customer(customer));
    }

    /// Empty the line items, keeping the customer draft.
    pub fn clear_items(&self) {
        self.mutate(Cart::clear_items);
    }

    /// Current number of units across all entries.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lock().item_count()
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// A point-in-time copy of the full cart state.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }

    /// Run a mutation under the lock and persist the result before
    /// returning. Persistence failure degrades to in-memory operation
    /// inside [`CartStorage::save`]; it never reaches the caller.
    fn mutate<T>(&self, op: impl FnOnce(&mut Cart) -> T) -> T {
        let mut cart = self.lock();
        let out = op(&mut cart);
        self.storage.save(&cart);
        out
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        // A poisoned lock means a panic mid-mutation; the state itself is
        // still a valid Cart, so keep serving it.
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
