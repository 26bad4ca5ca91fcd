//! The cart aggregate: line items plus the customer's contact draft.
//!
//! A line item is identified by the (`product_id`, `size`, `color`) triple.
//! Adding the same variant twice merges quantities instead of duplicating
//! the entry, so the triple is unique across the cart at all times.
//!
//! `Cart` is pure state: no I/O happens here. The storefront wraps it in a
//! handle that persists every mutation (see `wakehealth-storefront`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One purchasable configuration of a product in the cart.
///
/// Serializes with camelCase field names; this shape is the durable storage
/// record, so it must stay readable across releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    /// Unit price, not the line total.
    pub price: Decimal,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    /// Free-text customization note; empty string when absent.
    #[serde(default)]
    pub custom_note: String,
    /// Primary product image reference; may be empty.
    #[serde(default)]
    pub image: String,
}

impl CartItem {
    /// Whether this entry matches the given identity key.
    #[must_use]
    pub fn matches(&self, product_id: &str, size: &str, color: &str) -> bool {
        self.product_id == product_id && self.size == size && self.color == color
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The in-progress contact/shipping form.
///
/// All fields are free text; they are only checked for non-emptiness at
/// submission time, by the checkout boundary. The draft persists alongside
/// the line items and is intentionally NOT cleared after a successful order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

/// The cart aggregate root: ordered line items plus one customer draft.
///
/// Item order is insertion order (first added first); it matters for display
/// and for the order message, not for correctness.
///
/// Every field carries `#[serde(default)]` so an older or partial storage
/// record still hydrates instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub customer: CustomerDraft,
}

impl Cart {
    /// Create an empty cart with a blank customer draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, merging by identity key.
    ///
    /// If an entry with the same (`product_id`, `size`, `color`) already
    /// exists its quantity is incremented by `item.quantity`, saturating at
    /// `u32::MAX`; otherwise the item is appended, preserving insertion
    /// order.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.matches(&item.product_id, &item.size, &item.color))
        {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item);
        }
    }

    /// Remove the entry matching the identity key. No-op if absent.
    pub fn remove_item(&mut self, product_id: &str, size: &str, color: &str) {
        self.items
            .retain(|i| !i.matches(product_id, size, color));
    }

    /// Set the quantity on the matching entry. No-op if absent.
    ///
    /// This is a pure setter: it does not enforce the "below one removes"
    /// rule. Call sites go through [`Cart::change_quantity`] instead, which
    /// owns that policy.
    pub fn update_quantity(&mut self, product_id: &str, size: &str, color: &str, quantity: u32) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.matches(product_id, size, color))
        {
            item.quantity = quantity;
        }
    }

    /// Quantity-change boundary shared by every call site.
    ///
    /// A requested quantity below one removes the entry; anything else is a
    /// plain [`Cart::update_quantity`]. Keeping the policy here means no
    /// entry can ever be observed with `quantity == 0`.
    pub fn change_quantity(&mut self, product_id: &str, size: &str, color: &str, quantity: i64) {
        if quantity < 1 {
            self.remove_item(product_id, size, color);
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            self.update_quantity(product_id, size, color, quantity as u32);
        }
    }

    /// Empty the line items. The customer draft is untouched.
    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    /// Replace the customer draft wholesale.
    pub fn set_customer(&mut self, customer: CustomerDraft) {
        self.customer = customer;
    }

    /// Sum of `price * quantity` over all entries, recomputed on demand.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all entries.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
