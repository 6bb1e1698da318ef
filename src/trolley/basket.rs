//! The basket state container.
//!
//! [`BasketStore`] is the single source of truth for what the user intends to
//! buy. It owns the ordered entry list, exposes the mutation actions the
//! screens call, and notifies registered listeners synchronously after every
//! committed change. There is no ambient global instance: the application
//! creates one store per session and passes it to consumers.
//!
//! Invariants held after every public call:
//! - at most one entry per product id
//! - no entry with quantity 0 (decreasing a quantity-1 entry deletes it)
//! - entry order is add order; quantity changes never reorder

use crate::model::{BasketEntry, Product};
use crate::quantity::{self, QuantityUpdate};
use rust_decimal::Decimal;
use std::fmt;

/// Handle returned by [`BasketStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&[BasketEntry])>;

pub struct BasketStore {
    entries: Vec<BasketEntry>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for BasketStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasketStore")
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for BasketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BasketStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Add a product to the basket with quantity 1.
    ///
    /// If the product is already present, the existing entry's quantity is
    /// incremented instead; a duplicate entry is never created.
    pub fn add(&mut self, product: Product) {
        if self.quantity_of(product.id).is_some() {
            self.entries = quantity::increase(&self.entries, product.id);
        } else {
            self.entries.push(BasketEntry::new(product));
        }
        self.notify();
    }

    /// Remove the entry for `product_id`, whatever its quantity.
    /// No-op if the product is not in the basket.
    pub fn remove(&mut self, product_id: u64) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.product.id != product_id);
        if self.entries.len() != before {
            self.notify();
        }
    }

    /// Increment the quantity of the entry for `product_id` by one.
    /// No-op if the product is not in the basket; never auto-adds.
    pub fn increase(&mut self, product_id: u64) {
        if self.quantity_of(product_id).is_none() {
            return;
        }
        self.entries = quantity::apply(&self.entries, product_id, QuantityUpdate::Increase);
        self.notify();
    }

    /// Decrement the quantity of the entry for `product_id` by one.
    ///
    /// A quantity-1 entry is removed entirely; the basket never holds a
    /// zero-quantity entry. No-op if the product is not in the basket.
    pub fn decrease(&mut self, product_id: u64) {
        if self.quantity_of(product_id).is_none() {
            return;
        }
        self.entries = quantity::apply(&self.entries, product_id, QuantityUpdate::Decrease);
        self.entries.retain(|entry| entry.quantity >= 1);
        self.notify();
    }

    /// Clear the basket.
    pub fn reset(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.entries.clear();
        self.notify();
    }

    /// Register a listener called synchronously after every committed
    /// mutation, with the fully-updated entry list.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&[BasketEntry]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.entries);
        }
    }

    /// The live basket sequence, in add order.
    pub fn entries(&self) -> &[BasketEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products in the basket (the badge count).
    pub fn distinct_count(&self) -> usize {
        self.entries.len()
    }

    /// Quantity for a product id, or `None` if it is not in the basket.
    pub fn quantity_of(&self, product_id: u64) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.product.id == product_id)
            .map(|entry| entry.quantity)
    }

    /// Sum of unit price times quantity over all entries.
    pub fn total_price(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |acc, entry| acc + entry.line_total())
    }

    /// Total price formatted with exactly two decimal digits, e.g. `"12.50"`.
    pub fn total_price_display(&self) -> String {
        format!("{:.2}", self.total_price().round_dp(2))
    }
}
