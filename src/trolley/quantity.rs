//! The quantity update policy: a pure transform over basket entries.
//!
//! Given the current entries, a target product id, and a direction, it returns
//! a new sequence with exactly the matching entry adjusted by one. Everything
//! else keeps its value and relative order. The input is never mutated, and an
//! unknown id returns the input unchanged.
//!
//! The policy itself does not enforce the no-zero-quantity invariant; that is
//! [`BasketStore`](crate::basket::BasketStore)'s job right after applying it.

use crate::model::BasketEntry;

/// Direction of a quantity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    Increase,
    Decrease,
}

/// Returns a new entry list with the matching entry's quantity moved by one.
pub fn apply(entries: &[BasketEntry], product_id: u64, update: QuantityUpdate) -> Vec<BasketEntry> {
    entries
        .iter()
        .map(|entry| {
            if entry.product.id == product_id {
                let quantity = match update {
                    QuantityUpdate::Increase => entry.quantity + 1,
                    QuantityUpdate::Decrease => entry.quantity.saturating_sub(1),
                };
                BasketEntry {
                    product: entry.product.clone(),
                    quantity,
                }
            } else {
                entry.clone()
            }
        })
        .collect()
}

pub fn increase(entries: &[BasketEntry], product_id: u64) -> Vec<BasketEntry> {
    apply(entries, product_id, QuantityUpdate::Increase)
}

pub fn decrease(entries: &[BasketEntry], product_id: u64) -> Vec<BasketEntry> {
    apply(entries, product_id, QuantityUpdate::Decrease)
}
