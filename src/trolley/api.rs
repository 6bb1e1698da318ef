//! # API facade
//!
//! Thin entry point over the command layer, generic over the catalog backend
//! so clients and tests can swap the network out. It owns the session's
//! [`BasketStore`] and only dispatches; business logic lives in
//! `commands/*.rs` and the store itself.

use crate::basket::BasketStore;
use crate::catalog::ProductSource;
use crate::commands;
use crate::error::Result;

/// The main facade for storefront operations.
///
/// Generic over [`ProductSource`] so clients can run against the real HTTP
/// catalog or an in-memory one. Owns the basket for the session lifetime.
pub struct TrolleyApi<C: ProductSource> {
    catalog: C,
    basket: BasketStore,
}

impl<C: ProductSource> TrolleyApi<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            basket: BasketStore::new(),
        }
    }

    pub fn browse(&self) -> Result<commands::CmdResult> {
        commands::browse::run(&self.catalog, &self.basket)
    }

    pub fn show(&self, product_id: u64) -> Result<commands::CmdResult> {
        commands::show::run(&self.catalog, &self.basket, product_id)
    }

    pub fn add(&mut self, product_id: u64) -> Result<commands::CmdResult> {
        commands::add::run(&self.catalog, &mut self.basket, product_id)
    }

    pub fn remove(&mut self, product_id: u64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.basket, product_id)
    }

    pub fn increase(&mut self, product_id: u64) -> Result<commands::CmdResult> {
        commands::quantity::increase(&mut self.basket, product_id)
    }

    pub fn decrease(&mut self, product_id: u64) -> Result<commands::CmdResult> {
        commands::quantity::decrease(&mut self.basket, product_id)
    }

    pub fn basket_view(&self) -> Result<commands::CmdResult> {
        commands::basket_view::run(&self.basket)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.basket)
    }

    pub fn basket(&self) -> &BasketStore {
        &self.basket
    }

    /// Mutable access, mainly for registering subscribers.
    pub fn basket_mut(&mut self) -> &mut BasketStore {
        &mut self.basket
    }
}

pub use crate::commands::{BasketLine, CmdMessage, CmdResult, ListedProduct, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixed::FixedCatalog;

    #[test]
    fn add_show_and_basket_view_dispatch_against_the_same_store() {
        let mut api = TrolleyApi::new(FixedCatalog::sample());

        api.add(1).unwrap();
        api.add(1).unwrap();

        let detail = api.show(1).unwrap().detail.unwrap();
        assert_eq!(detail.in_basket, Some(2));

        let view = api.basket_view().unwrap();
        assert_eq!(view.basket_lines.len(), 1);
        assert_eq!(view.total_price.as_deref(), Some("219.90"));
    }

    #[test]
    fn clear_resets_the_owned_store() {
        let mut api = TrolleyApi::new(FixedCatalog::sample());
        api.add(3).unwrap();

        api.clear().unwrap();

        assert!(api.basket().is_empty());
    }
}
