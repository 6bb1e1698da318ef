use crate::basket::BasketStore;
use crate::catalog::ProductSource;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Put one more of `product_id` in the basket.
///
/// First-time adds fetch the product from the catalog; if the product is
/// already in the basket its quantity is incremented without touching the
/// catalog at all.
pub fn run<C: ProductSource>(
    catalog: &C,
    basket: &mut BasketStore,
    product_id: u64,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let existing = basket
        .entries()
        .iter()
        .find(|entry| entry.product.id == product_id)
        .map(|entry| (entry.product.title.clone(), entry.quantity));

    if let Some((title, quantity)) = existing {
        basket.increase(product_id);
        result.add_message(CmdMessage::success(format!(
            "{} x{} in the basket",
            title,
            quantity + 1
        )));
        return Ok(result);
    }

    let product = catalog.product_by_id(product_id)?;
    let title = product.title.clone();
    basket.add(product);
    result.add_message(CmdMessage::success(format!("Added {} to the basket", title)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixed::FixedCatalog;
    use crate::error::{Result, TrolleyError};
    use crate::model::Product;
    use std::cell::Cell;

    /// Counts catalog hits so tests can assert when the network is skipped.
    struct CountingCatalog {
        inner: FixedCatalog,
        lookups: Cell<usize>,
    }

    impl CountingCatalog {
        fn new() -> Self {
            Self {
                inner: FixedCatalog::sample(),
                lookups: Cell::new(0),
            }
        }
    }

    impl ProductSource for CountingCatalog {
        fn all_products(&self) -> Result<Vec<Product>> {
            self.inner.all_products()
        }

        fn product_by_id(&self, id: u64) -> Result<Product> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.product_by_id(id)
        }
    }

    #[test]
    fn first_add_fetches_and_creates_an_entry() {
        let catalog = CountingCatalog::new();
        let mut basket = BasketStore::new();

        run(&catalog, &mut basket, 2).unwrap();

        assert_eq!(basket.quantity_of(2), Some(1));
        assert_eq!(catalog.lookups.get(), 1);
    }

    #[test]
    fn repeat_add_increments_without_a_catalog_lookup() {
        let catalog = CountingCatalog::new();
        let mut basket = BasketStore::new();

        run(&catalog, &mut basket, 2).unwrap();
        run(&catalog, &mut basket, 2).unwrap();

        assert_eq!(basket.quantity_of(2), Some(2));
        assert_eq!(basket.entries().len(), 1);
        assert_eq!(catalog.lookups.get(), 1);
    }

    #[test]
    fn unknown_product_leaves_the_basket_untouched() {
        let catalog = CountingCatalog::new();
        let mut basket = BasketStore::new();

        let err = run(&catalog, &mut basket, 999).unwrap_err();

        assert!(matches!(err, TrolleyError::ProductNotFound(999)));
        assert!(basket.is_empty());
    }
}
