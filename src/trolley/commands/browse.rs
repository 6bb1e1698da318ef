use crate::basket::BasketStore;
use crate::catalog::ProductSource;
use crate::commands::{CmdResult, ListedProduct};
use crate::error::Result;

pub fn run<C: ProductSource>(catalog: &C, basket: &BasketStore) -> Result<CmdResult> {
    let products = catalog.all_products()?;
    let listed = products
        .into_iter()
        .map(|product| {
            let in_basket = basket.quantity_of(product.id);
            ListedProduct { product, in_basket }
        })
        .collect();

    Ok(CmdResult::default().with_listed_products(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixed::FixedCatalog;

    #[test]
    fn lists_every_catalog_product() {
        let catalog = FixedCatalog::sample();
        let basket = BasketStore::new();

        let result = run(&catalog, &basket).unwrap();
        assert_eq!(result.listed_products.len(), 5);
        assert!(result.listed_products.iter().all(|p| p.in_basket.is_none()));
    }

    #[test]
    fn annotates_products_already_in_the_basket() {
        let catalog = FixedCatalog::sample();
        let mut basket = BasketStore::new();
        basket.add(catalog.product_by_id(1).unwrap());
        basket.increase(1);

        let result = run(&catalog, &basket).unwrap();
        let listed = result
            .listed_products
            .iter()
            .find(|p| p.product.id == 1)
            .unwrap();
        assert_eq!(listed.in_basket, Some(2));
    }
}
