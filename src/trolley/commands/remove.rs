use crate::basket::BasketStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(basket: &mut BasketStore, product_id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let title = basket
        .entries()
        .iter()
        .find(|entry| entry.product.id == product_id)
        .map(|entry| entry.product.title.clone());

    match title {
        Some(title) => {
            basket.remove(product_id);
            result.add_message(CmdMessage::success(format!(
                "Removed {} from the basket",
                title
            )));
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Product {} is not in the basket",
                product_id
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixed::FixedCatalog;
    use crate::catalog::ProductSource;
    use crate::commands::MessageLevel;

    #[test]
    fn removes_an_entry_regardless_of_quantity() {
        let catalog = FixedCatalog::sample();
        let mut basket = BasketStore::new();
        basket.add(catalog.product_by_id(1).unwrap());
        basket.increase(1);
        basket.increase(1);

        run(&mut basket, 1).unwrap();

        assert!(basket.is_empty());
    }

    #[test]
    fn absent_id_warns_and_changes_nothing() {
        let catalog = FixedCatalog::sample();
        let mut basket = BasketStore::new();
        basket.add(catalog.product_by_id(1).unwrap());

        let result = run(&mut basket, 99).unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert_eq!(basket.quantity_of(1), Some(1));
    }
}
