use crate::basket::BasketStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::quantity::QuantityUpdate;

pub fn increase(basket: &mut BasketStore, product_id: u64) -> Result<CmdResult> {
    adjust(basket, product_id, QuantityUpdate::Increase)
}

pub fn decrease(basket: &mut BasketStore, product_id: u64) -> Result<CmdResult> {
    adjust(basket, product_id, QuantityUpdate::Decrease)
}

fn adjust(basket: &mut BasketStore, product_id: u64, update: QuantityUpdate) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let entry = basket
        .entries()
        .iter()
        .find(|entry| entry.product.id == product_id);
    let Some((title, quantity)) = entry.map(|e| (e.product.title.clone(), e.quantity)) else {
        result.add_message(CmdMessage::warning(format!(
            "Product {} is not in the basket",
            product_id
        )));
        return Ok(result);
    };

    match update {
        QuantityUpdate::Increase => {
            basket.increase(product_id);
            result.add_message(CmdMessage::success(format!(
                "{} x{} in the basket",
                title,
                quantity + 1
            )));
        }
        QuantityUpdate::Decrease => {
            basket.decrease(product_id);
            if quantity == 1 {
                result.add_message(CmdMessage::success(format!(
                    "Removed {} from the basket",
                    title
                )));
            } else {
                result.add_message(CmdMessage::success(format!(
                    "{} x{} in the basket",
                    title,
                    quantity - 1
                )));
            }
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

    fn basket_with(id: u64) -> BasketStore {
        let catalog = FixedCatalog::sample();
        let mut basket = BasketStore::new();
        basket.add(catalog.product_by_id(id).unwrap());
        basket
    }

    #[test]
    fn increase_bumps_the_quantity() {
        let mut basket = basket_with(1);

        increase(&mut basket, 1).unwrap();

        assert_eq!(basket.quantity_of(1), Some(2));
    }

    #[test]
    fn decrease_at_quantity_one_reports_the_removal() {
        let mut basket = basket_with(1);

        let result = decrease(&mut basket, 1).unwrap();

        assert!(basket.is_empty());
        assert!(result.messages[0].content.starts_with("Removed"));
    }

    #[test]
    fn absent_id_warns_without_touching_the_basket() {
        let mut basket = basket_with(1);

        let result = increase(&mut basket, 42).unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert_eq!(basket.quantity_of(1), Some(1));
        assert_eq!(basket.quantity_of(42), None);
    }
}
