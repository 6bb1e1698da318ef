use crate::basket::BasketStore;
use crate::catalog::ProductSource;
use crate::commands::{CmdResult, ListedProduct};
use crate::error::Result;

pub fn run<C: ProductSource>(
    catalog: &C,
    basket: &BasketStore,
    product_id: u64,
) -> Result<CmdResult> {
    let product = catalog.product_by_id(product_id)?;
    let in_basket = basket.quantity_of(product.id);

    Ok(CmdResult::default().with_detail(ListedProduct { product, in_basket }))
}
