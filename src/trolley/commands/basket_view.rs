use crate::basket::BasketStore;
use crate::commands::{BasketLine, CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(basket: &BasketStore) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if basket.is_empty() {
        result.add_message(CmdMessage::info("Your basket is empty."));
        return Ok(result);
    }

    let lines = basket
        .entries()
        .iter()
        .map(|entry| BasketLine {
            product: entry.product.clone(),
            quantity: entry.quantity,
            line_total: format!("{:.2}", entry.line_total().round_dp(2)),
        })
        .collect();

    Ok(result
        .with_basket_lines(lines)
        .with_total_price(basket.total_price_display()))
}
