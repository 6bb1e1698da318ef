use crate::basket::BasketStore;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(basket: &mut BasketStore) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if basket.is_empty() {
        result.add_message(CmdMessage::info("Basket is already empty."));
    } else {
        basket.reset();
        result.add_message(CmdMessage::success("Basket cleared."));
    }

    Ok(result)
}
