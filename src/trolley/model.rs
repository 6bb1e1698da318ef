use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate customer rating as the catalog reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: Decimal,
    pub count: u64,
}

/// One catalog record. Owned by the remote catalog; the basket only holds
/// copies and never changes the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

/// One (product, quantity) pairing in the basket.
///
/// Entries never carry a quantity below 1: decreasing a quantity-1 entry
/// removes it from the basket instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketEntry {
    pub product: Product,
    pub quantity: u32,
}

impl BasketEntry {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
