use crate::catalog::ProductSource;
use crate::error::{Result, TrolleyError};
use crate::model::{Product, Rating};
use rust_decimal::Decimal;

/// In-memory catalog backend.
///
/// Used by tests in place of the network, and by the `--offline` flag so the
/// demo works without connectivity.
#[derive(Debug, Clone, Default)]
pub struct FixedCatalog {
    products: Vec<Product>,
}

impl FixedCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// A small bundled catalog in the shape the remote API serves.
    pub fn sample() -> Self {
        let product = |id: u64, title: &str, price: Decimal, category: &str| Product {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: category.to_string(),
            image: format!("https://example.test/img/{}.png", id),
            rating: Rating {
                rate: Decimal::new(41, 1),
                count: 120,
            },
        };

        Self::new(vec![
            product(
                1,
                "Fjallraven Foldsack No. 1 Backpack",
                Decimal::new(10995, 2),
                "men's clothing",
            ),
            product(
                2,
                "Mens Casual Premium Slim Fit T-Shirt",
                Decimal::new(2230, 2),
                "men's clothing",
            ),
            product(
                3,
                "Mens Cotton Jacket",
                Decimal::new(5599, 2),
                "men's clothing",
            ),
            product(
                9,
                "WD 2TB Elements Portable External Hard Drive",
                Decimal::new(6400, 2),
                "electronics",
            ),
            product(
                14,
                "Acer SB220Q 21.5 inch Full HD Monitor",
                Decimal::new(59999, 2),
                "electronics",
            ),
        ])
    }
}

impl ProductSource for FixedCatalog {
    fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn product_by_id(&self, id: u64) -> Result<Product> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(TrolleyError::ProductNotFound(id))
    }
}
