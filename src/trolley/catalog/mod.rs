//! # Catalog layer
//!
//! The product catalog is read-only and lives on the other side of an HTTP
//! API. This module abstracts it behind the [`ProductSource`] trait so the
//! rest of the crate never knows where products come from.
//!
//! ## Implementations
//!
//! - [`http::HttpCatalog`]: production backend against the remote store API
//!   (`/products` and `/products/{id}`)
//! - [`fixed::FixedCatalog`]: in-memory backend for tests and for the
//!   `--offline` demo mode, seeded with a small bundled catalog
//!
//! Catalog failures surface as [`TrolleyError`](crate::error::TrolleyError)
//! values and are rendered as error messages by the CLI; they never touch
//! basket state.

use crate::error::Result;
use crate::model::Product;

pub mod fixed;
pub mod http;

/// Abstract interface to the remote product catalog.
pub trait ProductSource {
    /// Fetch the full product list.
    fn all_products(&self) -> Result<Vec<Product>>;

    /// Fetch a single product by id.
    ///
    /// Returns [`TrolleyError::ProductNotFound`](crate::error::TrolleyError)
    /// when the catalog has no record for `id`.
    fn product_by_id(&self, id: u64) -> Result<Product>;
}
