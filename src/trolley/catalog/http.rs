use crate::catalog::ProductSource;
use crate::error::{Result, TrolleyError};
use crate::model::Product;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Production catalog backend talking to the remote store API.
#[derive(Debug)]
pub struct HttpCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ProductSource for HttpCatalog {
    fn all_products(&self) -> Result<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        let products = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .json::<Vec<Product>>()?;
        Ok(products)
    }

    fn product_by_id(&self, id: u64) -> Result<Product> {
        let url = format!("{}/products/{}", self.base_url, id);
        let body = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .text()?;

        // The store API answers unknown ids with 200 and an empty (or null)
        // body rather than a 404.
        let body = body.trim();
        if body.is_empty() || body == "null" {
            return Err(TrolleyError::ProductNotFound(id));
        }
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let catalog = HttpCatalog::new("https://example.test/").unwrap();
        assert_eq!(catalog.base_url(), "https://example.test");
    }
}
