use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrolleyError {
    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TrolleyError>;
