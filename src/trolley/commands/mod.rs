use crate::model::Product;

pub mod add;
pub mod basket_view;
pub mod browse;
pub mod clear;
pub mod quantity;
pub mod remove;
pub mod show;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A catalog product annotated with its quantity in the basket, if any.
#[derive(Debug, Clone)]
pub struct ListedProduct {
    pub product: Product,
    pub in_basket: Option<u32>,
}

/// One rendered basket row: the entry plus its formatted line total.
#[derive(Debug, Clone)]
pub struct BasketLine {
    pub product: Product,
    pub quantity: u32,
    pub line_total: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_products: Vec<ListedProduct>,
    pub detail: Option<ListedProduct>,
    pub basket_lines: Vec<BasketLine>,
    pub total_price: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<ListedProduct>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_detail(mut self, detail: ListedProduct) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_basket_lines(mut self, lines: Vec<BasketLine>) -> Self {
        self.basket_lines = lines;
        self
    }

    pub fn with_total_price(mut self, total: String) -> Self {
        self.total_price = Some(total);
        self
    }
}
