use crate::commands::{BasketLine, CmdMessage, ListedProduct, MessageLevel};
use crate::model::BasketEntry;
use colored::Colorize;
use rust_decimal::Decimal;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 44;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// The badge re-printed after every basket change, standing in for the
/// original header indicator.
pub fn print_badge(entries: &[BasketEntry], currency: &str) {
    if entries.is_empty() {
        println!("{}", "  basket: empty".dimmed());
        return;
    }

    let total = entries
        .iter()
        .fold(Decimal::ZERO, |acc, entry| acc + entry.line_total());
    let noun = if entries.len() == 1 { "item" } else { "items" };
    println!(
        "{}",
        format!(
            "  basket: {} {} | {}{:.2}",
            entries.len(),
            noun,
            currency,
            total.round_dp(2)
        )
        .dimmed()
    );
}

pub fn print_products(products: &[ListedProduct], currency: &str) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    for listed in products {
        let price = format!("{}{:.2}", currency, listed.product.price.round_dp(2));
        let in_basket = match listed.in_basket {
            Some(quantity) => format!("  x{}", quantity).yellow().to_string(),
            None => String::new(),
        };
        // Width formatting happens before coloring so ANSI codes don't
        // throw the columns off.
        let id_col = format!("{:>4}.", listed.product.id);
        println!(
            "{} {} {:>10}{}",
            id_col.yellow(),
            fit_width(&listed.product.title, TITLE_WIDTH),
            price,
            in_basket
        );
    }
}

pub fn print_detail(detail: &ListedProduct, currency: &str) {
    let product = &detail.product;
    println!(
        "{} {}",
        product.id.to_string().yellow(),
        product.title.bold()
    );
    println!("--------------------------------");
    println!("Price:    {}{:.2}", currency, product.price.round_dp(2));
    println!("Category: {}", product.category);
    println!(
        "Rating:   {} ({} ratings)",
        product.rating.rate, product.rating.count
    );
    if !product.description.is_empty() {
        println!("\n{}", product.description);
    }
    match detail.in_basket {
        Some(quantity) => println!("\n{}", format!("In basket: x{}", quantity).green()),
        None => println!("\n{}", "Not in basket".dimmed()),
    }
}

pub fn print_basket(lines: &[BasketLine], total: Option<&str>, currency: &str) {
    for line in lines {
        let id_col = format!("{:>4}.", line.product.id);
        let qty_col = format!("{:>4}", format!("x{}", line.quantity));
        println!(
            "{} {} {} {:>10}",
            id_col.yellow(),
            fit_width(&line.product.title, TITLE_WIDTH),
            qty_col.yellow(),
            format!("{}{}", currency, line.line_total)
        );
    }
    if let Some(total) = total {
        let label = format!("Total: {}{}", currency, total);
        let pad = (TITLE_WIDTH + 22).saturating_sub(label.width());
        println!("{}{}", " ".repeat(pad), label.bold());
    }
}

/// Truncate to `width` display columns (with an ellipsis) or pad with spaces.
fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        let pad = width - text.width();
        return format!("{}{}", text, " ".repeat(pad));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    let pad = width.saturating_sub(used + 1);
    format!("{}…{}", out, " ".repeat(pad))
}
