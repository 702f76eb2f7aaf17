//! Console formatting for product listings and reports.
//!
//! Pure string building over public accessors; no domain logic.

use stockroom_core::Money;
use stockroom_products::Product;
use stockroom_reports::InventoryReport;

const NAME_WIDTH: usize = 25;
const DESC_WIDTH: usize = 35;
const CATEGORY_WIDTH: usize = 12;

/// Column-aligned table of products with a summary footer.
pub fn product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "\n(no products to show)".to_string();
    }

    let header = format!(
        "| {:>4} | {:<NAME_WIDTH$} | {:<DESC_WIDTH$} | {:<CATEGORY_WIDTH$} | {:>10} | {:>5} | {:>12} |",
        "ID", "Name", "Description", "Category", "Price", "Stock", "Total Value",
    );
    let bar = "-".repeat(header.len());

    let mut out = format!("\n{bar}\n{header}\n{bar}\n");
    for product in products {
        out.push_str(&format!(
            "| {:>4} | {:<NAME_WIDTH$} | {:<DESC_WIDTH$} | {:<CATEGORY_WIDTH$} | {:>10} | {:>5} | {:>12} |\n",
            product.id().to_string(),
            truncate(product.name(), NAME_WIDTH),
            truncate(product.description(), DESC_WIDTH),
            truncate(product.category().label(), CATEGORY_WIDTH),
            product.price().to_string(),
            product.quantity(),
            product.total_value().to_string(),
        ));
    }
    out.push_str(&bar);

    let total_stock: i64 = products.iter().map(Product::quantity).sum();
    let total_value: Money = products.iter().map(Product::total_value).sum();
    out.push_str(&format!(
        "\nSUMMARY: {} product(s) | total stock: {} units | total value: {}\n",
        products.len(),
        total_stock,
        total_value,
    ));
    out
}

/// Human-readable rendering of a full inventory report.
pub fn report(report: &InventoryReport) -> String {
    let bar = "=".repeat(60);
    let mut out = format!("\n{bar}\n{:^60}\n{bar}\n", "INVENTORY REPORT");
    out.push_str(&format!(
        "Generated: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Total products: {}\n", report.total_products));
    out.push_str(&format!("Total stock items: {}\n", report.total_stock_items));
    out.push_str(&format!("Total inventory value: {}\n", report.total_value));

    if let Some(product) = &report.most_expensive {
        out.push_str(&format!(
            "\nMost expensive: {} ({})",
            product.name(),
            product.price()
        ));
    }
    if let Some(product) = &report.cheapest {
        out.push_str(&format!(
            "\nCheapest: {} ({})\n",
            product.name(),
            product.price()
        ));
    }

    out.push_str(&format!("\nLow stock products: ({})\n", report.low_stock.len()));
    for product in &report.low_stock {
        out.push_str(&format!("  {product}\n"));
    }
    out.push_str(&bar);
    out.push('\n');
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
