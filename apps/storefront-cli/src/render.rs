//! # Console Rendering
//!
//! Turns core state into text for the terminal. Nothing here reads input or
//! mutates the session.
//!
//! ```text
//! ╭────┬─────────────────────┬───────────┬───────┬──────────╮
//! │ ID │ Product             │     Price │ Stock │ Status   │
//! ├────┼─────────────────────┼───────────┼───────┼──────────┤
//! │ 1  │ Mechanical Keyboard │ S/ 149.90 │    10 │          │
//! │ 3  │ 24" FHD Monitor     │ S/ 699.00 │     0 │ SOLD OUT │
//! ╰────┴─────────────────────┴───────────┴───────┴──────────╯
//! ```

use std::ops::Range;

use chrono::Local;
use storefront_core::{Cart, Catalog, Receipt, SalesLog};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Style},
    Table,
};

use crate::config::StoreConfig;

/// Marker shown next to products with no stock left.
pub const SOLD_OUT: &str = "SOLD OUT";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds the table and right-aligns the `numeric` columns.
fn finish(builder: Builder, numeric: Range<usize>) -> String {
    let mut table: Table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(numeric), Alignment::right());
    table.to_string()
}

/// Every product with price, stock and a sold-out marker.
pub fn products_table(catalog: &Catalog, config: &StoreConfig) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Product", "Price", "Stock", "Status"]);

    for product in catalog.list() {
        builder.push_record([
            product.id().to_string(),
            product.name().to_string(),
            config.format_money(product.price()),
            product.stock().to_string(),
            if product.is_sold_out() { SOLD_OUT.to_string() } else { String::new() },
        ]);
    }

    finish(builder, 2..4)
}

/// Cart lines with subtotals, followed by a total row.
pub fn cart_table(cart: &Cart, config: &StoreConfig) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Product", "Qty", "Unit price", "Subtotal"]);

    for line in cart.items() {
        builder.push_record([
            line.product_id().to_string(),
            line.name().to_string(),
            line.quantity().to_string(),
            config.format_money(line.unit_price()),
            config.format_money(line.subtotal()),
        ]);
    }

    builder.push_record([
        String::new(),
        "TOTAL".to_string(),
        cart.total_quantity().to_string(),
        String::new(),
        config.format_money(cart.total()),
    ]);

    finish(builder, 2..5)
}

/// The printed proof of purchase, in local time.
pub fn receipt(receipt: &Receipt, config: &StoreConfig) -> String {
    let date = receipt.created_at().with_timezone(&Local).format(DATE_FORMAT);

    let header = [
        format!("RECEIPT #{} - {}", receipt.number(), config.store.name),
        format!("Receipt id: {}", receipt.id()),
        format!("Date: {}", date),
    ];
    let lines = receipt.lines().iter().map(|line| {
        format!(
            "- {} x{} at {}",
            line.name,
            line.quantity,
            config.format_money(line.unit_price)
        )
    });
    let total = format!("TOTAL: {}", config.format_money(receipt.total()));

    header
        .into_iter()
        .chain(lines)
        .chain(std::iter::once(total))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Receipts recorded this session with revenue and units sold.
pub fn sales_report(sales: &SalesLog, config: &StoreConfig) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "Date", "Lines", "Units", "Total"]);

    for receipt in sales.receipts() {
        builder.push_record([
            receipt.number().to_string(),
            receipt.created_at().with_timezone(&Local).format(DATE_FORMAT).to_string(),
            receipt.lines().len().to_string(),
            receipt.total_quantity().to_string(),
            config.format_money(receipt.total()),
        ]);
    }

    format!(
        "{}\nSales: {}  Units sold: {}  Revenue: {}",
        finish(builder, 2..5),
        sales.len(),
        sales.units_sold(),
        config.format_money(sales.revenue())
    )
}
