use anyhow::Result;

// Only part of the grafted modules is exercised here
#[allow(dead_code)]
#[path = "../models/mod.rs"]
mod models;

#[allow(dead_code)]
#[path = "../snapshot/mod.rs"]
mod snapshot;

use snapshot::{DEFAULT_SNAPSHOT_PATH, SnapshotLoader};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report lines
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    println!("Analyzing WooCommerce debug snapshot...\n");

    let snapshot = SnapshotLoader::load(DEFAULT_SNAPSHOT_PATH)?;

    if !snapshot.has_orders() {
        println!("Snapshot contains no orders");
        return Ok(());
    }

    let mut total_items = 0;
    let mut total_quantity: i64 = 0;

    println!("Number of orders in snapshot: {}", snapshot.order_count());

    for (index, order) in snapshot.debug_woocommerce_raw.iter().enumerate() {
        let items = order.line_items.len();
        let quantity: i64 = order.line_items.iter().filter_map(|i| i.quantity).sum();
        total_items += items;
        total_quantity += quantity;

        println!(
            "Order {}: id={}, {} line items, total quantity {}",
            index,
            order.id.map(|id| id.to_string()).unwrap_or_default(),
            items,
            quantity
        );

        // Cross-check the order total against the sum of line totals
        let line_total: f64 = order
            .line_items
            .iter()
            .filter_map(|i| i.total.as_deref())
            .filter_map(|t| t.parse::<f64>().ok())
            .sum();

        if let Some(order_total) = order.total.as_deref().and_then(|t| t.parse::<f64>().ok()) {
            if (order_total - line_total).abs() < 0.005 {
                println!("  ✅ Order total matches sum of line totals: {:.2}", order_total);
            } else {
                println!(
                    "  ⚠️  Order total ({:.2}) does not match sum of line totals ({:.2})",
                    order_total, line_total
                );
            }
        } else {
            println!("  ⚠️  Order total missing or non-numeric, skipping consistency check");
        }
    }

    println!("\n=== SUMMARY ===");
    println!("Total number of line items: {}", total_items);
    println!("Total quantity across all items: {}", total_quantity);

    Ok(())
}
