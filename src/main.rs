use anyhow::Result;
use report::{NO_DATA_MESSAGE, OrderReport};
use snapshot::{DEFAULT_SNAPSHOT_PATH, SnapshotLoader};
use tracing::{info, warn};
use tracing_subscriber;

mod models;
mod report;
mod snapshot;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report lines
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    info!("Reading WooCommerce debug snapshot from {}", DEFAULT_SNAPSHOT_PATH);

    let snapshot = SnapshotLoader::load(DEFAULT_SNAPSHOT_PATH)?;

    if snapshot.order_count() > 1 {
        warn!(
            "Snapshot contains {} orders; only the first is reported",
            snapshot.order_count()
        );
    }

    print!("{}", render_output(&snapshot));

    if let Some(order) = snapshot.first_order() {
        info!(
            "Report complete: {} line items, {} order meta entries",
            order.line_items.len(),
            order.meta_data.len()
        );
    }

    Ok(())
}

/// Everything this process writes to stdout: either the single no-data line
/// or the rendered report for the first order.
fn render_output(snapshot: &models::OrderSnapshot) -> String {
    match snapshot.first_order() {
        Some(order) => OrderReport::new().render(order),
        None => format!("{}\n", NO_DATA_MESSAGE),
    }
}
