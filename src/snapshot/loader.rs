use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::models::OrderSnapshot;

/// Default location of the cached order-lookup response. The upstream
/// debugging endpoint writes its payload here.
pub const DEFAULT_SNAPSHOT_PATH: &str = "/tmp/response.json";

pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Reads and parses a cached snapshot. Both I/O and parse failures are
    /// fatal to the run; missing or partial order data is not.
    pub fn load(path: impl AsRef<Path>) -> Result<OrderSnapshot> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;

        let snapshot: OrderSnapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot JSON: {}", path.display()))?;

        info!(
            "Loaded snapshot from {} ({} bytes, {} orders)",
            path.display(),
            content.len(),
            snapshot.order_count()
        );

        Ok(snapshot)
    }
}
