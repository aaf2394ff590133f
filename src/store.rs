use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::logging;
use crate::model::TickerResult;

/// Persist the ordered result set as the canonical pretty-printed JSON
/// array, creating parent directories as needed.
pub fn write_results(path: &Path, results: &[TickerResult]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output directory {parent:?}"))?;
        }
    }

    let payload = serde_json::to_string_pretty(results).context("failed to serialise results")?;
    fs::write(path, payload).with_context(|| format!("failed to write results to {path:?}"))?;

    logging::info(
        "store.write",
        "Results written",
        json!({ "path": path.display().to_string(), "tickers": results.len() }),
    );
    Ok(())
}

pub fn read_results(path: &Path) -> Result<Vec<TickerResult>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read results from {path:?}"))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse results in {path:?}"))
}
