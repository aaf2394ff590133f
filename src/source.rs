use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{OptionChainSlice, OptionQuote};

/// First-phase payload for a symbol: enough to pick an expiration.
#[derive(Debug, Clone)]
pub struct SymbolOverview {
    pub spot: f64,
    /// Expiration dates as `YYYY-MM-DD` strings, in venue order.
    pub expirations: Vec<String>,
    /// Trailing daily closes, oldest first.
    pub closes: Vec<f64>,
}

/// Input collaborator. Two-phase so the core chooses the expiration before
/// the chain slice is materialized. `Ok(None)` means the symbol has no
/// data; `Err` means the source itself failed.
pub trait MarketDataSource {
    fn overview(&self, symbol: &str) -> Result<Option<SymbolOverview>>;
    fn chain(&self, symbol: &str, expiration: NaiveDate) -> Result<Option<OptionChainSlice>>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChainTables {
    #[serde(default)]
    calls: Vec<OptionQuote>,
    #[serde(default)]
    puts: Vec<OptionQuote>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SymbolSnapshot {
    symbol: String,
    spot_price: f64,
    #[serde(default)]
    expirations: Vec<String>,
    /// Per-expiration call/put tables, keyed by `YYYY-MM-DD`.
    #[serde(default)]
    chains: HashMap<String, ChainTables>,
    #[serde(default)]
    daily_closes: Vec<f64>,
}

/// Offline snapshot document standing in for a live market-data fetcher.
/// One JSON array with spot, expirations, chains and closes per symbol.
pub struct SnapshotFile {
    symbols: HashMap<String, SymbolSnapshot>,
}

impl SnapshotFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot document {path:?}"))?;
        Self::from_json(&raw).with_context(|| format!("failed to parse snapshot document {path:?}"))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let snapshots: Vec<SymbolSnapshot> = serde_json::from_str(raw)?;
        let symbols = snapshots
            .into_iter()
            .map(|snapshot| (snapshot.symbol.clone(), snapshot))
            .collect();
        Ok(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl MarketDataSource for SnapshotFile {
    fn overview(&self, symbol: &str) -> Result<Option<SymbolOverview>> {
        Ok(self.symbols.get(symbol).map(|snapshot| SymbolOverview {
            spot: snapshot.spot_price,
            expirations: snapshot.expirations.clone(),
            closes: snapshot.daily_closes.clone(),
        }))
    }

    fn chain(&self, symbol: &str, expiration: NaiveDate) -> Result<Option<OptionChainSlice>> {
        let key = expiration.format("%Y-%m-%d").to_string();
        Ok(self
            .symbols
            .get(symbol)
            .and_then(|snapshot| snapshot.chains.get(&key))
            .map(|tables| OptionChainSlice {
                expiration,
                calls: tables.calls.clone(),
                puts: tables.puts.clone(),
            }))
    }
}
