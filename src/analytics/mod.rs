pub mod delta;
pub mod expiry;
pub mod recommend;
pub mod strategy;
pub mod volatility;

use chrono::NaiveDate;
use serde_json::json;
use thiserror::Error;

use crate::logging;
use crate::model::{
    round1, round2, Recommendation, Strategy, TickerResult, TickerSnapshot, VolatilitySummary,
};
use crate::source::MarketDataSource;

/// Why one ticker was dropped from a scan. Always local: the scan logs the
/// reason and moves on to the next symbol.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no market data available for {symbol}")]
    MissingData { symbol: String },
    #[error("option chain for {symbol} at {expiration} is missing a side")]
    EmptyChain {
        symbol: String,
        expiration: NaiveDate,
    },
    #[error("no usable expiration for {symbol}")]
    InvalidExpiration { symbol: String },
    #[error("source failure for {symbol}: {source}")]
    Source {
        symbol: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Assemble the frozen per-ticker snapshot: spot, the chain slice at the
/// selected expiration, and trailing closes.
pub fn snapshot_for(
    source: &dyn MarketDataSource,
    symbol: &str,
    name: &str,
    today: NaiveDate,
) -> Result<TickerSnapshot, AnalysisError> {
    let overview = source
        .overview(symbol)
        .map_err(|err| AnalysisError::Source {
            symbol: symbol.to_string(),
            source: err,
        })?
        .ok_or_else(|| AnalysisError::MissingData {
            symbol: symbol.to_string(),
        })?;

    if overview.spot <= 0.0 || overview.expirations.is_empty() {
        return Err(AnalysisError::MissingData {
            symbol: symbol.to_string(),
        });
    }

    let selected = expiry::select(&overview.expirations, today)
        .filter(|selected| selected.days_out > 0)
        .ok_or_else(|| AnalysisError::InvalidExpiration {
            symbol: symbol.to_string(),
        })?;

    let slice = source
        .chain(symbol, selected.date)
        .map_err(|err| AnalysisError::Source {
            symbol: symbol.to_string(),
            source: err,
        })?
        .filter(|slice| slice.is_usable())
        .ok_or_else(|| AnalysisError::EmptyChain {
            symbol: symbol.to_string(),
            expiration: selected.date,
        })?;

    Ok(TickerSnapshot {
        symbol: symbol.to_string(),
        name: name.to_string(),
        spot: overview.spot,
        slice,
        days_to_expiration: selected.days_out,
        closes: overview.closes,
    })
}

/// The pure per-ticker pipeline: summary, classification, recommendations.
/// Rounding happens exactly here, at the output boundary.
pub fn analyze(snapshot: &TickerSnapshot) -> TickerResult {
    let t_years = snapshot.days_to_expiration as f64 / 365.0;
    let summary = volatility::summarize(&snapshot.slice, snapshot.spot, &snapshot.closes, t_years);
    let decision = strategy::classify(summary.iv_rank, summary.skew * 100.0);

    let recommendations = match decision.strategy {
        Strategy::IncomeGenerator => recommend::covered_calls(
            &snapshot.slice.calls,
            snapshot.spot,
            snapshot.days_to_expiration,
        )
        .into_iter()
        .map(Recommendation::CoveredCall)
        .collect::<Vec<_>>(),
        Strategy::CheapProtection => recommend::collars(
            &snapshot.slice.calls,
            &snapshot.slice.puts,
            snapshot.spot,
            snapshot.days_to_expiration,
        )
        .into_iter()
        .map(Recommendation::Collar)
        .collect::<Vec<_>>(),
        Strategy::Neutral => Vec::new(),
    };

    log_summary(snapshot, &summary, decision.strategy);

    TickerResult {
        ticker: snapshot.symbol.clone(),
        name: snapshot.name.clone(),
        price: round2(snapshot.spot),
        iv: round2(summary.implied_vol * 100.0),
        iv_rank: round1(summary.iv_rank),
        skew: round2(summary.skew * 100.0),
        put_call_ratio: round2(summary.put_call_ratio),
        strategy: decision.strategy,
        rationale: decision.rationale.to_string(),
        expiration: snapshot.slice.expiration,
        days_to_expiration: snapshot.days_to_expiration,
        option_recommendations: if recommendations.is_empty() {
            None
        } else {
            Some(recommendations)
        },
    }
}

fn log_summary(snapshot: &TickerSnapshot, summary: &VolatilitySummary, strategy: Strategy) {
    logging::info(
        "ticker.analyzed",
        "Derived volatility summary",
        json!({
            "symbol": snapshot.symbol,
            "iv_source": summary.iv_source.as_str(),
            "iv_rank": round1(summary.iv_rank),
            "strategy": strategy.to_string(),
        }),
    );
}

/// Scan a universe of (symbol, display name) pairs. Per-ticker failures
/// are logged and skipped; the result set is ordered by IV rank
/// descending, with universe order breaking ties.
pub fn scan(
    source: &dyn MarketDataSource,
    universe: &[(&str, &str)],
    today: NaiveDate,
) -> Vec<TickerResult> {
    logging::info(
        "scan.start",
        "Scanning option chains",
        json!({ "tickers": universe.len(), "as_of": today.to_string() }),
    );

    let mut results = Vec::with_capacity(universe.len());
    for (symbol, name) in universe {
        match snapshot_for(source, symbol, name, today) {
            Ok(snapshot) => results.push(analyze(&snapshot)),
            Err(err) => logging::warn(
                "ticker.skipped",
                "Ticker dropped from scan",
                json!({ "symbol": symbol, "reason": err.to_string() }),
            ),
        }
    }

    results.sort_by(|a, b| {
        b.iv_rank
            .partial_cmp(&a.iv_rank)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    logging::info(
        "scan.complete",
        "Scan finished",
        json!({ "produced": results.len(), "requested": universe.len() }),
    );

    results
}
