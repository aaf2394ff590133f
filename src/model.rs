use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSide {
    Call,
    Put,
}

/// One quoted contract for a single strike, side and expiration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionQuote {
    pub strike: f64,
    #[serde(default)]
    pub bid: f64,
    #[serde(default)]
    pub ask: f64,
    #[serde(default)]
    pub last_price: f64,
    #[serde(default)]
    pub volume: u64,
    #[serde(default)]
    pub open_interest: u64,
    #[serde(default)]
    pub implied_volatility: Option<f64>,
}

impl OptionQuote {
    /// Mid of bid/ask when both sides are quoted, last trade otherwise.
    pub fn premium(&self) -> f64 {
        if self.bid > 0.0 && self.ask > 0.0 {
            (self.bid + self.ask) / 2.0
        } else {
            self.last_price
        }
    }
}

/// Call and put tables for one expiration date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChainSlice {
    pub expiration: NaiveDate,
    pub calls: Vec<OptionQuote>,
    pub puts: Vec<OptionQuote>,
}

impl OptionChainSlice {
    pub fn is_usable(&self) -> bool {
        !self.calls.is_empty() && !self.puts.is_empty()
    }
}

/// Everything the pipeline needs for one ticker, frozen at retrieval time.
#[derive(Debug, Clone)]
pub struct TickerSnapshot {
    pub symbol: String,
    pub name: String,
    pub spot: f64,
    pub slice: OptionChainSlice,
    pub days_to_expiration: i64,
    /// Trailing daily closes, oldest first, up to roughly one year.
    pub closes: Vec<f64>,
}

/// Which fallback produced the at-the-money implied volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IvSource {
    AtmQuotes,
    RealizedVol,
    Default,
}

impl IvSource {
    pub fn as_str(self) -> &'static str {
        match self {
            IvSource::AtmQuotes => "atm_quotes",
            IvSource::RealizedVol => "realized_vol",
            IvSource::Default => "default",
        }
    }
}

/// Derived volatility metrics, full precision (fractions, not percent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilitySummary {
    pub implied_vol: f64,
    /// Percentile position within the trailing realized-vol range, [0, 100].
    pub iv_rank: f64,
    /// 25-delta put IV minus 25-delta call IV.
    pub skew: f64,
    pub put_call_ratio: f64,
    pub iv_source: IvSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "Income Generator")]
    IncomeGenerator,
    #[serde(rename = "Cheap Protection")]
    CheapProtection,
    Neutral,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::IncomeGenerator => "Income Generator",
            Strategy::CheapProtection => "Cheap Protection",
            Strategy::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyDecision {
    pub strategy: Strategy,
    pub rationale: &'static str,
}

/// One covered-call candidate; percentages pre-rounded for output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoveredCallRec {
    pub strike: f64,
    pub otm_percent: f64,
    pub premium: f64,
    pub option_yield: f64,
    pub annualized_yield: f64,
    pub upside_percent: f64,
    pub days_to_expiration: i64,
    pub iv: Option<f64>,
    pub volume: u64,
    pub open_interest: u64,
    pub recommended: bool,
}

/// One collar candidate (long put, short further-OTM call).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollarRec {
    pub put_strike: f64,
    pub call_strike: f64,
    pub put_otm_percent: f64,
    pub call_otm_percent: f64,
    pub put_premium: f64,
    pub call_premium: f64,
    pub net_cost: f64,
    pub net_cost_percent: f64,
    pub downside_protection: f64,
    pub upside_cap: f64,
    pub days_to_expiration: i64,
    pub put_iv: Option<f64>,
    pub call_iv: Option<f64>,
    pub recommended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recommendation {
    CoveredCall(CoveredCallRec),
    Collar(CollarRec),
}

impl Recommendation {
    pub fn is_recommended(&self) -> bool {
        match self {
            Recommendation::CoveredCall(rec) => rec.recommended,
            Recommendation::Collar(rec) => rec.recommended,
        }
    }
}

/// The per-ticker record emitted to the sink. Field names and rounding
/// match the canonical on-disk document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerResult {
    pub ticker: String,
    pub name: String,
    pub price: f64,
    /// At-the-money implied volatility, percent.
    pub iv: f64,
    pub iv_rank: f64,
    /// 25-delta skew, percentage points.
    pub skew: f64,
    pub put_call_ratio: f64,
    pub strategy: Strategy,
    pub rationale: String,
    pub expiration: NaiveDate,
    pub days_to_expiration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_recommendations: Option<Vec<Recommendation>>,
}

/// Output-boundary rounding; everything upstream stays full precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
