use crate::analytics::delta;
use crate::constants::{
    CALL_SKEW_FALLBACK_FACTOR, DEFAULT_IMPLIED_VOL, IV_RANK_BASELINE_VOL, MIN_CLOSES_FOR_RANK,
    PUT_SKEW_FALLBACK_FACTOR, REALIZED_VOL_RETURNS, ROLLING_VOL_WINDOW, SKEW_TARGET_DELTA,
    TRADING_DAYS_PER_YEAR,
};
use crate::model::{IvSource, OptionChainSlice, OptionQuote, OptionSide, VolatilitySummary};

/// Derive the full volatility summary for one ticker. Fallbacks follow a
/// fixed order; no step here can fail the pipeline.
pub fn summarize(
    slice: &OptionChainSlice,
    spot: f64,
    closes: &[f64],
    t_years: f64,
) -> VolatilitySummary {
    let (implied_vol, iv_source) = atm_implied_vol(slice, spot, closes);
    VolatilitySummary {
        implied_vol,
        iv_rank: iv_rank(implied_vol, closes),
        skew: skew(slice, spot, implied_vol, t_years),
        put_call_ratio: put_call_ratio(slice),
        iv_source,
    }
}

/// At-the-money IV via the ordered fallback chain: quote average, then
/// trailing realized vol, then the 30% constant.
pub fn atm_implied_vol(slice: &OptionChainSlice, spot: f64, closes: &[f64]) -> (f64, IvSource) {
    if let Some(iv) = atm_quote_iv(slice, spot) {
        return (iv, IvSource::AtmQuotes);
    }
    if let Some(vol) = realized_vol(closes, REALIZED_VOL_RETURNS) {
        return (vol, IvSource::RealizedVol);
    }
    (DEFAULT_IMPLIED_VOL, IvSource::Default)
}

/// Average IV of the call and put nearest the spot; `None` unless both
/// carry an implied volatility.
pub fn atm_quote_iv(slice: &OptionChainSlice, spot: f64) -> Option<f64> {
    let call_iv = nearest_strike(&slice.calls, spot)?.implied_volatility?;
    let put_iv = nearest_strike(&slice.puts, spot)?.implied_volatility?;
    Some((call_iv + put_iv) / 2.0)
}

fn nearest_strike(quotes: &[OptionQuote], target: f64) -> Option<&OptionQuote> {
    let mut best: Option<&OptionQuote> = None;
    let mut best_diff = f64::INFINITY;
    for quote in quotes {
        let diff = (quote.strike - target).abs();
        if diff < best_diff {
            best_diff = diff;
            best = Some(quote);
        }
    }
    best
}

/// Annualized sample standard deviation of the trailing `max_returns`
/// daily percentage returns. `None` without at least two usable returns.
pub fn realized_vol(closes: &[f64], max_returns: usize) -> Option<f64> {
    let returns = daily_returns(closes);
    let tail = if returns.len() > max_returns {
        &returns[returns.len() - max_returns..]
    } else {
        &returns[..]
    };
    sample_std_dev(tail).map(|sd| sd * TRADING_DAYS_PER_YEAR.sqrt())
}

fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .filter(|pair| pair[0] > 0.0)
        .map(|pair| pair[1] / pair[0] - 1.0)
        .collect()
}

fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}

/// 25-delta put IV minus 25-delta call IV (fraction units). Legs that do
/// not resolve are approximated off the ATM level.
pub fn skew(slice: &OptionChainSlice, spot: f64, atm_iv: f64, t_years: f64) -> f64 {
    let put_iv = delta::iv_at_target_delta(
        &slice.puts,
        spot,
        SKEW_TARGET_DELTA,
        OptionSide::Put,
        t_years,
    )
    .unwrap_or(atm_iv * PUT_SKEW_FALLBACK_FACTOR);
    let call_iv = delta::iv_at_target_delta(
        &slice.calls,
        spot,
        SKEW_TARGET_DELTA,
        OptionSide::Call,
        t_years,
    )
    .unwrap_or(atm_iv * CALL_SKEW_FALLBACK_FACTOR);
    put_iv - call_iv
}

/// Volume-weighted put/call ratio; 1.0 when no call volume traded.
pub fn put_call_ratio(slice: &OptionChainSlice) -> f64 {
    let put_volume: u64 = slice.puts.iter().map(|q| q.volume).sum();
    let call_volume: u64 = slice.calls.iter().map(|q| q.volume).sum();
    if call_volume > 0 {
        put_volume as f64 / call_volume as f64
    } else {
        1.0
    }
}

/// Rolling 30-day annualized realized-vol series over the full history.
/// One point per complete window, oldest first.
pub fn rolling_vol_series(closes: &[f64], window: usize) -> Vec<f64> {
    let returns = daily_returns(closes);
    if returns.len() < window {
        return Vec::new();
    }
    returns
        .windows(window)
        .filter_map(sample_std_dev)
        .map(|sd| sd * TRADING_DAYS_PER_YEAR.sqrt())
        .collect()
}

/// Percentile of the current IV within the trailing realized-vol range,
/// clamped to [0, 100]. Degenerate and missing histories fall back to
/// coarse estimates centered on 50.
pub fn iv_rank(current_iv: f64, closes: &[f64]) -> f64 {
    if closes.len() >= MIN_CLOSES_FOR_RANK {
        let series = rolling_vol_series(closes, ROLLING_VOL_WINDOW);
        if !series.is_empty() {
            let min = series.iter().copied().fold(f64::INFINITY, f64::min);
            let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if max > min {
                return ((current_iv - min) / (max - min) * 100.0).clamp(0.0, 100.0);
            }
            let mean = series.iter().sum::<f64>() / series.len() as f64;
            if mean > 0.0 {
                return (current_iv / mean * 50.0).clamp(0.0, 100.0);
            }
            return 50.0;
        }
    }
    rank_without_history(current_iv)
}

fn rank_without_history(current_iv: f64) -> f64 {
    if current_iv > 0.0 {
        (current_iv / IV_RANK_BASELINE_VOL * 50.0).clamp(0.0, 100.0)
    } else {
        50.0
    }
}
