use anyhow::{bail, Result};

use crate::cli::ShowArgs;
use crate::store;

/// Render a stored scan as a ranked table, highest IV rank first.
pub fn run(args: ShowArgs) -> Result<()> {
    let results = store::read_results(&args.input)?;
    if results.is_empty() {
        bail!(
            "no results in {:?}; run `cargo run -- scan` first",
            args.input
        );
    }

    let limit = args.limit.unwrap_or(results.len());

    println!(
        "{:<6} {:>9} {:>7} {:>7} {:>7} {:>5} {:<17} {:>11} {:>5}",
        "TICKER", "PRICE", "IV%", "IVRANK", "SKEW", "P/C", "STRATEGY", "EXPIRY", "DTE"
    );
    for result in results.iter().take(limit) {
        println!(
            "{:<6} {:>9.2} {:>7.2} {:>7.1} {:>7.2} {:>5.2} {:<17} {:>11} {:>5}",
            result.ticker,
            result.price,
            result.iv,
            result.iv_rank,
            result.skew,
            result.put_call_ratio,
            result.strategy.to_string(),
            result.expiration.to_string(),
            result.days_to_expiration,
        );
    }

    Ok(())
}
