use crate::constants::{
    COLLAR_CALL_OTM_LADDER, COLLAR_PUT_OTM_LADDER, COVERED_CALL_OTM_LADDER, MIN_UPSIDE_PCT,
};
use crate::model::{round2, CollarRec, CoveredCallRec, OptionQuote, OptionSide};

/// Quote closest to the strike sitting `otm_pct` percent out of the money.
/// Ties on strike distance resolve to the first quote in input order.
pub fn quote_at_otm(
    quotes: &[OptionQuote],
    spot: f64,
    otm_pct: f64,
    side: OptionSide,
) -> Option<&OptionQuote> {
    let target = match side {
        OptionSide::Call => spot * (1.0 + otm_pct / 100.0),
        OptionSide::Put => spot * (1.0 - otm_pct / 100.0),
    };

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

fn quote_iv_pct(quote: &OptionQuote) -> Option<f64> {
    quote
        .implied_volatility
        .filter(|iv| *iv > 0.0)
        .map(|iv| round2(iv * 100.0))
}

/// Covered-call ladder over 5/10/15/20% OTM strikes, emitted in descending
/// annualized-yield order. The recommended rung is the first ladder rung
/// with at least 5% upside, falling back to the highest annualized yield.
/// Exactly one entry is flagged unless the set is empty.
pub fn covered_calls(calls: &[OptionQuote], spot: f64, days_to_exp: i64) -> Vec<CoveredCallRec> {
    let mut recs = Vec::with_capacity(COVERED_CALL_OTM_LADDER.len());

    for otm_pct in COVERED_CALL_OTM_LADDER {
        let Some(quote) = quote_at_otm(calls, spot, otm_pct, OptionSide::Call) else {
            continue;
        };
        let premium = quote.premium();
        if premium <= 0.0 {
            continue;
        }

        let option_yield = premium / spot * 100.0;
        let upside_pct = (quote.strike - spot) / spot * 100.0;
        let annualized_yield = if days_to_exp > 0 {
            option_yield * 365.0 / days_to_exp as f64
        } else {
            0.0
        };

        recs.push(CoveredCallRec {
            strike: quote.strike,
            otm_percent: otm_pct,
            premium: round2(premium),
            option_yield: round2(option_yield),
            annualized_yield: round2(annualized_yield),
            upside_percent: round2(upside_pct),
            days_to_expiration: days_to_exp,
            iv: quote_iv_pct(quote),
            volume: quote.volume,
            open_interest: quote.open_interest,
            recommended: false,
        });
    }

    if let Some(chosen) = pick_covered_call(&recs) {
        recs[chosen].recommended = true;
    }
    // Emit richest yield first; the stable sort keeps ladder order on ties.
    recs.sort_by(|a, b| {
        b.annualized_yield
            .partial_cmp(&a.annualized_yield)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    recs
}

fn pick_covered_call(recs: &[CoveredCallRec]) -> Option<usize> {
    if recs.is_empty() {
        return None;
    }
    if let Some(index) = recs
        .iter()
        .position(|rec| rec.upside_percent >= MIN_UPSIDE_PCT)
    {
        return Some(index);
    }

    // No rung keeps enough upside; take the richest annualized yield.
    let mut best = 0;
    for (index, rec) in recs.iter().enumerate().skip(1) {
        if rec.annualized_yield > recs[best].annualized_yield {
            best = index;
        }
    }
    Some(best)
}

/// Collar grid: long put at 5/10/15% OTM against a short call strictly
/// further out at 10/15/20/25%, emitted most protective first with lower
/// net cost breaking ties. The leading entry is the flagged one.
pub fn collars(
    calls: &[OptionQuote],
    puts: &[OptionQuote],
    spot: f64,
    days_to_exp: i64,
) -> Vec<CollarRec> {
    let mut recs = Vec::new();

    for put_otm in COLLAR_PUT_OTM_LADDER {
        let Some(put) = quote_at_otm(puts, spot, put_otm, OptionSide::Put) else {
            continue;
        };
        let put_premium = put.premium();
        if put_premium <= 0.0 {
            continue;
        }

        for call_otm in COLLAR_CALL_OTM_LADDER {
            if call_otm <= put_otm {
                continue;
            }
            let Some(call) = quote_at_otm(calls, spot, call_otm, OptionSide::Call) else {
                continue;
            };
            let call_premium = call.premium();
            if call_premium <= 0.0 {
                continue;
            }

            let net_cost = put_premium - call_premium;
            recs.push(CollarRec {
                put_strike: put.strike,
                call_strike: call.strike,
                put_otm_percent: put_otm,
                call_otm_percent: call_otm,
                put_premium: round2(put_premium),
                call_premium: round2(call_premium),
                net_cost: round2(net_cost),
                net_cost_percent: round2(net_cost / spot * 100.0),
                downside_protection: round2((spot - put.strike) / spot * 100.0),
                upside_cap: round2((call.strike - spot) / spot * 100.0),
                days_to_expiration: days_to_exp,
                put_iv: quote_iv_pct(put),
                call_iv: quote_iv_pct(call),
                recommended: false,
            });
        }
    }

    recs.sort_by(|a, b| {
        b.downside_protection
            .partial_cmp(&a.downside_protection)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                a.net_cost_percent
                    .partial_cmp(&b.net_cost_percent)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });
    if let Some(first) = recs.first_mut() {
        first.recommended = true;
    }
    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(strike: f64, premium: f64) -> OptionQuote {
        OptionQuote {
            strike,
            bid: premium - 0.05,
            ask: premium + 0.05,
            last_price: premium,
            volume: 100,
            open_interest: 500,
            implied_volatility: Some(0.35),
        }
    }

    fn put(strike: f64, premium: f64) -> OptionQuote {
        call(strike, premium)
    }

    #[test]
    fn nearest_strike_ties_go_to_the_first_quote() {
        let quotes = vec![call(104.0, 1.0), call(106.0, 1.0)];
        let chosen = quote_at_otm(&quotes, 100.0, 5.0, OptionSide::Call).expect("quote");
        assert_eq!(chosen.strike, 104.0);
    }

    #[test]
    fn covered_calls_flag_exactly_one_entry() {
        let calls = vec![
            call(105.0, 3.0),
            call(110.0, 2.0),
            call(115.0, 1.2),
            call(120.0, 0.6),
        ];
        let recs = covered_calls(&calls, 100.0, 60);
        assert_eq!(recs.len(), 4);
        assert_eq!(recs.iter().filter(|r| r.recommended).count(), 1);
    }

    #[test]
    fn covered_calls_prefer_the_first_rung_with_enough_upside() {
        let calls = vec![
            call(105.0, 3.0),
            call(110.0, 2.0),
            call(115.0, 1.2),
            call(120.0, 0.6),
        ];
        let recs = covered_calls(&calls, 100.0, 60);
        // The 5%-OTM rung has the highest annualized yield AND 5% upside;
        // it must win by the upside rule, not the yield fallback.
        let flagged = recs.iter().find(|r| r.recommended).expect("one flagged");
        assert_eq!(flagged.strike, 105.0);
        assert_eq!(flagged.otm_percent, 5.0);
        assert!(flagged.upside_percent >= 5.0);
    }

    #[test]
    fn covered_calls_fall_back_to_max_yield_when_upside_is_short() {
        // All resolvable strikes sit under 5% above spot.
        let calls = vec![call(101.0, 2.0), call(103.0, 1.0)];
        let recs = covered_calls(&calls, 100.0, 60);
        assert_eq!(recs.len(), 4);
        let flagged = recs.iter().find(|r| r.recommended).expect("one flagged");
        let max_yield = recs
            .iter()
            .map(|r| r.annualized_yield)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(flagged.annualized_yield, max_yield);
    }

    #[test]
    fn covered_calls_are_emitted_richest_yield_first() {
        // The 110 strike is richer than the 105, so ladder order and
        // yield order disagree.
        let calls = vec![call(105.0, 0.5), call(110.0, 3.0)];
        let recs = covered_calls(&calls, 100.0, 60);
        assert_eq!(recs.len(), 4);
        for pair in recs.windows(2) {
            assert!(pair[0].annualized_yield >= pair[1].annualized_yield);
        }
        // Selection still follows the ladder: the 5%-OTM rung has exactly
        // 5% upside and stays flagged even though it sorts last.
        let flagged = recs.iter().find(|r| r.recommended).expect("one flagged");
        assert_eq!(flagged.strike, 105.0);
        assert_eq!(recs.iter().filter(|r| r.recommended).count(), 1);
    }

    #[test]
    fn covered_calls_skip_rungs_without_premium() {
        let calls = vec![
            OptionQuote {
                strike: 105.0,
                bid: 0.0,
                ask: 0.0,
                last_price: 0.0,
                volume: 0,
                open_interest: 0,
                implied_volatility: None,
            },
            call(120.0, 0.8),
        ];
        let recs = covered_calls(&calls, 100.0, 60);
        // The zero-premium 105 strike is nearest for the 5% and 10% rungs
        // and dropped both times.
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.strike == 120.0));
    }

    #[test]
    fn collars_flag_the_most_protective_cheapest_combination() {
        let calls = vec![call(110.0, 1.5), call(115.0, 1.0), call(120.0, 0.6)];
        let puts = vec![put(95.0, 2.0), put(90.0, 1.4), put(85.0, 0.9)];
        let recs = collars(&calls, &puts, 100.0, 60);
        assert!(!recs.is_empty());
        assert_eq!(recs.iter().filter(|r| r.recommended).count(), 1);

        let flagged = recs.iter().find(|r| r.recommended).expect("one flagged");
        let max_protection = recs
            .iter()
            .map(|r| r.downside_protection)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(flagged.downside_protection, max_protection);
        let min_cost_at_max = recs
            .iter()
            .filter(|r| r.downside_protection == max_protection)
            .map(|r| r.net_cost_percent)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(flagged.net_cost_percent, min_cost_at_max);
    }

    #[test]
    fn collars_lead_with_the_flagged_entry() {
        let calls = vec![call(110.0, 1.5), call(115.0, 1.0), call(120.0, 0.6)];
        let puts = vec![put(95.0, 2.0), put(90.0, 1.4), put(85.0, 0.9)];
        let recs = collars(&calls, &puts, 100.0, 60);

        // Most protective first, cheaper on ties; the top entry is flagged.
        assert!(recs[0].recommended);
        assert_eq!(recs[0].downside_protection, 15.0);
        for pair in recs.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.downside_protection >= b.downside_protection);
            if a.downside_protection == b.downside_protection {
                assert!(a.net_cost_percent <= b.net_cost_percent);
            }
        }
    }

    #[test]
    fn collars_require_the_call_further_out_than_the_put() {
        let calls = vec![call(110.0, 1.0)];
        let puts = vec![put(85.0, 1.2)];
        let recs = collars(&calls, &puts, 100.0, 60);
        for rec in &recs {
            assert!(rec.call_otm_percent > rec.put_otm_percent);
        }
    }

    #[test]
    fn empty_chains_produce_no_recommendations() {
        assert!(covered_calls(&[], 100.0, 60).is_empty());
        assert!(collars(&[], &[], 100.0, 60).is_empty());
    }
}
