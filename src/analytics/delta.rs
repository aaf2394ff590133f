use crate::model::{OptionQuote, OptionSide};

/// Abramowitz & Stegun 7.1.26 rational approximation, |error| < 1.5e-7.
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = x.signum();
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Black-Scholes delta magnitude as a moneyness proxy, in [0, 1].
///
/// At (or past) expiry, and for degenerate volatility, the contract is
/// either exercised or worthless: delta collapses to 1 or 0 by side.
pub fn approximate_delta(
    strike: f64,
    spot: f64,
    t_years: f64,
    sigma: f64,
    side: OptionSide,
) -> f64 {
    if t_years <= 0.0 || sigma <= 0.0 {
        let itm = match side {
            OptionSide::Call => strike < spot,
            OptionSide::Put => strike > spot,
        };
        return if itm { 1.0 } else { 0.0 };
    }

    let d1 = ((spot / strike).ln() + 0.5 * sigma * sigma * t_years) / (sigma * t_years.sqrt());
    let delta = match side {
        OptionSide::Call => norm_cdf(d1),
        OptionSide::Put => -norm_cdf(-d1),
    };
    delta.abs()
}

/// Implied volatility of the quote whose delta (computed with that quote's
/// own IV) is closest to `target_delta`. Quotes without a positive IV are
/// ignored; ties go to the first quote in input order.
pub fn iv_at_target_delta(
    quotes: &[OptionQuote],
    spot: f64,
    target_delta: f64,
    side: OptionSide,
    t_years: f64,
) -> Option<f64> {
    let mut best_iv = None;
    let mut min_diff = f64::INFINITY;

    for quote in quotes {
        let Some(iv) = quote.implied_volatility.filter(|iv| *iv > 0.0) else {
            continue;
        };
        let delta = approximate_delta(quote.strike, spot, t_years, iv, side);
        let diff = (delta - target_delta).abs();
        if diff < min_diff {
            min_diff = diff;
            best_iv = Some(iv);
        }
    }

    best_iv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(strike: f64, iv: Option<f64>) -> OptionQuote {
        OptionQuote {
            strike,
            bid: 1.0,
            ask: 1.2,
            last_price: 1.1,
            volume: 10,
            open_interest: 50,
            implied_volatility: iv,
        }
    }

    #[test]
    fn delta_stays_within_unit_interval() {
        for strike in [50.0, 90.0, 100.0, 110.0, 200.0] {
            for sigma in [0.05, 0.3, 1.5] {
                for t in [0.01, 0.25, 1.0] {
                    for side in [OptionSide::Call, OptionSide::Put] {
                        let delta = approximate_delta(strike, 100.0, t, sigma, side);
                        assert!(
                            (0.0..=1.0).contains(&delta),
                            "delta {delta} out of range for strike {strike}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn delta_collapses_to_moneyness_at_expiry() {
        assert_eq!(
            approximate_delta(90.0, 100.0, 0.0, 0.3, OptionSide::Call),
            1.0
        );
        assert_eq!(
            approximate_delta(110.0, 100.0, 0.0, 0.3, OptionSide::Call),
            0.0
        );
        assert_eq!(
            approximate_delta(110.0, 100.0, -0.1, 0.3, OptionSide::Put),
            1.0
        );
        assert_eq!(
            approximate_delta(90.0, 100.0, 0.0, 0.3, OptionSide::Put),
            0.0
        );
    }

    #[test]
    fn atm_call_delta_is_near_a_half() {
        let delta = approximate_delta(100.0, 100.0, 0.25, 0.2, OptionSide::Call);
        assert!((delta - 0.52).abs() < 0.02, "got {delta}");
    }

    #[test]
    fn target_delta_search_ignores_missing_iv() {
        let quotes = vec![
            quote(80.0, None),
            quote(90.0, Some(0.0)),
            quote(110.0, Some(0.35)),
            quote(120.0, Some(0.40)),
        ];
        let iv = iv_at_target_delta(&quotes, 100.0, 0.25, OptionSide::Call, 60.0 / 365.0)
            .expect("a quote with usable IV");
        // The 110 strike's delta (~0.27) sits closest to the 0.25 target.
        assert_eq!(iv, 0.35);
    }

    #[test]
    fn target_delta_search_with_no_usable_quotes_is_none() {
        let quotes = vec![quote(100.0, None), quote(105.0, Some(0.0))];
        assert!(iv_at_target_delta(&quotes, 100.0, 0.25, OptionSide::Call, 0.2).is_none());
    }
}
