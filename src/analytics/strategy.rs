use crate::model::{Strategy, StrategyDecision};

pub const INCOME_RATIONALE: &str = "High premiums available. Sell calls.";
pub const PROTECTION_RATIONALE: &str =
    "Downside hedges are historically cheap. Buy Puts/Collars.";
pub const NEUTRAL_RATIONALE: &str =
    "Market conditions are neutral. Consider covered calls or protective puts.";

/// Map IV rank and 25-delta skew (percentage points) to a strategy.
/// Total and pure; first matching rule wins.
pub fn classify(iv_rank: f64, skew_pp: f64) -> StrategyDecision {
    if iv_rank > 50.0 && skew_pp > 0.0 {
        StrategyDecision {
            strategy: Strategy::IncomeGenerator,
            rationale: INCOME_RATIONALE,
        }
    } else if iv_rank < 30.0 || skew_pp < -2.0 {
        StrategyDecision {
            strategy: Strategy::CheapProtection,
            rationale: PROTECTION_RATIONALE,
        }
    } else {
        StrategyDecision {
            strategy: Strategy::Neutral,
            rationale: NEUTRAL_RATIONALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_rank_positive_skew_sells_premium() {
        assert_eq!(classify(60.0, 1.0).strategy, Strategy::IncomeGenerator);
    }

    #[test]
    fn low_rank_or_deep_negative_skew_buys_protection() {
        assert_eq!(classify(20.0, 0.0).strategy, Strategy::CheapProtection);
        assert_eq!(classify(70.0, -2.5).strategy, Strategy::CheapProtection);
    }

    #[test]
    fn middle_ground_is_neutral() {
        assert_eq!(classify(40.0, 0.0).strategy, Strategy::Neutral);
        // Rank above 50 but flat skew is not an income setup.
        assert_eq!(classify(60.0, 0.0).strategy, Strategy::Neutral);
        // Boundary values fall through to neutral.
        assert_eq!(classify(50.0, 1.0).strategy, Strategy::Neutral);
        assert_eq!(classify(30.0, -2.0).strategy, Strategy::Neutral);
    }
}
