/// Target tenor in days and the acceptable band around it.
pub const TENOR_TARGET_DAYS: i64 = 60;
pub const TENOR_MIN_DAYS: i64 = 45;
pub const TENOR_MAX_DAYS: i64 = 80;

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Last-resort implied volatility when neither quotes nor history help.
pub const DEFAULT_IMPLIED_VOL: f64 = 0.30;
/// Reference vol for the history-free IV-rank estimate.
pub const IV_RANK_BASELINE_VOL: f64 = 0.5;

/// Trailing daily returns used for the realized-vol fallback (~1 month).
pub const REALIZED_VOL_RETURNS: usize = 21;
/// Window of the rolling realized-vol series behind the IV rank.
pub const ROLLING_VOL_WINDOW: usize = 30;
/// Minimum closes before the rolling series is considered usable.
pub const MIN_CLOSES_FOR_RANK: usize = 51;

pub const SKEW_TARGET_DELTA: f64 = 0.25;
pub const PUT_SKEW_FALLBACK_FACTOR: f64 = 1.1;
pub const CALL_SKEW_FALLBACK_FACTOR: f64 = 0.9;

/// Covered-call ladder of out-of-the-money percentages.
pub const COVERED_CALL_OTM_LADDER: [f64; 4] = [5.0, 10.0, 15.0, 20.0];
/// Minimum upside before a covered-call rung is preferred outright.
pub const MIN_UPSIDE_PCT: f64 = 5.0;

/// Collar ladders; the short call must sit further out than the long put.
pub const COLLAR_PUT_OTM_LADDER: [f64; 3] = [5.0, 10.0, 15.0];
pub const COLLAR_CALL_OTM_LADDER: [f64; 4] = [10.0, 15.0, 20.0, 25.0];

pub const DEFAULT_SNAPSHOT_PATH: &str = "snapshots.json";
pub const DEFAULT_OUTPUT_PATH: &str = "public/market_data.json";
