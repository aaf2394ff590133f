use chrono::NaiveDate;

use crate::constants::{TENOR_MAX_DAYS, TENOR_MIN_DAYS, TENOR_TARGET_DAYS};

/// An expiration chosen by the selector, with its distance from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedExpiration {
    pub date: NaiveDate,
    pub days_out: i64,
}

fn parsed(expirations: &[String], today: NaiveDate) -> impl Iterator<Item = SelectedExpiration> + '_ {
    expirations.iter().filter_map(move |raw| {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        Some(SelectedExpiration {
            date,
            days_out: (date - today).num_days(),
        })
    })
}

/// Nearest expiration to the 60-day target within the 45..=80 day band.
/// Ties go to the first candidate in input order. Unparseable dates are
/// skipped.
pub fn find_in_band(expirations: &[String], today: NaiveDate) -> Option<SelectedExpiration> {
    let mut best: Option<SelectedExpiration> = None;
    let mut best_diff = i64::MAX;

    for candidate in parsed(expirations, today) {
        if !(TENOR_MIN_DAYS..=TENOR_MAX_DAYS).contains(&candidate.days_out) {
            continue;
        }
        let diff = (candidate.days_out - TENOR_TARGET_DAYS).abs();
        if diff < best_diff {
            best_diff = diff;
            best = Some(candidate);
        }
    }

    best
}

/// Nearest expiration to the 60-day target with no band restriction.
pub fn find_nearest(expirations: &[String], today: NaiveDate) -> Option<SelectedExpiration> {
    let mut best: Option<SelectedExpiration> = None;
    let mut best_diff = i64::MAX;

    for candidate in parsed(expirations, today) {
        let diff = (candidate.days_out - TENOR_TARGET_DAYS).abs();
        if diff < best_diff {
            best_diff = diff;
            best = Some(candidate);
        }
    }

    best
}

/// In-band selection with the unrestricted nearest date as fallback.
pub fn select(expirations: &[String], today: NaiveDate) -> Option<SelectedExpiration> {
    find_in_band(expirations, today).or_else(|| find_nearest(expirations, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(days_out: i64) -> String {
        (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(days_out))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn picks_the_in_band_date_closest_to_sixty_days() {
        let expirations = vec![day(40), day(50), day(70), day(90)];
        let chosen = find_in_band(&expirations, today()).expect("in-band candidate");
        // 50 and 70 are both in band and equidistant from 60; 50 comes first.
        assert_eq!(chosen.days_out, 50);

        let expirations = vec![day(40), day(70), day(90)];
        let chosen = find_in_band(&expirations, today()).expect("in-band candidate");
        assert_eq!(chosen.days_out, 70);
    }

    #[test]
    fn falls_back_to_nearest_when_band_is_empty() {
        let expirations = vec![day(10), day(30), day(95)];
        assert!(find_in_band(&expirations, today()).is_none());
        let chosen = select(&expirations, today()).expect("fallback candidate");
        assert_eq!(chosen.days_out, 30);
    }

    #[test]
    fn skips_unparseable_dates() {
        let expirations = vec!["not-a-date".to_string(), day(60)];
        let chosen = select(&expirations, today()).expect("parseable candidate");
        assert_eq!(chosen.days_out, 60);
    }

    #[test]
    fn empty_or_garbage_input_selects_nothing() {
        assert!(select(&[], today()).is_none());
        let garbage = vec!["2024/01/01".to_string(), "tomorrow".to_string()];
        assert!(select(&garbage, today()).is_none());
    }
}
