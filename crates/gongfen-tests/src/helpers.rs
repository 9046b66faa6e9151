//! Shared test helpers for scenario tests.

use chrono::{Days, NaiveDate};
use gongfen_core::types::{ContributionMap, MeritMap, ParticipantId, TimingWindow, contributions};

/// Contribution map with participants named `p0`, `p1`, ...
pub fn named_group(values: &[f64]) -> ContributionMap {
    contributions(
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| (format!("p{i}"), v)),
    )
}

/// Look up a participant's score by name.
pub fn score(map: &MeritMap, id: &str) -> f64 {
    map[&ParticipantId::from(id)]
}

/// Round to two decimals, the precision scores are displayed with.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Timing window due on `due`, completed `offset` days later (negative = early).
pub fn window_offset(due: NaiveDate, offset: i64) -> TimingWindow {
    let actual = if offset >= 0 {
        due.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        due.checked_sub_days(Days::new(offset.unsigned_abs()))
    };
    TimingWindow::new(Some(due), actual)
}

/// A fixed reference due date.
pub fn reference_due() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 30).expect("valid date")
}

/// Sum of all scores in a map.
pub fn total(map: &MeritMap) -> f64 {
    map.values().sum()
}
