//! Time coefficients: planned vs. actual completion → bonus or penalty.
//!
//! Early bands are shared by both ladders:
//!
//! | Days early | Coefficient |
//! |------------|-------------|
//! | ≥ 7        | 1.30        |
//! | 4–6        | 1.25        |
//! | 1–3        | 1.20        |
//! | 0          | 1.00        |
//!
//! Late completion follows the configured [`LateLadder`].

use std::collections::BTreeMap;

use gongfen_core::constants::{
    COEFFICIENT_EARLY_DAYS, COEFFICIENT_EARLY_SLIGHT, COEFFICIENT_EARLY_WEEK,
    COEFFICIENT_LATE_EXTREME, COEFFICIENT_LATE_MINOR, COEFFICIENT_LATE_MODERATE,
    COEFFICIENT_LATE_SEVERE, EARLY_FULL_BONUS_DAYS, EARLY_PARTIAL_BONUS_DAYS,
};
use gongfen_core::types::{MeritMap, ParticipantId, TimeCoefficient, TimingWindow};
use tracing::debug;

use crate::config::{EngineConfig, LateLadder};

/// Coefficient for a window of dates. Missing due or actual date is neutral.
pub fn time_coefficient(window: &TimingWindow, config: &EngineConfig) -> TimeCoefficient {
    let Some(days_diff) = window.days_diff() else {
        debug!("time_coefficient: missing date, using neutral coefficient");
        return TimeCoefficient::NEUTRAL;
    };
    let planned_duration = window
        .planned_duration_days()
        .filter(|&d| d > 0)
        .unwrap_or(config.default_planned_duration_days);
    coefficient_for_days(days_diff, planned_duration, config)
}

/// Coefficient for a signed day offset (`actual - due`).
///
/// `planned_duration_days` is only consulted by the overtime-ratio ladder.
pub fn coefficient_for_days(
    days_diff: i64,
    planned_duration_days: i64,
    config: &EngineConfig,
) -> TimeCoefficient {
    let value = match days_diff {
        d if d <= -EARLY_FULL_BONUS_DAYS => COEFFICIENT_EARLY_WEEK,
        d if d <= -EARLY_PARTIAL_BONUS_DAYS => COEFFICIENT_EARLY_DAYS,
        d if d < 0 => COEFFICIENT_EARLY_SLIGHT,
        0 => return TimeCoefficient::NEUTRAL,
        late => match config.late_ladder {
            LateLadder::FixedDays => fixed_days_penalty(late),
            LateLadder::OvertimeRatio => {
                overtime_ratio_penalty(late, planned_duration_days, config)
            }
        },
    };
    TimeCoefficient::new(value)
}

fn fixed_days_penalty(days_late: i64) -> f64 {
    match days_late {
        i64::MIN..=1 => COEFFICIENT_LATE_MINOR,
        2..=3 => COEFFICIENT_LATE_MODERATE,
        4..=7 => COEFFICIENT_LATE_SEVERE,
        _ => COEFFICIENT_LATE_EXTREME,
    }
}

fn overtime_ratio_penalty(days_late: i64, planned_duration_days: i64, config: &EngineConfig) -> f64 {
    let duration = if planned_duration_days > 0 {
        planned_duration_days
    } else {
        config.default_planned_duration_days
    };
    let ratio = days_late as f64 / duration as f64;
    if ratio <= config.overtime_minor_ratio {
        COEFFICIENT_LATE_MINOR
    } else if ratio <= config.overtime_moderate_ratio {
        COEFFICIENT_LATE_MODERATE
    } else {
        COEFFICIENT_LATE_SEVERE
    }
}

/// Scale each participant's merit by their own coefficient.
///
/// Participants without an entry keep their score; coefficients for
/// participants not in `merit` are ignored.
pub fn apply_time_coefficients(
    merit: &MeritMap,
    coefficients: &BTreeMap<ParticipantId, TimeCoefficient>,
) -> MeritMap {
    merit
        .iter()
        .map(|(k, &score)| {
            let c = coefficients.get(k).copied().unwrap_or_default();
            (k.clone(), c.apply(score))
        })
        .collect()
}
