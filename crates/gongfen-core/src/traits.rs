//! Trait interfaces for the Gongfen merit engine.
//!
//! These traits define the contracts between crates:
//! - [`ContributionNormalizer`] — contribution → merit math (gongfen-engine implements)
//! - [`TimeCoefficientCalculator`] — timing bonus/penalty (gongfen-engine implements)

use chrono::NaiveDate;

use crate::error::MeritError;
use crate::types::{ContributionMap, MeritMap, TimeCoefficient, TimingWindow};

/// Pure conversion of raw contributions into merit scores.
///
/// Implementations must preserve the key set, never return negative scores
/// for non-negative input, and be order-independent.
pub trait ContributionNormalizer: Send + Sync {
    /// Compute each participant's merit. Rejects negative or non-finite values.
    fn normalize(&self, contributions: &ContributionMap) -> Result<MeritMap, MeritError>;
}

/// Conversion of planned/actual dates into a [`TimeCoefficient`].
///
/// Never fails: unknown timing yields [`TimeCoefficient::NEUTRAL`].
pub trait TimeCoefficientCalculator: Send + Sync {
    fn time_coefficient(&self, window: &TimingWindow) -> TimeCoefficient;

    /// Convenience form taking the dates directly.
    ///
    /// Default implementation builds a [`TimingWindow`] and delegates to
    /// [`time_coefficient`](Self::time_coefficient).
    fn coefficient_for(
        &self,
        planned_due: Option<NaiveDate>,
        actual_completion: Option<NaiveDate>,
        planned_start: Option<NaiveDate>,
    ) -> TimeCoefficient {
        let window =
            TimingWindow::new(planned_due, actual_completion).with_planned_start(planned_start);
        self.time_coefficient(&window)
    }
}
