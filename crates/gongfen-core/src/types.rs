//! Value types handed between the surrounding application and the engine.
//!
//! Everything here is a plain value object: recomputed from source records on
//! demand, never cached, never owned long-term by the engine.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{COEFFICIENT_MAX, COEFFICIENT_MIN, COEFFICIENT_NEUTRAL};
use crate::error::MeritError;

/// Opaque participant identifier, unique within one computation.
///
/// Integer identifiers are stored in their decimal form, so `42u64` and
/// `"42"` name the same participant.
///
/// # Examples
///
/// ```
/// use gongfen_core::types::ParticipantId;
/// assert_eq!(ParticipantId::from(42u64), ParticipantId::from("42"));
/// assert_eq!(ParticipantId::from("alice").as_str(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ParticipantId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Raw contribution values keyed by participant. Values must be `>= 0`.
pub type ContributionMap = BTreeMap<ParticipantId, f64>;

/// Merit scores keyed by participant; same key set as the contributions
/// they were computed from.
pub type MeritMap = BTreeMap<ParticipantId, f64>;

/// Build a [`ContributionMap`] from `(id, value)` pairs.
///
/// Later duplicates overwrite earlier ones.
pub fn contributions<I, K>(pairs: I) -> ContributionMap
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<ParticipantId>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Multiplicative timing bonus/penalty, always within `[0.30, 1.30]`.
///
/// # Examples
///
/// ```
/// use gongfen_core::types::TimeCoefficient;
/// assert_eq!(TimeCoefficient::new(2.0).value(), 1.30);
/// assert_eq!(TimeCoefficient::new(0.0).value(), 0.30);
/// assert_eq!(TimeCoefficient::NEUTRAL.apply(10.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct TimeCoefficient(f64);

impl TimeCoefficient {
    /// On-time delivery; also used whenever timing is unknown.
    pub const NEUTRAL: Self = Self(COEFFICIENT_NEUTRAL);
    pub const MIN: Self = Self(COEFFICIENT_MIN);
    pub const MAX: Self = Self(COEFFICIENT_MAX);

    /// Clamp `value` into the valid band. NaN maps to neutral.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(COEFFICIENT_MIN, COEFFICIENT_MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Scale a base score by this coefficient.
    pub fn apply(self, score: f64) -> f64 {
        score * self.0
    }
}

impl From<f64> for TimeCoefficient {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<TimeCoefficient> for f64 {
    fn from(c: TimeCoefficient) -> Self {
        c.0
    }
}

impl Default for TimeCoefficient {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Total points available to a team for one computation unit.
///
/// Validated on construction: finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct TeamScoreBudget(f64);

impl TeamScoreBudget {
    pub fn new(total: f64) -> Result<Self, MeritError> {
        if !total.is_finite() || total < 0.0 {
            return Err(MeritError::InvalidBudget(total));
        }
        Ok(Self(total))
    }

    pub fn total(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for TeamScoreBudget {
    type Error = MeritError;

    fn try_from(total: f64) -> Result<Self, Self::Error> {
        Self::new(total)
    }
}

impl<'de> Deserialize<'de> for TeamScoreBudget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let total = f64::deserialize(deserializer)?;
        Self::new(total).map_err(serde::de::Error::custom)
    }
}

/// Planned and actual dates for one task or assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingWindow {
    pub planned_start: Option<NaiveDate>,
    pub planned_due: Option<NaiveDate>,
    pub actual_completion: Option<NaiveDate>,
}

impl TimingWindow {
    pub fn new(planned_due: Option<NaiveDate>, actual_completion: Option<NaiveDate>) -> Self {
        Self {
            planned_start: None,
            planned_due,
            actual_completion,
        }
    }

    pub fn with_planned_start(mut self, planned_start: Option<NaiveDate>) -> Self {
        self.planned_start = planned_start;
        self
    }

    /// `actual - due` in whole days: negative when early, positive when late.
    /// `None` if either date is missing.
    pub fn days_diff(&self) -> Option<i64> {
        let due = self.planned_due?;
        let actual = self.actual_completion?;
        Some((actual - due).num_days())
    }

    /// `due - start` in whole days, `None` without both dates.
    pub fn planned_duration_days(&self) -> Option<i64> {
        let start = self.planned_start?;
        let due = self.planned_due?;
        Some((due - start).num_days())
    }
}
