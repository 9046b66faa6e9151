//! Engine configuration.
//!
//! Provides [`EngineConfig`] with defaults matching the canonical banding.
//! Every field is optional when deserializing; missing fields take their
//! default, so a partial config file only overrides what it names.

use std::fmt;
use std::str::FromStr;

use gongfen_core::constants::{
    DEFAULT_PLANNED_DURATION_DAYS, OVERTIME_MINOR_RATIO, OVERTIME_MODERATE_RATIO,
};
use gongfen_core::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Which penalty ladder applies to late completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LateLadder {
    /// Penalty by `days_late / planned_duration`: ≤10% → 0.90, ≤30% → 0.70,
    /// above → 0.50.
    #[default]
    OvertimeRatio,
    /// Penalty by absolute days late: 1 → 0.90, 2–3 → 0.70, 4–7 → 0.50,
    /// more → 0.30.
    FixedDays,
}

impl LateLadder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OvertimeRatio => "overtime_ratio",
            Self::FixedDays => "fixed_days",
        }
    }
}

impl fmt::Display for LateLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LateLadder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "overtime_ratio" | "ratio" => Ok(Self::OvertimeRatio),
            "fixed_days" | "fixed" => Ok(Self::FixedDays),
            _ => Err(ConfigError::UnknownLadder(s.to_string())),
        }
    }
}

/// Configuration for a [`MeritEngine`](crate::MeritEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Late-completion penalty ladder.
    pub late_ladder: LateLadder,
    /// Planned duration used when a task has no usable planned start date.
    pub default_planned_duration_days: i64,
    /// Overtime ratio still penalized as minor (ratio ladder only).
    pub overtime_minor_ratio: f64,
    /// Overtime ratio still penalized as moderate (ratio ladder only).
    pub overtime_moderate_ratio: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            late_ladder: LateLadder::default(),
            default_planned_duration_days: DEFAULT_PLANNED_DURATION_DAYS,
            overtime_minor_ratio: OVERTIME_MINOR_RATIO,
            overtime_moderate_ratio: OVERTIME_MODERATE_RATIO,
        }
    }
}

impl EngineConfig {
    /// Reject configurations that would make the ladders ill-defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_planned_duration_days <= 0 {
            return Err(ConfigError::NonPositivePlannedDuration(
                self.default_planned_duration_days,
            ));
        }
        for ratio in [self.overtime_minor_ratio, self.overtime_moderate_ratio] {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(ConfigError::InvalidRatioThreshold(ratio));
            }
        }
        if self.overtime_minor_ratio >= self.overtime_moderate_ratio {
            return Err(ConfigError::RatioThresholdsOutOfOrder {
                minor: self.overtime_minor_ratio,
                moderate: self.overtime_moderate_ratio,
            });
        }
        Ok(())
    }
}
