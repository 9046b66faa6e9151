//! Error types for the Gongfen merit engine.
use thiserror::Error;

use crate::types::ParticipantId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeritError {
    #[error("negative contribution for {participant}: {value}")] InvalidContribution { participant: ParticipantId, value: f64 },
    #[error("non-finite contribution for {participant}")] NonFiniteContribution { participant: ParticipantId },
    #[error("invalid team budget: {0}")] InvalidBudget(f64),
    #[error("invalid pool size: {0}")] InvalidPoolSize(f64),
    #[error("arithmetic overflow: merit for {participant} is not finite")] ArithmeticOverflow { participant: ParticipantId },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("default planned duration must be positive, got {0} days")] NonPositivePlannedDuration(i64),
    #[error("overtime ratio thresholds out of order: minor {minor} >= moderate {moderate}")] RatioThresholdsOutOfOrder { minor: f64, moderate: f64 },
    #[error("overtime ratio threshold must be positive and finite, got {0}")] InvalidRatioThreshold(f64),
    #[error("unknown late ladder: {0} (expected overtime_ratio or fixed_days)")] UnknownLadder(String),
}
