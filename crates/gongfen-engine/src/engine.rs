//! Merit engine implementing the [`ContributionNormalizer`] and
//! [`TimeCoefficientCalculator`] traits.
//!
//! Holds only an immutable [`EngineConfig`]; every call is a pure function of
//! its arguments, so one engine can be shared across threads freely.

use gongfen_core::error::{ConfigError, MeritError};
use gongfen_core::traits::{ContributionNormalizer, TimeCoefficientCalculator};
use gongfen_core::types::{
    ContributionMap, MeritMap, TeamScoreBudget, TimeCoefficient, TimingWindow,
};
use tracing::debug;

use crate::config::EngineConfig;
use crate::{normalizer, redistribution, time_coefficient};

/// The production merit calculator.
#[derive(Debug, Clone, Default)]
pub struct MeritEngine {
    config: EngineConfig,
}

impl MeritEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a validated configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Normalize contributions, then rescale the merits onto `budget`.
    pub fn distribute(
        &self,
        contributions: &ContributionMap,
        budget: TeamScoreBudget,
    ) -> Result<MeritMap, MeritError> {
        let merit = self.normalize(contributions)?;
        debug!(n = merit.len(), budget = budget.total(), "distribute: rescaling to budget");
        Ok(redistribution::normalize_to_total(&merit, budget))
    }
}

impl ContributionNormalizer for MeritEngine {
    fn normalize(&self, contributions: &ContributionMap) -> Result<MeritMap, MeritError> {
        normalizer::normalize(contributions)
    }
}

impl TimeCoefficientCalculator for MeritEngine {
    fn time_coefficient(&self, window: &TimingWindow) -> TimeCoefficient {
        time_coefficient::time_coefficient(window, &self.config)
    }
}
