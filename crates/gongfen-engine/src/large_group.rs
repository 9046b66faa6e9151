//! Large-group distribution for groups above ten.
//!
//! ```text
//! ti = 0.8 + 0.4 * (Si / max)          // [0.8, 1.2]
//! bi = 1 + 0.05 * ln(Si / avg + 1)
//! merit_i = Si * ti * bi
//! ```
//!
//! The logarithm damps outliers: doubling a contribution that is already far
//! above average barely moves `bi`.

use gongfen_core::constants::{
    LARGE_GROUP_FACTOR_FLOOR, LARGE_GROUP_FACTOR_SPAN, LARGE_GROUP_LOG_SLOPE,
};
use gongfen_core::types::{ContributionMap, MeritMap};
use tracing::{debug, trace};

use crate::normalizer::mean;

/// Distribution factor `ti` for a contribution relative to the group maximum.
pub fn distribution_factor(s: f64, max: f64) -> f64 {
    LARGE_GROUP_FACTOR_FLOOR + LARGE_GROUP_FACTOR_SPAN * (s / max)
}

/// Logarithmic adjustment `bi` for a contribution relative to the group mean.
pub fn log_adjustment(s: f64, avg: f64) -> f64 {
    1.0 + LARGE_GROUP_LOG_SLOPE * (s / avg).ln_1p()
}

pub fn adjust(contributions: &ContributionMap) -> MeritMap {
    let n = contributions.len();
    if n == 0 {
        return MeritMap::new();
    }

    let avg = mean(contributions);
    let max = contributions.values().copied().fold(0.0, f64::max);
    if max == 0.0 || avg == 0.0 {
        debug!(n, "large_group: all contributions zero, skipping distribution");
        return contributions.clone();
    }

    contributions
        .iter()
        .map(|(k, &s)| {
            let t = distribution_factor(s, max);
            let b = log_adjustment(s, avg);
            trace!(participant = %k, t, b, "large_group");
            (k.clone(), s * t * b)
        })
        .collect()
}
