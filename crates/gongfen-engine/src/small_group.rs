//! Small-group weighting for groups of 3 to 10.
//!
//! ```text
//! wi = (Si / avg) * (1 + 0.05 * (n - 3))
//! ai = 1 + 0.1 * (Si - min) / (max - min)
//! merit_i = Si * wi * ai
//! ```
//!
//! Above-average contributors get `wi > 1`, and larger groups get a slightly
//! larger multiplier across the board.

use gongfen_core::constants::{
    SMALL_GROUP_BASE_SIZE, SMALL_GROUP_SIZE_STEP, SMALL_GROUP_SPREAD_SLOPE,
};
use gongfen_core::types::{ContributionMap, MeritMap};
use tracing::{debug, trace};

use crate::normalizer::mean;

/// Group-size multiplier `1 + 0.05 * (n - 3)`; 1.0 for `n <= 3`.
pub fn size_bonus(n: usize) -> f64 {
    1.0 + SMALL_GROUP_SIZE_STEP * n.saturating_sub(SMALL_GROUP_BASE_SIZE) as f64
}

pub fn adjust(contributions: &ContributionMap) -> MeritMap {
    let n = contributions.len();
    if n == 0 {
        return MeritMap::new();
    }

    let avg = mean(contributions);
    if avg == 0.0 {
        debug!(n, "small_group: zero average, skipping weighting");
        return contributions.clone();
    }

    let (min, max) = contributions
        .values()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let spread = max - min;
    if spread == 0.0 {
        debug!(n, "small_group: no variance, adjustment factor fixed at 1");
    }
    let bonus = size_bonus(n);

    contributions
        .iter()
        .map(|(k, &s)| {
            let weight = (s / avg) * bonus;
            let adjustment = if spread == 0.0 {
                1.0
            } else {
                1.0 + SMALL_GROUP_SPREAD_SLOPE * (s - min) / spread
            };
            trace!(participant = %k, weight, adjustment, "small_group");
            (k.clone(), s * weight * adjustment)
        })
        .collect()
}
