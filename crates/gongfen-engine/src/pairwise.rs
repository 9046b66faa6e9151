//! Pairwise gap adjustment for two-person groups.
//!
//! Both participants receive the same factor
//! `1 + 0.1 * |Si - Sj| / max(Si, Sj)`, so the ratio between them is
//! preserved while the absolute total grows with the gap. Nothing is
//! transferred from the larger contributor to the smaller one.

use gongfen_core::constants::PAIRWISE_GAP_SLOPE;
use gongfen_core::types::{ContributionMap, MeritMap};
use tracing::debug;

/// Shared adjustment factor for a pair. Returns 1.0 when both are zero.
pub fn pair_factor(a: f64, b: f64) -> f64 {
    let max = a.max(b);
    if max == 0.0 {
        return 1.0;
    }
    1.0 + PAIRWISE_GAP_SLOPE * (a - b).abs() / max
}

/// Apply the pairwise formula to a validated two-entry map.
///
/// Maps of any other size are returned unchanged; the dispatcher only routes
/// pairs here.
pub fn adjust(contributions: &ContributionMap) -> MeritMap {
    let mut values = contributions.values().copied();
    let (Some(a), Some(b), None) = (values.next(), values.next(), values.next()) else {
        return contributions.clone();
    };

    if a.max(b) == 0.0 {
        debug!("pairwise: both contributions zero, skipping adjustment");
        return contributions.keys().map(|k| (k.clone(), 0.0)).collect();
    }

    let factor = pair_factor(a, b);
    debug!(factor, "pairwise: applying gap adjustment");
    contributions
        .iter()
        .map(|(k, &s)| (k.clone(), s * factor))
        .collect()
}
