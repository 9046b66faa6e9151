//! Team redistribution: rescale merits onto a fixed budget, or convert
//! individual points into a share of a fixed pool.

use std::cmp::Reverse;

use gongfen_core::error::MeritError;
use gongfen_core::types::{MeritMap, ParticipantId, TeamScoreBudget};
use ordered_float::OrderedFloat;
use tracing::debug;

/// `(scale, sum)` such that `sum(values / scale) == sum`. The scale is 1
/// unless the plain sum overflows, in which case values are divided by the
/// largest one first.
fn scaled_total(values: &MeritMap) -> (f64, f64) {
    let sum: f64 = values.values().sum();
    if sum.is_finite() {
        return (1.0, sum);
    }
    let max = values.values().copied().fold(0.0, f64::max);
    debug!(n = values.len(), max, "redistribution: total overflows, summing scaled values");
    (max, values.values().map(|v| v / max).sum())
}

/// Scale every score by `budget / sum(merit)`.
///
/// A map summing to zero is returned unchanged. The total is taken in a
/// scaled domain when the raw sum would overflow.
pub fn normalize_to_total(merit: &MeritMap, budget: TeamScoreBudget) -> MeritMap {
    let (scale, sum) = scaled_total(merit);
    if sum == 0.0 {
        debug!(n = merit.len(), "redistribution: zero total, nothing to rescale");
        return merit.clone();
    }
    let factor = budget.total() / sum;
    merit
        .iter()
        .map(|(k, &v)| (k.clone(), v / scale * factor))
        .collect()
}

/// `individual / total * pool`, or 0 when the team has no points.
///
/// # Examples
///
/// ```
/// use gongfen_engine::individual_share_score;
/// assert_eq!(individual_share_score(15.0, 60.0, 100.0), 25.0);
/// assert_eq!(individual_share_score(5.0, 0.0, 30.0), 0.0);
/// ```
pub fn individual_share_score(individual_points: f64, total_team_points: f64, pool_size: f64) -> f64 {
    if total_team_points > 0.0 {
        (individual_points / total_team_points) * pool_size
    } else {
        0.0
    }
}

/// Share-of-pool score for every participant, against the map's own total.
pub fn share_scores(points: &MeritMap, pool_size: f64) -> Result<MeritMap, MeritError> {
    if !pool_size.is_finite() {
        return Err(MeritError::InvalidPoolSize(pool_size));
    }
    let (scale, total) = scaled_total(points);
    Ok(points
        .iter()
        .map(|(k, &v)| (k.clone(), individual_share_score(v / scale, total, pool_size)))
        .collect())
}

/// Participants ordered by descending score; ties by ascending identifier.
pub fn rank(merit: &MeritMap) -> Vec<(ParticipantId, f64)> {
    let mut ranked: Vec<(ParticipantId, f64)> =
        merit.iter().map(|(k, &v)| (k.clone(), v)).collect();
    // BTreeMap iteration is already id-ordered; a stable sort keeps that for ties.
    ranked.sort_by_key(|(_, v)| Reverse(OrderedFloat(*v)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use gongfen_core::types::contributions;
    use proptest::prelude::*;

    fn budget(v: f64) -> TeamScoreBudget {
        TeamScoreBudget::new(v).unwrap()
    }

    #[test]
    fn rescales_to_target() {
        let out = normalize_to_total(&contributions([("a", 1.0), ("b", 3.0)]), budget(100.0));
        assert_eq!(out[&ParticipantId::from("a")], 25.0);
        assert_eq!(out[&ParticipantId::from("b")], 75.0);
    }

    #[test]
    fn zero_sum_unchanged() {
        let input = contributions([("a", 0.0), ("b", 0.0)]);
        assert_eq!(normalize_to_total(&input, budget(100.0)), input);
    }

    #[test]
    fn empty_unchanged() {
        assert!(normalize_to_total(&MeritMap::new(), budget(10.0)).is_empty());
    }

    #[test]
    fn zero_budget_zeroes_everything() {
        let out = normalize_to_total(&contributions([("a", 2.0), ("b", 3.0)]), budget(0.0));
        assert!(out.values().all(|&v| v == 0.0));
    }

    #[test]
    fn rescale_survives_overflowing_total() {
        let out = normalize_to_total(&contributions([("a", 1e308), ("b", 1e308)]), budget(100.0));
        assert_eq!(out[&ParticipantId::from("a")], 50.0);
        assert_eq!(out[&ParticipantId::from("b")], 50.0);
    }

    #[test]
    fn share_scores_survive_overflowing_total() {
        let out = share_scores(&contributions([("a", 1.5e308), ("b", 1.5e308), ("c", 0.0)]), 30.0).unwrap();
        assert_eq!(out[&ParticipantId::from("a")], 15.0);
        assert_eq!(out[&ParticipantId::from("c")], 0.0);
    }

    #[test]
    fn share_boundaries() {
        assert_eq!(individual_share_score(0.0, 50.0, 30.0), 0.0);
        assert_eq!(individual_share_score(50.0, 50.0, 30.0), 30.0);
        assert_eq!(individual_share_score(50.0, 50.0, 100.0), 100.0);
        assert_eq!(individual_share_score(10.0, -1.0, 100.0), 0.0);
    }

    #[test]
    fn share_scores_sum_to_pool() {
        let out = share_scores(&contributions([("a", 4.0), ("b", 4.0), ("c", 2.0)]), 30.0).unwrap();
        assert_eq!(out[&ParticipantId::from("a")], 12.0);
        assert_eq!(out[&ParticipantId::from("c")], 6.0);
        let total: f64 = out.values().sum();
        assert!((total - 30.0).abs() < 1e-12);
    }

    #[test]
    fn share_scores_rejects_nan_pool() {
        assert_eq!(
            share_scores(&contributions([("a", 1.0)]), f64::NAN).unwrap_err().to_string(),
            "invalid pool size: NaN"
        );
    }

    #[test]
    fn rank_descending_with_id_ties() {
        let ranked = rank(&contributions([("c", 5.0), ("a", 5.0), ("b", 9.0), ("d", 1.0)]));
        let ids: Vec<&str> = ranked.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c", "d"]);
    }

    proptest! {
        #[test]
        fn rescale_idempotent(values in proptest::collection::vec(0.001f64..1e6, 1..25)) {
            let m = contributions(values.iter().enumerate().map(|(i, &v)| (i as u64, v)));
            let once = normalize_to_total(&m, budget(100.0));
            let twice = normalize_to_total(&once, budget(100.0));
            for (k, v) in &once {
                prop_assert!((v - twice[k]).abs() <= 1e-9 * v.max(1.0));
            }
        }

        #[test]
        fn rescale_hits_target(values in proptest::collection::vec(0.001f64..1e6, 1..25), target in 0.0f64..1e5) {
            let m = contributions(values.iter().enumerate().map(|(i, &v)| (i as u64, v)));
            let total: f64 = normalize_to_total(&m, budget(target)).values().sum();
            prop_assert!((total - target).abs() <= 1e-9 * target.max(1.0));
        }

        #[test]
        fn sole_contributor_gets_pool(t in 0.001f64..1e6, pool in 0.0f64..1e4) {
            prop_assert_eq!(individual_share_score(t, t, pool), pool);
            prop_assert_eq!(individual_share_score(0.0, t, pool), 0.0);
        }
    }
}
