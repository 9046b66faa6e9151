//! Contribution normalizer: validates input and dispatches on group size.
//!
//! | n      | Formula                    |
//! |--------|----------------------------|
//! | 0      | empty result               |
//! | 1      | identity                   |
//! | 2      | [`pairwise`](crate::pairwise)       |
//! | 3–10   | [`small_group`](crate::small_group) |
//! | > 10   | [`large_group`](crate::large_group) |

use std::fmt;

use gongfen_core::constants::{SMALL_GROUP_BASE_SIZE, SMALL_GROUP_MAX};
use gongfen_core::error::MeritError;
use gongfen_core::types::{ContributionMap, MeritMap};
use tracing::debug;

use crate::{large_group, pairwise, small_group};

/// The formula a group of a given size is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formula {
    Empty,
    Identity,
    Pairwise,
    SmallGroup,
    LargeGroup,
}

impl Formula {
    /// # Examples
    ///
    /// ```
    /// use gongfen_engine::Formula;
    /// assert_eq!(Formula::for_group_size(2), Formula::Pairwise);
    /// assert_eq!(Formula::for_group_size(10), Formula::SmallGroup);
    /// assert_eq!(Formula::for_group_size(11), Formula::LargeGroup);
    /// ```
    pub fn for_group_size(n: usize) -> Self {
        match n {
            0 => Self::Empty,
            1 => Self::Identity,
            2 => Self::Pairwise,
            n if (SMALL_GROUP_BASE_SIZE..=SMALL_GROUP_MAX).contains(&n) => Self::SmallGroup,
            _ => Self::LargeGroup,
        }
    }

    fn apply(self, contributions: &ContributionMap) -> MeritMap {
        match self {
            Self::Empty => MeritMap::new(),
            Self::Identity => contributions.clone(),
            Self::Pairwise => pairwise::adjust(contributions),
            Self::SmallGroup => small_group::adjust(contributions),
            Self::LargeGroup => large_group::adjust(contributions),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty",
            Self::Identity => "identity",
            Self::Pairwise => "pairwise",
            Self::SmallGroup => "small_group",
            Self::LargeGroup => "large_group",
        })
    }
}

/// Reject the whole map if any value is negative or not a finite number.
pub fn validate_contributions(contributions: &ContributionMap) -> Result<(), MeritError> {
    for (participant, &value) in contributions {
        if !value.is_finite() {
            return Err(MeritError::NonFiniteContribution {
                participant: participant.clone(),
            });
        }
        if value < 0.0 {
            return Err(MeritError::InvalidContribution {
                participant: participant.clone(),
                value,
            });
        }
    }
    Ok(())
}

/// Arithmetic mean, computed without summing the raw values so that large
/// finite contributions cannot overflow to infinity. 0 for an empty map.
pub fn mean(contributions: &ContributionMap) -> f64 {
    let n = contributions.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    contributions.values().map(|v| v / n).sum()
}

/// Compute merit scores for a group of collaborators.
///
/// The result always has exactly the input's key set. Fails with
/// [`MeritError::ArithmeticOverflow`] if a score does not fit in an `f64`.
pub fn normalize(contributions: &ContributionMap) -> Result<MeritMap, MeritError> {
    validate_contributions(contributions)?;
    let n = contributions.len();
    let formula = Formula::for_group_size(n);
    debug!(n, %formula, "normalize: dispatching");
    let merit = formula.apply(contributions);
    if let Some((participant, _)) = merit.iter().find(|(_, v)| !v.is_finite()) {
        return Err(MeritError::ArithmeticOverflow {
            participant: participant.clone(),
        });
    }
    Ok(merit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gongfen_core::types::{ParticipantId, contributions};
    use proptest::prelude::*;

    fn id(s: &str) -> ParticipantId {
        ParticipantId::from(s)
    }

    #[test]
    fn empty_yields_empty() {
        assert!(normalize(&ContributionMap::new()).unwrap().is_empty());
    }

    #[test]
    fn single_is_identity() {
        let input = contributions([("solo", 42.5)]);
        assert_eq!(normalize(&input).unwrap(), input);
    }

    #[test]
    fn pair_routes_to_pairwise() {
        let out = normalize(&contributions([("a", 8.0), ("b", 6.0)])).unwrap();
        assert!((out[&id("a")] - 8.2).abs() < 1e-12);
        assert!((out[&id("b")] - 6.15).abs() < 1e-12);
    }

    #[test]
    fn zero_pair_is_zero() {
        let out = normalize(&contributions([("a", 0.0), ("b", 0.0)])).unwrap();
        assert_eq!(out, contributions([("a", 0.0), ("b", 0.0)]));
    }

    #[test]
    fn dispatch_boundaries() {
        assert_eq!(Formula::for_group_size(0), Formula::Empty);
        assert_eq!(Formula::for_group_size(1), Formula::Identity);
        assert_eq!(Formula::for_group_size(3), Formula::SmallGroup);
        assert_eq!(Formula::for_group_size(10), Formula::SmallGroup);
        assert_eq!(Formula::for_group_size(11), Formula::LargeGroup);
        assert_eq!(Formula::for_group_size(500), Formula::LargeGroup);
    }

    #[test]
    fn rejects_negative() {
        let err = normalize(&contributions([("a", 1.0), ("b", -0.5), ("c", 2.0)])).unwrap_err();
        assert_eq!(
            err,
            MeritError::InvalidContribution {
                participant: id("b"),
                value: -0.5
            }
        );
    }

    #[test]
    fn rejects_nan_and_infinity() {
        let err = normalize(&contributions([("a", f64::NAN)])).unwrap_err();
        assert_eq!(err, MeritError::NonFiniteContribution { participant: id("a") });
        assert!(normalize(&contributions([("a", 1.0), ("b", f64::INFINITY)])).is_err());
    }

    #[test]
    fn negative_single_still_rejected() {
        assert!(normalize(&contributions([("a", -1.0)])).is_err());
    }

    #[test]
    fn mean_of_huge_values_stays_finite() {
        let input = contributions([("a", 1e308), ("b", 1e308), ("c", 1e308)]);
        let avg = mean(&input);
        assert!(avg.is_finite());
        assert!((avg / 1e308 - 1.0).abs() < 1e-12);
        assert_eq!(mean(&ContributionMap::new()), 0.0);
    }

    #[test]
    fn huge_equal_group_keeps_weights() {
        // sum overflows f64, the mean does not: weight 1, no spread, n = 3
        let out = normalize(&contributions([("a", 1e308), ("b", 1e308), ("c", 1e308)])).unwrap();
        for v in out.values() {
            assert!((v / 1e308 - 1.0).abs() < 1e-12, "{v}");
        }
    }

    #[test]
    fn unrepresentable_merit_rejected() {
        // weight 3 * adjustment 1.1 pushes 1.7e308 past f64::MAX
        let err = normalize(&contributions([("a", 1.7e308), ("b", 0.0), ("c", 0.0)])).unwrap_err();
        assert_eq!(err, MeritError::ArithmeticOverflow { participant: id("a") });
    }

    #[test]
    fn formula_display() {
        assert_eq!(Formula::SmallGroup.to_string(), "small_group");
        assert_eq!(Formula::LargeGroup.to_string(), "large_group");
    }

    proptest! {
        #[test]
        fn preserves_key_set(values in proptest::collection::vec(0.0f64..1e6, 0..30)) {
            let input = contributions(values.iter().enumerate().map(|(i, &v)| (i as u64, v)));
            let out = normalize(&input).unwrap();
            prop_assert!(out.keys().eq(input.keys()));
        }

        #[test]
        fn non_negative(values in proptest::collection::vec(0.0f64..1e6, 0..30)) {
            let input = contributions(values.iter().enumerate().map(|(i, &v)| (i as u64, v)));
            let out = normalize(&input).unwrap();
            prop_assert!(out.values().all(|&v| v >= 0.0));
        }

        #[test]
        fn single_identity(v in 0.0f64..1e9) {
            let input = contributions([("x", v)]);
            prop_assert_eq!(normalize(&input).unwrap(), input);
        }

        #[test]
        fn insertion_order_irrelevant(x in 0.0f64..1e6, y in 0.0f64..1e6) {
            let ab = normalize(&contributions([("a", x), ("b", y)])).unwrap();
            let ba = normalize(&contributions([("b", y), ("a", x)])).unwrap();
            prop_assert_eq!(ab, ba);
        }
    }
}
