//! Property tests over the public engine surface.

use gongfen_core::traits::{ContributionNormalizer, TimeCoefficientCalculator};
use gongfen_core::types::{ContributionMap, ParticipantId, TeamScoreBudget, contributions};
use gongfen_engine::{MeritEngine, normalize_to_total};
use gongfen_tests::helpers::*;
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

fn group_strategy() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.0f64..1e5, 0..40)
}

proptest! {
    #[test]
    fn cardinality_preserved(values in group_strategy()) {
        let input = named_group(&values);
        let out = MeritEngine::new().normalize(&input).unwrap();
        prop_assert!(out.keys().eq(input.keys()));
    }

    #[test]
    fn never_negative(values in group_strategy()) {
        let out = MeritEngine::new().normalize(&named_group(&values)).unwrap();
        prop_assert!(out.values().all(|&v| v >= 0.0 && v.is_finite()));
    }

    #[test]
    fn insertion_order_irrelevant(values in group_strategy(), seed in any::<u64>()) {
        let input = named_group(&values);
        let mut pairs: Vec<(ParticipantId, f64)> = input.clone().into_iter().collect();
        pairs.shuffle(&mut StdRng::seed_from_u64(seed));
        let shuffled: ContributionMap = pairs.into_iter().collect();
        let engine = MeritEngine::new();
        prop_assert_eq!(engine.normalize(&input).unwrap(), engine.normalize(&shuffled).unwrap());
    }

    #[test]
    fn any_negative_rejects(values in proptest::collection::vec(0.0f64..1e5, 1..20), bad in -1e5f64..-1e-9) {
        let mut input = named_group(&values);
        input.insert(ParticipantId::from("bad"), bad);
        prop_assert!(MeritEngine::new().normalize(&input).is_err());
    }

    #[test]
    fn budget_rescale_idempotent(values in proptest::collection::vec(0.01f64..1e5, 1..30)) {
        let budget = TeamScoreBudget::new(100.0).unwrap();
        let once = normalize_to_total(&named_group(&values), budget);
        let twice = normalize_to_total(&once, budget);
        for (k, v) in &once {
            prop_assert!((v - twice[k]).abs() <= 1e-9 * v.max(1.0));
        }
    }

    #[test]
    fn coefficient_in_band(offset in -1000i64..1000) {
        let c = MeritEngine::new()
            .time_coefficient(&window_offset(reference_due(), offset))
            .value();
        prop_assert!((0.30..=1.30).contains(&c));
    }

    #[test]
    fn pair_order_symmetric(x in 0.0f64..1e5, y in 0.0f64..1e5) {
        let engine = MeritEngine::new();
        let ab = engine.normalize(&contributions([("a", x), ("b", y)])).unwrap();
        let ba = engine.normalize(&contributions([("b", y), ("a", x)])).unwrap();
        prop_assert_eq!(score(&ab, "a"), score(&ba, "a"));
    }
}
