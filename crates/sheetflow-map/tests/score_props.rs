use proptest::prelude::*;
use sheetflow_map::{normalize, score};

proptest! {
    #[test]
    fn score_is_symmetric(a in ".{0,24}", b in ".{0,24}") {
        let forward = score(&a, &b);
        let backward = score(&b, &a);
        prop_assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn score_stays_in_unit_interval(a in ".{0,24}", b in ".{0,24}") {
        let value = score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&value));
    }

    #[test]
    fn identical_inputs_score_one(a in ".{1,24}") {
        prop_assert_eq!(score(&a, &a), 1.0);
    }

    #[test]
    fn normalization_is_idempotent(a in ".{0,24}") {
        let once = normalize(&a);
        prop_assert_eq!(normalize(&once), once.clone());
    }
}
