use lodot_math::{mean, percent, ratio, round_f64, safe_div};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ratio_zero_denominator_is_zero(numer in 0usize..100_000) {
        prop_assert_eq!(ratio(numer, 0, 2), 0.0);
    }

    #[test]
    fn percent_of_part_is_bounded(whole in 1usize..10_000, frac in 0.0f64..=1.0) {
        let part = ((whole as f64) * frac).floor() as usize;
        let got = percent(part, whole, 2);
        prop_assert!((0.0..=100.0).contains(&got));
    }

    #[test]
    fn round_is_idempotent(value in -1.0e6f64..1.0e6, decimals in 0u32..6) {
        let once = round_f64(value, decimals);
        prop_assert_eq!(round_f64(once, decimals), once);
    }

    #[test]
    fn safe_div_never_produces_nan_for_zero_denominator(numer in -1.0e6f64..1.0e6) {
        prop_assert_eq!(safe_div(numer, 0.0), 0.0);
    }

    #[test]
    fn mean_is_between_min_and_max(values in prop::collection::vec(-1000.0f64..1000.0, 1..50)) {
        let m = mean(&values);
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(m >= min - 1e-9);
        prop_assert!(m <= max + 1e-9);
    }
}
