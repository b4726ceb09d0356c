//! Property tests for the integer and float rounders.

use proptest::prelude::*;
use rk_core::RoundingRule;
use rk_math::{checked_round_i64, round_f64, round_i64, round_to_significant_digits};

fn rule() -> impl Strategy<Value = RoundingRule> {
    proptest::sample::select(RoundingRule::ALL.to_vec())
}

proptest! {
    #[test]
    fn monotonic(a in any::<i64>(), b in any::<i64>(), inc in any::<i64>(), rule in rule()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(round_i64(lo, inc, rule) <= round_i64(hi, inc, rule));
    }

    #[test]
    fn increment_sign_is_ignored(v in any::<i64>(), inc in (i64::MIN + 1)..=i64::MAX, rule in rule()) {
        prop_assert_eq!(round_i64(v, inc, rule), round_i64(v, -inc, rule));
    }

    #[test]
    fn zero_increment_maps_to_zero(v in any::<i64>(), rule in rule()) {
        prop_assert_eq!(round_i64(v, 0, rule), 0);
    }

    #[test]
    fn exact_multiples_are_unchanged(
        k in -1_000_000_000_000_i64..1_000_000_000_000,
        step in 1_i64..1_000_000,
        rule in rule()
    ) {
        prop_assert_eq!(round_i64(k * step, step, rule), k * step);
    }

    #[test]
    fn lands_on_an_adjacent_multiple(v in any::<i64>(), inc in 1_i64..=i64::MAX, rule in rule()) {
        // Saturated results are covered by `saturation_never_wraps`.
        if let Ok(rounded) = checked_round_i64(v, inc, rule) {
            let (rounded, v, inc) = (i128::from(rounded), i128::from(v), i128::from(inc));
            prop_assert_eq!(rounded % inc, 0);
            prop_assert!((rounded - v).abs() < inc);
        }
    }

    #[test]
    fn saturation_never_wraps(v in any::<i64>(), inc in 1_i64..=i64::MAX, rule in rule()) {
        let rounded = round_i64(v, inc, rule);
        if v >= 0 {
            prop_assert!(rounded >= 0);
        } else {
            prop_assert!(rounded <= 0);
        }
        match rule {
            RoundingRule::Up => prop_assert!(rounded >= v),
            RoundingRule::Down => prop_assert!(rounded <= v),
            _ => {}
        }
    }

    #[test]
    fn significant_digits_keep_a_multiple(v in any::<i64>(), digits in 1_i32..=19, rule in rule()) {
        let rounded = round_to_significant_digits(v, digits, rule);
        if rounded != i64::MAX && rounded != i64::MIN {
            let digits_of_v = v.unsigned_abs().checked_ilog10().map_or(1, |p| p + 1);
            let increment = 10_i64.pow(digits_of_v.saturating_sub(digits as u32));
            prop_assert_eq!(rounded % increment, 0);
        }
    }

    #[test]
    fn float_down_and_up_bracket_the_value(
        v in -1.0e9_f64..1.0e9,
        inc in prop::sample::select(vec![0.01, 0.1, 0.5, 1.0, 5.0, 10.0])
    ) {
        let down = round_f64(v, inc, RoundingRule::Down);
        let up = round_f64(v, inc, RoundingRule::Up);
        let slack = 1e-6 * v.abs().max(1.0);
        prop_assert!(down <= v + slack);
        prop_assert!(up >= v - slack);
        prop_assert!(up - down <= inc + slack);
    }
}
