//! Serialized forms of rules, units and durations.
#![cfg(feature = "serde")]

use rk_core::RoundingRule;
use rk_time::{round_duration, SignedDuration, TimeUnit, ATTOS_PER_SEC};

#[test]
fn rules_use_kebab_case_names() {
    for rule in RoundingRule::ALL {
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, format!("\"{}\"", rule.name()));
        let back: RoundingRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }
    assert_eq!(
        serde_json::to_string(&RoundingRule::ToNearestOrAwayFromZero).unwrap(),
        "\"to-nearest-or-away-from-zero\""
    );
    assert!(serde_json::from_str::<RoundingRule>("\"ToNearestOrEven\"").is_err());
}

#[test]
fn units_use_lowercase_names() {
    assert_eq!(serde_json::to_string(&TimeUnit::Minutes).unwrap(), "\"minutes\"");
    let unit: TimeUnit = serde_json::from_str("\"nanoseconds\"").unwrap();
    assert_eq!(unit, TimeUnit::Nanoseconds);
}

#[test]
fn durations_are_second_attosecond_pairs() {
    let d = SignedDuration::from_millis(-1_500);
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, "[-1,-500000000000000000]");
    let back: SignedDuration = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);

    let max = serde_json::to_string(&SignedDuration::MAX).unwrap();
    assert_eq!(max, format!("[{},{}]", i64::MAX, ATTOS_PER_SEC - 1));
}

#[test]
fn deserialized_durations_are_normalized() {
    let d: SignedDuration = serde_json::from_str("[2,-500000000000000000]").unwrap();
    assert_eq!(d, SignedDuration::from_millis(1_500));
    assert_eq!(d.to_string(), "1.5s");

    let rounded = round_duration(d, SignedDuration::from_secs(1), RoundingRule::ToNearestOrEven);
    assert_eq!(serde_json::to_string(&rounded).unwrap(), "[2,0]");
}
