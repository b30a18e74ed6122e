//! Serialisation of configuration, strategies and shapes.
//!
//! Run with: `cargo test --features serde`

#![cfg(feature = "serde")]

use fuzzy_core::defuzzify::Defuzzification;
use fuzzy_core::membership::{Gaussian, MembershipFunction};
use fuzzy_core::point::{Point, WeightedPoint};
use fuzzy_core::set::FuzzySetConfig;

#[test]
fn test_config_round_trips() {
    let config = FuzzySetConfig {
        capacity: 64,
        auto_clean: true,
        ..FuzzySetConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: FuzzySetConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.capacity, 64);
    assert!(back.auto_clean);
    assert_eq!(back.zero_tolerance, config.zero_tolerance);
    assert_eq!(back.core_threshold, config.core_threshold);
}

#[test]
fn test_strategy_names_are_snake_case() {
    for method in Defuzzification::ALL {
        let json = serde_json::to_string(&method).unwrap();
        assert_eq!(json, format!("\"{method}\""));
        let back: Defuzzification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, method);
    }
}

#[test]
fn test_point_serialises_without_identity() {
    let p = Point::new(2.5, Some("mild"));
    let value = serde_json::to_value(&p).unwrap();
    assert_eq!(value, serde_json::json!({ "coordinate": 2.5, "name": "mild" }));

    let wp = WeightedPoint::new(Point::at(1.0), 0.25).unwrap();
    let value = serde_json::to_value(&wp).unwrap();
    assert_eq!(value["membership"], 0.25);
    assert_eq!(value["point"]["name"], serde_json::Value::Null);
}

#[test]
fn test_shape_serialises_with_variant_tag() {
    let g = MembershipFunction::from(Gaussian::new(1.5, -2.0).unwrap());
    let value = serde_json::to_value(&g).unwrap();
    assert_eq!(value["Gaussian"]["width"], 1.5);
    assert_eq!(value["Gaussian"]["center"], -2.0);
}
