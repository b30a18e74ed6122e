//! Integration tests for defuzzification over mixed membership families.

use fuzzy_core::defuzzify::{defuzzify, Defuzzification};
use fuzzy_core::membership::{
    Gaussian, Linear, Membership, MembershipFunction, SShaped, Trapezoidal, Triangular, ZShaped,
};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn tri(a: f64, b: f64, c: f64) -> MembershipFunction {
    Triangular::unit(a, b, c).unwrap().into()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ─── tests ───────────────────────────────────────────────────────────────────

#[test]
fn test_adjacent_triangles_meet_in_the_middle() {
    let sets = [tri(0.0, 5.0, 10.0), tri(10.0, 15.0, 20.0)];
    for method in Defuzzification::ALL {
        assert_close(defuzzify(method, &sets), 10.0);
    }
}

#[test]
fn test_s_and_z_ramps_balance() {
    let sets: [MembershipFunction; 2] = [
        SShaped::ramp(0.0, 1.0).unwrap().into(),
        ZShaped::ramp(0.0, 1.0).unwrap().into(),
    ];
    for method in Defuzzification::ALL {
        assert_close(defuzzify(method, &sets), 0.5);
    }
}

#[test]
fn test_order_of_functions_does_not_matter() {
    let mut sets = vec![
        tri(0.0, 2.0, 6.0),
        Linear::new(1.0, 0.3, 7.0, 0.9).unwrap().into(),
        Trapezoidal::unit(3.0, 4.0, 8.0, 12.0).unwrap().into(),
        Gaussian::new(1.25, 9.0).unwrap().into(),
    ];
    let forward: Vec<f64> = Defuzzification::ALL
        .iter()
        .map(|&m| defuzzify(m, &sets))
        .collect();
    sets.reverse();
    for (method, expected) in Defuzzification::ALL.iter().zip(forward) {
        assert_close(defuzzify(*method, &sets), expected);
    }
}

#[test]
fn test_centroid_favours_the_wider_set() {
    let narrow = tri(0.0, 1.0, 2.0);
    let wide = tri(10.0, 20.0, 30.0);
    let centroid = defuzzify(Defuzzification::Centroid, &[narrow, wide]);
    // Areas 1 and 10, means 1 and 20.
    assert_close(centroid, (1.0 + 200.0) / 11.0);
}

#[test]
fn test_results_stay_within_the_representative_points() {
    let sets = [
        tri(-4.0, -1.0, 2.0),
        Trapezoidal::unit(0.0, 1.0, 3.0, 4.0).unwrap().into(),
        Gaussian::new(0.5, 6.0).unwrap().into(),
    ];
    for method in Defuzzification::ALL {
        let value = defuzzify(method, &sets);
        assert!((-1.0..=6.0).contains(&value), "{method}: {value}");
    }
}

#[test]
fn test_trait_objects_defuzzify() {
    let tri = Triangular::unit(0.0, 5.0, 10.0).unwrap();
    let gauss = Gaussian::new(2.0, 5.0).unwrap();
    let sets: [&dyn Membership; 2] = [&tri, &gauss];
    for method in Defuzzification::ALL {
        assert_close(defuzzify(method, &sets), 5.0);
    }
}

#[test]
fn test_apply_matches_free_function() {
    let sets = [tri(0.0, 1.0, 5.0), tri(2.0, 6.0, 7.0)];
    for method in Defuzzification::ALL {
        assert_eq!(method.apply(&sets), defuzzify(method, &sets));
    }
}

#[test]
fn test_flat_zero_segment_yields_zero() {
    let flat: [MembershipFunction; 1] = [Linear::new(0.0, 0.0, 4.0, 0.0).unwrap().into()];
    assert_eq!(defuzzify(Defuzzification::Centroid, &flat), 0.0);
    assert_eq!(defuzzify(Defuzzification::WeightedMean, &flat), 0.0);
    assert_eq!(defuzzify(Defuzzification::WeightedMaxMembershipMean, &flat), 0.0);
    // Unweighted strategy still reports where the maximum sits.
    assert_close(defuzzify(Defuzzification::MaxMembershipMean, &flat), 2.0);
}

#[test]
fn test_weighted_max_mean_uses_high_side_of_falling_curves() {
    let falling: [MembershipFunction; 1] = [SShaped::new(0.0, 0.9, 10.0, 0.1).unwrap().into()];
    assert_eq!(defuzzify(Defuzzification::WeightedMaxMembershipMean, &falling), 0.0);
    assert_eq!(defuzzify(Defuzzification::MaxMembershipMean, &falling), 0.0);

    let rising: [MembershipFunction; 1] = [ZShaped::new(0.0, 0.9, 10.0, 0.1).unwrap().into()];
    assert_eq!(defuzzify(Defuzzification::WeightedMaxMembershipMean, &rising), 10.0);
}
