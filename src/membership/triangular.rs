//! Triangular membership built from two [`Linear`] segments sharing a peak.

use crate::error::{invalid_shape, FuzzyResult};
use crate::membership::{area_weighted_mean, Linear, Membership};

/// Triangle with base height `y_base` at both outer breakpoints and `y_peak`
/// at `x_middle`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Triangular {
    rising: Linear,
    falling: Linear,
}

impl Triangular {
    /// Build a triangle. Breakpoints must be strictly increasing.
    pub fn new(
        x_lower: f64,
        x_middle: f64,
        x_upper: f64,
        y_base: f64,
        y_peak: f64,
    ) -> FuzzyResult<Self> {
        if !(x_lower < x_middle && x_middle < x_upper) {
            return Err(invalid_shape("triangle", "breakpoints must be strictly increasing"));
        }
        Ok(Self {
            rising: Linear::new(x_lower, y_base, x_middle, y_peak)?,
            falling: Linear::new(x_middle, y_peak, x_upper, y_base)?,
        })
    }

    /// Triangle rising from 0 to 1 at `x_middle` and back to 0.
    pub fn unit(x_lower: f64, x_middle: f64, x_upper: f64) -> FuzzyResult<Self> {
        Self::new(x_lower, x_middle, x_upper, 0.0, 1.0)
    }

    /// Left corner.
    pub fn x_lower(&self) -> f64 {
        self.rising.x_lower()
    }

    /// Apex.
    pub fn x_middle(&self) -> f64 {
        self.rising.x_upper()
    }

    /// Right corner.
    pub fn x_upper(&self) -> f64 {
        self.falling.x_upper()
    }

    /// Height at both corners.
    pub fn y_base(&self) -> f64 {
        self.rising.y_lower()
    }

    /// Height at the apex.
    pub fn y_peak(&self) -> f64 {
        self.rising.y_upper()
    }

    /// Segment from the left corner to the apex.
    pub fn rising(&self) -> &Linear {
        &self.rising
    }

    /// Segment from the apex to the right corner.
    pub fn falling(&self) -> &Linear {
        &self.falling
    }

    /// Copy raised by `by`.
    pub fn shifted_up(&self, by: f64) -> FuzzyResult<Self> {
        self.rebuild(0.0, by)
    }

    /// Copy lowered by `by`.
    pub fn shifted_down(&self, by: f64) -> FuzzyResult<Self> {
        self.rebuild(0.0, -by)
    }

    /// Copy moved `by` towards negative x.
    pub fn shifted_left(&self, by: f64) -> FuzzyResult<Self> {
        self.rebuild(-by, 0.0)
    }

    /// Copy moved `by` towards positive x.
    pub fn shifted_right(&self, by: f64) -> FuzzyResult<Self> {
        self.rebuild(by, 0.0)
    }

    fn rebuild(&self, dx: f64, dy: f64) -> FuzzyResult<Self> {
        Self::new(
            self.x_lower() + dx,
            self.x_middle() + dx,
            self.x_upper() + dx,
            self.y_base() + dy,
            self.y_peak() + dy,
        )
    }
}

impl Membership for Triangular {
    fn evaluate(&self, x: f64) -> f64 {
        if x < self.x_lower() || x > self.x_upper() {
            0.0
        } else if x < self.x_middle() {
            self.rising.evaluate(x)
        } else {
            self.falling.evaluate(x)
        }
    }

    fn area(&self) -> f64 {
        self.rising.area() + self.falling.area()
    }

    /// Segment weighted means combined by segment area.
    fn weighted_mean(&self) -> f64 {
        area_weighted_mean(&[
            (self.rising.weighted_mean(), self.rising.area()),
            (self.falling.weighted_mean(), self.falling.area()),
        ])
        .unwrap_or_else(|| self.x_middle())
    }

    /// The apex, or the left corner for an inverted triangle.
    fn max_membership_at(&self) -> f64 {
        if self.y_peak() >= self.y_base() {
            self.x_middle()
        } else {
            self.x_lower()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FuzzyError;

    fn unit_0_5_10() -> Triangular {
        Triangular::unit(0.0, 5.0, 10.0).unwrap()
    }

    #[test]
    fn test_evaluate_reference_points() {
        let t = unit_0_5_10();
        assert_eq!(t.evaluate(5.0), 1.0);
        assert_eq!(t.evaluate(0.0), 0.0);
        assert!(t.evaluate(10.0).abs() < 1e-12);
        assert!((t.evaluate(2.5) - 0.5).abs() < 1e-12);
        assert!((t.evaluate(7.5) - 0.5).abs() < 1e-12);
        assert_eq!(t.evaluate(-3.0), 0.0);
        assert_eq!(t.evaluate(12.0), 0.0);
        assert_eq!(t.evaluate(f64::NAN), 0.0);
    }

    #[test]
    fn test_area_is_half_base_times_height() {
        assert!((unit_0_5_10().area() - 5.0).abs() < 1e-12);
        let t = Triangular::unit(0.0, 10.0, 20.0).unwrap();
        assert!((t.area() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_mean_of_symmetric_triangle_is_apex() {
        assert!((unit_0_5_10().weighted_mean() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_mean_of_skewed_triangle_is_centroid() {
        // Centroid of a triangle with corners 0, 2, 8 is (0 + 2 + 8) / 3.
        let t = Triangular::unit(0.0, 2.0, 8.0).unwrap();
        assert!((t.weighted_mean() - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_membership_at_apex() {
        assert_eq!(unit_0_5_10().max_membership_at(), 5.0);
        let inverted = Triangular::new(0.0, 5.0, 10.0, 0.8, 0.1).unwrap();
        assert_eq!(inverted.max_membership_at(), 0.0);
    }

    #[test]
    fn test_non_increasing_breakpoints_rejected() {
        for (a, b, c) in [(0.0, 0.0, 1.0), (0.0, 2.0, 2.0), (3.0, 2.0, 4.0), (0.0, 5.0, 1.0)] {
            assert!(
                matches!(Triangular::unit(a, b, c), Err(FuzzyError::InvalidShape { .. })),
                "({}, {}, {}) should be rejected",
                a,
                b,
                c
            );
        }
    }

    #[test]
    fn test_heights_out_of_range_rejected() {
        assert!(matches!(
            Triangular::new(0.0, 1.0, 2.0, 0.0, 1.5),
            Err(FuzzyError::MembershipOutOfRange { .. })
        ));
    }

    #[test]
    fn test_shifts_keep_shape() {
        let t = unit_0_5_10();
        let right = t.shifted_right(2.0).unwrap();
        assert_eq!(right.x_middle(), 7.0);
        assert_eq!(right.evaluate(7.0), 1.0);
        assert!((right.area() - t.area()).abs() < 1e-12);
        let left = t.shifted_left(5.0).unwrap();
        assert_eq!(left.x_lower(), -5.0);
        assert!(t.shifted_up(0.1).is_err());
        let lowered = t.shifted_down(0.0).unwrap();
        assert_eq!(lowered, t);
        let raised_base = Triangular::new(0.0, 5.0, 10.0, 0.0, 0.5).unwrap().shifted_up(0.5).unwrap();
        assert!((raised_base.y_peak() - 1.0).abs() < 1e-12);
        assert!(raised_base.shifted_down(0.6).is_err());
    }
}
