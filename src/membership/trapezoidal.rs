//! Trapezoidal membership: two [`Linear`] shoulders around a flat plateau.

use crate::error::{invalid_shape, FuzzyResult};
use crate::membership::{area_weighted_mean, Linear, Membership};

/// Trapezoid `x_lower < x_middle1 < x_middle2 < x_upper` with heights
/// `y_lower` at the left corner, `y_middle` on the plateau and `y_upper`
/// at the right corner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trapezoidal {
    rising: Linear,
    falling: Linear,
}

impl Trapezoidal {
    /// Build a trapezoid.
    ///
    /// Fails with `InvalidShape` when the breakpoints are not strictly
    /// ordered, when the plateau is empty (a triangle), or when both
    /// shoulders slope the same way (a parallelogram).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x_lower: f64,
        x_middle1: f64,
        x_middle2: f64,
        x_upper: f64,
        y_lower: f64,
        y_middle: f64,
        y_upper: f64,
    ) -> FuzzyResult<Self> {
        if !(x_lower < x_middle1 && x_middle2 < x_upper) {
            return Err(invalid_shape("trapezoid", "shoulders must have positive width"));
        }
        let left_slope = (y_middle - y_lower) / (x_middle1 - x_lower);
        let right_slope = (y_upper - y_middle) / (x_upper - x_middle2);
        if left_slope * right_slope > 0.0 {
            return Err(invalid_shape("trapezoid", "shoulders slope the same way (parallelogram)"));
        }
        if !(x_middle1 < x_middle2) {
            return Err(invalid_shape("trapezoid", "plateau is empty (triangle)"));
        }
        Ok(Self {
            rising: Linear::new(x_lower, y_lower, x_middle1, y_middle)?,
            falling: Linear::new(x_middle2, y_middle, x_upper, y_upper)?,
        })
    }

    /// Trapezoid with feet at 0 and a plateau at 1.
    pub fn unit(x_lower: f64, x_middle1: f64, x_middle2: f64, x_upper: f64) -> FuzzyResult<Self> {
        Self::new(x_lower, x_middle1, x_middle2, x_upper, 0.0, 1.0, 0.0)
    }

    /// Left corner.
    pub fn x_lower(&self) -> f64 {
        self.rising.x_lower()
    }

    /// Start of the plateau.
    pub fn x_middle1(&self) -> f64 {
        self.rising.x_upper()
    }

    /// End of the plateau.
    pub fn x_middle2(&self) -> f64 {
        self.falling.x_lower()
    }

    /// Right corner.
    pub fn x_upper(&self) -> f64 {
        self.falling.x_upper()
    }

    /// Height at the left corner.
    pub fn y_lower(&self) -> f64 {
        self.rising.y_lower()
    }

    /// Plateau height.
    pub fn y_middle(&self) -> f64 {
        self.rising.y_upper()
    }

    /// Height at the right corner.
    pub fn y_upper(&self) -> f64 {
        self.falling.y_upper()
    }

    /// Left shoulder.
    pub fn rising(&self) -> &Linear {
        &self.rising
    }

    /// Right shoulder.
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
            self.x_middle1() + dx,
            self.x_middle2() + dx,
            self.x_upper() + dx,
            self.y_lower() + dy,
            self.y_middle() + dy,
            self.y_upper() + dy,
        )
    }

    fn plateau_midpoint(&self) -> f64 {
        (self.x_middle1() + self.x_middle2()) / 2.0
    }

    fn plateau_area(&self) -> f64 {
        self.y_middle() * (self.x_middle2() - self.x_middle1())
    }
}

impl Membership for Trapezoidal {
    fn evaluate(&self, x: f64) -> f64 {
        if x < self.x_lower() || x > self.x_upper() {
            0.0
        } else if x <= self.x_middle1() {
            self.rising.evaluate(x)
        } else if x < self.x_middle2() {
            self.y_middle()
        } else {
            self.falling.evaluate(x)
        }
    }

    fn area(&self) -> f64 {
        self.rising.area() + self.falling.area() + self.plateau_area()
    }

    fn weighted_mean(&self) -> f64 {
        area_weighted_mean(&[
            (self.rising.weighted_mean(), self.rising.area()),
            (self.plateau_midpoint(), self.plateau_area()),
            (self.falling.weighted_mean(), self.falling.area()),
        ])
        .unwrap_or_else(|| self.plateau_midpoint())
    }

    /// Midpoint of the plateau when it is the highest part of the curve,
    /// otherwise the higher outer corner.
    fn max_membership_at(&self) -> f64 {
        let plateau = self.y_middle();
        if plateau >= self.y_lower() && plateau >= self.y_upper() {
            self.plateau_midpoint()
        } else if self.y_lower() >= self.y_upper() {
            self.x_lower()
        } else {
            self.x_upper()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FuzzyError;

    fn unit_trap() -> Trapezoidal {
        Trapezoidal::unit(0.0, 2.0, 6.0, 8.0).unwrap()
    }

    fn assert_invalid_shape(result: FuzzyResult<Trapezoidal>, reason_fragment: &str) {
        match result {
            Err(FuzzyError::InvalidShape { shape, reason }) => {
                assert_eq!(shape, "trapezoid");
                assert!(reason.contains(reason_fragment), "reason was {:?}", reason);
            }
            other => panic!("expected InvalidShape, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_regions() {
        let t = unit_trap();
        assert_eq!(t.evaluate(-1.0), 0.0);
        assert_eq!(t.evaluate(0.0), 0.0);
        assert!((t.evaluate(1.0) - 0.5).abs() < 1e-12);
        assert_eq!(t.evaluate(2.0), 1.0);
        assert_eq!(t.evaluate(4.0), 1.0);
        assert_eq!(t.evaluate(6.0), 1.0);
        assert!((t.evaluate(7.0) - 0.5).abs() < 1e-12);
        assert!(t.evaluate(8.0).abs() < 1e-12);
        assert_eq!(t.evaluate(9.0), 0.0);
    }

    #[test]
    fn test_area_is_shoulders_plus_plateau() {
        // 1 + 1 + 4
        assert!((unit_trap().area() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_mean_of_symmetric_trapezoid() {
        assert!((unit_trap().weighted_mean() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_mean_of_asymmetric_trapezoid() {
        // Pieces: rising [0,2] area 1 mean 4/3, plateau [2,4] area 2 mean 3,
        // falling [4,10] area 3 mean 6.
        let t = Trapezoidal::unit(0.0, 2.0, 4.0, 10.0).unwrap();
        let expected = (4.0 / 3.0 + 2.0 * 3.0 + 3.0 * 6.0) / 6.0;
        assert!((t.weighted_mean() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_max_membership_at_plateau_midpoint() {
        assert_eq!(unit_trap().max_membership_at(), 4.0);
        let valley = Trapezoidal::new(0.0, 2.0, 6.0, 8.0, 0.9, 0.1, 0.5).unwrap();
        assert_eq!(valley.max_membership_at(), 0.0);
    }

    #[test]
    fn test_empty_plateau_rejected() {
        assert_invalid_shape(Trapezoidal::unit(0.0, 4.0, 4.0, 8.0), "triangle");
        assert_invalid_shape(Trapezoidal::unit(0.0, 5.0, 3.0, 8.0), "triangle");
    }

    #[test]
    fn test_same_sign_shoulders_rejected() {
        assert_invalid_shape(
            Trapezoidal::new(0.0, 2.0, 6.0, 8.0, 0.0, 0.5, 1.0),
            "parallelogram",
        );
        assert_invalid_shape(
            Trapezoidal::new(0.0, 2.0, 6.0, 8.0, 1.0, 0.5, 0.0),
            "parallelogram",
        );
    }

    #[test]
    fn test_zero_width_shoulders_rejected() {
        assert_invalid_shape(Trapezoidal::unit(2.0, 2.0, 6.0, 8.0), "width");
        assert_invalid_shape(Trapezoidal::unit(0.0, 2.0, 8.0, 8.0), "width");
    }

    #[test]
    fn test_shifts() {
        let t = unit_trap();
        let right = t.shifted_right(1.0).unwrap();
        assert_eq!(right.x_middle1(), 3.0);
        assert_eq!(right.evaluate(5.0), 1.0);
        assert!(t.shifted_up(0.2).is_err());
        let lowered = Trapezoidal::new(0.0, 2.0, 6.0, 8.0, 0.2, 0.9, 0.2)
            .unwrap()
            .shifted_down(0.2)
            .unwrap();
        assert!(lowered.y_lower().abs() < 1e-12);
        assert_eq!(t.shifted_left(8.0).unwrap().x_upper(), 0.0);
    }
}
