//! Straight-line membership segment, the building block of the polygonal shapes.

use crate::error::{check_membership, invalid_shape, FuzzyResult};
use crate::membership::Membership;

/// A straight segment from `(x_lower, y_lower)` to `(x_upper, y_upper)`.
///
/// Membership is zero outside `[x_lower, x_upper]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Linear {
    x_lower: f64,
    y_lower: f64,
    x_upper: f64,
    y_upper: f64,
}

impl Linear {
    /// Build a segment between two endpoints.
    ///
    /// Fails with `InvalidShape` unless `x_lower < x_upper` (both finite), and
    /// with `MembershipOutOfRange` if either `y` lies outside `[0.0, 1.0]`.
    pub fn new(x_lower: f64, y_lower: f64, x_upper: f64, y_upper: f64) -> FuzzyResult<Self> {
        if !(x_lower < x_upper) || !x_lower.is_finite() || !x_upper.is_finite() {
            return Err(invalid_shape("linear", "x_lower must be strictly below x_upper"));
        }
        Ok(Self {
            x_lower,
            y_lower: check_membership(y_lower)?,
            x_upper,
            y_upper: check_membership(y_upper)?,
        })
    }

    /// Rising ramp from 0 at `x_lower` to 1 at `x_upper`.
    pub fn ramp(x_lower: f64, x_upper: f64) -> FuzzyResult<Self> {
        Self::new(x_lower, 0.0, x_upper, 1.0)
    }

    /// Left end of the support.
    pub fn x_lower(&self) -> f64 {
        self.x_lower
    }

    /// Right end of the support.
    pub fn x_upper(&self) -> f64 {
        self.x_upper
    }

    /// Membership at `x_lower`.
    pub fn y_lower(&self) -> f64 {
        self.y_lower
    }

    /// Membership at `x_upper`.
    pub fn y_upper(&self) -> f64 {
        self.y_upper
    }

    /// Slope `m` of the line `y = m·x + c`.
    pub fn slope(&self) -> f64 {
        (self.y_upper - self.y_lower) / (self.x_upper - self.x_lower)
    }

    /// Intercept `c` of the line `y = m·x + c`.
    pub fn intercept(&self) -> f64 {
        self.y_upper - self.slope() * self.x_upper
    }

    /// Copy raised by `by`. Fails if either end leaves `[0.0, 1.0]`.
    pub fn shifted_up(&self, by: f64) -> FuzzyResult<Self> {
        Self::new(self.x_lower, self.y_lower + by, self.x_upper, self.y_upper + by)
    }

    /// Copy lowered by `by`. Fails if either end leaves `[0.0, 1.0]`.
    pub fn shifted_down(&self, by: f64) -> FuzzyResult<Self> {
        Self::new(self.x_lower, self.y_lower - by, self.x_upper, self.y_upper - by)
    }

    /// Copy moved `by` towards negative x.
    pub fn shifted_left(&self, by: f64) -> FuzzyResult<Self> {
        Self::new(self.x_lower - by, self.y_lower, self.x_upper - by, self.y_upper)
    }

    /// Copy moved `by` towards positive x.
    pub fn shifted_right(&self, by: f64) -> FuzzyResult<Self> {
        Self::new(self.x_lower + by, self.y_lower, self.x_upper + by, self.y_upper)
    }

    fn midpoint(&self) -> f64 {
        (self.x_lower + self.x_upper) / 2.0
    }
}

impl Membership for Linear {
    fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() || x < self.x_lower || x > self.x_upper {
            return 0.0;
        }
        let t = (x - self.x_lower) / (self.x_upper - self.x_lower);
        let (lo, hi) = if self.y_lower <= self.y_upper {
            (self.y_lower, self.y_upper)
        } else {
            (self.y_upper, self.y_lower)
        };
        // Interpolation may overshoot an endpoint by one ulp.
        (self.y_lower + (self.y_upper - self.y_lower) * t).clamp(lo, hi)
    }

    /// Trapezoid between the segment and the x-axis, including the
    /// rectangle under the lower of the two heights.
    fn area(&self) -> f64 {
        0.5 * (self.x_upper - self.x_lower) * (self.y_lower + self.y_upper)
    }

    /// ```text
    /// (2/3·m·((x0+x1)² − x0·x1) + c·(x0+x1)) / (m·(x0+x1) + 2c)
    /// ```
    ///
    /// The denominator equals `y_lower + y_upper`; a segment lying on the axis
    /// has no mass and reports its midpoint.
    fn weighted_mean(&self) -> f64 {
        if self.y_lower + self.y_upper <= 0.0 {
            return self.midpoint();
        }
        let (x0, x1) = (self.x_lower, self.x_upper);
        let sum = x0 + x1;
        let m = self.slope();
        let c = self.intercept();
        ((2.0 / 3.0) * m * (sum * sum - x0 * x1) + c * sum) / (m * sum + 2.0 * c)
    }

    fn max_membership_at(&self) -> f64 {
        if self.y_lower > self.y_upper {
            self.x_lower
        } else if self.y_upper > self.y_lower {
            self.x_upper
        } else {
            self.midpoint()
        }
    }
}
