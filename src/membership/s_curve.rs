//! Quadratic S-shaped and Z-shaped membership curves.
//!
//! The S curve eases in from `y_lower` with `y_lower + k·t²` up to the
//! midpoint of `[x_lower, x_upper]`, then eases out with `y_upper − k·(1−t)²`,
//! where `t` is the normalised position and `k = 2·(y_upper − y_lower)`.
//! The Z curve is the same curve mirrored about that midpoint.

use crate::error::{check_membership, invalid_shape, FuzzyError, FuzzyResult};
use crate::membership::Membership;

/// Quadratic ease-in/ease-out from `y_lower` at `x_lower` to `y_upper` at
/// `x_upper`; flat outside the transition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SShaped {
    x_lower: f64,
    y_lower: f64,
    x_upper: f64,
    y_upper: f64,
}

impl SShaped {
    /// Build an S curve.
    pub fn new(x_lower: f64, y_lower: f64, x_upper: f64, y_upper: f64) -> FuzzyResult<Self> {
        if !(x_lower < x_upper) || !x_lower.is_finite() || !x_upper.is_finite() {
            return Err(invalid_shape("s-shaped", "x_lower must be strictly below x_upper"));
        }
        Ok(Self {
            x_lower,
            y_lower: check_membership(y_lower)?,
            x_upper,
            y_upper: check_membership(y_upper)?,
        })
    }

    /// S curve rising from 0 to 1.
    pub fn ramp(x_lower: f64, x_upper: f64) -> FuzzyResult<Self> {
        Self::new(x_lower, 0.0, x_upper, 1.0)
    }

    /// Start of the transition.
    pub fn x_lower(&self) -> f64 {
        self.x_lower
    }

    /// Membership at and below `x_lower`.
    pub fn y_lower(&self) -> f64 {
        self.y_lower
    }

    /// End of the transition.
    pub fn x_upper(&self) -> f64 {
        self.x_upper
    }

    /// Membership at and above `x_upper`.
    pub fn y_upper(&self) -> f64 {
        self.y_upper
    }

    /// Quadratic coefficient `k = 2·(y_upper − y_lower)`.
    pub fn factor(&self) -> f64 {
        (self.y_upper - self.y_lower) * 2.0
    }

    /// Copy raised by `by`.
    pub fn shifted_up(&self, by: f64) -> FuzzyResult<Self> {
        Self::new(self.x_lower, self.y_lower + by, self.x_upper, self.y_upper + by)
    }

    /// Copy lowered by `by`.
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

    fn span(&self) -> f64 {
        self.x_upper - self.x_lower
    }

    fn midpoint(&self) -> f64 {
        (self.x_lower + self.x_upper) / 2.0
    }
}

impl Membership for SShaped {
    fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() {
            0.0
        } else if x <= self.x_lower {
            self.y_lower
        } else if x <= self.midpoint() {
            let t = (x - self.x_lower) / self.span();
            self.y_lower + self.factor() * t * t
        } else if x <= self.x_upper {
            let t = (self.x_upper - x) / self.span();
            self.y_upper - self.factor() * t * t
        } else {
            self.y_upper
        }
    }

    /// Area over the transition `[x_lower, x_upper]`, summed from the two
    /// half integrals.
    fn area(&self) -> f64 {
        let span = self.span();
        let k = self.factor();
        let ease_in = span * (self.y_lower / 2.0 + k / 24.0);
        let ease_out = span * (self.y_upper / 2.0 - k / 24.0);
        ease_in + ease_out
    }

    /// ```text
    /// (y0·(3a + b) + y1·(3b + a) − k·(b − a)/12) / (4·(y0 + y1))
    /// ```
    fn weighted_mean(&self) -> f64 {
        let (y0, y1) = (self.y_lower, self.y_upper);
        if y0 + y1 <= 0.0 {
            return self.midpoint();
        }
        let (a, b, k) = (self.x_lower, self.x_upper, self.factor());
        (y0 * (3.0 * a + b) + y1 * (3.0 * b + a) - k * (b - a) / 12.0) / (y0 + y1) / 4.0
    }

    /// `x_upper` for a rising curve, `x_lower` for a falling one.
    fn max_membership_at(&self) -> f64 {
        if self.y_upper >= self.y_lower {
            self.x_upper
        } else {
            self.x_lower
        }
    }
}

/// Mirror image of [`SShaped`] about the midpoint of `[x_lower, x_upper]`:
/// `Z(x) = S(x_lower + x_upper − x)`.
///
/// With the same parameters, the Z curve starts at `y_upper` left of the
/// transition and ends at `y_lower` right of it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ZShaped {
    curve: SShaped,
}

impl ZShaped {
    /// Build a Z curve. Validity rules are those of [`SShaped::new`].
    pub fn new(x_lower: f64, y_lower: f64, x_upper: f64, y_upper: f64) -> FuzzyResult<Self> {
        let curve = SShaped::new(x_lower, y_lower, x_upper, y_upper).map_err(|err| match err {
            FuzzyError::InvalidShape { reason, .. } => invalid_shape("z-shaped", reason),
            other => other,
        })?;
        Ok(Self { curve })
    }

    /// Z curve falling from 1 to 0.
    pub fn ramp(x_lower: f64, x_upper: f64) -> FuzzyResult<Self> {
        Self::new(x_lower, 0.0, x_upper, 1.0)
    }

    /// The S curve this one mirrors.
    pub fn mirrored(&self) -> &SShaped {
        &self.curve
    }

    /// Copy raised by `by`.
    pub fn shifted_up(&self, by: f64) -> FuzzyResult<Self> {
        self.curve.shifted_up(by).map(|curve| Self { curve })
    }

    /// Copy lowered by `by`.
    pub fn shifted_down(&self, by: f64) -> FuzzyResult<Self> {
        self.curve.shifted_down(by).map(|curve| Self { curve })
    }

    /// Copy moved `by` towards negative x.
    pub fn shifted_left(&self, by: f64) -> FuzzyResult<Self> {
        self.curve.shifted_left(by).map(|curve| Self { curve })
    }

    /// Copy moved `by` towards positive x.
    pub fn shifted_right(&self, by: f64) -> FuzzyResult<Self> {
        self.curve.shifted_right(by).map(|curve| Self { curve })
    }

    fn reflect(&self, x: f64) -> f64 {
        self.curve.x_lower + self.curve.x_upper - x
    }
}

impl Membership for ZShaped {
    fn evaluate(&self, x: f64) -> f64 {
        self.curve.evaluate(self.reflect(x))
    }

    fn area(&self) -> f64 {
        self.curve.area()
    }

    fn weighted_mean(&self) -> f64 {
        self.reflect(self.curve.weighted_mean())
    }

    fn max_membership_at(&self) -> f64 {
        self.reflect(self.curve.max_membership_at())
    }
}
