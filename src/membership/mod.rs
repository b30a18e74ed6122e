//! Continuous membership functions.
//!
//! Every shape implements [`Membership`]: evaluation at a point plus three
//! closed-form derived quantities used by [`crate::defuzzify`].
//!
//! | Shape | Plateau / maximum convention |
//! |-------|------------------------------|
//! | [`Linear`] | higher end; midpoint when flat |
//! | [`Triangular`] | apex |
//! | [`Trapezoidal`] | plateau midpoint |
//! | [`Gaussian`] | center |
//! | [`SShaped`] | `x_upper` |
//! | [`ZShaped`] | `x_lower` |
//!
//! [`MembershipFunction`] closes the family into one enum so mixed shapes can
//! share a slice. All shapes are immutable; the `shifted_*` methods return a
//! re-validated copy and fail instead of producing an invalid shape.

mod gaussian;
mod linear;
mod s_curve;
mod trapezoidal;
mod triangular;

pub use gaussian::Gaussian;
pub use linear::Linear;
pub use s_curve::{SShaped, ZShaped};
pub use trapezoidal::Trapezoidal;
pub use triangular::Triangular;

use crate::error::FuzzyResult;
use crate::point::{Point, WeightedPoint};

/// Capability shared by every membership function.
pub trait Membership {
    /// Membership at `x`, in `[0.0, 1.0]` for every `x` (NaN included).
    fn evaluate(&self, x: f64) -> f64;

    /// Area between the curve and the x-axis.
    fn area(&self) -> f64;

    /// `∫x·μ(x)dx / ∫μ(x)dx`.
    fn weighted_mean(&self) -> f64;

    /// An `x` at which membership is maximal.
    fn max_membership_at(&self) -> f64;

    /// Membership at the coordinate of `point`.
    fn evaluate_point(&self, point: &Point) -> f64 {
        self.evaluate(point.coordinate())
    }

    /// Pair `point` with its membership.
    fn weighted_point(&self, point: &Point) -> FuzzyResult<WeightedPoint> {
        WeightedPoint::new(point.clone(), self.evaluate_point(point))
    }
}

impl<M: Membership + ?Sized> Membership for &M {
    fn evaluate(&self, x: f64) -> f64 {
        (**self).evaluate(x)
    }

    fn area(&self) -> f64 {
        (**self).area()
    }

    fn weighted_mean(&self) -> f64 {
        (**self).weighted_mean()
    }

    fn max_membership_at(&self) -> f64 {
        (**self).max_membership_at()
    }
}

/// `Σ(x·a) / Σa` over `(x, a)` pairs; `None` when the pieces carry no area.
pub(crate) fn area_weighted_mean(pieces: &[(f64, f64)]) -> Option<f64> {
    let total: f64 = pieces.iter().map(|&(_, a)| a).sum();
    if total > 0.0 {
        Some(pieces.iter().map(|&(x, a)| x * a).sum::<f64>() / total)
    } else {
        None
    }
}

/// Any of the supported membership shapes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MembershipFunction {
    /// Straight segment.
    Linear(Linear),
    /// Triangle.
    Triangular(Triangular),
    /// Trapezoid.
    Trapezoidal(Trapezoidal),
    /// Gaussian bell.
    Gaussian(Gaussian),
    /// Quadratic S curve.
    SShaped(SShaped),
    /// Mirrored quadratic S curve.
    ZShaped(ZShaped),
}

impl MembershipFunction {
    /// Lowercase name of the shape.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Linear(_) => "linear",
            Self::Triangular(_) => "triangle",
            Self::Trapezoidal(_) => "trapezoid",
            Self::Gaussian(_) => "gaussian",
            Self::SShaped(_) => "s-shaped",
            Self::ZShaped(_) => "z-shaped",
        }
    }

    /// Copy raised by `by`; fails if any membership would leave `[0.0, 1.0]`.
    pub fn shifted_up(&self, by: f64) -> FuzzyResult<Self> {
        match self {
            Self::Linear(s) => s.shifted_up(by).map(Self::Linear),
            Self::Triangular(s) => s.shifted_up(by).map(Self::Triangular),
            Self::Trapezoidal(s) => s.shifted_up(by).map(Self::Trapezoidal),
            Self::Gaussian(s) => s.shifted_up(by).map(Self::Gaussian),
            Self::SShaped(s) => s.shifted_up(by).map(Self::SShaped),
            Self::ZShaped(s) => s.shifted_up(by).map(Self::ZShaped),
        }
    }

    /// Copy lowered by `by`; fails if any membership would leave `[0.0, 1.0]`.
    pub fn shifted_down(&self, by: f64) -> FuzzyResult<Self> {
        match self {
            Self::Linear(s) => s.shifted_down(by).map(Self::Linear),
            Self::Triangular(s) => s.shifted_down(by).map(Self::Triangular),
            Self::Trapezoidal(s) => s.shifted_down(by).map(Self::Trapezoidal),
            Self::Gaussian(s) => s.shifted_down(by).map(Self::Gaussian),
            Self::SShaped(s) => s.shifted_down(by).map(Self::SShaped),
            Self::ZShaped(s) => s.shifted_down(by).map(Self::ZShaped),
        }
    }

    /// Copy moved `by` towards negative x.
    pub fn shifted_left(&self, by: f64) -> FuzzyResult<Self> {
        match self {
            Self::Linear(s) => s.shifted_left(by).map(Self::Linear),
            Self::Triangular(s) => s.shifted_left(by).map(Self::Triangular),
            Self::Trapezoidal(s) => s.shifted_left(by).map(Self::Trapezoidal),
            Self::Gaussian(s) => s.shifted_left(by).map(Self::Gaussian),
            Self::SShaped(s) => s.shifted_left(by).map(Self::SShaped),
            Self::ZShaped(s) => s.shifted_left(by).map(Self::ZShaped),
        }
    }

    /// Copy moved `by` towards positive x.
    pub fn shifted_right(&self, by: f64) -> FuzzyResult<Self> {
        match self {
            Self::Linear(s) => s.shifted_right(by).map(Self::Linear),
            Self::Triangular(s) => s.shifted_right(by).map(Self::Triangular),
            Self::Trapezoidal(s) => s.shifted_right(by).map(Self::Trapezoidal),
            Self::Gaussian(s) => s.shifted_right(by).map(Self::Gaussian),
            Self::SShaped(s) => s.shifted_right(by).map(Self::SShaped),
            Self::ZShaped(s) => s.shifted_right(by).map(Self::ZShaped),
        }
    }

    fn as_membership(&self) -> &dyn Membership {
        match self {
            Self::Linear(s) => s,
            Self::Triangular(s) => s,
            Self::Trapezoidal(s) => s,
            Self::Gaussian(s) => s,
            Self::SShaped(s) => s,
            Self::ZShaped(s) => s,
        }
    }
}

impl Membership for MembershipFunction {
    fn evaluate(&self, x: f64) -> f64 {
        self.as_membership().evaluate(x)
    }

    fn area(&self) -> f64 {
        self.as_membership().area()
    }

    fn weighted_mean(&self) -> f64 {
        self.as_membership().weighted_mean()
    }

    fn max_membership_at(&self) -> f64 {
        self.as_membership().max_membership_at()
    }
}

impl From<Linear> for MembershipFunction {
    fn from(shape: Linear) -> Self {
        Self::Linear(shape)
    }
}

impl From<Triangular> for MembershipFunction {
    fn from(shape: Triangular) -> Self {
        Self::Triangular(shape)
    }
}

impl From<Trapezoidal> for MembershipFunction {
    fn from(shape: Trapezoidal) -> Self {
        Self::Trapezoidal(shape)
    }
}

impl From<Gaussian> for MembershipFunction {
    fn from(shape: Gaussian) -> Self {
        Self::Gaussian(shape)
    }
}

impl From<SShaped> for MembershipFunction {
    fn from(shape: SShaped) -> Self {
        Self::SShaped(shape)
    }
}

impl From<ZShaped> for MembershipFunction {
    fn from(shape: ZShaped) -> Self {
        Self::ZShaped(shape)
    }
}
