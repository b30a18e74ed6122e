//! Gaussian bell membership.

use crate::error::{invalid_shape, FuzzyError, FuzzyResult};
use crate::membership::Membership;

/// `√(2π)`, the area under a unit-width bell.
const SQRT_TAU: f64 = 2.506_628_274_631_000_5;

/// Bell curve `exp(−(x − center)² / (2·width²))` peaking at exactly 1.0.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gaussian {
    width: f64,
    center: f64,
}

impl Gaussian {
    /// Build a bell. `width` must be positive and finite.
    pub fn new(width: f64, center: f64) -> FuzzyResult<Self> {
        if !(width > 0.0) || !width.is_finite() {
            return Err(invalid_shape("gaussian", "width must be positive and finite"));
        }
        if !center.is_finite() {
            return Err(invalid_shape("gaussian", "center must be finite"));
        }
        Ok(Self { width, center })
    }

    /// Standard deviation of the bell.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Location of the peak.
    pub fn center(&self) -> f64 {
        self.center
    }

    /// The bell spans `(0, 1]`, so any non-zero vertical shift leaves the
    /// membership range. The error carries the shifted peak when raising and
    /// the shifted tail when lowering.
    pub fn shifted_up(&self, by: f64) -> FuzzyResult<Self> {
        if by == 0.0 {
            return Ok(self.clone());
        }
        // Tails approach 0, so lowering reaches `by` itself.
        let reached = if by > 0.0 { 1.0 + by } else { by };
        Err(FuzzyError::MembershipOutOfRange { value: reached })
    }

    /// See [`Gaussian::shifted_up`].
    pub fn shifted_down(&self, by: f64) -> FuzzyResult<Self> {
        self.shifted_up(-by)
    }

    /// Copy with the center moved `by` towards negative x.
    pub fn shifted_left(&self, by: f64) -> FuzzyResult<Self> {
        Self::new(self.width, self.center - by)
    }

    /// Copy with the center moved `by` towards positive x.
    pub fn shifted_right(&self, by: f64) -> FuzzyResult<Self> {
        Self::new(self.width, self.center + by)
    }
}

impl Membership for Gaussian {
    fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        let d = x - self.center;
        libm::exp(-(d * d) / (2.0 * self.width * self.width))
    }

    fn area(&self) -> f64 {
        SQRT_TAU * self.width
    }

    fn weighted_mean(&self) -> f64 {
        self.center
    }

    fn max_membership_at(&self) -> f64 {
        self.center
    }
}
