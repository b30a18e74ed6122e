//! Defuzzification: collapse membership functions into one crisp value.
//!
//! | Strategy | Representative `x` | Weight |
//! |----------|--------------------|--------|
//! | [`MaxMembershipMean`](Defuzzification::MaxMembershipMean) | `max_membership_at()` | 1 |
//! | [`WeightedMaxMembershipMean`](Defuzzification::WeightedMaxMembershipMean) | `max_membership_at()` | `evaluate(x)` |
//! | [`WeightedMean`](Defuzzification::WeightedMean) | `weighted_mean()` | `evaluate(x)` |
//! | [`Centroid`](Defuzzification::Centroid) | `weighted_mean()` | `area()` |
//!
//! The result is `Σ(x·w) / Σw`. An empty input, a zero weight sum or any
//! non-finite intermediate all yield `0.0`; NaN never escapes.

use core::fmt;

use crate::membership::Membership;

/// A defuzzification strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Defuzzification {
    /// Plain mean of each function's point of maximum membership.
    MaxMembershipMean,
    /// Mean of the maximum points weighted by the membership there.
    WeightedMaxMembershipMean,
    /// Mean of the weighted means weighted by the membership there.
    WeightedMean,
    /// Mean of the weighted means weighted by area under each curve.
    Centroid,
}

impl Defuzzification {
    /// Every strategy, in declaration order.
    pub const ALL: [Defuzzification; 4] = [
        Defuzzification::MaxMembershipMean,
        Defuzzification::WeightedMaxMembershipMean,
        Defuzzification::WeightedMean,
        Defuzzification::Centroid,
    ];

    /// Defuzzify `functions` with this strategy. See [`defuzzify`].
    pub fn apply<M: Membership>(self, functions: &[M]) -> f64 {
        defuzzify(self, functions)
    }
}

impl fmt::Display for Defuzzification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MaxMembershipMean => "max_membership_mean",
            Self::WeightedMaxMembershipMean => "weighted_max_membership_mean",
            Self::WeightedMean => "weighted_mean",
            Self::Centroid => "centroid",
        })
    }
}

/// Reduce `functions` to one crisp value using `method`.
///
/// ```rust
/// use fuzzy_core::defuzzify::{defuzzify, Defuzzification};
/// use fuzzy_core::membership::{MembershipFunction, Triangular};
///
/// let sets = [MembershipFunction::from(Triangular::unit(0.0, 5.0, 10.0).unwrap())];
/// assert!((defuzzify(Defuzzification::Centroid, &sets) - 5.0).abs() < 1e-9);
/// ```
pub fn defuzzify<M: Membership>(method: Defuzzification, functions: &[M]) -> f64 {
    if functions.is_empty() {
        return 0.0;
    }
    let pairs = functions.iter().map(|function| match method {
        Defuzzification::MaxMembershipMean => (function.max_membership_at(), 1.0),
        Defuzzification::WeightedMaxMembershipMean => {
            let x = function.max_membership_at();
            (x, function.evaluate(x))
        }
        Defuzzification::WeightedMean => {
            let x = function.weighted_mean();
            (x, function.evaluate(x))
        }
        Defuzzification::Centroid => (function.weighted_mean(), function.area()),
    });
    weighted_average(method, pairs)
}

fn weighted_average<I>(method: Defuzzification, pairs: I) -> f64
where
    I: Iterator<Item = (f64, f64)>,
{
    let (numerator, weight_sum) = pairs.fold((0.0, 0.0), |(num, den), (x, w)| (num + x * w, den + w));
    if weight_sum == 0.0 {
        tracing::debug!(%method, "weights sum to zero; defuzzified to 0");
        return 0.0;
    }
    let value = numerator / weight_sum;
    if value.is_finite() {
        value
    } else {
        tracing::debug!(%method, "non-finite defuzzified value; defuzzified to 0");
        0.0
    }
}
