//! Error kinds shared by every fuzzy primitive.
//!
//! Both kinds are recoverable by the caller: a failed construction leaves no
//! partial object behind and a failed insertion leaves the set untouched.
//! Nothing in this crate clamps an out-of-range membership into range.

/// Errors raised by membership functions, weighted points and fuzzy sets.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FuzzyError {
    /// A value destined to become a stored or returned membership fell
    /// outside `[0.0, 1.0]` (NaN included).
    #[error("membership value {value} is outside [0, 1]")]
    MembershipOutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// Shape parameters are degenerate or contradict each other.
    #[error("invalid {shape} shape: {reason}")]
    InvalidShape {
        /// Shape that was being built, e.g. `"trapezoid"`.
        shape: &'static str,
        /// What is wrong with the parameters.
        reason: &'static str,
    },
}

/// Result alias for fallible fuzzy operations.
pub type FuzzyResult<T> = Result<T, FuzzyError>;

/// Accept `value` as a membership or report it as out of range.
pub(crate) fn check_membership(value: f64) -> FuzzyResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(FuzzyError::MembershipOutOfRange { value })
    }
}

pub(crate) fn invalid_shape(shape: &'static str, reason: &'static str) -> FuzzyError {
    FuzzyError::InvalidShape { shape, reason }
}
