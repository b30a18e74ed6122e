//! Points of the universe of discourse and (point, membership) pairs.
//!
//! A [`Point`] is keyed by *identity*, not by value: every call to
//! [`Point::new`] mints a fresh identity, while `clone()` shares it. Two
//! points built independently with the same coordinate stay distinct members
//! of a [`DiscreteFuzzySet`](crate::set::DiscreteFuzzySet).

use alloc::sync::Arc;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{check_membership, FuzzyResult};

static NEXT_POINT_ID: AtomicUsize = AtomicUsize::new(0);

/// An immutable point with a numeric coordinate and an optional display name.
///
/// ```rust
/// use fuzzy_core::point::Point;
///
/// let warm = Point::new(24.0, Some("warm"));
/// let raw = Point::at(0.25);
/// assert_eq!(warm.to_string(), "warm");
/// assert_eq!(raw.to_string(), "0.25");
/// assert_ne!(Point::at(1.0), Point::at(1.0));
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    #[cfg_attr(feature = "serde", serde(skip))]
    id: usize,
    coordinate: f64,
    name: Option<Arc<str>>,
}

impl Point {
    /// Create a point. Without a name it displays its coordinate.
    pub fn new(coordinate: f64, name: Option<&str>) -> Self {
        Self {
            id: NEXT_POINT_ID.fetch_add(1, Ordering::Relaxed),
            coordinate,
            name: name.map(Arc::from),
        }
    }

    /// Create an unnamed point at `coordinate`.
    pub fn at(coordinate: f64) -> Self {
        Self::new(coordinate, None)
    }

    /// Numeric position of the point.
    pub fn coordinate(&self) -> f64 {
        self.coordinate
    }

    /// Explicit name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `true` when the point displays its coordinate instead of a name.
    pub fn uses_coordinate_as_name(&self) -> bool {
        self.name.is_none()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            // Debug keeps the trailing ".0" on whole numbers.
            None => write!(f, "{:?}", self.coordinate),
        }
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("id", &self.id)
            .field("coordinate", &self.coordinate)
            .field("name", &self.name)
            .finish()
    }
}

/// A point paired with its membership value in `[0.0, 1.0]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeightedPoint {
    point: Point,
    membership: f64,
}

impl WeightedPoint {
    /// Pair `point` with `membership`.
    ///
    /// Fails with [`FuzzyError::MembershipOutOfRange`](crate::FuzzyError::MembershipOutOfRange)
    /// when `membership` is outside `[0.0, 1.0]`.
    pub fn new(point: Point, membership: f64) -> FuzzyResult<Self> {
        let membership = check_membership(membership)?;
        Ok(Self { point, membership })
    }

    /// The point.
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Membership of the point.
    pub fn membership(&self) -> f64 {
        self.membership
    }

    /// Same point, membership `1 - m`.
    pub fn complement(&self) -> Self {
        self.complement_for(self.point.clone())
    }

    /// `1 - m` attached to another point.
    pub fn complement_for(&self, point: Point) -> Self {
        Self {
            point,
            membership: 1.0 - self.membership,
        }
    }
}

impl fmt::Display for WeightedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{:?})", self.point, self.membership)
    }
}
