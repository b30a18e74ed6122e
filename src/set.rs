//! Finite fuzzy sets over identity-keyed [`Point`]s.
//!
//! A [`DiscreteFuzzySet`] maps each member point to a membership in
//! `[0.0, 1.0]`. Points that were never added have membership 0; the set is
//! total over its implicit universe of discourse.
//!
//! # Algebra
//!
//! | Operation | Keys of the result | Membership |
//! |-----------|--------------------|------------|
//! | [`union`](DiscreteFuzzySet::union) | keys of either set | `max(a, b)`, missing = 0 |
//! | [`intersection`](DiscreteFuzzySet::intersection) | keys present in **both** | `min(a, b)` |
//! | [`complement`](DiscreteFuzzySet::complement) | own keys | `1 − a` |
//! | [`product`](DiscreteFuzzySet::product) | own keys the other set contains with `b > 0` | `a · b` |
//! | [`scalar_product`](DiscreteFuzzySet::scalar_product) | own keys | `s · a`, must stay in range |
//! | [`power`](DiscreteFuzzySet::power) | own keys | `a^e`, must stay in range |
//!
//! Intersection deliberately drops points that only one side knows about,
//! unlike union which treats a missing point as membership 0.
//!
//! # Invariants
//!
//! - Every stored membership lies in `[0.0, 1.0]`; each insertion path checks it.
//! - Keys compare by point identity, never by coordinate.
//! - With `auto_clean` on, every operation that builds a new set removes its
//!   near-zero entries before returning it.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::{HashMap, HashSet};

use crate::error::{check_membership, FuzzyResult};
use crate::membership::Membership;
use crate::point::{Point, WeightedPoint};

/// An ordinary (crisp) set of points.
pub type CrispSet = HashSet<Point>;

/// Construction settings of a [`DiscreteFuzzySet`], inherited by every set
/// derived from it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuzzySetConfig {
    /// Initial capacity hint. Affects allocation only.
    /// Default: 20.
    pub capacity: usize,

    /// Remove near-zero entries from every newly built set.
    /// Default: false.
    pub auto_clean: bool,

    /// Memberships at or below this count as zero for cleaning, support and
    /// set comparison.
    /// Default: 1e-8.
    pub zero_tolerance: f64,

    /// Memberships at or above this belong to the core.
    /// Default: 0.999999999.
    pub core_threshold: f64,
}

impl Default for FuzzySetConfig {
    fn default() -> Self {
        Self {
            capacity: 20,
            auto_clean: false,
            zero_tolerance: 1e-8,
            core_threshold: 0.999_999_999,
        }
    }
}

/// A finite fuzzy set.
///
/// ```rust
/// use fuzzy_core::point::Point;
/// use fuzzy_core::set::DiscreteFuzzySet;
///
/// let cold = Point::new(5.0, Some("cold"));
/// let warm = Point::new(20.0, Some("warm"));
///
/// let mut a = DiscreteFuzzySet::new();
/// a.add(&cold, 0.8).unwrap();
/// a.add(&warm, 0.3).unwrap();
///
/// let mut b = DiscreteFuzzySet::new();
/// b.add(&warm, 0.6).unwrap();
///
/// let both = a.intersection(&b);
/// assert!(!both.contains(&cold));
/// assert_eq!(both.membership_of(&warm), 0.3);
/// assert_eq!(a.union(&b).membership_of(&warm), 0.6);
/// ```
#[derive(Clone, Debug)]
pub struct DiscreteFuzzySet {
    entries: HashMap<Point, f64>,
    config: FuzzySetConfig,
}

impl DiscreteFuzzySet {
    /// Empty set with the default configuration.
    pub fn new() -> Self {
        Self::with_config(FuzzySetConfig::default())
    }

    /// Empty set with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(FuzzySetConfig {
            capacity,
            ..FuzzySetConfig::default()
        })
    }

    /// Empty set with an explicit configuration.
    pub fn with_config(config: FuzzySetConfig) -> Self {
        Self {
            entries: HashMap::with_capacity(config.capacity),
            config,
        }
    }

    /// Settings this set was built with.
    pub fn config(&self) -> &FuzzySetConfig {
        &self.config
    }

    /// Turn automatic cleaning of derived sets on or off.
    pub fn set_auto_clean(&mut self, auto_clean: bool) {
        self.config.auto_clean = auto_clean;
    }

    // ── Membership management ─────────────────────────────────────────────

    /// Insert or overwrite the membership of `point`.
    ///
    /// Fails with `MembershipOutOfRange` if `value` is outside `[0.0, 1.0]`;
    /// the set is left unchanged in that case.
    pub fn add(&mut self, point: &Point, value: f64) -> FuzzyResult<()> {
        let value = check_membership(value)?;
        self.entries.insert(point.clone(), value);
        Ok(())
    }

    /// Insert `point` with the membership `function` assigns to its coordinate.
    pub fn add_evaluated<M: Membership + ?Sized>(&mut self, point: &Point, function: &M) {
        match check_membership(function.evaluate_point(point)) {
            Ok(value) => {
                self.entries.insert(point.clone(), value);
            }
            Err(error) => {
                tracing::warn!(point = %point, %error, "membership function left [0, 1]; point not added");
            }
        }
    }

    /// Remove `point`, returning its membership if it was present.
    pub fn remove(&mut self, point: &Point) -> Option<f64> {
        self.entries.remove(point)
    }

    /// Number of stored points, zero memberships included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no point is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` if `point` is stored, whatever its membership.
    pub fn contains(&self, point: &Point) -> bool {
        self.entries.contains_key(point)
    }

    /// `true` if `point` is stored with a positive membership.
    pub fn belongs(&self, point: &Point) -> bool {
        self.entries.get(point).is_some_and(|&value| value > 0.0)
    }

    /// Membership of `point`; 0 when it is not stored.
    pub fn membership_of(&self, point: &Point) -> f64 {
        self.entries.get(point).copied().unwrap_or(0.0)
    }

    /// Stored `(point, membership)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Point, f64)> + '_ {
        self.entries.iter().map(|(point, &value)| (point, value))
    }

    /// Stored points in no particular order.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.entries.keys()
    }

    /// Remove entries whose membership is at most `zero_tolerance`.
    /// Returns how many were removed.
    pub fn clean(&mut self) -> usize {
        let before = self.entries.len();
        let tolerance = self.config.zero_tolerance;
        self.entries.retain(|_, value| *value > tolerance);
        before - self.entries.len()
    }

    // ── Algebra ───────────────────────────────────────────────────────────

    /// Pointwise maximum over the keys of both sets.
    pub fn union(&self, other: &Self) -> Self {
        let mut entries = HashMap::with_capacity(self.len() + other.len());
        for (point, &value) in &self.entries {
            entries.insert(point.clone(), value.max(other.membership_of(point)));
        }
        for (point, &value) in &other.entries {
            entries.entry(point.clone()).or_insert(value);
        }
        self.derived(entries)
    }

    /// Pointwise minimum over the keys common to both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let entries = self
            .entries
            .iter()
            .filter_map(|(point, &value)| {
                other
                    .entries
                    .get(point)
                    .map(|&theirs| (point.clone(), value.min(theirs)))
            })
            .collect();
        self.derived(entries)
    }

    /// `1 − membership` over this set's own keys.
    pub fn complement(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|(point, &value)| (point.clone(), 1.0 - value))
            .collect();
        self.derived(entries)
    }

    /// Pointwise product over this set's keys that `other` also belongs to.
    pub fn product(&self, other: &Self) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|(point, _)| other.belongs(point))
            .map(|(point, &value)| (point.clone(), value * other.membership_of(point)))
            .collect();
        self.derived(entries)
    }

    /// Every membership multiplied by `scalar`.
    ///
    /// Fails with `MembershipOutOfRange` if any product leaves `[0.0, 1.0]`.
    pub fn scalar_product(&self, scalar: f64) -> FuzzyResult<Self> {
        self.map_checked(|value| scalar * value)
    }

    /// Every membership raised to `exponent`.
    ///
    /// Non-negative exponents always stay in range. A negative exponent fails
    /// with `MembershipOutOfRange` on any membership below 1.
    pub fn power(&self, exponent: f64) -> FuzzyResult<Self> {
        self.map_checked(|value| libm::pow(value, exponent))
    }

    /// `true` if every membership here is at most the matching one in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        let tolerance = self.config.zero_tolerance;
        self.entries
            .iter()
            .all(|(point, &value)| value <= other.membership_of(point) + tolerance)
    }

    /// `true` if each set is a subset of the other, i.e. memberships agree on
    /// every key of either set (absent keys count as 0).
    pub fn equals_set(&self, other: &Self) -> bool {
        self.is_subset_of(other) && other.is_subset_of(self)
    }

    /// Sum of all memberships.
    pub fn cardinality(&self) -> f64 {
        self.entries.values().sum()
    }

    // ── Crisp extraction ─────────────────────────────────────────────────

    /// Points with membership of (nearly) 1.
    pub fn core(&self) -> CrispSet {
        let threshold = self.config.core_threshold;
        self.crisp_where(|value| value >= threshold)
    }

    /// Points with membership above `zero_tolerance`.
    pub fn support(&self) -> CrispSet {
        let tolerance = self.config.zero_tolerance;
        self.crisp_where(|value| value > tolerance)
    }

    /// Every stored point.
    pub fn crisp_all(&self) -> CrispSet {
        self.entries.keys().cloned().collect()
    }

    /// Point of highest membership; on ties the first one visited wins.
    /// `None` for an empty set.
    pub fn height(&self) -> Option<&Point> {
        let mut best: Option<(&Point, f64)> = None;
        for (point, &value) in &self.entries {
            if best.map_or(true, |(_, top)| value > top) {
                best = Some((point, value));
            }
        }
        best.map(|(point, _)| point)
    }

    /// Fuzzy subset of the points accepted by `predicate`.
    pub fn retain_if<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Point) -> bool,
    {
        let entries = self
            .entries
            .iter()
            .filter(|(point, _)| predicate(point))
            .map(|(point, &value)| (point.clone(), value))
            .collect();
        self.derived(entries)
    }

    /// Crisp set of the points accepted by `predicate`.
    pub fn crisp_if<F>(&self, mut predicate: F) -> CrispSet
    where
        F: FnMut(&Point) -> bool,
    {
        self.entries
            .keys()
            .filter(|point| predicate(point))
            .cloned()
            .collect()
    }

    /// Every entry as a [`WeightedPoint`].
    ///
    /// An entry that cannot form a weighted point would mean the range
    /// invariant was broken; it is reported through `tracing` and skipped
    /// while the remaining entries are still returned.
    pub fn weighted_points(&self) -> Vec<WeightedPoint> {
        let mut out = Vec::with_capacity(self.entries.len());
        for (point, &value) in &self.entries {
            match WeightedPoint::new(point.clone(), value) {
                Ok(weighted) => out.push(weighted),
                Err(error) => {
                    tracing::warn!(point = %point, %error, "stored membership outside [0, 1]; entry skipped");
                }
            }
        }
        out
    }

    // ── Internal helpers ─────────────────────────────────────────────────

    /// Wrap `entries` in a set sharing this set's config, cleaning if asked.
    fn derived(&self, entries: HashMap<Point, f64>) -> Self {
        let mut set = Self {
            entries,
            config: self.config.clone(),
        };
        if set.config.auto_clean {
            set.clean();
        }
        set
    }

    fn map_checked<F>(&self, f: F) -> FuzzyResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        let mut entries = HashMap::with_capacity(self.entries.len());
        for (point, &value) in &self.entries {
            entries.insert(point.clone(), check_membership(f(value))?);
        }
        Ok(self.derived(entries))
    }

    fn crisp_where<F>(&self, keep: F) -> CrispSet
    where
        F: Fn(f64) -> bool,
    {
        self.entries
            .iter()
            .filter(|(_, value)| keep(**value))
            .map(|(point, _)| point.clone())
            .collect()
    }
}

impl Default for DiscreteFuzzySet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DiscreteFuzzySet {
    /// `[ (name1,value1),(name2,value2) ]`, in no guaranteed order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for (i, (point, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "({},{:?})", point, value)?;
        }
        f.write_str(" ]")
    }
}
