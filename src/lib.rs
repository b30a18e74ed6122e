//! # fuzzy-core
//!
//! Fuzzy-set primitives: graded membership, continuous membership shapes,
//! the algebra of finite fuzzy sets, and defuzzification.
//!
//! ---
//!
//! ## The pieces
//!
//! **Points with identity.** A [`Point`] is a coordinate with an optional
//! display name. Fuzzy sets key on the point itself, not on its coordinate:
//! two points at `x = 3.0` built separately are two different members.
//!
//! **Membership functions.** Closed-form curves mapping every real `x` to a
//! degree in `[0, 1]`, each with its area, weighted mean and point of maximum
//! membership. Triangles and trapezoids are assembled from [`Linear`]
//! segments.
//!
//! **Discrete fuzzy sets.** A finite map from point to membership with
//! union, intersection, complement, products, powers, and crisp queries
//! (core, support, height).
//!
//! **Defuzzification.** Four strategies that fold a slice of membership
//! functions into one decision value.
//!
//! ```text
//! Point ──► MembershipFunction ──► WeightedPoint
//!   │               │
//!   ▼               ▼
//! DiscreteFuzzySet  defuzzify ──► f64
//!   (algebra, core, support, height)
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`point`] | [`Point`], [`WeightedPoint`] | Identity-keyed points, point + membership pairs |
//! | [`membership`] | [`Membership`], [`MembershipFunction`] | Linear, triangular, trapezoidal, Gaussian, S and Z curves |
//! | [`set`] | [`DiscreteFuzzySet`], [`FuzzySetConfig`] | Finite fuzzy sets and their algebra |
//! | [`defuzzify`](mod@defuzzify) | [`Defuzzification`] | Crisp value from membership functions |
//! | [`error`] | [`FuzzyError`] | `MembershipOutOfRange`, `InvalidShape` |
//!
//! ## Diagnostics
//!
//! The crate emits [`tracing`] events and installs no subscriber. A `warn`
//! event marks a membership that should have been impossible (the entry is
//! skipped); `debug` events mark degenerate defuzzification inputs.
//!
//! ## `no_std`
//!
//! `#![no_std]` by default, requiring only `alloc`. Enable `std` to link the
//! standard library and `serde` for serialisation of shapes, configuration
//! and strategies.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod defuzzify;
pub mod error;
pub mod membership;
pub mod point;
pub mod set;

pub use defuzzify::{defuzzify, Defuzzification};
pub use error::{FuzzyError, FuzzyResult};
pub use membership::{
    Gaussian, Linear, Membership, MembershipFunction, SShaped, Trapezoidal, Triangular, ZShaped,
};
pub use point::{Point, WeightedPoint};
pub use set::{CrispSet, DiscreteFuzzySet, FuzzySetConfig};
