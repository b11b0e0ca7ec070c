//! Data point positions and identities.
//!
//! ## Purpose
//!
//! `Point` is a plain 2-D position value. `PointId` is the identity handle
//! assigned by a `PointSet` when a point joins it; two points with identical
//! coordinates still have distinct ids.
//!
//! ## Invariants
//!
//! * Ids are never reused within one `PointSet`.
//! * A `Point` stored in a set always has finite coordinates.

use core::fmt;
use num_traits::Float;

/// A 2-D position in graph coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T: Float> Point<T> {
    /// Create a point at `(x, y)`.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Float> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// Identity of a point within a `PointSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub(crate) u64);

impl PointId {
    /// Raw numeric value of the id.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
