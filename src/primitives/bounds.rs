//! Rectangular graph bounds and the point acceptance predicate.
//!
//! ## Purpose
//!
//! A released point is accepted onto the graph only if its position lies inside
//! the graph's fixed rectangle. Both axes use closed intervals, so points on the
//! edge are accepted.
//!
//! ## Non-goals
//!
//! * No coordinate transforms. Bounds live in the same space as the points.

use num_traits::Float;

use crate::primitives::point::Point;

/// Axis-aligned rectangle `[min_x, max_x] x [min_y, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    /// Lower x limit.
    pub min_x: T,
    /// Lower y limit.
    pub min_y: T,
    /// Upper x limit.
    pub max_x: T,
    /// Upper y limit.
    pub max_y: T,
}

impl<T: Float> Default for Bounds<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::one())
    }
}

impl<T: Float> Bounds<T> {
    /// Create bounds from its corner coordinates. Use `Validator::validate_bounds`
    /// to check the result.
    #[inline]
    pub fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(&self) -> T {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    #[inline]
    pub fn height(&self) -> T {
        self.max_y - self.min_y
    }

    /// Closed-interval containment on both axes.
    #[inline]
    pub fn contains(&self, point: &Point<T>) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// Acceptance predicate: true iff `position` lies within `bounds`.
///
/// NaN coordinates are never within bounds.
#[inline]
pub fn is_within_bounds<T: Float>(position: &Point<T>, bounds: &Bounds<T>) -> bool {
    bounds.contains(position)
}
