//! Running sums and sample means for simple linear regression.
//!
//! ## Purpose
//!
//! This module maintains the raw sums `Sx`, `Sy`, `Sxx`, `Sxy`, `Syy` over the
//! current point set and derives the sample means the least-squares fit needs.
//!
//! ## Key concepts
//!
//! * **Origin**: Sums are taken over `(x - x0, y - y0)` where `(x0, y0)` is one
//!   of the summed points. Moments about a nearby point keep `meanXX - meanX²`
//!   from cancelling catastrophically for data far from zero, and a set whose x
//!   values all equal `x0` sums to exactly zero.
//!
//! ## Design notes
//!
//! * **Two strategies**: Sums can be recomputed from the coordinate columns
//!   (`recompute`) or updated in O(1) per event (`add`, `remove`, `replace`).
//! * **Dispatch**: `SumsLinalg` selects the SIMD accumulator for `f64` and the
//!   scalar one for `f32`.
//! * **Drift control**: Incremental removal resets to exact zero once the last
//!   point leaves. The next added point becomes the new origin.
//!
//! ## Invariants
//!
//! * `count` equals the number of points folded into the sums.
//! * `means` is `None` when `count == 0`.
//!
//! ## Non-goals
//!
//! * This module does not decide whether a fit is defined.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::accumulators::{accumulate_moments_scalar, accumulate_moments_simd};
use crate::primitives::point::Point;

// ============================================================================
// Accumulation Trait
// ============================================================================

/// Float types with a specialized raw-moment accumulator.
pub trait SumsLinalg: Float + 'static {
    /// Accumulate `[Sx, Sy, Sxx, Sxy, Syy]` about `(x0, y0)` over paired
    /// coordinate slices.
    fn accumulate_moments(x: &[Self], y: &[Self], x0: Self, y0: Self) -> [Self; 5];
}

impl SumsLinalg for f64 {
    #[inline]
    fn accumulate_moments(x: &[f64], y: &[f64], x0: f64, y0: f64) -> [f64; 5] {
        accumulate_moments_simd(x, y, x0, y0)
    }
}

impl SumsLinalg for f32 {
    #[inline]
    fn accumulate_moments(x: &[f32], y: &[f32], x0: f32, y0: f32) -> [f32; 5] {
        accumulate_moments_scalar(x, y, x0, y0)
    }
}

// ============================================================================
// Running Sums
// ============================================================================

/// Raw sums over a point population, taken about `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningSums<T> {
    /// Number of points.
    pub count: usize,
    /// Point the coordinates are shifted by before summing.
    pub origin: Point<T>,
    /// Σ(x - x0)
    pub sum_x: T,
    /// Σ(y - y0)
    pub sum_y: T,
    /// Σ(x - x0)²
    pub sum_xx: T,
    /// Σ(x - x0)(y - y0)
    pub sum_xy: T,
    /// Σ(y - y0)²
    pub sum_yy: T,
}

/// Sample means derived from `RunningSums`, relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Means<T> {
    /// Origin of the shifted moments.
    pub origin: Point<T>,
    /// mean of x - x0
    pub x: T,
    /// mean of y - y0
    pub y: T,
    /// mean of (x - x0)²
    pub xx: T,
    /// mean of (x - x0)(y - y0)
    pub xy: T,
    /// mean of (y - y0)²
    pub yy: T,
}

impl<T: Float> Means<T> {
    /// Mean of x in original coordinates.
    #[inline]
    pub fn mean_x(&self) -> T {
        self.origin.x + self.x
    }

    /// Mean of y in original coordinates.
    #[inline]
    pub fn mean_y(&self) -> T {
        self.origin.y + self.y
    }

    /// Population variance of x: `meanXX - meanX²`.
    #[inline]
    pub fn variance_x(&self) -> T {
        self.xx - self.x * self.x
    }

    /// Population variance of y: `meanYY - meanY²`.
    #[inline]
    pub fn variance_y(&self) -> T {
        self.yy - self.y * self.y
    }

    /// Population covariance: `meanXY - meanX·meanY`.
    #[inline]
    pub fn covariance(&self) -> T {
        self.xy - self.x * self.y
    }
}

impl<T: Float> Default for RunningSums<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RunningSums<T> {
    /// Empty sums.
    pub fn new() -> Self {
        Self {
            count: 0,
            origin: Point::new(T::zero(), T::zero()),
            sum_x: T::zero(),
            sum_y: T::zero(),
            sum_xx: T::zero(),
            sum_xy: T::zero(),
            sum_yy: T::zero(),
        }
    }

    /// Build sums from coordinate columns.
    pub fn from_columns(x: &[T], y: &[T]) -> Self
    where
        T: SumsLinalg,
    {
        let mut sums = Self::new();
        sums.recompute(x, y);
        sums
    }

    /// Replace the sums with a full recomputation over the columns.
    ///
    /// The first point becomes the origin.
    pub fn recompute(&mut self, x: &[T], y: &[T])
    where
        T: SumsLinalg,
    {
        let origin = match (x.first(), y.first()) {
            (Some(&x0), Some(&y0)) => Point::new(x0, y0),
            _ => Point::new(T::zero(), T::zero()),
        };
        let [s_x, s_y, s_xx, s_xy, s_yy] = T::accumulate_moments(x, y, origin.x, origin.y);
        self.count = x.len().min(y.len());
        self.origin = origin;
        self.sum_x = s_x;
        self.sum_y = s_y;
        self.sum_xx = s_xx;
        self.sum_xy = s_xy;
        self.sum_yy = s_yy;
    }

    /// Fold one point into the sums. The first point of an empty population
    /// becomes the origin.
    #[inline]
    pub fn add(&mut self, p: &Point<T>) {
        if self.count == 0 {
            *self = Self::new();
            self.origin = *p;
        }
        let p = self.shifted(p);
        self.count += 1;
        self.sum_x = self.sum_x + p.x;
        self.sum_y = self.sum_y + p.y;
        self.sum_xx = self.sum_xx + p.x * p.x;
        self.sum_xy = self.sum_xy + p.x * p.y;
        self.sum_yy = self.sum_yy + p.y * p.y;
    }

    /// Take one previously added point out of the sums.
    #[inline]
    pub fn remove(&mut self, p: &Point<T>) {
        if self.count <= 1 {
            self.reset();
            return;
        }
        let p = self.shifted(p);
        self.count -= 1;
        self.sum_x = self.sum_x - p.x;
        self.sum_y = self.sum_y - p.y;
        self.sum_xx = self.sum_xx - p.x * p.x;
        self.sum_xy = self.sum_xy - p.x * p.y;
        self.sum_yy = self.sum_yy - p.y * p.y;
    }

    /// Swap a point's old position for its new one.
    #[inline]
    pub fn replace(&mut self, from: &Point<T>, to: &Point<T>) {
        let (from, to) = (self.shifted(from), self.shifted(to));
        self.sum_x = self.sum_x - from.x + to.x;
        self.sum_y = self.sum_y - from.y + to.y;
        self.sum_xx = self.sum_xx - from.x * from.x + to.x * to.x;
        self.sum_xy = self.sum_xy - from.x * from.y + to.x * to.y;
        self.sum_yy = self.sum_yy - from.y * from.y + to.y * to.y;
    }

    /// Back to the empty state.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Sample means, or `None` for an empty population.
    pub fn means(&self) -> Option<Means<T>> {
        if self.count == 0 {
            return None;
        }
        let n = T::from(self.count)?;
        Some(Means {
            origin: self.origin,
            x: self.sum_x / n,
            y: self.sum_y / n,
            xx: self.sum_xx / n,
            xy: self.sum_xy / n,
            yy: self.sum_yy / n,
        })
    }

    #[inline]
    fn shifted(&self, p: &Point<T>) -> Point<T> {
        Point::new(p.x - self.origin.x, p.y - self.origin.y)
    }
}
