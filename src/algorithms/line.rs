//! Line parameterizations.
//!
//! ## Purpose
//!
//! This module defines `LineModel` (`y = slope·x + intercept`), the
//! user-controlled `UserLine` stored as angle plus intercept, and the
//! `LineKind` selector used to address either of the two lines on the graph.
//!
//! ## Key concepts
//!
//! * **My Line**: Set externally through angle and intercept, `slope = tan(angle)`.
//! * **Best Fit Line**: Derived from the point set, never set directly.
//!
//! ## Invariants
//!
//! * A validated `UserLine` has `|angle| < pi/2`, so its slope is finite.

use num_traits::Float;

// ============================================================================
// Line Kind
// ============================================================================

/// Selects one of the two lines tracked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// The user-adjustable line.
    MyLine,

    /// The least-squares regression line of the current points.
    BestFit,
}

impl LineKind {
    /// Both kinds, in display order.
    pub const ALL: [LineKind; 2] = [LineKind::MyLine, LineKind::BestFit];

    /// Human readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            LineKind::MyLine => "My Line",
            LineKind::BestFit => "Best Fit Line",
        }
    }

    #[inline]
    pub(crate) const fn index(&self) -> usize {
        match self {
            LineKind::MyLine => 0,
            LineKind::BestFit => 1,
        }
    }
}

// ============================================================================
// Line Model
// ============================================================================

/// Line in slope-intercept form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineModel<T> {
    /// Rise over run.
    pub slope: T,
    /// Value at `x = 0`.
    pub intercept: T,
}

impl<T: Float> LineModel<T> {
    /// Line from slope and intercept.
    #[inline]
    pub fn new(slope: T, intercept: T) -> Self {
        Self { slope, intercept }
    }

    /// Line from an angle (radians, measured from the x axis) and intercept.
    #[inline]
    pub fn from_angle(angle: T, intercept: T) -> Self {
        Self {
            slope: angle.tan(),
            intercept,
        }
    }

    /// Angle of the line in radians, in `(-pi/2, pi/2)`.
    #[inline]
    pub fn angle(&self) -> T {
        self.slope.atan()
    }

    /// y value of the line at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

// ============================================================================
// User Line
// ============================================================================

/// The user-controlled line, stored the way the controls expose it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserLine<T> {
    /// Angle in radians from the x axis.
    pub angle: T,
    /// Value at `x = 0`.
    pub intercept: T,
}

impl<T: Float> Default for UserLine<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: Float> UserLine<T> {
    /// User line from angle and intercept.
    #[inline]
    pub fn new(angle: T, intercept: T) -> Self {
        Self { angle, intercept }
    }

    /// Slope-intercept form of this line.
    #[inline]
    pub fn line(&self) -> LineModel<T> {
        LineModel::from_angle(self.angle, self.intercept)
    }
}

// ============================================================================
// Display Flags
// ============================================================================

/// Visibility flags the view layer keeps per line. They never affect computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineDisplay {
    /// Draw the line itself.
    pub line: bool,
    /// Draw residual segments.
    pub residuals: bool,
    /// Draw squared-residual squares.
    pub squared_residuals: bool,
}
