//! Residual descriptors and their per-line collections.
//!
//! ## Purpose
//!
//! A `Residual` describes the vertical segment between a data point and a line,
//! plus which side of the point its square should be drawn on. A
//! `ResidualCollection` mirrors point-set membership for one line.
//!
//! ## Design notes
//!
//! * **One maintenance path**: `ResidualCollection::apply` handles add, remove
//!   and move events for any line. The engine runs the same code for My Line
//!   and Best Fit Line, so both share the tie-break rule.
//! * **Targeted updates**: Adds append, removals drop exactly the residual with
//!   the matching id, moves recompute only the moved point.
//! * **Line changes**: `refresh` recomputes every residual against new parameters.
//!
//! ## Key concepts
//!
//! * **Signed displacement**: `d = y - (slope·x + intercept)`, positive above the line.
//! * **Square side**: Left of the point when `slope · d > 0`, otherwise right.
//!   This keeps the square off the line and has no statistical meaning.
//!
//! ## Invariants
//!
//! * `point1` is the data point; `point2` shares its x and lies on the line.
//! * Residuals are stored in point insertion order.
//! * The sum of squares is never negative.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::line::LineModel;
use crate::primitives::point::{Point, PointId};
use crate::primitives::point_set::PointEvent;

// ============================================================================
// Residual
// ============================================================================

/// Vertical residual of one data point against one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual<T> {
    /// Identity of the data point.
    pub id: PointId,
    /// The data point.
    pub point1: Point<T>,
    /// The point on the line directly above or below `point1`.
    pub point2: Point<T>,
    /// `point1.y - point2.y`.
    pub displacement: T,
    /// Whether the squared-residual square sits left of the data point.
    pub square_is_to_left: bool,
}

impl<T: Float> Residual<T> {
    /// Residual of `point` against `line`.
    pub fn new(id: PointId, point: Point<T>, line: &LineModel<T>) -> Self {
        let y_on_line = line.evaluate(point.x);
        let displacement = point.y - y_on_line;
        Self {
            id,
            point1: point,
            point2: Point::new(point.x, y_on_line),
            displacement,
            square_is_to_left: line.slope * displacement > T::zero(),
        }
    }

    /// Squared displacement, the area of the residual square.
    #[inline]
    pub fn squared(&self) -> T {
        self.displacement * self.displacement
    }
}

// ============================================================================
// Residual Collection
// ============================================================================

/// Residuals of every member point against one line.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualCollection<T> {
    residuals: Vec<Residual<T>>,
}

impl<T: Float> Default for ResidualCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ResidualCollection<T> {
    /// Empty collection.
    pub fn new() -> Self {
        Self {
            residuals: Vec::new(),
        }
    }

    /// Number of residuals.
    #[inline]
    pub fn len(&self) -> usize {
        self.residuals.len()
    }

    /// True when there are no residuals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.residuals.is_empty()
    }

    /// Residuals in point insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Residual<T>] {
        &self.residuals
    }

    /// Iterate over residuals in point insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Residual<T>> {
        self.residuals.iter()
    }

    /// Residual of the point with the given id.
    pub fn get(&self, id: PointId) -> Option<&Residual<T>> {
        self.residuals.iter().find(|r| r.id == id)
    }

    /// Σ d² over the collection; zero when empty.
    pub fn sum_of_squares(&self) -> T {
        self.residuals
            .iter()
            .fold(T::zero(), |acc, r| acc + r.squared())
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Append the residual of a newly added point.
    pub fn insert(&mut self, id: PointId, point: Point<T>, line: &LineModel<T>) {
        self.residuals.push(Residual::new(id, point, line));
    }

    /// Drop the residual belonging to `id`.
    pub fn remove(&mut self, id: PointId) -> Option<Residual<T>> {
        let i = self.residuals.iter().position(|r| r.id == id)?;
        Some(self.residuals.remove(i))
    }

    /// Recompute the residual of a moved point in place.
    ///
    /// Returns false if no residual exists for `id`.
    pub fn update(&mut self, id: PointId, point: Point<T>, line: &LineModel<T>) -> bool {
        match self.residuals.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                *slot = Residual::new(id, point, line);
                true
            }
            None => false,
        }
    }

    /// Apply one point event against `line`.
    pub fn apply(&mut self, event: &PointEvent<T>, line: &LineModel<T>) {
        match *event {
            PointEvent::Added { id, point } => self.insert(id, point, line),
            PointEvent::Removed { id, .. } => {
                self.remove(id);
            }
            PointEvent::Moved { id, to, .. } => {
                self.update(id, to, line);
            }
        }
    }

    /// Recompute every residual against new line parameters.
    pub fn refresh(&mut self, line: &LineModel<T>) {
        for r in self.residuals.iter_mut() {
            *r = Residual::new(r.id, r.point1, line);
        }
    }

    /// Replace the collection with residuals of `points` against `line`.
    pub fn rebuild<I>(&mut self, points: I, line: &LineModel<T>)
    where
        I: IntoIterator<Item = (PointId, Point<T>)>,
    {
        self.residuals.clear();
        self.residuals
            .extend(points.into_iter().map(|(id, p)| Residual::new(id, p, line)));
    }

    /// Drop every residual.
    #[inline]
    pub fn clear(&mut self) {
        self.residuals.clear();
    }
}
