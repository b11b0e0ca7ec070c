//! Event-driven regression engine.
//!
//! ## Purpose
//!
//! This module provides `RegressionEngine`, which owns the point set and keeps
//! the best fit line, both residual collections and both sums of squared
//! residuals consistent with it after every mutation.
//!
//! ## Design notes
//!
//! * **Eager**: Every mutating call drains the point-set journal and applies
//!   each event before returning. Reads take `&self` and never see stale data.
//! * **Single writer**: The engine owns its `PointSet`; all mutation goes through
//!   engine methods so no event can be skipped.
//! * **Shared residual path**: Both lines build residuals with `Residual::new`.
//!   My Line applies each event through `ResidualCollection::apply`. Best Fit
//!   applies only membership changes and then refreshes, because every point
//!   event moves the fit.
//!
//! ## Key concepts
//!
//! * **Update mode**: `Full` recomputes the running sums from scratch on each
//!   event, `Incremental` adjusts them in O(1).
//! * **Defined fit**: At least two points and a non-vertical distribution.
//!
//! ## Invariants
//!
//! * `residuals(MyLine).len() == points().len()` after every call.
//! * `residuals(BestFit)` is empty iff the fit is undefined, and otherwise has
//!   one entry per point.
//! * A failed call leaves the engine unchanged.
//!
//! ## Non-goals
//!
//! * No rendering, coordinate transforms, or input handling.
//! * No undo history.

// External dependencies
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::fit::FitResult;
use crate::algorithms::line::{LineDisplay, LineKind, LineModel, UserLine};
use crate::algorithms::residual::{Residual, ResidualCollection};
use crate::engine::output::RegressionSummary;
use crate::engine::validator::Validator;
use crate::math::sums::{RunningSums, SumsLinalg};
use crate::primitives::bounds::Bounds;
use crate::primitives::errors::RegressionError;
use crate::primitives::point::{Point, PointId};
use crate::primitives::point_set::{ListenerId, PointEvent, PointSet};

// ============================================================================
// Configuration
// ============================================================================

/// Strategy for keeping the running sums current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Recompute all sums from the point set on every event.
    #[default]
    Full,

    /// Adjust the sums in O(1) per event.
    Incremental,
}

/// Immutable engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig<T> {
    /// Graph bounds used by the acceptance predicate.
    pub bounds: Bounds<T>,
    /// Initial user line, restored by `reset`.
    pub user_line: UserLine<T>,
    /// Relative tolerance for the degeneracy tests.
    pub tolerance: T,
    /// Running sum strategy.
    pub update_mode: UpdateMode,
}

// ============================================================================
// Regression Engine
// ============================================================================

/// Owner of the point set and every value derived from it.
#[derive(Debug)]
pub struct RegressionEngine<T: SumsLinalg> {
    config: EngineConfig<T>,
    points: PointSet<T>,
    user_line: UserLine<T>,
    sums: RunningSums<T>,
    fit: Option<FitResult<T>>,
    residuals: [ResidualCollection<T>; 2],
    display: [LineDisplay; 2],
}

impl<T: SumsLinalg> RegressionEngine<T> {
    /// Create an engine with no points.
    pub fn new(config: EngineConfig<T>) -> Result<Self, RegressionError> {
        Validator::validate_bounds(&config.bounds)?;
        Validator::validate_angle(config.user_line.angle)?;
        Validator::validate_intercept(config.user_line.intercept)?;
        Validator::validate_tolerance(config.tolerance)?;

        Ok(Self {
            config,
            points: PointSet::new(),
            user_line: config.user_line,
            sums: RunningSums::new(),
            fit: None,
            residuals: [ResidualCollection::new(), ResidualCollection::new()],
            display: [LineDisplay::default(); 2],
        })
    }

    // ========================================================================
    // Point Mutation
    // ========================================================================

    /// Add a point to the graph.
    pub fn add_point(&mut self, point: Point<T>) -> Result<PointId, RegressionError> {
        let id = self.points.add(point)?;
        self.sync();
        Ok(id)
    }

    /// Remove a point and return its last position.
    pub fn remove_point(&mut self, id: PointId) -> Result<Point<T>, RegressionError> {
        let point = self.points.remove(id)?;
        self.sync();
        Ok(point)
    }

    /// Move a point and return its previous position.
    pub fn move_point(&mut self, id: PointId, to: Point<T>) -> Result<Point<T>, RegressionError> {
        let from = self.points.set_position(id, to)?;
        self.sync();
        Ok(from)
    }

    /// Remove every point. Returns how many were removed.
    pub fn clear_points(&mut self) -> usize {
        let count = self.points.clear();
        self.sync();
        count
    }

    /// Add a released point if it lies within the graph bounds.
    ///
    /// Returns `Ok(None)` without touching the point set when the point is
    /// outside; the caller is responsible for sending it back.
    pub fn place_point(&mut self, point: Point<T>) -> Result<Option<PointId>, RegressionError> {
        Validator::validate_point(&point)?;
        if !self.is_within_bounds(&point) {
            trace!(
                x = point.x.to_f64().unwrap_or(f64::NAN),
                y = point.y.to_f64().unwrap_or(f64::NAN),
                "point rejected outside graph bounds"
            );
            return Ok(None);
        }
        self.add_point(point).map(Some)
    }

    // ========================================================================
    // User Line
    // ========================================================================

    /// Set the angle of My Line, in radians.
    pub fn set_angle(&mut self, angle: T) -> Result<(), RegressionError> {
        Validator::validate_angle(angle)?;
        self.user_line.angle = angle;
        self.refresh_user_line();
        Ok(())
    }

    /// Set the intercept of My Line.
    pub fn set_intercept(&mut self, intercept: T) -> Result<(), RegressionError> {
        Validator::validate_intercept(intercept)?;
        self.user_line.intercept = intercept;
        self.refresh_user_line();
        Ok(())
    }

    /// Set both parameters of My Line at once.
    pub fn set_user_line(&mut self, line: UserLine<T>) -> Result<(), RegressionError> {
        Validator::validate_angle(line.angle)?;
        Validator::validate_intercept(line.intercept)?;
        self.user_line = line;
        self.refresh_user_line();
        Ok(())
    }

    // ========================================================================
    // Display Flags and Reset
    // ========================================================================

    /// Visibility flags of a line.
    #[inline]
    pub fn display(&self, kind: LineKind) -> LineDisplay {
        self.display[kind.index()]
    }

    /// Replace the visibility flags of a line.
    #[inline]
    pub fn set_display(&mut self, kind: LineKind, display: LineDisplay) {
        self.display[kind.index()] = display;
    }

    /// Clear all points and restore the user line and display flags.
    pub fn reset(&mut self) {
        let removed = self.clear_points();
        self.user_line = self.config.user_line;
        self.refresh_user_line();
        self.display = [LineDisplay::default(); 2];
        debug!(removed, "engine reset");
    }

    // ========================================================================
    // Subscription
    // ========================================================================

    /// Register a listener for every point event.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PointEvent<T>) + Send + 'static,
    {
        self.points.subscribe(listener)
    }

    /// Drop a listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.points.unsubscribe(id)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Current point set.
    #[inline]
    pub fn points(&self) -> &PointSet<T> {
        &self.points
    }

    /// Engine configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig<T> {
        &self.config
    }

    /// Graph bounds.
    #[inline]
    pub fn bounds(&self) -> &Bounds<T> {
        &self.config.bounds
    }

    /// Acceptance predicate against the graph bounds.
    #[inline]
    pub fn is_within_bounds(&self, position: &Point<T>) -> bool {
        self.config.bounds.contains(position)
    }

    /// Least-squares fit of the current points, if defined.
    #[inline]
    pub fn fit(&self) -> Option<FitResult<T>> {
        self.fit
    }

    /// True when at least two points exist and their x values are not all equal.
    #[inline]
    pub fn is_fit_defined(&self) -> bool {
        self.fit.is_some()
    }

    /// Current user line parameters.
    #[inline]
    pub fn user_line(&self) -> UserLine<T> {
        self.user_line
    }

    /// Slope-intercept form of a line; `None` for an undefined best fit.
    pub fn line(&self, kind: LineKind) -> Option<LineModel<T>> {
        match kind {
            LineKind::MyLine => Some(self.user_line.line()),
            LineKind::BestFit => self.fit.map(|fit| fit.line()),
        }
    }

    /// Residuals of a line in point insertion order.
    #[inline]
    pub fn residuals(&self, kind: LineKind) -> &[Residual<T>] {
        self.residuals[kind.index()].as_slice()
    }

    /// Residual of one point against a line.
    #[inline]
    pub fn residual(&self, kind: LineKind, id: PointId) -> Option<&Residual<T>> {
        self.residuals[kind.index()].get(id)
    }

    /// Sum of squared residuals of a line; zero when it has no residuals.
    #[inline]
    pub fn sum_of_squared_residuals(&self, kind: LineKind) -> T {
        self.residuals[kind.index()].sum_of_squares()
    }

    /// Snapshot of every value the view layer displays.
    pub fn summary(&self) -> RegressionSummary<T> {
        RegressionSummary {
            point_count: self.points.len(),
            fit: self.fit,
            my_line: self.user_line.line(),
            my_line_ssr: self.sum_of_squared_residuals(LineKind::MyLine),
            best_fit_ssr: self
                .fit
                .map(|_| self.sum_of_squared_residuals(LineKind::BestFit)),
        }
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn sync(&mut self) {
        for event in self.points.drain_events() {
            self.apply_event(&event);
        }

        debug_assert_eq!(self.residuals[LineKind::MyLine.index()].len(), self.points.len());
        debug_assert_eq!(
            self.residuals[LineKind::BestFit.index()].len(),
            if self.fit.is_some() { self.points.len() } else { 0 }
        );
    }

    fn apply_event(&mut self, event: &PointEvent<T>) {
        trace!(id = %event.id(), points = self.points.len(), "applying point event");

        match (self.config.update_mode, *event) {
            (UpdateMode::Full, _) => self.sums.recompute(self.points.xs(), self.points.ys()),
            (UpdateMode::Incremental, PointEvent::Added { point, .. }) => self.sums.add(&point),
            (UpdateMode::Incremental, PointEvent::Removed { point, .. }) => {
                self.sums.remove(&point)
            }
            (UpdateMode::Incremental, PointEvent::Moved { from, to, .. }) => {
                self.sums.replace(&from, &to)
            }
        }

        let was_defined = self.fit.is_some();
        self.fit = FitResult::from_sums(&self.sums, self.config.tolerance);
        if was_defined != self.fit.is_some() {
            debug!(
                defined = self.fit.is_some(),
                points = self.sums.count,
                "best fit definedness changed"
            );
        }

        let my_line = self.user_line.line();
        self.residuals[LineKind::MyLine.index()].apply(event, &my_line);

        let best_fit = &mut self.residuals[LineKind::BestFit.index()];
        match self.fit {
            None => best_fit.clear(),
            Some(fit) => {
                let line = fit.line();
                if best_fit.is_empty() {
                    best_fit.rebuild(self.points.iter(), &line);
                } else {
                    // Membership only; the fit moved, so refresh recomputes every residual.
                    if !matches!(event, PointEvent::Moved { .. }) {
                        best_fit.apply(event, &line);
                    }
                    best_fit.refresh(&line);
                }
            }
        }
    }

    fn refresh_user_line(&mut self) {
        let line = self.user_line.line();
        self.residuals[LineKind::MyLine.index()].refresh(&line);
        debug!(
            slope = line.slope.to_f64().unwrap_or(f64::NAN),
            intercept = line.intercept.to_f64().unwrap_or(f64::NAN),
            "user line changed"
        );
    }
}
