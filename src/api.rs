//! High-level API for the regression engine.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring graph bounds, the initial user line, the
//! degeneracy tolerance and the running sum strategy, and builds a
//! `RegressionEngine` from them.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RegressionBuilder`] via `Regression::new()`.
//! 2. Chain configuration methods (`.bounds()`, `.angle()`, etc.).
//! 3. Call `.build()` to get a `RegressionEngine`.

// Internal dependencies
use crate::algorithms::fit::default_tolerance;
use crate::engine::regression::EngineConfig;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::fit::FitResult;
pub use crate::algorithms::line::{LineDisplay, LineKind, LineModel, UserLine};
pub use crate::algorithms::residual::Residual;
pub use crate::engine::output::RegressionSummary;
pub use crate::engine::regression::{RegressionEngine, UpdateMode};
#[cfg(feature = "std")]
pub use crate::engine::shared::SharedEngine;
pub use crate::math::sums::SumsLinalg;
pub use crate::primitives::bounds::{is_within_bounds, Bounds};
pub use crate::primitives::errors::RegressionError;
pub use crate::primitives::point::{Point, PointId};
pub use crate::primitives::point_set::{ListenerId, PointEvent, PointSet};

/// Fluent builder for configuring a regression engine.
#[derive(Debug, Clone)]
pub struct RegressionBuilder<T> {
    /// Graph bounds (default: unit square).
    pub bounds: Option<Bounds<T>>,

    /// Initial angle of My Line in radians (default: 0).
    pub angle: Option<T>,

    /// Initial intercept of My Line (default: 0).
    pub intercept: Option<T>,

    /// Relative tolerance for vertical/flat distributions (default: 64 machine epsilons).
    pub tolerance: Option<T>,

    /// Running sum strategy (default: Full).
    pub update_mode: Option<UpdateMode>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: SumsLinalg> Default for RegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SumsLinalg> RegressionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bounds: None,
            angle: None,
            intercept: None,
            tolerance: None,
            update_mode: None,
            duplicate_param: None,
        }
    }

    /// Set the graph bounds used by the acceptance predicate.
    pub fn bounds(mut self, min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        if self.bounds.is_some() {
            self.duplicate_param = Some("bounds");
        }
        self.bounds = Some(Bounds::new(min_x, min_y, max_x, max_y));
        self
    }

    /// Set the initial angle of My Line, in radians.
    pub fn angle(mut self, angle: T) -> Self {
        if self.angle.is_some() {
            self.duplicate_param = Some("angle");
        }
        self.angle = Some(angle);
        self
    }

    /// Set the initial intercept of My Line.
    pub fn intercept(mut self, intercept: T) -> Self {
        if self.intercept.is_some() {
            self.duplicate_param = Some("intercept");
        }
        self.intercept = Some(intercept);
        self
    }

    /// Set the relative tolerance below which a variance counts as zero.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the running sum strategy.
    pub fn update_mode(mut self, mode: UpdateMode) -> Self {
        if self.update_mode.is_some() {
            self.duplicate_param = Some("update_mode");
        }
        self.update_mode = Some(mode);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<RegressionEngine<T>, RegressionError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let tolerance = self.tolerance.unwrap_or_else(default_tolerance);

        let config = EngineConfig {
            bounds: self.bounds.unwrap_or_default(),
            user_line: UserLine::new(
                self.angle.unwrap_or_else(T::zero),
                self.intercept.unwrap_or_else(T::zero),
            ),
            tolerance,
            update_mode: self.update_mode.unwrap_or_default(),
        };

        RegressionEngine::new(config)
    }
}

/// Convenience: fit a line to coordinate columns without building an engine.
///
/// Returns `None` when the fit is undefined.
pub fn linear_fit<T: SumsLinalg>(x: &[T], y: &[T]) -> Option<FitResult<T>> {
    FitResult::from_columns(x, y, default_tolerance())
}
