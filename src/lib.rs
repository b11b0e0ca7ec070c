//! # LSR — Least-Squares Regression with live residuals for Rust
//!
//! An event-driven engine that keeps a least-squares fit, per-point residuals
//! and sums of squared residuals consistent with a mutable set of 2-D points.
//!
//! ## What does it compute?
//!
//! Points are placed on a graph. Two lines are tracked against them:
//!
//! - **My Line**: set by the user as an angle (slope = tan(angle)) and an intercept.
//! - **Best Fit Line**: the ordinary least-squares regression of the current points.
//!
//! For each line the engine maintains one residual per point (the vertical
//! segment from the point to the line, plus which side its square is drawn on)
//! and the sum of squared residuals. For the best fit it also reports the
//! Pearson correlation coefficient.
//!
//! **How it stays current:**
//!
//! 1. A point is added, removed or moved, or the user line changes
//! 2. The point set emits an event
//! 3. The engine updates the running sums and the fit
//! 4. Only the affected residuals are recomputed (all of them for a line whose
//!    parameters changed)
//!
//! Every mutation completes before returning, so a read always reflects all
//! earlier writes.
//!
//! ## Quick Start
//!
//! ```rust
//! use lsr_rs::prelude::*;
//!
//! let mut engine = Regression::new()
//!     .bounds(0.0, 0.0, 10.0, 10.0)
//!     .build()?;
//!
//! for (x, y) in [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)] {
//!     engine.add_point(Point::new(x, y))?;
//! }
//!
//! let fit = engine.fit().expect("three collinear points have a fit");
//! assert_eq!(fit.slope, 1.0);
//! assert_eq!(fit.intercept, 0.0);
//! assert_eq!(engine.sum_of_squared_residuals(BestFit), 0.0);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Undefined fits
//!
//! A fit needs at least two points that do not all share the same x value.
//! Otherwise `fit()` returns `None` and the best fit has no residuals:
//!
//! ```rust
//! use lsr_rs::prelude::*;
//!
//! let mut engine = Regression::new().bounds(0.0, 0.0, 10.0, 10.0).build()?;
//! engine.add_point(Point::new(5.0, 5.0))?;
//!
//! assert!(!engine.is_fit_defined());
//! assert_eq!(engine.sum_of_squared_residuals(BestFit), 0.0);
//!
//! engine.add_point(Point::new(5.0, 7.0))?; // same x: vertical distribution
//! assert!(engine.fit().is_none());
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ### Placing points
//!
//! `place_point` applies the acceptance policy: a point is added only if the
//! graph bounds (closed on both axes) contain it.
//!
//! ```rust
//! use lsr_rs::prelude::*;
//!
//! let mut engine = Regression::new().bounds(0.0, 0.0, 10.0, 10.0).build()?;
//!
//! assert!(engine.place_point(Point::new(10.0, 3.0))?.is_some());
//! assert!(engine.place_point(Point::new(10.5, 3.0))?.is_none());
//! assert_eq!(engine.points().len(), 1);
//! # Result::<(), RegressionError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter       | Default        | Range/Options              | Description                                   |
//! |-----------------|----------------|----------------------------|-----------------------------------------------|
//! | **bounds**      | `[0,1] x [0,1]`| finite, `min <= max`       | Graph rectangle for the acceptance predicate  |
//! | **angle**       | 0              | `(-pi/2, pi/2)`            | Initial My Line angle in radians              |
//! | **intercept**   | 0              | finite                     | Initial My Line intercept                     |
//! | **tolerance**   | 64 epsilon     | `>= 0`                     | Relative threshold for a zero variance        |
//! | **update_mode** | `Full`         | `Full`, `Incremental`      | Running sum strategy                          |
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency. The
//! `SharedEngine` lock wrapper and `std::error::Error` impl require `std`.
//!
//! ```toml
//! [dependencies]
//! lsr-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains points, the observable point set, graph bounds and errors.
mod primitives;

// Layer 2: Math - pure numerical functions.
//
// Contains raw moment accumulation and running sums.
mod math;

// Layer 3: Algorithms - regression content.
//
// Contains line models, the least-squares fit and residual maintenance.
mod algorithms;

// Layer 4: Engine - orchestration.
//
// Contains the event-driven engine, validation and output snapshots.
mod engine;

// High-level fluent API.
//
// Provides the `Regression` builder.
mod api;

pub use api::*;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use lsr_rs::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::api::SharedEngine;
    pub use crate::api::{
        is_within_bounds, linear_fit, Bounds, FitResult,
        LineKind::{self, BestFit, MyLine},
        LineDisplay, LineModel, Point, PointEvent, PointId, RegressionBuilder as Regression,
        RegressionEngine, RegressionError, RegressionSummary, Residual,
        UpdateMode::{self, Full, Incremental},
        UserLine,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal regression algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal engine.
    pub mod engine {
        pub use crate::engine::*;
    }
}
