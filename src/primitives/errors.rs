//! Error types for point-set mutation and engine configuration.
//!
//! ## Purpose
//!
//! This module defines `RegressionError`, the single error type returned by
//! every fallible operation in the crate.
//!
//! ## Design notes
//!
//! * **Local and recoverable**: A failed call never mutates state, so the caller
//!   may retry with corrected input.
//! * **no_std**: `Display` is written by hand; `std::error::Error` is only
//!   implemented when the `std` feature is enabled.
//!
//! ## Non-goals
//!
//! * An undefined fit is not an error. It is reported as `None` by the engine.

use core::fmt;

use crate::primitives::point::PointId;

/// Errors produced by point-set mutation and engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// A point with a NaN or infinite coordinate was offered to the set.
    InvalidPoint {
        /// Offending x coordinate.
        x: f64,
        /// Offending y coordinate.
        y: f64,
    },

    /// The referenced point is not a current member of the set.
    NotFound(PointId),

    /// Graph bounds are non-finite or inverted.
    InvalidBounds {
        /// Lower x limit.
        min_x: f64,
        /// Lower y limit.
        min_y: f64,
        /// Upper x limit.
        max_x: f64,
        /// Upper y limit.
        max_y: f64,
    },

    /// The user line angle is non-finite or not strictly inside (-pi/2, pi/2).
    InvalidAngle(f64),

    /// The user line intercept is non-finite.
    InvalidIntercept(f64),

    /// The degeneracy tolerance is negative or non-finite.
    InvalidTolerance(f64),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionError::InvalidPoint { x, y } => {
                write!(f, "Invalid point: ({}, {}) (coordinates must be finite)", x, y)
            }
            RegressionError::NotFound(id) => write!(f, "Point not found: {}", id),
            RegressionError::InvalidBounds {
                min_x,
                min_y,
                max_x,
                max_y,
            } => write!(
                f,
                "Invalid bounds: [{}, {}] x [{}, {}] (must be finite with min <= max)",
                min_x, max_x, min_y, max_y
            ),
            RegressionError::InvalidAngle(angle) => write!(
                f,
                "Invalid angle: {} (must be finite and strictly between -pi/2 and pi/2)",
                angle
            ),
            RegressionError::InvalidIntercept(intercept) => {
                write!(f, "Invalid intercept: {} (must be finite)", intercept)
            }
            RegressionError::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be >= 0 and finite)", tol)
            }
            RegressionError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegressionError {}
