//! Input validation for engine configuration and point data.
//!
//! ## Purpose
//!
//! This module provides validation functions for engine configuration
//! parameters and the points offered to it. It checks finiteness, bound
//! ordering, the user line's angle range, and builder misuse.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Side-effect free**: Validators run before any state is touched.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//!
//! ## Non-goals
//!
//! * This module does not clamp or otherwise correct invalid inputs.

// External dependencies
use core::f64::consts::FRAC_PI_2;
use num_traits::Float;

// Internal dependencies
use crate::primitives::bounds::Bounds;
use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for engine configuration and input data.
///
/// All methods return `Result<(), RegressionError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Point Validation
    // ========================================================================

    /// Validate that both coordinates of a point are finite.
    pub fn validate_point<T: Float>(point: &Point<T>) -> Result<(), RegressionError> {
        if !point.is_finite() {
            return Err(RegressionError::InvalidPoint {
                x: to_f64(point.x),
                y: to_f64(point.y),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate graph bounds: finite corners with `min <= max` on both axes.
    pub fn validate_bounds<T: Float>(bounds: &Bounds<T>) -> Result<(), RegressionError> {
        let finite = bounds.min_x.is_finite()
            && bounds.min_y.is_finite()
            && bounds.max_x.is_finite()
            && bounds.max_y.is_finite();

        if !finite || bounds.min_x > bounds.max_x || bounds.min_y > bounds.max_y {
            return Err(RegressionError::InvalidBounds {
                min_x: to_f64(bounds.min_x),
                min_y: to_f64(bounds.min_y),
                max_x: to_f64(bounds.max_x),
                max_y: to_f64(bounds.max_y),
            });
        }
        Ok(())
    }

    /// Validate a user line angle.
    ///
    /// # Notes
    ///
    /// * The open interval keeps `tan(angle)` finite.
    pub fn validate_angle<T: Float>(angle: T) -> Result<(), RegressionError> {
        let a = to_f64(angle);
        if !a.is_finite() || a.abs() >= FRAC_PI_2 {
            return Err(RegressionError::InvalidAngle(a));
        }
        Ok(())
    }

    /// Validate a user line intercept.
    pub fn validate_intercept<T: Float>(intercept: T) -> Result<(), RegressionError> {
        if !intercept.is_finite() {
            return Err(RegressionError::InvalidIntercept(to_f64(intercept)));
        }
        Ok(())
    }

    /// Validate the relative degeneracy tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), RegressionError> {
        if !tol.is_finite() || tol < T::zero() {
            return Err(RegressionError::InvalidTolerance(to_f64(tol)));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RegressionError> {
        if let Some(param) = duplicate_param {
            return Err(RegressionError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

#[inline]
fn to_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}
