#![cfg(feature = "dev")]
//! Tests for parameter validation.
//!
//! ## Test Organization
//!
//! 1. **Points** - finiteness
//! 2. **Bounds** - ordering and finiteness
//! 3. **User Line** - angle range and intercept
//! 4. **Builder Parameters** - tolerance and duplicates

use core::f64::consts::FRAC_PI_2;

use lsr_rs::internals::engine::validator::Validator;
use lsr_rs::internals::primitives::bounds::Bounds;
use lsr_rs::internals::primitives::errors::RegressionError;
use lsr_rs::internals::primitives::point::Point;

// ============================================================================
// Point Validation Tests
// ============================================================================

#[test]
fn test_validate_point() {
    assert!(Validator::validate_point(&Point::new(0.0, -1e300)).is_ok());
    assert!(matches!(
        Validator::validate_point(&Point::new(f64::NAN, 0.0)),
        Err(RegressionError::InvalidPoint { .. })
    ));
    assert_eq!(
        Validator::validate_point(&Point::new(1.0, f64::INFINITY)),
        Err(RegressionError::InvalidPoint {
            x: 1.0,
            y: f64::INFINITY
        })
    );
}

// ============================================================================
// Bounds Validation Tests
// ============================================================================

#[test]
fn test_validate_bounds() {
    assert!(Validator::validate_bounds(&Bounds::new(0.0, 0.0, 10.0, 5.0)).is_ok());
    // Degenerate rectangles are allowed.
    assert!(Validator::validate_bounds(&Bounds::new(1.0, 1.0, 1.0, 1.0)).is_ok());

    assert_eq!(
        Validator::validate_bounds(&Bounds::new(10.0, 0.0, 0.0, 5.0)),
        Err(RegressionError::InvalidBounds {
            min_x: 10.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 5.0
        })
    );
    assert!(Validator::validate_bounds(&Bounds::new(0.0, 6.0, 10.0, 5.0)).is_err());
    assert!(Validator::validate_bounds(&Bounds::new(0.0, 0.0, f64::INFINITY, 5.0)).is_err());
    assert!(Validator::validate_bounds(&Bounds::new(f64::NAN, 0.0, 1.0, 1.0)).is_err());
}

// ============================================================================
// User Line Validation Tests
// ============================================================================

#[test]
fn test_validate_angle() {
    assert!(Validator::validate_angle(0.0).is_ok());
    assert!(Validator::validate_angle(1.5).is_ok());
    assert!(Validator::validate_angle(-1.5).is_ok());

    assert_eq!(
        Validator::validate_angle(FRAC_PI_2),
        Err(RegressionError::InvalidAngle(FRAC_PI_2))
    );
    assert!(Validator::validate_angle(-FRAC_PI_2).is_err());
    assert!(Validator::validate_angle(3.0).is_err());
    assert!(Validator::validate_angle(f64::NAN).is_err());
}

#[test]
fn test_validate_intercept() {
    assert!(Validator::validate_intercept(-250.0).is_ok());
    assert_eq!(
        Validator::validate_intercept(f64::NEG_INFINITY),
        Err(RegressionError::InvalidIntercept(f64::NEG_INFINITY))
    );
}

// ============================================================================
// Builder Parameter Validation Tests
// ============================================================================

#[test]
fn test_validate_tolerance() {
    assert!(Validator::validate_tolerance(0.0).is_ok());
    assert!(Validator::validate_tolerance(1e-12).is_ok());
    assert_eq!(
        Validator::validate_tolerance(-1e-12),
        Err(RegressionError::InvalidTolerance(-1e-12))
    );
    assert!(Validator::validate_tolerance(f64::INFINITY).is_err());
}

#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("angle")),
        Err(RegressionError::DuplicateParameter { parameter: "angle" })
    );
}
