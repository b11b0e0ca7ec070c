#![cfg(feature = "dev")]

use lsr_rs::internals::primitives::errors::RegressionError;
use lsr_rs::internals::primitives::point::Point;
use lsr_rs::internals::primitives::point_set::PointSet;

#[test]
fn test_regression_error_display() {
    // InvalidPoint
    let err = RegressionError::InvalidPoint { x: 1.5, y: f64::NAN };
    assert_eq!(
        format!("{}", err),
        "Invalid point: (1.5, NaN) (coordinates must be finite)"
    );

    // NotFound
    let mut set = PointSet::new();
    let id = set.add(Point::new(0.0, 0.0)).unwrap();
    set.remove(id).unwrap();
    let err = set.remove(id).unwrap_err();
    assert_eq!(format!("{}", err), "Point not found: #0");

    // InvalidBounds
    let err = RegressionError::InvalidBounds {
        min_x: 10.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 5.0,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid bounds: [10, 0] x [0, 5] (must be finite with min <= max)"
    );

    // InvalidAngle
    let err = RegressionError::InvalidAngle(2.0);
    assert_eq!(
        format!("{}", err),
        "Invalid angle: 2 (must be finite and strictly between -pi/2 and pi/2)"
    );

    // InvalidIntercept
    let err = RegressionError::InvalidIntercept(f64::INFINITY);
    assert_eq!(
        format!("{}", err),
        "Invalid intercept: inf (must be finite)"
    );

    // InvalidTolerance
    let err = RegressionError::InvalidTolerance(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid tolerance: -1 (must be >= 0 and finite)"
    );

    // DuplicateParameter
    let err = RegressionError::DuplicateParameter { parameter: "angle" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'angle' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_regression_error_properties() {
    let err1 = RegressionError::InvalidAngle(2.0);
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, RegressionError::InvalidIntercept(2.0));
}

#[cfg(feature = "std")]
#[test]
fn test_regression_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<RegressionError>();
}
