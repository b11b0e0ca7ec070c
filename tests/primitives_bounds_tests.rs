use lsr_rs::{is_within_bounds, Bounds, Point};

#[test]
fn test_bounds_closed_interval() {
    let bounds = Bounds::new(0.0, 0.0, 10.0, 5.0);

    // Corners and edges are inside.
    assert!(is_within_bounds(&Point::new(0.0, 0.0), &bounds));
    assert!(is_within_bounds(&Point::new(10.0, 5.0), &bounds));
    assert!(is_within_bounds(&Point::new(10.0, 0.0), &bounds));
    assert!(is_within_bounds(&Point::new(3.0, 5.0), &bounds));

    // Interior.
    assert!(is_within_bounds(&Point::new(4.2, 2.5), &bounds));
}

#[test]
fn test_bounds_rejects_outside() {
    let bounds = Bounds::new(-1.0, -1.0, 1.0, 1.0);

    assert!(!is_within_bounds(&Point::new(1.0 + 1e-9, 0.0), &bounds));
    assert!(!is_within_bounds(&Point::new(0.0, -1.5), &bounds));
    assert!(!is_within_bounds(&Point::new(-2.0, 2.0), &bounds));
}

#[test]
fn test_bounds_rejects_nan() {
    let bounds = Bounds::new(0.0, 0.0, 1.0, 1.0);
    assert!(!is_within_bounds(&Point::new(f64::NAN, 0.5), &bounds));
    assert!(!is_within_bounds(&Point::new(0.5, f64::NAN), &bounds));
}

#[test]
fn test_bounds_extent_and_default() {
    let bounds = Bounds::new(2.0, 1.0, 7.0, 4.0);
    assert_eq!(bounds.width(), 5.0);
    assert_eq!(bounds.height(), 3.0);

    let unit: Bounds<f32> = Bounds::default();
    assert_eq!(unit, Bounds::new(0.0, 0.0, 1.0, 1.0));
}
