//! Integration tests for rectangle measures and JSON round-tripping.

use quoll_geometry::{Rect, from_json, to_json};

#[test]
fn test_area() {
    let rect = Rect::new(10.0, 20.0);
    assert!((rect.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_perimeter() {
    let rect = Rect::new(3.0, 4.0);
    assert!((rect.perimeter() - 14.0).abs() < f64::EPSILON);
}

#[test]
fn test_square_has_equal_sides() {
    let square = Rect::square(5.0);
    assert!((square.width - square.height).abs() < f64::EPSILON);
    assert!((square.area() - 25.0).abs() < f64::EPSILON);
}

#[test]
fn test_to_json_text() {
    let rect = Rect::new(3.5, 2.0);
    let text = to_json(&rect).unwrap();
    assert_eq!(text, "{\"width\":3.5,\"height\":2.0}");
}

#[test]
fn test_json_round_trip_rebuilds_the_same_rect() {
    let rect = Rect::new(3.5, 2.0);
    let text = to_json(&rect).unwrap();
    let rebuilt: Rect = from_json(&text).unwrap();
    assert_eq!(rebuilt, rect);
}

#[test]
fn test_from_json_accepts_any_matching_shape() {
    // The target type decides the shape to rebuild; extra text layout is
    // irrelevant.
    let rebuilt: Rect = from_json("{ \"height\": 2, \"width\": 7 }").unwrap();
    assert!((rebuilt.area() - 14.0).abs() < f64::EPSILON);
}

#[test]
fn test_from_json_rejects_malformed_text() {
    let result: Result<Rect, _> = from_json("{\"width\": 3.5");
    assert!(result.is_err());
}

#[test]
fn test_from_json_rejects_shape_mismatch() {
    let result: Result<Rect, _> = from_json("{\"width\": \"wide\", \"height\": 2}");
    assert!(result.is_err());
}
