//! Tests for prop suggestions and dimension checks.

use approx::assert_relative_eq;
use glam::DQuat;

use super::*;
use crate::SizingError;
use toolbox_geometry::GeometryError;

#[test]
fn test_suggestions_for_defaults() {
    let s = BodyMeasurements::default().suggestions();
    assert_relative_eq!(s.width_low, 206.7, epsilon = 1e-9);
    assert_relative_eq!(s.width_high, 222.3, epsilon = 1e-9);

    let proportions: Vec<f64> = s.heights.iter().map(|(p, _)| *p).collect();
    assert_eq!(proportions, vec![5.5, 6.0, 6.5, 7.0]);
    assert_relative_eq!(s.heights[0].1, 1680.0 / 5.5);
    assert_relative_eq!(s.heights[3].1, 240.0);
}

#[test]
fn test_suggestion_lines() {
    let lines = BodyMeasurements::default().suggestions().lines();
    assert_eq!(
        lines,
        vec![
            "Width:  206.70 - 222.30 mm",
            "Height (1/5.5): 305.45 mm",
            "Height (1/6.0): 280.00 mm",
            "Height (1/6.5): 258.46 mm",
            "Height (1/7.0): 240.00 mm",
        ]
    );
}

#[test]
fn test_height_range() {
    let (low, high) = BodyMeasurements::default().height_range();
    assert_relative_eq!(low, 1680.0 / 6.5);
    assert_relative_eq!(high, 1680.0 / 5.5);
}

#[test]
fn test_width_bounds_are_exclusive() {
    let body = BodyMeasurements {
        shoulder_width: 400.0,
        ..Default::default()
    };
    // open range (212, 228)
    let at_low = check_dimensions(&body, Vec3::new(212.0, 0.0, 280.0));
    assert_eq!(at_low.width.hint, Some(MeasurementHint::Warning));

    let inside = check_dimensions(&body, Vec3::new(220.0, 0.0, 280.0));
    assert_eq!(inside.width.hint, Some(MeasurementHint::Correct));

    let at_high = check_dimensions(&body, Vec3::new(228.0, 0.0, 280.0));
    assert_eq!(at_high.width.hint, Some(MeasurementHint::Warning));
}

#[test]
fn test_height_out_of_range() {
    let body = BodyMeasurements::default();
    let too_short = check_dimensions(&body, Vec3::new(215.0, 0.0, 240.0));
    assert_eq!(too_short.height.hint, Some(MeasurementHint::Warning));
    assert!(!too_short.is_correct());

    let too_tall = check_dimensions(&body, Vec3::new(215.0, 0.0, 310.0));
    assert_eq!(too_tall.height.hint, Some(MeasurementHint::Warning));
}

#[test]
fn test_depth_is_not_checked() {
    let check = check_dimensions(
        &BodyMeasurements::default(),
        Vec3::new(215.0, 10_000.0, 280.0),
    );
    assert_eq!(check.depth.hint, None);
    assert!(check.is_correct());
    assert_eq!(check.depth.to_string(), "Depth(Y): 10000.00 mm");
}

#[test]
fn test_check_objects_uses_combined_box() {
    // two halves of a head shell placed side by side
    let half = Aabb::new(Vec3::ZERO, Vec3::new(107.5, 200.0, 280.0));
    let objects = [
        (DMat4::IDENTITY, half),
        (DMat4::from_translation(Vec3::new(107.5, 0.0, 0.0)), half),
    ];
    let check = check_objects(&BodyMeasurements::default(), &objects).unwrap();
    assert_relative_eq!(check.width.value, 215.0);
    assert_relative_eq!(check.height.value, 280.0);
    assert!(check.is_correct());
}

#[test]
fn test_check_objects_rotated() {
    // lying on its back: the local Y extent becomes the world height
    let shell = Aabb::new(Vec3::ZERO, Vec3::new(215.0, 280.0, 200.0));
    let world = DMat4::from_quat(DQuat::from_rotation_x(std::f64::consts::FRAC_PI_2));
    let check = check_objects(&BodyMeasurements::default(), &[(world, shell)]).unwrap();
    assert_relative_eq!(check.height.value, 280.0, epsilon = 1e-9);
    assert_relative_eq!(check.depth.value, 200.0, epsilon = 1e-9);
}

#[test]
fn test_check_objects_needs_selection() {
    assert_eq!(
        check_objects(&BodyMeasurements::default(), &[]),
        Err(SizingError::Geometry(GeometryError::EmptySelection))
    );
}
