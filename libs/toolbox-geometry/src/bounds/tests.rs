//! Tests for bounding boxes.

use approx::assert_relative_eq;
use glam::DQuat;

use super::*;

#[test]
fn test_from_points() {
    let bbox = Aabb::from_points(&[
        Vec3::new(1.0, -2.0, 0.5),
        Vec3::new(-1.0, 4.0, 0.0),
        Vec3::new(0.0, 0.0, 3.0),
    ])
    .unwrap();
    assert_eq!(bbox.min, Vec3::new(-1.0, -2.0, 0.0));
    assert_eq!(bbox.max, Vec3::new(1.0, 4.0, 3.0));
    assert_eq!(bbox.dimensions(), Vec3::new(2.0, 6.0, 3.0));
    assert_eq!(bbox.center(), Vec3::new(0.0, 1.0, 1.5));
}

#[test]
fn test_empty_inputs_are_errors() {
    assert_eq!(Aabb::from_points(&[]), Err(GeometryError::EmptySelection));
    assert_eq!(Aabb::union_all(&[]), Err(GeometryError::EmptySelection));
}

#[test]
fn test_new_orders_corners() {
    let bbox = Aabb::new(Vec3::ONE, Vec3::ZERO);
    assert_eq!(bbox.min, Vec3::ZERO);
    assert_eq!(bbox.max, Vec3::ONE);
}

#[test]
fn test_many_points_match_sequential_fold() {
    let points: Vec<Vec3> = (0..1000)
        .map(|i| {
            let t = i as f64 * 0.37;
            Vec3::new(t.sin() * 10.0, t.cos() * 5.0, (t * 0.5).sin())
        })
        .collect();
    let bbox = Aabb::from_points(&points).unwrap();
    let (min, max) = points.iter().fold(
        (Vec3::splat(f64::INFINITY), Vec3::splat(f64::NEG_INFINITY)),
        |(lo, hi), p| (lo.min(*p), hi.max(*p)),
    );
    assert_eq!(bbox.min, min);
    assert_eq!(bbox.max, max);
}

#[test]
fn test_transformed_points() {
    let world = DMat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
    let bbox = Aabb::from_transformed_points(&world, &[Vec3::ZERO, Vec3::ONE]).unwrap();
    assert_eq!(bbox.dimensions(), Vec3::new(2.0, 1.0, 1.0));
}

#[test]
fn test_rotated_corners_grow_the_box() {
    let local = Aabb::new(Vec3::ZERO, Vec3::ONE);
    let world = DMat4::from_quat(DQuat::from_rotation_z(std::f64::consts::FRAC_PI_4));
    let dims = Aabb::from_transformed_corners(&world, &local).dimensions();
    assert_relative_eq!(dims.x, 2f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(dims.y, 2f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(dims.z, 1.0, epsilon = 1e-12);
}

#[test]
fn test_union_all_combines_objects() {
    let unit = Aabb::new(Vec3::ZERO, Vec3::ONE);
    let objects = [
        (DMat4::IDENTITY, unit),
        (DMat4::from_translation(Vec3::new(4.0, 0.0, 0.0)), unit),
        (
            DMat4::from_scale_rotation_translation(
                Vec3::splat(2.0),
                DQuat::IDENTITY,
                Vec3::new(0.0, 0.0, -2.0),
            ),
            unit,
        ),
    ];
    let combined = Aabb::union_all(&objects).unwrap();
    assert_eq!(combined.min, Vec3::new(0.0, 0.0, -2.0));
    assert_eq!(combined.max, Vec3::new(5.0, 2.0, 1.0));
}
