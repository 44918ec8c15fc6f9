//! Transform helpers for moving object-space selections into world space.
//!
//! This module centralizes transform logic so selection queries, mesh
//! measurement and bounding boxes share the same point and normal handling.

use config::constants::approx_zero;
use glam::{DMat3, DMat4};
use rayon::prelude::*;

use crate::error::{GeometryError, GeometryResult};
use crate::Vec3;

/// Applies a 4×4 affine world transform to every point.
///
/// Order is preserved.
///
/// # Examples
/// ```
/// use glam::DMat4;
/// use toolbox_geometry::{transform::transform_points, Vec3};
///
/// let moved = transform_points(
///     &DMat4::from_translation(Vec3::new(5.0, 0.0, 0.0)),
///     &[Vec3::ZERO, Vec3::X],
/// );
/// assert_eq!(moved, vec![Vec3::new(5.0, 0.0, 0.0), Vec3::new(6.0, 0.0, 0.0)]);
/// ```
#[must_use]
pub fn transform_points(world: &DMat4, points: &[Vec3]) -> Vec<Vec3> {
    points
        .par_iter()
        .map(|p| world.transform_point3(*p))
        .collect()
}

/// Matrix that maps object-space normals to world space.
///
/// This is the inverse-transpose of the transform's 3×3 part, which keeps
/// normals perpendicular under non-uniform scale. Results still need
/// renormalizing.
///
/// # Errors
///
/// Returns [`GeometryError::SingularTransform`] when the 3×3 part has a
/// zero determinant relative to the lengths of its columns. A uniformly tiny
/// scale is still invertible.
pub fn normal_matrix(world: &DMat4) -> GeometryResult<DMat3> {
    let linear = DMat3::from_mat4(*world);
    let magnitude = linear.x_axis.length() * linear.y_axis.length() * linear.z_axis.length();
    if !magnitude.is_normal() || approx_zero(linear.determinant() / magnitude) {
        return Err(GeometryError::SingularTransform);
    }
    let inverse = linear.inverse();
    if !inverse.is_finite() {
        return Err(GeometryError::SingularTransform);
    }
    Ok(inverse.transpose())
}

/// Transforms an object-space normal to a unit world-space normal.
///
/// # Errors
///
/// Returns [`GeometryError::SingularTransform`] for a singular transform
/// and [`GeometryError::DegenerateNormal`] for a zero-length normal.
pub fn transform_normal(world: &DMat4, normal: Vec3) -> GeometryResult<Vec3> {
    (normal_matrix(world)? * normal)
        .try_normalize()
        .ok_or(GeometryError::DegenerateNormal)
}
