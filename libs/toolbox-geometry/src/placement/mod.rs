//! Placement of generated assets (logo, order label) onto a selected face.
//!
//! Assets are modelled facing +Z. Placing one on a face moves its origin to
//! the face center and rotates +Z onto the face normal along the shortest
//! arc.

use glam::{DMat4, DQuat, EulerRot};

use crate::error::{GeometryError, GeometryResult};
use crate::selection::FaceFrame;
use crate::Vec3;

/// Rotation taking +Z onto `normal` along the shortest arc.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateNormal`] for a zero or non-finite
/// normal.
///
/// # Examples
/// ```
/// use toolbox_geometry::{align_to_normal, Vec3};
///
/// let rotation = align_to_normal(Vec3::new(0.0, 0.0, 2.0)).unwrap();
/// assert!((rotation * Vec3::Z - Vec3::Z).length() < 1e-12);
/// ```
pub fn align_to_normal(normal: Vec3) -> GeometryResult<DQuat> {
    let target = normal
        .try_normalize()
        .ok_or(GeometryError::DegenerateNormal)?;
    Ok(DQuat::from_rotation_arc(Vec3::Z, target))
}

/// Location and orientation for an object's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// World-space location.
    pub location: Vec3,
    /// World-space rotation.
    pub rotation: DQuat,
}

impl Placement {
    /// Rotation as X/Y/Z Euler angles in radians, applied X first, then Y,
    /// then Z.
    #[must_use]
    pub fn euler_xyz(&self) -> Vec3 {
        let (z, y, x) = self.rotation.to_euler(EulerRot::ZYX);
        Vec3::new(x, y, z)
    }

    /// Affine matrix of this placement.
    #[must_use]
    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.rotation, self.location)
    }

    /// Maps an object-space point through this placement.
    #[must_use]
    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.location
    }
}

/// Placement putting a +Z-facing asset flat on a face.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateNormal`] for a zero normal.
pub fn place_on_face(frame: &FaceFrame) -> GeometryResult<Placement> {
    Ok(Placement {
        location: frame.center,
        rotation: align_to_normal(frame.normal)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn aligns_z_onto_arbitrary_normal() {
        let normal = Vec3::new(1.0, 2.0, -0.5).normalize();
        let rotation = align_to_normal(normal).unwrap();
        let mapped = rotation * Vec3::Z;
        assert_relative_eq!(mapped.x, normal.x, epsilon = 1e-12);
        assert_relative_eq!(mapped.y, normal.y, epsilon = 1e-12);
        assert_relative_eq!(mapped.z, normal.z, epsilon = 1e-12);
    }

    #[test]
    fn aligns_onto_opposite_normal() {
        let rotation = align_to_normal(-Vec3::Z).unwrap();
        let mapped = rotation * Vec3::Z;
        assert_relative_eq!(mapped.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_normal_cannot_be_aligned() {
        assert_eq!(align_to_normal(Vec3::ZERO), Err(GeometryError::DegenerateNormal));
    }

    #[test]
    fn face_pointing_down_y_is_quarter_turn_about_x() {
        let frame = FaceFrame {
            center: Vec3::new(1.0, 2.0, 3.0),
            normal: -Vec3::Y,
        };
        let placement = place_on_face(&frame).unwrap();
        let euler = placement.euler_xyz();

        assert_relative_eq!(euler.x, FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(euler.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(euler.z, 0.0, epsilon = 1e-12);
        assert_eq!(placement.location, frame.center);
    }

    #[test]
    fn euler_angles_rebuild_the_rotation() {
        let rotation = align_to_normal(Vec3::new(0.3, -0.4, 0.8)).unwrap();
        let placement = Placement {
            location: Vec3::ZERO,
            rotation,
        };
        let e = placement.euler_xyz();
        let rebuilt = DQuat::from_euler(EulerRot::ZYX, e.z, e.y, e.x);
        let a = rebuilt * Vec3::new(0.2, 0.7, -1.1);
        let b = rotation * Vec3::new(0.2, 0.7, -1.1);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
    }

    #[test]
    fn apply_matches_matrix() {
        let placement = place_on_face(&FaceFrame {
            center: Vec3::new(5.0, 0.0, 0.0),
            normal: Vec3::X,
        })
        .unwrap();
        let p = Vec3::new(0.0, 0.0, 2.0);
        let via_matrix = placement.to_mat4().transform_point3(p);
        let direct = placement.apply(p);
        assert_relative_eq!(via_matrix.x, direct.x, epsilon = 1e-12);
        assert_relative_eq!(direct.x, 7.0, epsilon = 1e-12);
    }
}
