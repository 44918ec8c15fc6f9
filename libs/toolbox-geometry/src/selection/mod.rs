//! # Selection Geometry
//!
//! Statistics over an edit-mode selection: vertex centroid, active vertex
//! location, face center and normal, and a brute-force average normal for
//! vertex selections without a face.
//!
//! ## Conventions
//!
//! - Inputs are object-space points plus the object's world transform
//! - An empty selection is always [`GeometryError::EmptySelection`]
//! - Returned normals are unit length
//!
//! ## Example
//!
//! ```rust
//! use toolbox_geometry::{centroid, Vec3};
//!
//! let c = centroid(&[Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 3.0, 0.0)]).unwrap();
//! assert_eq!(c, Vec3::new(1.0, 1.0, 0.0));
//! ```


use config::constants::{approx_zero, BRUTE_FORCE_NORMAL_WARN_POINTS};
use glam::DMat4;
use tracing::{debug, warn};

use crate::error::{GeometryError, GeometryResult};
use crate::transform::{transform_normal, transform_points};
use crate::Vec3;

// =============================================================================
// VERTEX QUERIES
// =============================================================================

/// Arithmetic mean of a non-empty point set.
///
/// # Errors
///
/// Returns [`GeometryError::EmptySelection`] for an empty slice.
pub fn centroid(points: &[Vec3]) -> GeometryResult<Vec3> {
    if points.is_empty() {
        return Err(GeometryError::EmptySelection);
    }
    let sum: Vec3 = points.iter().copied().sum();
    Ok(sum / points.len() as f64)
}

/// Average world-space location of the selected vertices.
///
/// # Errors
///
/// Returns [`GeometryError::EmptySelection`] for an empty slice.
pub fn world_centroid(world: &DMat4, points: &[Vec3]) -> GeometryResult<Vec3> {
    centroid(&transform_points(world, points))
}

/// World-space location of the active vertex.
///
/// `active` indexes into `points`.
///
/// # Errors
///
/// Returns [`GeometryError::NoActiveVertex`] when there is no active vertex
/// or the index is outside the selection.
pub fn active_vertex_location(
    world: &DMat4,
    points: &[Vec3],
    active: Option<usize>,
) -> GeometryResult<Vec3> {
    let point = active
        .and_then(|index| points.get(index))
        .ok_or(GeometryError::NoActiveVertex)?;
    Ok(world.transform_point3(*point))
}

/// Average normal of a small point set by brute force.
///
/// For every unordered triple `i < j < k` the unit normal of
/// `(p_j - p_i) × (p_k - p_i)` is accumulated (collinear triples add
/// nothing) and the sum is renormalized. The sign follows the winding of
/// the points.
///
/// This visits every triple, so the cost is O(n³). It is meant for a
/// handful of selected vertices; larger inputs log a warning.
///
/// # Errors
///
/// - [`GeometryError::EmptySelection`] for an empty slice
/// - [`GeometryError::DegenerateSelection`] for fewer than 3 points
/// - [`GeometryError::DegenerateNormal`] when all triples cancel or are
///   collinear
///
/// # Examples
/// ```
/// use toolbox_geometry::{average_normal, Vec3};
///
/// let quad = [
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(1.0, 1.0, 0.0),
///     Vec3::new(0.0, 1.0, 0.0),
/// ];
/// assert_eq!(average_normal(&quad).unwrap(), Vec3::Z);
/// ```
pub fn average_normal(points: &[Vec3]) -> GeometryResult<Vec3> {
    let n = points.len();
    if n == 0 {
        return Err(GeometryError::EmptySelection);
    }
    if n < 3 {
        return Err(GeometryError::DegenerateSelection {
            required: 3,
            found: n,
        });
    }
    if n > BRUTE_FORCE_NORMAL_WARN_POINTS {
        warn!(points = n, "brute-force average normal is cubic in point count");
    }

    let mut sum = Vec3::ZERO;
    for i in 0..n - 2 {
        for j in i + 1..n - 1 {
            for k in j + 1..n {
                let normal = (points[j] - points[i]).cross(points[k] - points[i]);
                sum += normal.normalize_or_zero();
            }
        }
    }

    // Sum of unit vectors, so the cutoff does not depend on selection size.
    if approx_zero(sum.length()) {
        return Err(GeometryError::DegenerateNormal);
    }
    Ok(sum.normalize())
}

// =============================================================================
// FACE QUERIES
// =============================================================================

/// A planar polygon from a face selection, in object space.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Vertex ring in winding order.
    pub ring: Vec<Vec3>,
    /// Face normal stored by the mesh, if any.
    pub normal: Option<Vec3>,
}

impl Polygon {
    /// Creates a polygon without a stored normal.
    #[must_use]
    pub fn new(ring: Vec<Vec3>) -> Self {
        Self { ring, normal: None }
    }

    /// Sets the stored face normal.
    #[must_use]
    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = Some(normal);
        self
    }

    fn check_ring(&self) -> GeometryResult<()> {
        if self.ring.len() < 3 {
            return Err(GeometryError::DegeneratePolygon(self.ring.len()));
        }
        Ok(())
    }

    fn extremes(&self) -> (Vec3, Vec3) {
        self.ring.iter().fold(
            (Vec3::splat(f64::INFINITY), Vec3::splat(f64::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        )
    }

    /// Midpoint of the ring's bounding extremes.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePolygon`] for fewer than 3 vertices.
    pub fn bounds_center(&self) -> GeometryResult<Vec3> {
        self.check_ring()?;
        let (min, max) = self.extremes();
        Ok((min + max) * 0.5)
    }

    /// Newell normal of the ring, unit length.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePolygon`] for fewer than 3 vertices
    /// and [`GeometryError::DegenerateNormal`] for a zero-area ring. Area is
    /// judged against the ring's extent, so tiny faces still have a normal.
    pub fn newell_normal(&self) -> GeometryResult<Vec3> {
        self.check_ring()?;
        let mut normal = Vec3::ZERO;
        for (i, current) in self.ring.iter().enumerate() {
            let next = self.ring[(i + 1) % self.ring.len()];
            normal.x += (current.y - next.y) * (current.z + next.z);
            normal.y += (current.z - next.z) * (current.x + next.x);
            normal.z += (current.x - next.x) * (current.y + next.y);
        }
        let (min, max) = self.extremes();
        let extent = (max - min).length_squared();
        if !extent.is_normal() || approx_zero(normal.length() / extent) {
            return Err(GeometryError::DegenerateNormal);
        }
        normal.try_normalize().ok_or(GeometryError::DegenerateNormal)
    }

    /// Stored normal if present, otherwise the Newell normal.
    ///
    /// # Errors
    ///
    /// See [`Polygon::newell_normal`].
    pub fn normal(&self) -> GeometryResult<Vec3> {
        match self.normal {
            Some(stored) => Ok(stored),
            None => self.newell_normal(),
        }
    }
}

/// World-space center and unit normal of a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFrame {
    /// Face center in world space.
    pub center: Vec3,
    /// Unit face normal in world space.
    pub normal: Vec3,
}

/// Center and normal of a face in world space.
///
/// The center is the midpoint of the ring's bounding extremes. The normal
/// goes through the inverse-transpose of the world transform and is
/// renormalized.
///
/// # Errors
///
/// - [`GeometryError::DegeneratePolygon`] for fewer than 3 vertices
/// - [`GeometryError::DegenerateNormal`] for a zero-length normal
/// - [`GeometryError::SingularTransform`] for a non-invertible transform
pub fn face_frame(world: &DMat4, face: &Polygon) -> GeometryResult<FaceFrame> {
    let center = world.transform_point3(face.bounds_center()?);
    let normal = transform_normal(world, face.normal()?)?;
    debug!(?center, ?normal, "face frame");
    Ok(FaceFrame { center, normal })
}

/// Frame of the first face in a face selection.
///
/// # Errors
///
/// Returns [`GeometryError::EmptySelection`] when no face is selected, or
/// any [`face_frame`] error.
pub fn first_face_frame(world: &DMat4, faces: &[Polygon]) -> GeometryResult<FaceFrame> {
    let face = faces.first().ok_or(GeometryError::EmptySelection)?;
    face_frame(world, face)
}
