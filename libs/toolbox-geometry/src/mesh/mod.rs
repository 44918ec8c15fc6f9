//! # Mesh Module
//!
//! Triangle mesh used for volume measurement.
//!
//! ## Structure
//!
//! - `positions`: one `Vec3` per vertex
//! - `triangles`: three vertex indices per triangle, outward winding
//!
//! ## Example
//!
//! ```rust
//! use toolbox_geometry::{TriMesh, Vec3};
//!
//! let mut mesh = TriMesh::new();
//! let v0 = mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0));
//! let v1 = mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0));
//! let v2 = mesh.add_vertex(Vec3::new(0.5, 1.0, 0.0));
//! mesh.add_triangle(v0, v1, v2);
//! assert_eq!(mesh.triangle_count(), 1);
//! ```


use glam::DMat4;
use tracing::debug;

use crate::bounds::Aabb;
use crate::error::{GeometryError, GeometryResult};
use crate::transform::transform_points;
use crate::Vec3;

// =============================================================================
// MESH STRUCT
// =============================================================================

/// Triangle mesh with shared vertex positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriMesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Triangle vertex indices.
    pub triangles: Vec<[u32; 3]>,
}

impl TriMesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Create a new empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create mesh with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_capacity),
            triangles: Vec::with_capacity(triangle_capacity),
        }
    }

    /// Builds a triangle mesh from polygon faces by fan triangulation.
    ///
    /// Each face lists vertex indices in winding order. Faces are assumed
    /// convex, as edit-mode faces of printable props are.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::DegeneratePolygon`] for a face with fewer than 3 indices
    /// - [`GeometryError::IndexOutOfBounds`] for an index past `positions`
    ///
    /// ## Example
    ///
    /// ```rust
    /// use toolbox_geometry::{TriMesh, Vec3};
    ///
    /// let quad = vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y];
    /// let mesh = TriMesh::from_polygons(quad, &[vec![0, 1, 2, 3]]).unwrap();
    /// assert_eq!(mesh.triangle_count(), 2);
    /// ```
    pub fn from_polygons(positions: Vec<Vec3>, faces: &[Vec<u32>]) -> GeometryResult<Self> {
        let triangle_count = faces.iter().map(|f| f.len().saturating_sub(2)).sum();
        let mut mesh = Self {
            triangles: Vec::with_capacity(triangle_count),
            positions,
        };

        for face in faces {
            if face.len() < 3 {
                return Err(GeometryError::DegeneratePolygon(face.len()));
            }
            for pair in face[1..].windows(2) {
                mesh.add_triangle(face[0], pair[0], pair[1]);
            }
        }

        mesh.validate()?;
        Ok(mesh)
    }

    // =========================================================================
    // BUILDERS
    // =========================================================================

    /// Add a vertex, returning its index.
    pub fn add_vertex(&mut self, position: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        index
    }

    /// Add a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    // =========================================================================
    // QUERY METHODS
    // =========================================================================

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Checks that every triangle index refers to an existing vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfBounds`] for the first bad index.
    pub fn validate(&self) -> GeometryResult<()> {
        let len = self.positions.len();
        match self
            .triangles
            .iter()
            .flatten()
            .find(|&&index| index as usize >= len)
        {
            Some(&index) => Err(GeometryError::IndexOutOfBounds { index, len }),
            None => Ok(()),
        }
    }

    // =========================================================================
    // MEASUREMENT
    // =========================================================================

    /// Signed enclosed volume by the divergence theorem.
    ///
    /// Sums `p0 · (p1 × p2) / 6` over all triangles. Positive for a closed
    /// mesh with outward winding; open meshes give a meaningless value.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfBounds`] for a bad index.
    pub fn volume(&self) -> GeometryResult<f64> {
        self.validate()?;
        let six_volume: f64 = self
            .triangles
            .iter()
            .map(|&[a, b, c]| {
                let p0 = self.positions[a as usize];
                let p1 = self.positions[b as usize];
                let p2 = self.positions[c as usize];
                p0.dot(p1.cross(p2))
            })
            .sum();
        let volume = six_volume / 6.0;
        debug!(triangles = self.triangle_count(), volume, "mesh volume");
        Ok(volume)
    }

    /// Bounding box of all vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptySelection`] for a mesh without vertices.
    pub fn bounding_box(&self) -> GeometryResult<Aabb> {
        Aabb::from_points(&self.positions)
    }

    // =========================================================================
    // TRANSFORM OPERATIONS
    // =========================================================================

    /// Copy of the mesh with every vertex moved by `world`.
    ///
    /// A transform with negative determinant flips winding, so the volume
    /// of the result changes sign.
    #[must_use]
    pub fn transformed(&self, world: &DMat4) -> Self {
        Self {
            positions: transform_points(world, &self.positions),
            triangles: self.triangles.clone(),
        }
    }

    /// Merge another mesh into this one, offsetting its indices.
    pub fn merge(&mut self, other: &TriMesh) {
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|[a, b, c]| [a + offset, b + offset, c + offset]),
        );
    }
}
