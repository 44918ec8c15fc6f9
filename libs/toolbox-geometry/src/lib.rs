//! Selection geometry and mesh measurement for the workshop toolbox.
//!
//! Every query takes the selection and the object's world transform as
//! explicit parameters. Empty or missing selections are reported as
//! [`GeometryError`] values, never as zero vectors.

pub mod bounds;
pub mod core;
pub mod error;
pub mod mesh;
pub mod placement;
pub mod selection;
pub mod transform;

pub use bounds::Aabb;
pub use crate::core::vec3::{format_location, Vec3};
pub use error::{GeometryError, GeometryResult};
pub use mesh::TriMesh;
pub use placement::{align_to_normal, place_on_face, Placement};
pub use selection::{
    active_vertex_location, average_normal, centroid, face_frame, first_face_frame,
    world_centroid, FaceFrame, Polygon,
};
