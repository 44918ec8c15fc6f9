//! Core vector types shared by the geometry modules.

pub mod vec3;
