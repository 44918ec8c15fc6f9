//! # Bounds Module
//!
//! Axis-aligned bounding boxes for sizing props in world space.
//!
//! Several selected objects are measured together by transforming each
//! object's local box corners into world space and taking the union, the
//! same way the host reports combined dimensions.
//!
//! ## Example
//!
//! ```rust
//! use toolbox_geometry::{Aabb, Vec3};
//!
//! let bbox = Aabb::from_points(&[Vec3::ZERO, Vec3::new(2.0, 3.0, 4.0)]).unwrap();
//! assert_eq!(bbox.dimensions(), Vec3::new(2.0, 3.0, 4.0));
//! ```

#[cfg(test)]
mod tests;

use glam::DMat4;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{GeometryError, GeometryResult};
use crate::transform::transform_points;
use crate::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning two corners, in any order.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing every point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptySelection`] for an empty slice.
    pub fn from_points(points: &[Vec3]) -> GeometryResult<Self> {
        if points.is_empty() {
            return Err(GeometryError::EmptySelection);
        }
        // min/max are order independent, so the parallel reduction is exact
        let (min, max) = points
            .par_iter()
            .map(|p| (*p, *p))
            .reduce(
                || (Vec3::splat(f64::INFINITY), Vec3::splat(f64::NEG_INFINITY)),
                |(amin, amax), (bmin, bmax)| (amin.min(bmin), amax.max(bmax)),
            );
        Ok(Self { min, max })
    }

    /// World-space box of object-space points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptySelection`] for an empty slice.
    pub fn from_transformed_points(world: &DMat4, points: &[Vec3]) -> GeometryResult<Self> {
        Self::from_points(&transform_points(world, points))
    }

    /// World-space box around the eight transformed corners of a local box.
    ///
    /// Under rotation this is larger than the box of the transformed
    /// vertices, matching how the host measures object dimensions.
    #[must_use]
    pub fn from_transformed_corners(world: &DMat4, local: &Aabb) -> Self {
        let corners = local.corners().map(|c| world.transform_point3(c));
        corners[1..]
            .iter()
            .fold(Self::new(corners[0], corners[0]), |acc, c| {
                acc.union(&Self::new(*c, *c))
            })
    }

    /// Combined world-space box of several objects.
    ///
    /// Each entry is an object's world transform and its local box.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptySelection`] when no object is given.
    pub fn union_all(objects: &[(DMat4, Aabb)]) -> GeometryResult<Self> {
        let combined = objects
            .par_iter()
            .map(|(world, local)| Self::from_transformed_corners(world, local))
            .reduce_with(|a, b| a.union(&b))
            .ok_or(GeometryError::EmptySelection)?;
        debug!(objects = objects.len(), dimensions = ?combined.dimensions(), "combined bounds");
        Ok(combined)
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Aabb) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// The eight corners, bottom face first.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
        ]
    }

    /// Extent per axis: width (X), depth (Y), height (Z).
    #[must_use]
    pub fn dimensions(&self) -> Vec3 {
        self.max - self.min
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}
