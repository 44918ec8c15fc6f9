//! Thin wrapper around `glam::DVec3` shared across geometry modules.
//!
//! The alias keeps signatures readable and lets higher layers avoid a
//! direct `glam` dependency for plain points.

pub use glam::DVec3 as Vec3;

/// Formats a location the way the info panel shows it.
///
/// # Examples
/// ```
/// use toolbox_geometry::{format_location, Vec3};
///
/// let text = format_location(Vec3::new(1.0, -2.5, 0.126));
/// assert_eq!(text, "X:1.00, Y:-2.50, Z:0.13");
/// ```
#[must_use]
pub fn format_location(v: Vec3) -> String {
    format!("X:{:.2}, Y:{:.2}, Z:{:.2}", v.x, v.y, v.z)
}

#[cfg(test)]
mod tests;
