//! # Fit Module
//!
//! Suggested prop sizes derived from body measurements, and checks of a
//! modelled prop's bounding box against them.
//!
//! ## Rules
//!
//! - Width (X) should fall strictly inside `[0.53, 0.57]` of shoulder width
//! - Height (Z) should fall strictly between body/6.5 and body/5.5
//! - Depth (Y) is reported but not checked

#[cfg(test)]
mod tests;

use std::fmt;

use config::constants::{
    HEAD_PROPORTIONS, PROP_WIDTH_HIGH_RATIO, PROP_WIDTH_LOW_RATIO, SHORTEST_HEAD_PROPORTION,
    TALLEST_HEAD_PROPORTION,
};
use glam::DMat4;
use serde::Serialize;
use toolbox_geometry::{Aabb, Vec3};
use tracing::debug;

use crate::error::SizingResult;
use crate::measurements::{BodyMeasurements, MeasurementHint};

// =============================================================================
// SUGGESTIONS
// =============================================================================

/// Suggested prop size for a wearer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropSuggestions {
    /// Lower end of the suggested width.
    pub width_low: f64,
    /// Upper end of the suggested width.
    pub width_high: f64,
    /// `(proportion, body_height / proportion)` for each head proportion.
    pub heights: Vec<(f64, f64)>,
}

impl PropSuggestions {
    /// Panel lines: one width range line, then one line per height.
    ///
    /// # Examples
    /// ```
    /// use toolbox_sizing::BodyMeasurements;
    ///
    /// let lines = BodyMeasurements::default().suggestions().lines();
    /// assert_eq!(lines[0], "Width:  206.70 - 222.30 mm");
    /// assert_eq!(lines[2], "Height (1/6.0): 280.00 mm");
    /// ```
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(format!(
            "Width:  {:.2} - {:.2} mm",
            self.width_low, self.width_high
        ))
        .chain(
            self.heights
                .iter()
                .map(|(proportion, height)| format!("Height (1/{proportion:.1}): {height:.2} mm")),
        )
        .collect()
    }
}

impl BodyMeasurements {
    /// Suggested prop width range and heights.
    #[must_use]
    pub fn suggestions(&self) -> PropSuggestions {
        PropSuggestions {
            width_low: self.shoulder_width * PROP_WIDTH_LOW_RATIO,
            width_high: self.shoulder_width * PROP_WIDTH_HIGH_RATIO,
            heights: HEAD_PROPORTIONS
                .iter()
                .map(|&p| (p, self.body_height / p))
                .collect(),
        }
    }

    /// Acceptable prop height range, shortest first.
    #[must_use]
    pub fn height_range(&self) -> (f64, f64) {
        (
            self.body_height / SHORTEST_HEAD_PROPORTION,
            self.body_height / TALLEST_HEAD_PROPORTION,
        )
    }
}

// =============================================================================
// DIMENSION CHECK
// =============================================================================

/// One measured axis of a prop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisCheck {
    /// Display label such as `"Width(X)"`.
    pub label: &'static str,
    /// Measured extent.
    pub value: f64,
    /// `None` for an axis that is not checked.
    pub hint: Option<MeasurementHint>,
}

impl fmt::Display for AxisCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2} mm", self.label, self.value)
    }
}

/// Measured prop dimensions with a hint per checked axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionCheck {
    /// Raw extents (X, Y, Z).
    pub dimensions: Vec3,
    /// Width along X.
    pub width: AxisCheck,
    /// Depth along Y.
    pub depth: AxisCheck,
    /// Height along Z.
    pub height: AxisCheck,
}

impl DimensionCheck {
    /// `true` when every checked axis is within range.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        [&self.width, &self.depth, &self.height]
            .iter()
            .all(|axis| axis.hint.map_or(true, MeasurementHint::is_correct))
    }
}

/// Checks prop dimensions against the wearer's suggested size.
///
/// # Examples
/// ```
/// use toolbox_geometry::Vec3;
/// use toolbox_sizing::{check_dimensions, BodyMeasurements};
///
/// let check = check_dimensions(&BodyMeasurements::default(), Vec3::new(215.0, 260.0, 280.0));
/// assert!(check.is_correct());
/// assert_eq!(check.width.to_string(), "Width(X): 215.00 mm");
/// ```
#[must_use]
pub fn check_dimensions(body: &BodyMeasurements, dimensions: Vec3) -> DimensionCheck {
    let suggestions = body.suggestions();
    let (height_min, height_max) = body.height_range();

    let width_ok = dimensions.x > suggestions.width_low && dimensions.x < suggestions.width_high;
    let height_ok = dimensions.z > height_min && dimensions.z < height_max;
    debug!(?dimensions, width_ok, height_ok, "prop dimensions");

    DimensionCheck {
        dimensions,
        width: AxisCheck {
            label: "Width(X)",
            value: dimensions.x,
            hint: Some(MeasurementHint::from_check(width_ok)),
        },
        depth: AxisCheck {
            label: "Depth(Y)",
            value: dimensions.y,
            hint: None,
        },
        height: AxisCheck {
            label: "Height(Z)",
            value: dimensions.z,
            hint: Some(MeasurementHint::from_check(height_ok)),
        },
    }
}

/// Checks the combined world-space box of the selected objects.
///
/// Each entry is an object's world transform and local bounding box.
///
/// # Errors
///
/// Returns [`crate::SizingError::Geometry`] when no object is selected.
pub fn check_objects(
    body: &BodyMeasurements,
    objects: &[(DMat4, Aabb)],
) -> SizingResult<DimensionCheck> {
    let combined = Aabb::union_all(objects)?;
    Ok(check_dimensions(body, combined.dimensions()))
}
