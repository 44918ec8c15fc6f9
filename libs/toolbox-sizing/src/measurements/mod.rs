//! # Measurements Module
//!
//! Real head and body measurements entered by the user, with the
//! plausibility hints shown next to them.
//!
//! ## Example
//!
//! ```rust
//! use toolbox_sizing::{BodyMeasurements, MeasurementHint};
//!
//! let body = BodyMeasurements::default();
//! assert_eq!(body.head_hint(), MeasurementHint::Correct);
//! assert_eq!(body.eye_hole_offset(), 35.0);
//! ```

#[cfg(test)]
mod tests;

use std::fmt;

use config::constants::{
    DEFAULT_BODY_HEIGHT, DEFAULT_EYES_HEIGHT, DEFAULT_EYES_SPACING, DEFAULT_HEAD_CIRCUMFERENCE,
    DEFAULT_HEAD_HEIGHT, DEFAULT_HEAD_WIDTH, DEFAULT_PADDING_THICKNESS, DEFAULT_SHOULDER_WIDTH,
    MAX_EYES_SPACING_RATIO, MAX_HEAD_CIRCUMFERENCE, MAX_SHOULDER_WIDTH, MEASUREMENT_WARNING_TEXT,
    MIN_EYES_SPACING_RATIO, MIN_HEAD_CIRCUMFERENCE, MIN_HEAD_HEIGHT, MIN_HEAD_WIDTH,
    MIN_SHOULDER_WIDTH,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{require_positive, SizingResult};

// =============================================================================
// ENUMS
// =============================================================================

/// Which head measurement drives the reference head scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleBy {
    /// Match the real head height.
    #[default]
    #[serde(rename = "SCALE_BY_HEIGHT")]
    Height,
    /// Match the real head width.
    #[serde(rename = "SCALE_BY_WIDTH")]
    Width,
}

/// GB/T standard head size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeadType {
    /// Class A2.
    #[default]
    A2,
    /// Class A3.
    A3,
    /// Class A4.
    A4,
    /// Class A5.
    A5,
    /// Class A6.
    A6,
    /// Class A7.
    A7,
    /// Class A8.
    A8,
}

impl HeadType {
    /// Every head type, smallest class first.
    pub const ALL: [HeadType; 7] = [
        HeadType::A2,
        HeadType::A3,
        HeadType::A4,
        HeadType::A5,
        HeadType::A6,
        HeadType::A7,
        HeadType::A8,
    ];

    /// Short tag such as `"A2"`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            HeadType::A2 => "A2",
            HeadType::A3 => "A3",
            HeadType::A4 => "A4",
            HeadType::A5 => "A5",
            HeadType::A6 => "A6",
            HeadType::A7 => "A7",
            HeadType::A8 => "A8",
        }
    }
}

impl fmt::Display for HeadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GB/T Std {}", self.tag())
    }
}

/// Outcome of a plausibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MeasurementHint {
    /// The values are within the plausible range.
    Correct,
    /// The values may be wrong and should be re-measured.
    Warning,
}

impl MeasurementHint {
    pub(crate) fn from_check(ok: bool) -> Self {
        if ok {
            MeasurementHint::Correct
        } else {
            MeasurementHint::Warning
        }
    }

    /// `true` for [`MeasurementHint::Correct`].
    #[must_use]
    pub fn is_correct(self) -> bool {
        self == MeasurementHint::Correct
    }

    /// Panel text: `correct_text` when correct, the shared warning otherwise.
    #[must_use]
    pub fn text(self, correct_text: &'static str) -> &'static str {
        match self {
            MeasurementHint::Correct => correct_text,
            MeasurementHint::Warning => MEASUREMENT_WARNING_TEXT,
        }
    }
}

// =============================================================================
// MEASUREMENTS
// =============================================================================

/// Real measurements of the wearer, in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyMeasurements {
    /// Chin to crown.
    pub head_height: f64,
    /// Widest point of the head.
    pub head_width: f64,
    /// Head circumference.
    pub head_circumference: f64,
    /// Eye line height.
    pub eyes_height: f64,
    /// Bi-pupillary distance.
    pub eyes_spacing: f64,
    /// Standing height.
    pub body_height: f64,
    /// Shoulder width.
    pub shoulder_width: f64,
    /// Padding between head and shell.
    pub padding_thickness: f64,
    /// Measurement used to scale the reference head.
    pub scale_by: ScaleBy,
    /// Reference head size class.
    pub head_type: HeadType,
}

impl Default for BodyMeasurements {
    fn default() -> Self {
        Self {
            head_height: DEFAULT_HEAD_HEIGHT,
            head_width: DEFAULT_HEAD_WIDTH,
            head_circumference: DEFAULT_HEAD_CIRCUMFERENCE,
            eyes_height: DEFAULT_EYES_HEIGHT,
            eyes_spacing: DEFAULT_EYES_SPACING,
            body_height: DEFAULT_BODY_HEIGHT,
            shoulder_width: DEFAULT_SHOULDER_WIDTH,
            padding_thickness: DEFAULT_PADDING_THICKNESS,
            scale_by: ScaleBy::default(),
            head_type: HeadType::default(),
        }
    }
}

impl BodyMeasurements {
    // =========================================================================
    // HINTS
    // =========================================================================

    /// Head sizes are plausible when `width < height < circumference`,
    /// width is at least 120, height at least 150 and circumference within
    /// `[500, 650]`.
    #[must_use]
    pub fn head_hint(&self) -> MeasurementHint {
        let ordered = self.head_width < self.head_height
            && self.head_height < self.head_circumference;
        MeasurementHint::from_check(
            ordered
                && self.head_width >= MIN_HEAD_WIDTH
                && self.head_height >= MIN_HEAD_HEIGHT
                && (MIN_HEAD_CIRCUMFERENCE..=MAX_HEAD_CIRCUMFERENCE)
                    .contains(&self.head_circumference),
        )
    }

    /// Eye spacing is plausible strictly between 10% and 75% of head width.
    #[must_use]
    pub fn eyes_hint(&self) -> MeasurementHint {
        let low = self.head_width * MIN_EYES_SPACING_RATIO;
        let high = self.head_width * MAX_EYES_SPACING_RATIO;
        MeasurementHint::from_check(self.eyes_spacing > low && self.eyes_spacing < high)
    }

    /// Shoulder width is plausible strictly between 320 and 550.
    #[must_use]
    pub fn shoulder_hint(&self) -> MeasurementHint {
        MeasurementHint::from_check(
            self.shoulder_width > MIN_SHOULDER_WIDTH && self.shoulder_width < MAX_SHOULDER_WIDTH,
        )
    }

    // =========================================================================
    // GENERATORS
    // =========================================================================

    /// Real measurement the reference head is scaled to.
    #[must_use]
    pub fn reference_head_target(&self) -> f64 {
        match self.scale_by {
            ScaleBy::Height => self.head_height,
            ScaleBy::Width => self.head_width,
        }
    }

    /// Uniform scale turning the reference head into the wearer's size.
    ///
    /// `current_height` is the reference model's height (Z dimension).
    ///
    /// # Errors
    ///
    /// Returns [`crate::SizingError::NonPositive`] when `current_height` is
    /// not a positive finite number.
    ///
    /// # Examples
    /// ```
    /// use toolbox_sizing::BodyMeasurements;
    ///
    /// let scale = BodyMeasurements::default().reference_head_scale(200.0).unwrap();
    /// assert_eq!(scale, 1.2);
    /// ```
    pub fn reference_head_scale(&self, current_height: f64) -> SizingResult<f64> {
        let current = require_positive("reference head height", current_height)?;
        let scale = self.reference_head_target() / current;
        debug!(scale_by = ?self.scale_by, scale, "reference head scale");
        Ok(scale)
    }

    /// X offset of the eye hole from the head's center plane.
    ///
    /// The hole is mirrored across X, so each side sits half the spacing
    /// away from center.
    #[must_use]
    pub fn eye_hole_offset(&self) -> f64 {
        self.eyes_spacing / 2.0
    }
}
