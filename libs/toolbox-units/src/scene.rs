//! Scene unit settings passed explicitly to cost estimation.

use config::constants::{
    DEFAULT_LENGTH_UNIT, DEFAULT_SCALE_LENGTH, WORKSHOP_LENGTH_UNIT, WORKSHOP_MASS_UNIT,
    WORKSHOP_SCALE_LENGTH, WORKSHOP_TIME_UNIT,
};
use serde::{Deserialize, Serialize};

use crate::error::UnitsResult;
use crate::table::{lookup, MeasurementSystem, UnitSpec};

/// Unit settings of a scene.
///
/// `scale_length` converts one scene unit to meters and is ignored when the
/// system is [`MeasurementSystem::None`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneUnits {
    /// Measurement system.
    pub system: MeasurementSystem,
    /// Meters per scene unit.
    pub scale_length: f64,
    /// Length unit tag used for display, e.g. `MILLIMETERS`.
    pub length_unit: String,
    /// Mass unit tag, e.g. `KILOGRAMS`.
    pub mass_unit: String,
    /// Time unit tag, e.g. `SECONDS`.
    pub time_unit: String,
}

impl Default for SceneUnits {
    fn default() -> Self {
        Self {
            system: MeasurementSystem::Metric,
            scale_length: DEFAULT_SCALE_LENGTH,
            length_unit: DEFAULT_LENGTH_UNIT.to_string(),
            mass_unit: WORKSHOP_MASS_UNIT.to_string(),
            time_unit: WORKSHOP_TIME_UNIT.to_string(),
        }
    }
}

impl SceneUnits {
    /// Workshop preset: metric millimeter scene, kilograms and seconds.
    ///
    /// ```rust
    /// use toolbox_units::{MeasurementSystem, SceneUnits};
    ///
    /// let scene = SceneUnits::workshop();
    /// assert_eq!(scene.system, MeasurementSystem::Metric);
    /// assert_eq!(scene.scale_length, 0.001);
    /// assert_eq!(scene.length_unit, "MILLIMETERS");
    /// ```
    #[must_use]
    pub fn workshop() -> Self {
        Self {
            system: MeasurementSystem::Metric,
            scale_length: WORKSHOP_SCALE_LENGTH,
            length_unit: WORKSHOP_LENGTH_UNIT.to_string(),
            mass_unit: WORKSHOP_MASS_UNIT.to_string(),
            time_unit: WORKSHOP_TIME_UNIT.to_string(),
        }
    }

    /// Builds settings from a system tag, scale length and length unit tag.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UnitsError::UnknownSystem`] for an unrecognized
    /// system tag.
    pub fn from_tags(system_tag: &str, scale_length: f64, length_unit: &str) -> UnitsResult<Self> {
        Ok(Self {
            system: system_tag.parse()?,
            scale_length,
            length_unit: length_unit.to_string(),
            ..Self::default()
        })
    }

    /// Meters per scene unit, 1.0 for a unitless scene.
    #[must_use]
    pub fn effective_scale(&self) -> f64 {
        match self.system {
            MeasurementSystem::None => 1.0,
            _ => self.scale_length,
        }
    }

    /// Display length unit, with the system's fallback applied.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UnitsError::Unitless`] for a unitless scene.
    pub fn length_spec(&self) -> UnitsResult<UnitSpec> {
        lookup(self.system, &self.length_unit)
    }

    /// Converts a raw scene-unit volume to cubic meters.
    #[must_use]
    pub fn cubic_meters(&self, raw_volume: f64) -> f64 {
        raw_volume * self.effective_scale().powi(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitsError;

    #[test]
    fn default_is_metric_meters() {
        let scene = SceneUnits::default();
        assert_eq!(scene.system, MeasurementSystem::Metric);
        assert_eq!(scene.scale_length, 1.0);
        assert_eq!(scene.length_spec().unwrap().symbol, "m");
    }

    #[test]
    fn unitless_scene_ignores_scale() {
        let scene = SceneUnits {
            system: MeasurementSystem::None,
            scale_length: 0.5,
            ..SceneUnits::default()
        };
        assert_eq!(scene.effective_scale(), 1.0);
        assert_eq!(scene.length_spec(), Err(UnitsError::Unitless));
    }

    #[test]
    fn from_tags_rejects_unknown_system() {
        let err = SceneUnits::from_tags("ROMAN", 1.0, "PACES").unwrap_err();
        assert_eq!(err, UnitsError::UnknownSystem("ROMAN".to_string()));
    }

    #[test]
    fn from_tags_applies_unit_fallback_lazily() {
        let scene = SceneUnits::from_tags("imperial", 0.0254, "FURLONGS").unwrap();
        assert_eq!(scene.length_spec().unwrap().symbol, "\"");
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let scene: SceneUnits =
            serde_json::from_str(r#"{"system":"METRIC","scale_length":0.001}"#).unwrap();
        assert_eq!(scene.length_unit, "METERS");
        assert_eq!(scene.scale_length, 0.001);
    }
}
