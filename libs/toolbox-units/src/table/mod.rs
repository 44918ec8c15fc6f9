//! # Unit Table
//!
//! Fixed table mapping a (measurement system, length unit) pair to the
//! unit's length in meters and its display symbol.
//!
//! ## Lookup Rules
//!
//! - Tags are matched case-insensitively (`"MILLIMETERS"`, `"millimeters"`)
//! - An unknown unit under METRIC resolves to CENTIMETERS
//! - An unknown unit under IMPERIAL resolves to INCHES
//! - NONE has no table and an unknown system tag is an error
//!
//! ## Example
//!
//! ```rust
//! use toolbox_units::{lookup, MeasurementSystem};
//!
//! let mm = lookup(MeasurementSystem::Metric, "MILLIMETERS").unwrap();
//! assert_eq!(mm.meters_per_unit, 0.001);
//! assert_eq!(mm.symbol, "mm");
//!
//! // Unknown unit names fall back instead of failing
//! let fallback = lookup(MeasurementSystem::Imperial, "FURLONGS").unwrap();
//! assert_eq!(fallback.symbol, "\"");
//! ```


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{UnitsError, UnitsResult};

// =============================================================================
// MEASUREMENT SYSTEM
// =============================================================================

/// Measurement system of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MeasurementSystem {
    /// Unitless scene: volumes are shown in raw scene units.
    None,
    /// Metric lengths (km, m, cm, mm, µm).
    Metric,
    /// Imperial lengths (mi, ft, in, thou).
    Imperial,
}

impl MeasurementSystem {
    /// Tag used by scene settings for this system.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Metric => "METRIC",
            Self::Imperial => "IMPERIAL",
        }
    }

    /// Unit substituted when a unit name is not found under this system.
    ///
    /// ```rust
    /// use toolbox_units::MeasurementSystem;
    ///
    /// assert_eq!(MeasurementSystem::Metric.fallback_unit(), Some("CENTIMETERS"));
    /// assert_eq!(MeasurementSystem::Imperial.fallback_unit(), Some("INCHES"));
    /// assert_eq!(MeasurementSystem::None.fallback_unit(), None);
    /// ```
    #[must_use]
    pub fn fallback_unit(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Metric => Some("CENTIMETERS"),
            Self::Imperial => Some("INCHES"),
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for MeasurementSystem {
    type Err = UnitsError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let trimmed = tag.trim();
        [Self::None, Self::Metric, Self::Imperial]
            .into_iter()
            .find(|system| system.tag().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnitsError::UnknownSystem(tag.to_string()))
    }
}

// =============================================================================
// UNIT SPEC
// =============================================================================

/// Length of one unit in meters and the symbol shown after values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSpec {
    /// Meters per one unit.
    pub meters_per_unit: f64,
    /// Display symbol, e.g. `mm` or `"`.
    pub symbol: &'static str,
}

impl UnitSpec {
    /// Creates a unit spec.
    #[must_use]
    pub const fn new(meters_per_unit: f64, symbol: &'static str) -> Self {
        Self {
            meters_per_unit,
            symbol,
        }
    }

    /// Symbol for a volume in this unit, e.g. `mm³`.
    #[must_use]
    pub fn cubed_symbol(&self) -> String {
        format!("{}³", self.symbol)
    }

    /// Converts a cubic-meter volume into cubic units.
    ///
    /// ```rust
    /// use toolbox_units::{lookup, MeasurementSystem};
    ///
    /// let cm = lookup(MeasurementSystem::Metric, "CENTIMETERS").unwrap();
    /// assert!((cm.volume_from_cubic_meters(1e-6) - 1.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn volume_from_cubic_meters(&self, cubic_meters: f64) -> f64 {
        cubic_meters / self.meters_per_unit.powi(3)
    }
}

// =============================================================================
// TABLE
// =============================================================================

const METRIC_UNITS: &[(&str, UnitSpec)] = &[
    ("KILOMETERS", UnitSpec::new(1000.0, "km")),
    ("METERS", UnitSpec::new(1.0, "m")),
    ("CENTIMETERS", UnitSpec::new(0.01, "cm")),
    ("MILLIMETERS", UnitSpec::new(0.001, "mm")),
    ("MICROMETERS", UnitSpec::new(0.000001, "µm")),
];

const IMPERIAL_UNITS: &[(&str, UnitSpec)] = &[
    ("MILES", UnitSpec::new(1609.344, "mi")),
    ("FEET", UnitSpec::new(0.3048, "'")),
    ("INCHES", UnitSpec::new(0.0254, "\"")),
    ("THOU", UnitSpec::new(0.0000254, "thou")),
];

/// Lists the (unit name, spec) entries of a measurement system.
///
/// # Errors
///
/// Returns [`UnitsError::Unitless`] for [`MeasurementSystem::None`].
pub fn units(system: MeasurementSystem) -> UnitsResult<&'static [(&'static str, UnitSpec)]> {
    match system {
        MeasurementSystem::None => Err(UnitsError::Unitless),
        MeasurementSystem::Metric => Ok(METRIC_UNITS),
        MeasurementSystem::Imperial => Ok(IMPERIAL_UNITS),
    }
}

fn find(table: &[(&str, UnitSpec)], unit: &str) -> Option<UnitSpec> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(unit.trim()))
        .map(|(_, spec)| *spec)
}

/// Looks up a length unit under a measurement system.
///
/// Unknown unit names resolve to the system's fallback unit.
///
/// # Errors
///
/// Returns [`UnitsError::Unitless`] for [`MeasurementSystem::None`].
pub fn lookup(system: MeasurementSystem, unit: &str) -> UnitsResult<UnitSpec> {
    let table = units(system)?;
    if let Some(spec) = find(table, unit) {
        return Ok(spec);
    }

    let fallback = system.fallback_unit().ok_or(UnitsError::Unitless)?;
    debug!(%system, unit, fallback, "unknown length unit, using fallback");
    find(table, fallback).ok_or(UnitsError::Unitless)
}

/// Looks up a length unit from string tags.
///
/// # Errors
///
/// Returns [`UnitsError::UnknownSystem`] when `system_tag` is not a known
/// measurement system, and [`UnitsError::Unitless`] for `"NONE"`.
pub fn lookup_tag(system_tag: &str, unit: &str) -> UnitsResult<UnitSpec> {
    lookup(system_tag.parse()?, unit)
}
