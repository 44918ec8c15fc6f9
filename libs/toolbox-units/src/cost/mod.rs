//! # Cost & Weight Estimation
//!
//! Converts a raw mesh volume (scene units³) into display strings for the
//! volume, printed weight and material cost.
//!
//! ## Unit Chain
//!
//! ```text
//! raw volume × scale³            → m³
//! m³ ÷ length³                   → displayed volume (4 digits, unit³)
//! m³ ÷ 0.01³                     → cm³
//! cm³ × density (g/cm³)          → weight (g, 2 digits)
//! weight × price (per g)         → cost (currency, 2 digits)
//! ```
//!
//! A unitless scene skips conversion: the raw volume is shown with 8
//! digits and no weight or cost is produced.


use config::constants::{
    CENTIMETER_IN_METERS, COST_PRECISION, DEFAULT_CURRENCY, DEFAULT_DENSITY,
    DEFAULT_MATERIAL_PRICE, EMPTY_COST_AMOUNT, EMPTY_VOLUME_TEXT, EMPTY_WEIGHT_TEXT,
    NO_OBJECT_SELECTED_TEXT, UNITLESS_VOLUME_PRECISION, VOLUME_PRECISION, WEIGHT_PRECISION,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::UnitsResult;
use crate::format::clean_float;
use crate::scene::SceneUnits;
use crate::table::MeasurementSystem;

// =============================================================================
// PARAMETERS
// =============================================================================

/// User-configured material parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostParameters {
    /// Material density in g/cm³.
    pub density: f64,
    /// Material price per gram.
    pub material_price: f64,
    /// Currency code appended to costs.
    pub currency: String,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            material_price: DEFAULT_MATERIAL_PRICE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl CostParameters {
    /// Cost text shown before any estimate, e.g. `0.0 CNY`.
    #[must_use]
    pub fn empty_cost_text(&self) -> String {
        format!("{EMPTY_COST_AMOUNT} {}", self.currency)
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// Weight and cost figures, present only for scenes with a unit system.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialEstimate {
    /// Volume in cubic centimeters.
    pub volume_cm3: f64,
    /// Weight in grams.
    pub weight_grams: f64,
    /// Material cost in [`CostParameters::currency`].
    pub cost: f64,
    /// Formatted weight, e.g. `1130.0 g`.
    pub weight_text: String,
    /// Formatted cost, e.g. `395.5 CNY`.
    pub cost_text: String,
}

/// Result of one cost estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct CostReport {
    /// Formatted volume, e.g. `1000000.0 mm³`.
    pub volume: String,
    /// Weight and cost, `None` for a unitless scene.
    pub material: Option<MaterialEstimate>,
}

impl CostReport {
    /// One-line summary `"<volume> -> <cost>"`, `None` for a unitless scene.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.material
            .as_ref()
            .map(|material| format!("{} -> {}", self.volume, material.cost_text))
    }
}

/// Estimates displayed volume, weight and cost of a mesh.
///
/// `raw_volume` is in scene units³. Every call recomputes all figures.
///
/// # Errors
///
/// Never fails for a typed [`SceneUnits`]: unknown length units fall back
/// per system. The `Result` carries lookup errors for future unit systems.
///
/// # Examples
/// ```
/// use toolbox_units::{estimate_cost, CostParameters, SceneUnits};
///
/// // 100 mm cube in a millimeter scene
/// let report = estimate_cost(1_000_000.0, &SceneUnits::workshop(), &CostParameters::default()).unwrap();
/// let material = report.material.unwrap();
/// assert_eq!(material.weight_text, "1130.0 g");
/// assert_eq!(material.cost_text, "395.5 CNY");
/// ```
pub fn estimate_cost(
    raw_volume: f64,
    scene: &SceneUnits,
    params: &CostParameters,
) -> UnitsResult<CostReport> {
    if scene.system == MeasurementSystem::None {
        debug!(raw_volume, "unitless scene, skipping weight and cost");
        return Ok(CostReport {
            volume: clean_float(raw_volume, UNITLESS_VOLUME_PRECISION),
            material: None,
        });
    }

    let unit = scene.length_spec()?;
    let cubic_meters = scene.cubic_meters(raw_volume);
    let volume_in_unit = unit.volume_from_cubic_meters(cubic_meters);
    let volume = format!(
        "{} {}",
        clean_float(volume_in_unit, VOLUME_PRECISION),
        unit.cubed_symbol()
    );

    let volume_cm3 = cubic_meters / CENTIMETER_IN_METERS.powi(3);
    let weight_grams = volume_cm3 * params.density;
    let cost = weight_grams * params.material_price;
    debug!(raw_volume, volume_cm3, weight_grams, cost, "estimated material cost");

    Ok(CostReport {
        volume,
        material: Some(MaterialEstimate {
            volume_cm3,
            weight_grams,
            cost,
            weight_text: format!("{} g", clean_float(weight_grams, WEIGHT_PRECISION)),
            cost_text: format!("{} {}", clean_float(cost, COST_PRECISION), params.currency),
        }),
    })
}

// =============================================================================
// MONITOR
// =============================================================================

/// Cost panel state: material parameters plus the last displayed figures.
///
/// The displayed strings are only ever replaced together by [`Self::refresh`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostMonitor {
    /// Material parameters.
    pub parameters: CostParameters,
    /// Summary of the last estimate.
    pub selected_object_info: String,
    /// Last displayed volume.
    pub volume: String,
    /// Last displayed weight.
    pub weight: String,
    /// Last displayed cost.
    pub cost: String,
}

impl Default for CostMonitor {
    fn default() -> Self {
        let parameters = CostParameters::default();
        Self {
            cost: parameters.empty_cost_text(),
            parameters,
            selected_object_info: NO_OBJECT_SELECTED_TEXT.to_string(),
            volume: EMPTY_VOLUME_TEXT.to_string(),
            weight: EMPTY_WEIGHT_TEXT.to_string(),
        }
    }
}

impl CostMonitor {
    /// Recomputes every displayed figure from a raw mesh volume.
    ///
    /// A unitless scene shows the raw volume and resets weight and cost to
    /// their empty texts, the cost in the configured currency.
    ///
    /// # Errors
    ///
    /// Propagates [`estimate_cost`] errors, leaving the state untouched.
    pub fn refresh(&mut self, raw_volume: f64, scene: &SceneUnits) -> UnitsResult<CostReport> {
        let report = estimate_cost(raw_volume, scene, &self.parameters)?;
        self.apply(&report);
        Ok(report)
    }

    /// Overwrites every displayed figure from `report`.
    pub fn apply(&mut self, report: &CostReport) {
        self.volume.clone_from(&report.volume);
        match (&report.material, report.summary()) {
            (Some(material), Some(summary)) => {
                self.weight.clone_from(&material.weight_text);
                self.cost.clone_from(&material.cost_text);
                self.selected_object_info = summary;
            }
            _ => {
                self.weight = EMPTY_WEIGHT_TEXT.to_string();
                self.cost = self.parameters.empty_cost_text();
                self.selected_object_info.clone_from(&report.volume);
            }
        }
    }
}
