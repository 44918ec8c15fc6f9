//! Scene units, display formatting and material cost estimation for the
//! workshop toolbox.
//!
//! All functions are pure: they take the scene unit settings and cost
//! parameters explicitly and return freshly computed values.
//!
//! ```rust
//! use toolbox_units::{estimate_cost, CostParameters, SceneUnits};
//!
//! let scene = SceneUnits::workshop();
//! let report = estimate_cost(1_000_000.0, &scene, &CostParameters::default()).unwrap();
//! assert_eq!(report.volume, "1000000.0 mm³");
//! ```

pub mod cost;
pub mod error;
pub mod format;
pub mod scene;
pub mod table;

pub use cost::{estimate_cost, CostMonitor, CostParameters, CostReport, MaterialEstimate};
pub use error::{UnitsError, UnitsResult};
pub use format::clean_float;
pub use scene::SceneUnits;
pub use table::{lookup, lookup_tag, units, MeasurementSystem, UnitSpec};
