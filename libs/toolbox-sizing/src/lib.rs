//! Body measurements and prop size guidance for the workshop toolbox.
//!
//! All lengths are millimeters. Hints never reject input; they only flag
//! measurements outside the plausible range so the user can double-check.

pub mod error;
pub mod fit;
pub mod label;
pub mod measurements;

pub use error::{SizingError, SizingResult};
pub use fit::{check_dimensions, check_objects, AxisCheck, DimensionCheck, PropSuggestions};
pub use label::OrderLabel;
pub use measurements::{BodyMeasurements, HeadType, MeasurementHint, ScaleBy};
