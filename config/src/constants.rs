//! # Configuration Constants
//!
//! Centralized constants for the workshop toolbox kernel.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Units**: Scene-unit preset and conversion anchors
//! - **Cost**: Material defaults and display precisions
//! - **Labels**: Order-ID label layout
//! - **Measurements**: Body and head validation thresholds
//! - **Assets**: Remote bucket location

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for deciding whether a length, determinant or accumulated normal is
/// numerically zero.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Point count above which the brute-force average normal logs a warning.
///
/// The brute-force normal visits every unordered triple of points, so its
/// cost grows with the cube of the input size. 16 points is 560 triples.
pub const BRUTE_FORCE_NORMAL_WARN_POINTS: usize = 16;

// =============================================================================
// UNIT CONSTANTS
// =============================================================================

/// Length of one centimeter in meters.
///
/// Weight estimation converts volumes to cubic centimeters because density
/// is entered in g/cm³.
///
/// # Example
///
/// ```rust
/// use config::constants::CENTIMETER_IN_METERS;
///
/// let one_liter_m3 = 0.001;
/// let cm3 = one_liter_m3 / CENTIMETER_IN_METERS.powi(3);
/// assert!((cm3 - 1000.0).abs() < 1e-6);
/// ```
pub const CENTIMETER_IN_METERS: f64 = 0.01;

/// Scale length of a fresh scene (one scene unit is 1 m).
pub const DEFAULT_SCALE_LENGTH: f64 = 1.0;

/// Length unit tag of a fresh scene.
pub const DEFAULT_LENGTH_UNIT: &str = "METERS";

/// Scale length of the workshop scene preset (one scene unit is 1 mm).
pub const WORKSHOP_SCALE_LENGTH: f64 = 0.001;

/// Length unit tag of the workshop scene preset.
pub const WORKSHOP_LENGTH_UNIT: &str = "MILLIMETERS";

/// Mass unit tag of the workshop scene preset.
pub const WORKSHOP_MASS_UNIT: &str = "KILOGRAMS";

/// Time unit tag of the workshop scene preset.
pub const WORKSHOP_TIME_UNIT: &str = "SECONDS";

// =============================================================================
// COST CONSTANTS
// =============================================================================

/// Default material density in g/cm³ (printing resin).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DENSITY;
///
/// let user_density: Option<f64> = None;
/// assert_eq!(user_density.unwrap_or(DEFAULT_DENSITY), 1.13);
/// ```
pub const DEFAULT_DENSITY: f64 = 1.13;

/// Default material price per gram.
pub const DEFAULT_MATERIAL_PRICE: f64 = 0.35;

/// Currency code appended to formatted costs.
pub const DEFAULT_CURRENCY: &str = "CNY";

/// Fractional digits of a volume shown in a real length unit.
pub const VOLUME_PRECISION: usize = 4;

/// Fractional digits of a volume shown in unitless scene units.
pub const UNITLESS_VOLUME_PRECISION: usize = 8;

/// Fractional digits of a weight in grams.
pub const WEIGHT_PRECISION: usize = 2;

/// Fractional digits of a cost.
pub const COST_PRECISION: usize = 2;

/// Cost monitor volume text before the first estimate.
pub const EMPTY_VOLUME_TEXT: &str = "0.0";

/// Cost monitor weight text before the first estimate.
pub const EMPTY_WEIGHT_TEXT: &str = "0 g";

/// Cost monitor cost amount before the first estimate, shown with the
/// configured currency.
pub const EMPTY_COST_AMOUNT: &str = "0.0";

/// Cost monitor summary text before the first estimate.
pub const NO_OBJECT_SELECTED_TEXT: &str = "No Object Selected";

// =============================================================================
// LABEL CONSTANTS
// =============================================================================

/// Placeholder order ID shown before the user types one.
pub const DEFAULT_ORDER_ID: &str = "AXX-ORDERID";

/// Header lines placed above the order ID on a full label.
pub const FULL_LABEL_HEADER: &str = "KIG.LAND\nKIGURUMI";

/// Target height (scene units) of a full three-line label.
pub const FULL_LABEL_HEIGHT: f64 = 10.0;

/// Target height (scene units) of a single-line order ID label.
pub const SHORT_LABEL_HEIGHT: f64 = 3.0;

/// Extrusion depth (scene units) along +Z applied to label text.
pub const LABEL_EXTRUDE_DEPTH: f64 = 2.0;

// =============================================================================
// MEASUREMENT CONSTANTS (all in millimeters)
// =============================================================================

/// Default real head height.
pub const DEFAULT_HEAD_HEIGHT: f64 = 240.0;

/// Default real head width.
pub const DEFAULT_HEAD_WIDTH: f64 = 180.0;

/// Default real head circumference.
pub const DEFAULT_HEAD_CIRCUMFERENCE: f64 = 580.0;

/// Default eye height.
pub const DEFAULT_EYES_HEIGHT: f64 = 120.0;

/// Default bi-pupillary distance.
pub const DEFAULT_EYES_SPACING: f64 = 70.0;

/// Default body height.
pub const DEFAULT_BODY_HEIGHT: f64 = 1680.0;

/// Default shoulder width.
pub const DEFAULT_SHOULDER_WIDTH: f64 = 390.0;

/// Default padding fill thickness.
pub const DEFAULT_PADDING_THICKNESS: f64 = 35.0;

/// Smallest plausible head width.
pub const MIN_HEAD_WIDTH: f64 = 120.0;

/// Smallest plausible head height.
pub const MIN_HEAD_HEIGHT: f64 = 150.0;

/// Smallest plausible head circumference.
pub const MIN_HEAD_CIRCUMFERENCE: f64 = 500.0;

/// Largest plausible head circumference.
pub const MAX_HEAD_CIRCUMFERENCE: f64 = 650.0;

/// Eye spacing lower bound as a fraction of head width (exclusive).
pub const MIN_EYES_SPACING_RATIO: f64 = 0.1;

/// Eye spacing upper bound as a fraction of head width (exclusive).
pub const MAX_EYES_SPACING_RATIO: f64 = 0.75;

/// Shoulder width lower bound (exclusive).
pub const MIN_SHOULDER_WIDTH: f64 = 320.0;

/// Shoulder width upper bound (exclusive).
pub const MAX_SHOULDER_WIDTH: f64 = 550.0;

/// Lower bound of the suggested prop width as a fraction of shoulder width.
pub const PROP_WIDTH_LOW_RATIO: f64 = 0.53;

/// Upper bound of the suggested prop width as a fraction of shoulder width.
pub const PROP_WIDTH_HIGH_RATIO: f64 = 0.57;

/// Head-to-body proportions listed as height suggestions.
///
/// # Example
///
/// ```rust
/// use config::constants::HEAD_PROPORTIONS;
///
/// let body = 1680.0;
/// let heights: Vec<f64> = HEAD_PROPORTIONS.iter().map(|p| body / p).collect();
/// assert_eq!(heights.len(), 4);
/// ```
pub const HEAD_PROPORTIONS: [f64; 4] = [5.5, 6.0, 6.5, 7.0];

/// Proportion giving the tallest acceptable prop height (body / 5.5).
pub const TALLEST_HEAD_PROPORTION: f64 = 5.5;

/// Proportion giving the shortest acceptable prop height (body / 6.5).
pub const SHORTEST_HEAD_PROPORTION: f64 = 6.5;

/// Hint text for plausible head measurements.
pub const HEAD_CORRECT_TEXT: &str = "DATA CORRECT";

/// Hint text for plausible eye spacing.
pub const EYES_CORRECT_TEXT: &str = "EYES SPACING CORRECT";

/// Hint text for plausible shoulder width.
pub const SHOULDER_CORRECT_TEXT: &str = "SHOULDER CORRECT";

/// Hint text for any implausible measurement.
pub const MEASUREMENT_WARNING_TEXT: &str = "WARNING DATA MAYBE INCORRECT";

// =============================================================================
// ASSET CONSTANTS
// =============================================================================

/// Remote bucket serving the pre-made asset files.
pub const ASSET_BUCKET_URL: &str = "https://s3.kigland.cn/blender";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
