//! # Config Crate
//!
//! Centralized configuration constants for the workshop toolbox kernel.
//! Tolerances, cost defaults, display precisions, scene-unit presets,
//! label layout and measurement thresholds are defined here so the unit,
//! geometry and sizing crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, DEFAULT_DENSITY, VOLUME_PRECISION};
//!
//! assert!(approx_zero(1e-11));
//! assert_eq!(DEFAULT_DENSITY, 1.13);
//! assert_eq!(VOLUME_PRECISION, 4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host-Independent**: No editor or platform specific values
//! - **Workshop Defaults**: Defaults match the toolbox panel defaults

pub mod constants;
