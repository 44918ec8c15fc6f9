//! Pre-made model assets for the workshop toolbox.
//!
//! Assets live in a public bucket as `.blend` files. A download lands in a
//! temporary file that is deleted once the host has loaded it.

pub mod catalog;
pub mod error;
pub mod fetch;

pub use catalog::Asset;
pub use error::{AssetError, AssetResult};
pub use fetch::{AssetFetcher, TempAsset};
