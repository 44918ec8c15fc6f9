//! # Asset Fetcher
//!
//! Downloads an asset with a single GET and hands back a guard over the
//! temporary file. The file is removed when the guard drops, whether or not
//! the host managed to load it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use toolbox_assets::{Asset, AssetFetcher};
//!
//! let fetcher = AssetFetcher::new()?;
//! let logo = fetcher.fetch(Asset::Logo)?;
//! println!("load {}", logo.path().display());
//! // file deleted here
//! # Ok::<(), toolbox_assets::AssetError>(())
//! ```


use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use config::constants::ASSET_BUCKET_URL;
use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use crate::catalog::Asset;
use crate::error::{AssetError, AssetResult};

// =============================================================================
// TEMPORARY FILE GUARD
// =============================================================================

/// A downloaded file that is deleted on drop.
#[derive(Debug)]
pub struct TempAsset {
    path: PathBuf,
}

impl TempAsset {
    /// Takes ownership of an existing file.
    #[must_use]
    pub fn adopt(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the downloaded file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Io`] if the file cannot be read.
    pub fn read(&self) -> AssetResult<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }
}

impl Drop for TempAsset {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed temporary asset"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => warn!(path = %self.path.display(), %err, "could not remove temporary asset"),
        }
    }
}

// =============================================================================
// FETCHER
// =============================================================================

/// Downloads assets from a bucket into a temporary directory.
#[derive(Debug, Clone)]
pub struct AssetFetcher {
    client: Client,
    bucket: String,
    temp_dir: PathBuf,
}

impl AssetFetcher {
    /// Fetcher for the default bucket, writing to the system temp directory.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Http`] if the HTTP client cannot be built.
    pub fn new() -> AssetResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("toolbox-assets/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            bucket: ASSET_BUCKET_URL.to_string(),
            temp_dir: std::env::temp_dir(),
        })
    }

    /// Uses a preconfigured HTTP client.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Uses another bucket base URL.
    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Writes downloads into `dir` instead of the system temp directory.
    #[must_use]
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    /// Bucket base URL.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Downloads a catalog asset.
    ///
    /// # Errors
    ///
    /// See [`AssetFetcher::fetch_url`].
    pub fn fetch(&self, asset: Asset) -> AssetResult<TempAsset> {
        self.fetch_url(&asset.url(&self.bucket), asset.file_name())
    }

    /// Downloads `url` into `file_name` inside the temp directory.
    ///
    /// # Errors
    ///
    /// - [`AssetError::InvalidFileName`] when `file_name` is not a single
    ///   plain component, checked before any request is sent
    /// - [`AssetError::Http`] when the request fails
    /// - [`AssetError::Status`] for a non-success response
    /// - [`AssetError::Io`] when the file cannot be written
    pub fn fetch_url(&self, url: &str, file_name: &str) -> AssetResult<TempAsset> {
        check_file_name(file_name)?;
        info!(url, "fetching asset");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes()?;
        self.store(file_name, &bytes)
    }

    /// Writes `bytes` into the temp directory. A partially written file is
    /// removed when the write fails.
    fn store(&self, file_name: &str, bytes: &[u8]) -> AssetResult<TempAsset> {
        check_file_name(file_name)?;
        fs::create_dir_all(&self.temp_dir)?;
        let asset = TempAsset::adopt(self.temp_dir.join(file_name));
        fs::write(asset.path(), bytes)?;
        debug!(path = %asset.path().display(), bytes = bytes.len(), "asset written");
        Ok(asset)
    }
}

/// Accepts only a single normal path component, so downloads stay inside
/// the temp directory.
fn check_file_name(file_name: &str) -> AssetResult<()> {
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(AssetError::InvalidFileName(file_name.to_string())),
    }
}
