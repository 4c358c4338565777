//! Trait definitions for dependency injection

use crate::assets::types::{Asset, FilterOpts, FilteredAsset, OutFile};
use crate::config::GitHubOptions;
use crate::core::BinResult;
use async_trait::async_trait;
use std::path::PathBuf;

/// Trait for configuration access
///
/// Provides read-only access to the resolved configuration.
/// Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// GitHub endpoint, token and enterprise settings for provider construction
    fn github_options(&self) -> GitHubOptions;

    /// Directory fetched files are written to
    fn download_dir(&self) -> BinResult<PathBuf>;
}

/// Trait for asset selection and download
///
/// Given the candidate assets of a release, picks the one to install and
/// downloads it. Providers never inspect the selection heuristic; they only
/// supply candidates and consume the chosen result.
#[async_trait]
pub trait AssetSelector: Send + Sync {
    /// Choose one asset among `candidates`
    async fn filter_assets(
        &self,
        opts: &FilterOpts,
        repo_name: &str,
        candidates: Vec<Asset>,
    ) -> BinResult<FilteredAsset>;

    /// Download the chosen asset, honouring its extra headers
    async fn process_url(&self, opts: &FilterOpts, asset: &FilteredAsset) -> BinResult<OutFile>;
}
