//! Mock implementations of service traits for testing

use super::traits::{AssetSelector, ConfigProvider};
use crate::assets::types::{Asset, FilterOpts, FilteredAsset, OutFile};
use crate::config::GitHubOptions;
use crate::core::{BinError, BinResult};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock configuration provider for testing
///
/// # Example
///
/// ```
/// use binfetch::di::mocks::MockConfigProvider;
/// use binfetch::di::ConfigProvider;
///
/// let mut config = MockConfigProvider::default();
/// config.github.token = Some("secret".to_string());
///
/// assert_eq!(config.github_options().token.as_deref(), Some("secret"));
/// ```
#[derive(Clone)]
pub struct MockConfigProvider {
    pub github: GitHubOptions,
    pub download_dir: PathBuf,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            github: GitHubOptions::default(),
            download_dir: PathBuf::from("/tmp/binfetch-test-downloads"),
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn github_options(&self) -> GitHubOptions {
        self.github.clone()
    }

    fn download_dir(&self) -> BinResult<PathBuf> {
        Ok(self.download_dir.clone())
    }
}

/// One call to [`AssetSelector::filter_assets`] as seen by the mock
#[derive(Debug, Clone)]
pub struct FilterCall {
    pub opts: FilterOpts,
    pub repo_name: String,
    pub candidates: Vec<Asset>,
}

/// Mock asset selector for testing
///
/// Picks the first candidate, "downloads" canned bytes, and records every
/// call so tests can assert on candidate sets and download headers.
///
/// # Example
///
/// ```
/// use binfetch::di::mocks::MockAssetSelector;
///
/// let selector = MockAssetSelector::new(b"bytes".to_vec()).with_name("tool");
/// assert!(selector.filter_calls().is_empty());
/// ```
#[derive(Clone)]
pub struct MockAssetSelector {
    data: Vec<u8>,
    name: Option<String>,
    failure: Option<String>,
    filter_calls: Arc<Mutex<Vec<FilterCall>>>,
    processed: Arc<Mutex<Vec<(FilterOpts, FilteredAsset)>>>,
}

impl MockAssetSelector {
    /// Create a mock that returns `data` for every download
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            name: None,
            failure: None,
            filter_calls: Arc::new(Mutex::new(Vec::new())),
            processed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Force the suggested file name instead of echoing the asset name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Make every download fail with an asset error
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// All recorded `filter_assets` calls
    pub fn filter_calls(&self) -> Vec<FilterCall> {
        self.filter_calls.lock().unwrap().clone()
    }

    /// All recorded `process_url` calls
    pub fn processed(&self) -> Vec<(FilterOpts, FilteredAsset)> {
        self.processed.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetSelector for MockAssetSelector {
    async fn filter_assets(
        &self,
        opts: &FilterOpts,
        repo_name: &str,
        candidates: Vec<Asset>,
    ) -> BinResult<FilteredAsset> {
        self.filter_calls.lock().unwrap().push(FilterCall {
            opts: opts.clone(),
            repo_name: repo_name.to_string(),
            candidates: candidates.clone(),
        });

        candidates
            .into_iter()
            .next()
            .map(FilteredAsset::from)
            .ok_or_else(|| BinError::Asset(format!("No assets found for {}", repo_name)))
    }

    async fn process_url(&self, opts: &FilterOpts, asset: &FilteredAsset) -> BinResult<OutFile> {
        self.processed
            .lock()
            .unwrap()
            .push((opts.clone(), asset.clone()));

        if let Some(ref message) = self.failure {
            return Err(BinError::Asset(message.clone()));
        }

        Ok(OutFile {
            source: self.data.clone(),
            name: self.name.clone().unwrap_or_else(|| asset.name.clone()),
            package_path: opts.package_path.clone(),
        })
    }
}
