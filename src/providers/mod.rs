//! Package sources
//!
//! A [`Provider`] turns a user-supplied URL into downloaded bytes: it
//! discovers the latest (or requested) version, enumerates candidate assets,
//! and delegates selection and download to an
//! [`AssetSelector`](crate::di::AssetSelector).
//!
//! Two sources exist today:
//! - [`GitHubProvider`]: GitHub Releases, including GitHub Enterprise Server
//! - [`GenericProvider`]: a download URL template plus a version-check URL

pub mod generic;
pub mod github;

pub use generic::GenericProvider;
pub use github::GitHubProvider;

use crate::assets::FilterOpts;
use crate::config::GitHubOptions;
use crate::core::{BinError, BinResult};
use crate::di::AssetSelector;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Caller options for a single fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOpts {
    /// Disable scoring/selection heuristics
    pub all: bool,
    /// Destination path hint
    pub package_path: Option<String>,
    /// Bypass validation of `package_path`
    pub skip_path_check: bool,
    /// Override for the inferred package name
    pub package_name: Option<String>,
    /// Explicit version (release tag) to fetch instead of the latest
    pub version: Option<String>,
}

impl From<&FetchOpts> for FilterOpts {
    fn from(opts: &FetchOpts) -> Self {
        Self {
            skip_scoring: opts.all,
            package_path: opts.package_path.clone(),
            skip_path_check: opts.skip_path_check,
            package_name: opts.package_name.clone(),
        }
    }
}

/// Result of a fetch; owned by the caller once returned
#[derive(Debug, Clone)]
pub struct File {
    pub data: Vec<u8>,
    pub name: String,
    pub version: String,
    pub package_path: Option<String>,
}

/// Latest available version and where to get it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestVersion {
    pub version: String,
    pub url: String,
}

/// A source of installable artifacts
#[async_trait]
pub trait Provider: Send + Sync {
    /// Resolve, select and download an artifact
    async fn fetch(&self, opts: &FetchOpts) -> BinResult<File>;

    /// Latest available version and a URL to retrieve it
    async fn get_latest_version(&self) -> BinResult<LatestVersion>;

    /// Fixed identifier of the source kind
    fn id(&self) -> &'static str;
}

/// Build the provider matching the shape of `url`
///
/// GitHub URLs (any host containing `github`, or the configured enterprise
/// host) get a [`GitHubProvider`]. Anything else is treated as a download
/// template for a [`GenericProvider`] and needs `version_url`.
pub fn new_provider(
    url: &str,
    version_url: Option<&str>,
    github: &GitHubOptions,
    selector: Arc<dyn AssetSelector>,
) -> BinResult<Box<dyn Provider>> {
    let parsed =
        Url::parse(url).map_err(|e| BinError::InvalidUrl(format!("{}: {}", url, e)))?;

    if is_github_url(&parsed, github) {
        return Ok(Box::new(GitHubProvider::new(&parsed, github, selector)?));
    }

    match version_url {
        Some(version_url) => Ok(Box::new(GenericProvider::new(url, version_url, selector)?)),
        None => Err(BinError::Config(format!(
            "{} is not a GitHub URL; a version URL is required to fetch it",
            url
        ))),
    }
}

fn is_github_url(url: &Url, github: &GitHubOptions) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };

    if host.contains("github") {
        return true;
    }

    github
        .enterprise
        .as_ref()
        .and_then(|ghes| Url::parse(&ghes.base_url).ok())
        .is_some_and(|base| base.host_str() == Some(host))
}
