//! Generic HTTP source: a version-check URL plus a download URL template

use super::{File, FetchOpts, LatestVersion, Provider};
use crate::assets::{FilterOpts, FilteredAsset};
use crate::core::{BinError, BinResult};
use crate::di::AssetSelector;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::sync::Arc;
use url::Url;

/// Placeholder replaced by the resolved version in download templates
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Resolves versions from a plain-text endpoint
///
/// The version-check URL answers with the current version as its body; that
/// version is substituted into the download template.
pub struct GenericProvider {
    url_template: String,
    version_url: Url,
    http_client: HttpClient,
    selector: Arc<dyn AssetSelector>,
}

impl GenericProvider {
    pub fn new(
        url_template: &str,
        version_url: &str,
        selector: Arc<dyn AssetSelector>,
    ) -> BinResult<Self> {
        let version_url = Url::parse(version_url)
            .map_err(|e| BinError::InvalidUrl(format!("invalid version URL: {}", e)))?;

        Ok(Self {
            url_template: url_template.to_string(),
            version_url,
            http_client: HttpClient::new(),
            selector,
        })
    }
}

/// Replace every `{version}` in `template`
pub fn substitute_version(template: &str, version: &str) -> String {
    template.replace(VERSION_PLACEHOLDER, version)
}

/// Last non-empty path segment of a URL, used when the download suggests no name
fn default_file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl Provider for GenericProvider {
    async fn fetch(&self, opts: &FetchOpts) -> BinResult<File> {
        let latest = self.get_latest_version().await?;

        let filter_opts = FilterOpts::from(opts);
        let asset = FilteredAsset::from_url(latest.url.clone());

        let out_file = self.selector.process_url(&filter_opts, &asset).await?;

        let name = if out_file.name.is_empty() {
            default_file_name(&Url::parse(&asset.url)?)
        } else {
            out_file.name
        };

        Ok(File {
            data: out_file.source,
            name,
            version: latest.version,
            package_path: out_file.package_path,
        })
    }

    async fn get_latest_version(&self) -> BinResult<LatestVersion> {
        tracing::debug!("Getting version from {}", self.version_url);

        let response = self
            .http_client
            .get(self.version_url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let version = body.trim().to_string();
        if version.is_empty() {
            return Err(BinError::Version(format!(
                "version URL {} returned an empty version",
                self.version_url
            )));
        }

        let url = Url::parse(&substitute_version(&self.url_template, &version))?;

        Ok(LatestVersion {
            version,
            url: url.to_string(),
        })
    }

    fn id(&self) -> &'static str {
        "generic"
    }
}
