//! HTTP-backed asset selector
//!
//! Picks a release asset for the host platform and downloads it.

use crate::assets::types::{Asset, FilterOpts, FilteredAsset, OutFile};
use crate::core::{BinError, BinResult};
use crate::di::traits::AssetSelector;
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient};
use std::path::{Component, Path};

/// File suffixes that never hold the installable artifact
const AUXILIARY_SUFFIXES: &[&str] = &[
    ".sha256", ".sha512", ".sha1", ".md5", ".sig", ".asc", ".pem", ".sbom", ".txt", ".json",
];

/// Selects assets by host OS/architecture and downloads them over HTTP
#[derive(Clone)]
pub struct HttpAssetSelector {
    http_client: HttpClient,
    os: &'static str,
    arch: &'static str,
}

impl HttpAssetSelector {
    /// Create a selector targeting the host platform
    pub fn new() -> BinResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("binfetch"),
        );

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| BinError::Download(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        })
    }

    /// Target a specific platform instead of the host
    pub fn with_platform(mut self, os: &'static str, arch: &'static str) -> Self {
        self.os = os;
        self.arch = arch;
        self
    }

    fn score(&self, asset: &Asset, opts: &FilterOpts) -> i32 {
        let name = asset.name.to_lowercase();
        let mut score = 0;

        if AUXILIARY_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            score -= 100;
        }
        if os_aliases(self.os).iter().any(|a| name.contains(a)) {
            score += 10;
        }
        if arch_aliases(self.arch).iter().any(|a| name.contains(a)) {
            score += 5;
        }
        if let Some(ref package_name) = opts.package_name {
            if name.contains(&package_name.to_lowercase()) {
                score += 2;
            }
        }

        score
    }
}

fn os_aliases(os: &str) -> &'static [&'static str] {
    match os {
        "linux" => &["linux"],
        "macos" => &["darwin", "macos", "apple", "osx"],
        "windows" => &["windows", "win64", "win32", ".exe"],
        "freebsd" => &["freebsd"],
        _ => &[],
    }
}

fn arch_aliases(arch: &str) -> &'static [&'static str] {
    match arch {
        "x86_64" => &["x86_64", "amd64", "x64"],
        "aarch64" => &["aarch64", "arm64"],
        "x86" => &["i386", "i686", "386"],
        "arm" => &["armv7", "armhf", "arm"],
        _ => &[],
    }
}

/// Reject absolute paths and parent traversal in a package path
fn validate_package_path(path: &str) -> BinResult<()> {
    let p = Path::new(path);
    if p.is_absolute() || p.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(BinError::Path(format!(
            "Package path '{}' must be relative and stay inside the package",
            path
        )));
    }
    Ok(())
}

/// Extract the `filename` parameter of a Content-Disposition header
fn content_disposition_filename(value: &str) -> Option<String> {
    value.split(';').map(str::trim).find_map(|part| {
        part.strip_prefix("filename=")
            .map(|v| v.trim_matches('"').to_string())
            .filter(|v| !v.is_empty())
    })
}

#[async_trait]
impl AssetSelector for HttpAssetSelector {
    async fn filter_assets(
        &self,
        opts: &FilterOpts,
        repo_name: &str,
        candidates: Vec<Asset>,
    ) -> BinResult<FilteredAsset> {
        if candidates.is_empty() {
            return Err(BinError::Asset(format!(
                "No assets found for {}",
                repo_name
            )));
        }

        if candidates.len() == 1 || opts.skip_scoring {
            let first = candidates.into_iter().next();
            return first
                .map(FilteredAsset::from)
                .ok_or_else(|| BinError::Asset(format!("No assets found for {}", repo_name)));
        }

        let mut best: Option<(i32, Asset)> = None;
        for asset in candidates {
            let score = self.score(&asset, opts);
            tracing::debug!("Asset {} scored {}", asset.name, score);
            // Strictly greater keeps the earliest asset on ties
            if best.as_ref().map_or(true, |(s, _)| score > *s) {
                best = Some((score, asset));
            }
        }

        match best {
            Some((score, asset)) if score >= 0 => Ok(asset.into()),
            _ => Err(BinError::Asset(format!(
                "No suitable asset found for {} on {}/{}",
                repo_name, self.os, self.arch
            ))),
        }
    }

    async fn process_url(&self, opts: &FilterOpts, asset: &FilteredAsset) -> BinResult<OutFile> {
        if let Some(ref package_path) = opts.package_path {
            if !opts.skip_path_check {
                validate_package_path(package_path)?;
            }
        }

        let mut request = self.http_client.get(&asset.url);
        for (key, value) in &asset.extra_headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| BinError::Download(format!("Failed to download {}: {}", asset.url, e)))?;

        if !response.status().is_success() {
            return Err(BinError::Download(format!(
                "Failed to download {}: HTTP {}",
                asset.url,
                response.status()
            )));
        }

        let disposition_name = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(content_disposition_filename);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BinError::Download(format!("Failed to read {}: {}", asset.url, e)))?;

        let name = if !asset.name.is_empty() {
            asset.name.clone()
        } else {
            disposition_name.unwrap_or_default()
        };

        Ok(OutFile {
            source: bytes.to_vec(),
            name,
            package_path: opts.package_path.clone(),
        })
    }
}
