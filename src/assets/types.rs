//! Asset type definitions

use std::collections::HashMap;

/// A candidate release artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub url: String,
}

impl Asset {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The asset chosen for download, plus any headers the download needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredAsset {
    /// Asset file name; empty when the source only knows a URL
    pub name: String,
    pub url: String,
    pub extra_headers: HashMap<String, String>,
}

impl FilteredAsset {
    /// A filtered asset that only carries a URL (generic sources)
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

impl From<Asset> for FilteredAsset {
    fn from(asset: Asset) -> Self {
        Self {
            name: asset.name,
            url: asset.url,
            extra_headers: HashMap::new(),
        }
    }
}

/// Options the selector is constructed with for one fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOpts {
    /// Disable scoring heuristics and take candidates as-is
    pub skip_scoring: bool,
    /// Destination path hint for the fetched package
    pub package_path: Option<String>,
    /// Skip validation of `package_path`
    pub skip_path_check: bool,
    /// Override for the inferred package name
    pub package_name: Option<String>,
}

/// Downloaded bytes with the name the selector suggests for them
#[derive(Debug, Clone, Default)]
pub struct OutFile {
    pub source: Vec<u8>,
    /// Suggested file name; empty when the selector could not infer one
    pub name: String,
    pub package_path: Option<String>,
}
