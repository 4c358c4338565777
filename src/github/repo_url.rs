//! Parsing of GitHub repository, release and download URLs

use crate::core::{BinError, BinResult};
use url::Url;

/// Owner, repository and optional tag/asset recovered from a GitHub URL
///
/// Supported URL formats:
/// - `https://github.com/owner/repo`
/// - `https://github.com/owner/repo/releases/tag/v1.2.3`
/// - `https://github.com/owner/repo/releases/download/v1.2.3`
/// - `https://github.com/owner/repo/releases/download/v1.2.3/asset-name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
    /// Release tag; `None` means the latest release
    pub tag: Option<String>,
    /// Exact asset file name to prefer; `None` lets the selector choose
    pub asset: Option<String>,
}

impl RepoRef {
    pub fn parse(url: &Url) -> BinResult<Self> {
        // Leading "" mirrors the empty segment before the first '/'
        let segments = url
            .path()
            .split('/')
            .map(|segment| {
                urlencoding::decode(segment)
                    .map(|decoded| decoded.into_owned())
                    .map_err(|e| {
                        BinError::InvalidUrl(format!("error parsing GitHub URL {}: {}", url, e))
                    })
            })
            .collect::<BinResult<Vec<String>>>()?;
        if segments.len() < 3 {
            return Err(BinError::InvalidUrl(format!(
                "error parsing GitHub URL {}, can't find owner and repo",
                url
            )));
        }

        let owner = segments[1].clone();
        let repo = segments[2].clone();

        let mut tag = None;
        let mut asset = None;
        if segments.len() > 5 && segments[3] == "releases" {
            tag = non_empty(&segments[5]);
            if segments.len() > 6 && segments[4] == "download" {
                asset = non_empty(&segments[6]);
            }
        }

        Ok(Self {
            owner,
            repo,
            tag,
            asset,
        })
    }

    /// `owner/repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

fn non_empty(segment: &str) -> Option<String> {
    (!segment.is_empty()).then(|| segment.to_string())
}
