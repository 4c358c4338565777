//! GitHub Releases source

use super::{File, FetchOpts, LatestVersion, Provider};
use crate::assets::{Asset, FilterOpts};
use crate::config::GitHubOptions;
use crate::core::{BinError, BinResult};
use crate::di::AssetSelector;
use crate::github::{GitHubClient, GitHubRelease, ReleaseAsset, RepoRef};
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Fetches release assets from GitHub or GitHub Enterprise Server
pub struct GitHubProvider {
    client: GitHubClient,
    repo: RepoRef,
    /// Personal token sent with asset downloads
    token: Option<String>,
    selector: Arc<dyn AssetSelector>,
}

impl GitHubProvider {
    /// Parse `url` and build the API client described by `options`
    ///
    /// With enterprise settings the API client authenticates with the
    /// enterprise token, while asset downloads still carry the personal
    /// token from `options.token`.
    pub fn new(
        url: &Url,
        options: &GitHubOptions,
        selector: Arc<dyn AssetSelector>,
    ) -> BinResult<Self> {
        let repo = RepoRef::parse(url)?;
        let client = GitHubClient::from_options(options)?;

        Ok(Self {
            client,
            repo,
            token: options.token.clone(),
            selector,
        })
    }

    /// Repository identity parsed from the construction URL
    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    async fn release_for(&self, tag: Option<&str>) -> BinResult<GitHubRelease> {
        let RepoRef { owner, repo, .. } = &self.repo;

        match tag {
            Some(tag) => {
                tracing::info!("Getting {} release for {}/{}", tag, owner, repo);
                self.client.get_release_by_tag(owner, repo, tag).await
            }
            None => {
                tracing::info!("Getting latest release for {}/{}", owner, repo);
                match self.client.get_latest_release(owner, repo).await {
                    Err(e) if e.status() == Some(404) => Err(BinError::NoReleases {
                        owner: owner.clone(),
                        repo: repo.clone(),
                    }),
                    other => other,
                }
            }
        }
    }
}

/// Candidate assets for selection
///
/// When `wanted` names an asset present in the release, it is the only
/// candidate. Otherwise every asset is a candidate, and a missing `wanted`
/// asset is only logged.
pub fn select_candidates(assets: &[ReleaseAsset], wanted: Option<&str>) -> Vec<Asset> {
    if let Some(wanted) = wanted {
        if let Some(found) = assets.iter().find(|a| a.name == wanted) {
            return vec![Asset::new(&found.name, &found.url)];
        }
        tracing::warn!("asset {} not found in release", wanted);
    }

    assets
        .iter()
        .map(|a| Asset::new(&a.name, &a.url))
        .collect()
}

#[async_trait]
impl Provider for GitHubProvider {
    async fn fetch(&self, opts: &FetchOpts) -> BinResult<File> {
        // Per-call override; the parsed tag is left untouched
        let tag = opts
            .version
            .as_deref()
            .filter(|v| !v.is_empty())
            .or(self.repo.tag.as_deref());

        let release = self.release_for(tag).await?;

        let candidates = select_candidates(&release.assets, self.repo.asset.as_deref());
        let filter_opts = FilterOpts::from(opts);

        let mut asset = self
            .selector
            .filter_assets(&filter_opts, &self.repo.repo, candidates)
            .await?;

        asset.extra_headers.insert(
            "Accept".to_string(),
            "application/octet-stream".to_string(),
        );
        if let Some(ref token) = self.token {
            asset
                .extra_headers
                .insert("Authorization".to_string(), format!("token {}", token));
        }

        let out_file = self.selector.process_url(&filter_opts, &asset).await?;

        Ok(File {
            data: out_file.source,
            name: out_file.name,
            version: release.tag_name,
            package_path: out_file.package_path,
        })
    }

    async fn get_latest_version(&self) -> BinResult<LatestVersion> {
        tracing::debug!("Getting latest release for {}", self.repo.full_name());

        let release = self
            .client
            .get_latest_release(&self.repo.owner, &self.repo.repo)
            .await?;

        Ok(LatestVersion {
            version: release.tag_name,
            url: release.html_url,
        })
    }

    fn id(&self) -> &'static str {
        "github"
    }
}
