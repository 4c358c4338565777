//! GitHub integration for release lookups
//!
//! This module provides functionality for interacting with GitHub to:
//! - Fetch the latest release or a release by tag
//! - Talk to GitHub Enterprise Server instances
//! - Recover owner, repository, tag and asset from GitHub URLs

pub mod client;
pub mod types;
pub mod repo_url;

pub use client::GitHubClient;
pub use types::{GitHubRelease, ReleaseAsset};
pub use repo_url::RepoRef;
