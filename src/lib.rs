//! binfetch: resolve and download the latest release artifact of a package
//!
//! This crate re-exports the core error and path utilities from
//! `binfetch-core` and organizes the providers that turn a GitHub repository
//! URL or a generic version-check URL into downloaded bytes.

pub use binfetch_core::{BinError, BinResult};

/// Core module re-exported from binfetch-core.
pub mod core {
    pub use binfetch_core::core::*;
}

/// Configuration management.
pub mod config;

/// Release asset selection and download.
pub mod assets;

/// GitHub API integration.
pub mod github;

/// Package sources (GitHub, generic).
pub mod providers;

/// Dependency injection infrastructure.
pub mod di;

pub use providers::{FetchOpts, File, LatestVersion, Provider};
