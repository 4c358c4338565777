//! Release asset selection and download
//!
//! Providers enumerate candidate assets and hand them to an
//! [`AssetSelector`](crate::di::AssetSelector), which picks one and downloads
//! it. [`HttpAssetSelector`] is the production implementation.

pub mod selector;
pub mod types;

pub use selector::HttpAssetSelector;
pub use types::{Asset, FilterOpts, FilteredAsset, OutFile};
