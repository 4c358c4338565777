//! Dependency injection infrastructure for binfetch
//!
//! Providers depend on configuration and on an asset selector only through
//! traits, so tests can swap in the in-memory mocks.
//!
//! # Example (Production)
//! ```no_run
//! use binfetch::di::ServiceContainer;
//!
//! # fn example() -> binfetch::core::BinResult<()> {
//! let container = ServiceContainer::new()?;
//! let provider = container.provider("https://github.com/marcosnils/bin", None)?;
//! assert_eq!(provider.id(), "github");
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use binfetch::di::{ServiceContainer, mocks::*};
//! use std::sync::Arc;
//!
//! let config = Arc::new(MockConfigProvider::default());
//! let selector = Arc::new(MockAssetSelector::new(b"bytes".to_vec()));
//!
//! let container = ServiceContainer::with_providers(config, selector);
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{AssetSelector, ConfigProvider};
