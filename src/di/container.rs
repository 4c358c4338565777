//! Service container for dependency injection

use super::traits::{AssetSelector, ConfigProvider};
use crate::assets::HttpAssetSelector;
use crate::config::{AuthEnv, Config};
use crate::core::BinResult;
use crate::providers::{self, Provider};
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds the configuration and the asset selector behind trait objects and
/// builds providers from them. This is the composition root: it is the only
/// place that reads the process environment.
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub selector: Arc<dyn AssetSelector>,
}

impl ServiceContainer {
    /// Create a new service container with production implementations
    ///
    /// - Loads config from disk (creating the default file if missing)
    /// - Reads GitHub tokens and GHES settings from the environment
    /// - Creates the HTTP asset selector for the host platform
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or created, or
    /// the HTTP client cannot be built.
    pub fn new() -> BinResult<Self> {
        let config = Config::load()?.with_auth(AuthEnv::from_env());
        Self::from_config(config)
    }

    /// Create a container around an already resolved config
    pub fn from_config(config: Config) -> BinResult<Self> {
        Ok(Self {
            config: Arc::new(config),
            selector: Arc::new(HttpAssetSelector::new()?),
        })
    }

    /// Create a service container with custom provider implementations
    ///
    /// This is primarily useful for testing, where you can inject mock
    /// implementations of each service.
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        selector: Arc<dyn AssetSelector>,
    ) -> Self {
        Self { config, selector }
    }

    /// Get the configuration provider
    pub fn config(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    /// Build the provider matching `url`
    ///
    /// `version_url` is required for non-GitHub URLs, where `url` is a
    /// download template containing `{version}`.
    pub fn provider(&self, url: &str, version_url: Option<&str>) -> BinResult<Box<dyn Provider>> {
        providers::new_provider(
            url,
            version_url,
            &self.config.github_options(),
            Arc::clone(&self.selector),
        )
    }
}
