use crate::core::path::{config_file, ensure_dir};
use crate::core::{BinError, BinResult};
use crate::di::ConfigProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Public GitHub REST API endpoint
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub REST API base URL
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// Directory fetched files are written to (defaults to the current directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<String>,

    /// Credentials taken from the environment; never persisted
    #[serde(skip)]
    pub auth: AuthEnv,
}

fn default_github_api_url() -> String {
    DEFAULT_GITHUB_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_url: default_github_api_url(),
            download_dir: None,
            auth: AuthEnv::default(),
        }
    }
}

impl Config {
    /// Load config from platform-specific config directory, creating default if it doesn't exist
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\binfetch\config.yaml
    /// - Linux: ~/.config/binfetch/config.yaml
    /// - macOS: ~/Library/Application Support/binfetch/config.yaml
    pub fn load() -> BinResult<Self> {
        Self::load_from(&config_file()?)
    }

    /// Load config from an explicit path, creating default if it doesn't exist
    pub fn load_from(config_path: &Path) -> BinResult<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| BinError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save config to platform-specific config directory
    pub fn save(&self) -> BinResult<()> {
        self.save_to(&config_file()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, config_path: &Path) -> BinResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| BinError::Path("Invalid config path".to_string()))?;

        ensure_dir(config_dir)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| BinError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(config_path, content)?;
        Ok(())
    }

    /// Attach environment-derived credentials
    pub fn with_auth(mut self, auth: AuthEnv) -> Self {
        self.auth = auth;
        self
    }

    /// Get the download directory path
    pub fn get_download_dir(&self) -> BinResult<PathBuf> {
        match self.download_dir {
            Some(ref dir) => Ok(PathBuf::from(dir)),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// GitHub Enterprise Server endpoints and credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterpriseConfig {
    pub base_url: String,
    pub upload_url: String,
    pub auth_token: String,
}

/// Authentication settings taken from the process environment
///
/// Only the composition root calls [`AuthEnv::from_env`]; everything else
/// receives this struct explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthEnv {
    pub github_auth_token: Option<String>,
    pub github_token: Option<String>,
    pub ghes_base_url: Option<String>,
    pub ghes_upload_url: Option<String>,
    pub ghes_auth_token: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl AuthEnv {
    /// Read `GITHUB_AUTH_TOKEN`, `GITHUB_TOKEN` and the `GHES_*` variables
    pub fn from_env() -> Self {
        Self {
            github_auth_token: non_empty_var("GITHUB_AUTH_TOKEN"),
            github_token: non_empty_var("GITHUB_TOKEN"),
            ghes_base_url: non_empty_var("GHES_BASE_URL"),
            ghes_upload_url: non_empty_var("GHES_UPLOAD_URL"),
            ghes_auth_token: non_empty_var("GHES_AUTH_TOKEN"),
        }
    }

    /// Personal token: `GITHUB_AUTH_TOKEN`, then `GITHUB_TOKEN`
    pub fn token(&self) -> Option<String> {
        self.github_auth_token
            .iter()
            .chain(self.github_token.iter())
            .find(|t| !t.is_empty())
            .cloned()
    }

    /// Enterprise settings, present only when all three GHES variables are set
    pub fn enterprise(&self) -> Option<EnterpriseConfig> {
        match (
            &self.ghes_base_url,
            &self.ghes_upload_url,
            &self.ghes_auth_token,
        ) {
            (Some(base_url), Some(upload_url), Some(auth_token))
                if !base_url.is_empty() && !upload_url.is_empty() && !auth_token.is_empty() =>
            {
                Some(EnterpriseConfig {
                    base_url: base_url.clone(),
                    upload_url: upload_url.clone(),
                    auth_token: auth_token.clone(),
                })
            }
            _ => None,
        }
    }
}

/// Everything a GitHub provider needs at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubOptions {
    /// Public API base URL, ignored when `enterprise` is set
    pub api_url: String,
    /// Personal token, also sent with asset downloads
    pub token: Option<String>,
    pub enterprise: Option<EnterpriseConfig>,
}

impl Default for GitHubOptions {
    fn default() -> Self {
        Self {
            api_url: default_github_api_url(),
            token: None,
            enterprise: None,
        }
    }
}

// Implement ConfigProvider trait
impl ConfigProvider for Config {
    fn github_options(&self) -> GitHubOptions {
        GitHubOptions {
            api_url: self.github_api_url.clone(),
            token: self.auth.token(),
            enterprise: self.auth.enterprise(),
        }
    }

    fn download_dir(&self) -> BinResult<PathBuf> {
        self.get_download_dir()
    }
}
