use thiserror::Error;

pub type BinResult<T> = Result<T, BinError>;

#[derive(Error, Debug)]
pub enum BinError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A provider was constructed from a URL it cannot interpret.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The GitHub API answered with a non-success status.
    #[error("GitHub API error: HTTP {status} for {url}")]
    GitHubApi { status: u16, url: String },

    /// The repository exists but has never published a release.
    #[error("repository {owner}/{repo} does not have releases")]
    NoReleases { owner: String, repo: String },

    #[error("Asset error: {0}")]
    Asset(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Download error: {0}")]
    Download(String),
}

impl BinError {
    /// HTTP status carried by the error, if it came from a remote response.
    pub fn status(&self) -> Option<u16> {
        match self {
            BinError::GitHubApi { status, .. } => Some(*status),
            BinError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
