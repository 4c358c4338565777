//! GitHub API client implementation

use crate::config::GitHubOptions;
use crate::core::{BinError, BinResult};
use crate::github::types::GitHubRelease;
use reqwest::{header, Client as HttpClient};
use url::Url;

/// GitHub API client
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubClient {
    /// Create a client for the public API (or any API root given as `api_url`)
    ///
    /// Requests are anonymous unless `token` is set.
    pub fn new(api_url: &str, token: Option<&str>) -> BinResult<Self> {
        Ok(Self {
            http_client: build_http_client(token)?,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for a GitHub Enterprise Server instance
    ///
    /// `base_url` and `upload_url` may be given with or without their
    /// `api/v3/` and `api/uploads/` suffixes. Only release downloads are
    /// made, so the upload endpoint is validated but not kept.
    pub fn enterprise(base_url: &str, upload_url: &str, token: &str) -> BinResult<Self> {
        let api_url = enterprise_endpoint(base_url, "api/v3/")
            .map_err(|e| BinError::Config(format!("error initializing GHES client {}", e)))?;
        let upload_url = enterprise_endpoint(upload_url, "api/uploads/")
            .map_err(|e| BinError::Config(format!("error initializing GHES client {}", e)))?;

        tracing::debug!(
            "Using GitHub Enterprise Server API at {} (uploads at {})",
            api_url,
            upload_url
        );

        Ok(Self {
            http_client: build_http_client(Some(token))?,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create the client described by provider options
    ///
    /// Enterprise settings win over the public endpoint and authenticate with
    /// the enterprise token; otherwise the personal token is used, if any.
    pub fn from_options(options: &GitHubOptions) -> BinResult<Self> {
        match options.enterprise {
            Some(ref ghes) => Self::enterprise(&ghes.base_url, &ghes.upload_url, &ghes.auth_token),
            None => Self::new(&options.api_url, options.token.as_deref()),
        }
    }

    /// API root all requests are made against (no trailing slash)
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get the latest release for a repository
    pub async fn get_latest_release(&self, owner: &str, repo: &str) -> BinResult<GitHubRelease> {
        let url = format!("{}/repos/{}/{}/releases/latest", self.api_url, owner, repo);
        self.api_get(&url).await
    }

    /// Get the release published under `tag`
    pub async fn get_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> BinResult<GitHubRelease> {
        let url = format!(
            "{}/repos/{}/{}/releases/tags/{}",
            self.api_url,
            owner,
            repo,
            urlencoding::encode(tag)
        );
        self.api_get(&url).await
    }

    /// Make an API GET request and parse JSON response
    async fn api_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> BinResult<T> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(BinError::GitHubApi {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| BinError::Version(format!("Failed to parse GitHub API response: {}", e)))
    }
}

fn build_http_client(token: Option<&str>) -> BinResult<HttpClient> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        header::HeaderValue::from_static("binfetch"),
    );
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github+json"),
    );

    if let Some(token) = token {
        let mut value = header::HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| BinError::Config(format!("Invalid GitHub token: {}", e)))?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
    }

    HttpClient::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| BinError::Config(format!("Failed to create HTTP client: {}", e)))
}

/// Normalise an enterprise endpoint to end with `/` and `suffix`
fn enterprise_endpoint(raw: &str, suffix: &str) -> BinResult<String> {
    let mut url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(BinError::InvalidUrl(raw.to_string()));
    }

    let mut path = url.path().to_string();
    if !path.ends_with('/') {
        path.push('/');
    }
    let is_api_host = url.host_str().is_some_and(|h| h.starts_with("api."));
    if !path.ends_with(&format!("/{}", suffix)) && !is_api_host {
        path.push_str(suffix);
    }
    url.set_path(&path);

    Ok(url.to_string())
}
