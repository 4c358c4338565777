//! GitHub provider against a real HTTP selector

use binfetch::config::{AuthEnv, Config};
use binfetch::di::ServiceContainer;
use binfetch::providers::FetchOpts;
use binfetch::BinError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(api_url: &str, token: Option<&str>) -> Config {
    Config {
        github_api_url: api_url.to_string(),
        ..Default::default()
    }
    .with_auth(AuthEnv {
        github_token: token.map(str::to_string),
        ..Default::default()
    })
}

#[tokio::test]
async fn test_github_fetch_downloads_asset_with_auth() {
    let mock_server = MockServer::start().await;
    let asset_url = format!("{}/repos/owner/repo/releases/assets/7", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/releases/latest"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tag_name": "v0.5.0",
            "html_url": "https://github.com/owner/repo/releases/tag/v0.5.0",
            "assets": [{ "name": "tool", "url": asset_url }]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/releases/assets/7"))
        .and(header("accept", "application/octet-stream"))
        .and(header("authorization", "token secret"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"tool-bytes".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let container =
        ServiceContainer::from_config(config(&mock_server.uri(), Some("secret"))).unwrap();
    let provider = container
        .provider("https://github.com/owner/repo", None)
        .unwrap();

    let file = provider.fetch(&FetchOpts::default()).await.unwrap();
    assert_eq!(file.version, "v0.5.0");
    assert_eq!(file.name, "tool");
    assert_eq!(file.data, b"tool-bytes");
}

#[tokio::test]
async fn test_github_fetch_requested_asset_from_download_url() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/releases/tags/v1.0.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tag_name": "v1.0.0",
            "assets": [
                { "name": "tool-linux-amd64", "url": format!("{}/assets/1", uri) },
                { "name": "tool-special", "url": format!("{}/assets/2", uri) },
                { "name": "tool-darwin-arm64", "url": format!("{}/assets/3", uri) }
            ]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/assets/2"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"special".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let container = ServiceContainer::from_config(config(&uri, None)).unwrap();
    let provider = container
        .provider(
            "https://github.com/owner/repo/releases/download/v1.0.0/tool-special",
            None,
        )
        .unwrap();

    let file = provider.fetch(&FetchOpts::default()).await.unwrap();
    assert_eq!(file.name, "tool-special");
    assert_eq!(file.version, "v1.0.0");
}

#[tokio::test]
async fn test_github_repository_without_releases() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/empty/releases/latest"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let container = ServiceContainer::from_config(config(&mock_server.uri(), None)).unwrap();
    let provider = container
        .provider("https://github.com/owner/empty", None)
        .unwrap();

    let err = provider.fetch(&FetchOpts::default()).await.unwrap_err();
    assert!(matches!(err, BinError::NoReleases { .. }));
    assert_eq!(err.to_string(), "repository owner/empty does not have releases");
}
