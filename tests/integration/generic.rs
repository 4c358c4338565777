//! Generic provider against a real HTTP selector

use binfetch::config::Config;
use binfetch::di::ServiceContainer;
use binfetch::providers::FetchOpts;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_generic_fetch_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stable.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1.4.0\n"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/releases/1.4.0/tool-1.4.0"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ELF".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let container = ServiceContainer::from_config(Config::default()).unwrap();
    let provider = container
        .provider(
            &format!("{}/releases/{{version}}/tool-{{version}}", mock_server.uri()),
            Some(&format!("{}/stable.txt", mock_server.uri())),
        )
        .unwrap();

    let file = provider.fetch(&FetchOpts::default()).await.unwrap();
    assert_eq!(file.version, "1.4.0");
    assert_eq!(file.name, "tool-1.4.0");
    assert_eq!(file.data, b"ELF");
}

#[tokio::test]
async fn test_generic_fetch_download_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stable.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("2.0"))
        .mount(&mock_server)
        .await;

    let container = ServiceContainer::from_config(Config::default()).unwrap();
    let provider = container
        .provider(
            &format!("{}/missing/{{version}}", mock_server.uri()),
            Some(&format!("{}/stable.txt", mock_server.uri())),
        )
        .unwrap();

    let err = provider.fetch(&FetchOpts::default()).await.unwrap_err();
    assert!(err.to_string().contains("HTTP 404"));
}
