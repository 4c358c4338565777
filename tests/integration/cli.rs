//! CLI tests for `binfetch fetch`, `binfetch latest` and `binfetch config`

use super::common::{binfetch_command, write_config};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn generic_server() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stable.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("  3.1.4 \n"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dl/3.1.4/tool"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"#!/bin/sh\necho hi\n".to_vec()))
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_latest_generic() {
    let mock_server = generic_server().await;
    let home = TempDir::new().unwrap();

    binfetch_command(home.path())
        .arg("latest")
        .arg(format!("{}/dl/{{version}}/tool", mock_server.uri()))
        .arg("--version-url")
        .arg(format!("{}/stable.txt", mock_server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("3.1.4"))
        .stdout(predicate::str::contains("/dl/3.1.4/tool"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_generic_writes_file() {
    let mock_server = generic_server().await;
    let home = TempDir::new().unwrap();
    let out = home.path().join("bin");

    binfetch_command(home.path())
        .arg("fetch")
        .arg(format!("{}/dl/{{version}}/tool", mock_server.uri()))
        .arg("--version-url")
        .arg(format!("{}/stable.txt", mock_server.uri()))
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetched tool 3.1.4"));

    let content = std::fs::read(out.join("tool")).unwrap();
    assert_eq!(content, b"#!/bin/sh\necho hi\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_latest_github() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tag_name": "v9.0.0",
            "html_url": "https://github.com/owner/repo/releases/tag/v9.0.0",
            "assets": []
        })))
        .mount(&mock_server)
        .await;

    let home = TempDir::new().unwrap();
    write_config(home.path(), &mock_server.uri());

    binfetch_command(home.path())
        .args(["latest", "https://github.com/owner/repo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "v9.0.0 https://github.com/owner/repo/releases/tag/v9.0.0",
        ));
}

#[test]
fn test_latest_github_owner_only_fails() {
    let home = TempDir::new().unwrap();

    binfetch_command(home.path())
        .args(["latest", "https://github.com/owner"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't find owner and repo"));
}

#[test]
fn test_fetch_generic_requires_version_url() {
    let home = TempDir::new().unwrap();

    binfetch_command(home.path())
        .args(["fetch", "https://dl.example.com/{version}/tool"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("version URL is required"));
}

#[test]
fn test_config_show_creates_default() {
    let home = TempDir::new().unwrap();

    binfetch_command(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("github_api_url").and(predicate::str::contains("api.github.com")));
}
