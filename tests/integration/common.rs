//! Common utilities for integration tests

use std::path::Path;
use std::process::Command;

const AUTH_VARS: &[&str] = &[
    "GITHUB_AUTH_TOKEN",
    "GITHUB_TOKEN",
    "GHES_BASE_URL",
    "GHES_UPLOAD_URL",
    "GHES_AUTH_TOKEN",
];

/// A binfetch command isolated from the user's config and credentials
pub fn binfetch_command(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_binfetch"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("APPDATA", home.join("AppData"));
    for var in AUTH_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Write a binfetch config pointing the GitHub API at `api_url`
pub fn write_config(home: &Path, api_url: &str) {
    let dir = home.join(".config").join("binfetch");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.yaml"),
        format!("github_api_url: {}\n", api_url),
    )
    .unwrap();
}
