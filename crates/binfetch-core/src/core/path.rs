use crate::core::error::{BinError, BinResult};
use std::path::{Path, PathBuf};

/// Get the binfetch home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\binfetch
/// - Linux: ~/.config/binfetch
/// - macOS: ~/Library/Application Support/binfetch
pub fn binfetch_home() -> BinResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| BinError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("binfetch"))
}

/// Get the config file path (`<binfetch_home>/config.yaml`)
pub fn config_file() -> BinResult<PathBuf> {
    Ok(binfetch_home()?.join("config.yaml"))
}

/// Ensure a directory exists, creating it and its parents if needed
pub fn ensure_dir(path: &Path) -> BinResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
