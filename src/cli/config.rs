use binfetch::config::Config;
use binfetch::core::path::config_file;
use binfetch::core::{BinError, BinResult};

pub fn show() -> BinResult<()> {
    let config = Config::load()?;
    let content = serde_yaml::to_string(&config)
        .map_err(|e| BinError::Config(format!("Failed to serialize config: {}", e)))?;

    println!("# {}", config_file()?.display());
    print!("{}", content);

    Ok(())
}
