use binfetch::core::path::ensure_dir;
use binfetch::core::{BinError, BinResult};
use binfetch::di::ServiceContainer;
use binfetch::providers::{FetchOpts, File};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FetchOptions {
    pub url: String,
    pub version_url: Option<String>,
    pub version: Option<String>,
    pub all: bool,
    pub package_path: Option<String>,
    pub skip_path_check: bool,
    pub name: Option<String>,
    pub output: Option<PathBuf>,
}

pub async fn run(options: FetchOptions) -> BinResult<()> {
    let container = ServiceContainer::new()?;
    let provider = container.provider(&options.url, options.version_url.as_deref())?;

    let opts = FetchOpts {
        all: options.all,
        package_path: options.package_path,
        skip_path_check: options.skip_path_check,
        package_name: options.name,
        version: options.version,
    };

    let file = provider.fetch(&opts).await?;

    let output_dir = match options.output {
        Some(dir) => dir,
        None => container.config().download_dir()?,
    };
    let path = write_file(&output_dir, &file)?;

    println!(
        "✓ Fetched {} {} to {}",
        file.name,
        file.version,
        path.display()
    );

    Ok(())
}

fn write_file(output_dir: &Path, file: &File) -> BinResult<PathBuf> {
    if file.name.is_empty() || file.name.contains(['/', '\\']) {
        return Err(BinError::Path(format!(
            "Refusing to write file with name '{}'",
            file.name
        )));
    }

    ensure_dir(output_dir)?;
    let path = output_dir.join(&file.name);
    fs::write(&path, &file.data)?;

    // Make executable on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms)?;
    }

    Ok(path)
}
