use binfetch::core::BinResult;
use binfetch::di::ServiceContainer;

pub async fn run(url: String, version_url: Option<String>) -> BinResult<()> {
    let container = ServiceContainer::new()?;
    let provider = container.provider(&url, version_url.as_deref())?;

    let latest = provider.get_latest_version().await?;
    println!("{} {}", latest.version, latest.url);

    Ok(())
}
