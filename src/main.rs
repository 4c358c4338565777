use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "binfetch")]
#[command(about = "Fetch the latest release artifact of a package")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a release artifact
    Fetch {
        /// GitHub repository/release URL, or a download URL template containing {version}
        url: String,
        /// URL whose body is the current version (required for non-GitHub URLs)
        #[arg(long)]
        version_url: Option<String>,
        /// Release tag to fetch instead of the latest
        #[arg(short = 't', long = "tag")]
        version: Option<String>,
        /// Disable asset scoring and take candidates as listed
        #[arg(short, long)]
        all: bool,
        /// Destination path hint for the package
        #[arg(long)]
        package_path: Option<String>,
        /// Skip package path validation
        #[arg(long)]
        skip_path_check: bool,
        /// Override the inferred package name
        #[arg(short, long)]
        name: Option<String>,
        /// Directory to write the file to (defaults to config download_dir or cwd)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the latest available version and its URL
    Latest {
        /// GitHub repository URL, or a download URL template containing {version}
        url: String,
        /// URL whose body is the current version (required for non-GitHub URLs)
        #[arg(long)]
        version_url: Option<String>,
    },
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch {
            url,
            version_url,
            version,
            all,
            package_path,
            skip_path_check,
            name,
            output,
        } => {
            cli::fetch::run(cli::fetch::FetchOptions {
                url,
                version_url,
                version,
                all,
                package_path,
                skip_path_check,
                name,
                output,
            })
            .await
        }
        Commands::Latest { url, version_url } => cli::latest::run(url, version_url).await,
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => cli::config::show(),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\nError: {}", e);
            ExitCode::FAILURE
        }
    }
}
