use clap::{Parser, Subcommand};
use ghrel::core::format_error_with_help;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "ghrel")]
#[command(about = "Check a version against the latest stable GitHub release")]
#[command(version)]
struct Cli {
    /// GitHub API base URL (overrides config and GHREL_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a version is the latest stable release
    Check {
        /// Repository owner (user or organization)
        owner: String,
        /// Repository name
        repo: String,
        /// Your current version; without it the latest stable name is printed
        #[arg(short = 'v', long = "version")]
        current: Option<String>,
        /// Print the download URL of the newer release's first asset
        #[arg(short, long)]
        url: bool,
    },
    /// Show the latest release
    Latest {
        /// Repository owner (user or organization)
        owner: String,
        /// Repository name
        repo: String,
        /// Consider drafts and pre-releases too
        #[arg(short, long)]
        include_prereleases: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List releases, newest version first
    List {
        /// Repository owner (user or organization)
        owner: String,
        /// Repository name
        repo: String,
        /// Only stable releases
        #[arg(short, long)]
        stable: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect configuration
    #[command(subcommand)]
    Config(cli::config::ConfigCommands),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api_url = cli.api_url;

    let result = match cli.command {
        Commands::Check {
            owner,
            repo,
            current,
            url,
        } => cli::check::run(api_url, &owner, &repo, current.as_deref(), url).await,
        Commands::Latest {
            owner,
            repo,
            include_prereleases,
            json,
        } => cli::latest::run(api_url, &owner, &repo, include_prereleases, json).await,
        Commands::List {
            owner,
            repo,
            stable,
            json,
        } => cli::list::run(api_url, &owner, &repo, stable, json).await,
        Commands::Config(command) => cli::config::run(api_url, command),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
