pub mod check;
pub mod config;
pub mod latest;
pub mod list;

use ghrel::config::Config;
use ghrel::core::{ErrorHelp, GhrelResult};
use ghrel::di::ServiceContainer;
use ghrel::GhrelError;
use std::process::ExitCode;

/// Effective config: file, then environment, then the `--api-url` flag.
pub fn load_config(api_url: Option<String>) -> GhrelResult<Config> {
    let mut config = Config::load()?;
    if let Some(url) = api_url {
        config.api_url = url;
    }
    Ok(config)
}

pub fn container(api_url: Option<String>) -> GhrelResult<ServiceContainer> {
    ServiceContainer::with_config(load_config(api_url)?)
}

/// Print a failed lookup for `owner/repo` and pick the exit code.
///
/// An empty or all-unstable listing was fetched fine, so only the error
/// itself is printed for those.
pub fn report_failure(owner: &str, repo: &str, error: &GhrelError) -> ExitCode {
    tracing::debug!("Lookup for {}/{} failed: {:?}", owner, repo, error);
    if error.is_empty_result() {
        eprintln!("{}", error);
    } else {
        eprintln!("Failed to fetch releases for {}/{}: {}", owner, repo, error);
    }
    if let Some(help) = error.help() {
        eprintln!("\nHelp: {}", help);
    }
    ExitCode::FAILURE
}
