use super::{container, report_failure};
use ghrel::core::GhrelResult;
use std::process::ExitCode;

/// `ghrel check`: exit 0 when `version` is the latest stable release.
///
/// Without a version the latest stable release name is printed instead.
pub async fn run(
    api_url: Option<String>,
    owner: &str,
    repo: &str,
    version: Option<&str>,
    show_url: bool,
) -> GhrelResult<ExitCode> {
    let selector = container(api_url)?.selector();

    let Some(current) = version.filter(|v| !v.is_empty()) else {
        return Ok(match selector.fetch_latest_stable_release(owner, repo).await {
            Ok(latest) => {
                println!("{}", latest.name);
                ExitCode::SUCCESS
            }
            Err(e) => report_failure(owner, repo, &e),
        });
    };

    let check = match selector.check_version(owner, repo, current).await {
        Ok(check) => check,
        Err(e) => return Ok(report_failure(owner, repo, &e)),
    };

    if check.up_to_date {
        tracing::debug!("{} is the latest stable release of {}/{}", current, owner, repo);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "Not latest. Your Version {} - Latest: {}",
        current.strip_prefix('v').unwrap_or(current),
        check.latest_version()
    );
    if show_url {
        if let Some(url) = check.download_url() {
            println!("URL: {}", url);
        }
    }

    Ok(ExitCode::FAILURE)
}
