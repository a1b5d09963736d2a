use super::{container, report_failure};
use ghrel::core::GhrelResult;
use std::process::ExitCode;

pub async fn run(
    api_url: Option<String>,
    owner: &str,
    repo: &str,
    include_prereleases: bool,
    json: bool,
) -> GhrelResult<ExitCode> {
    let selector = container(api_url)?.selector();

    let result = if include_prereleases {
        selector.fetch_latest_release(owner, repo).await
    } else {
        selector.fetch_latest_stable_release(owner, repo).await
    };

    let release = match result {
        Ok(release) => release,
        Err(e) => return Ok(report_failure(owner, repo, &e)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&release)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} ({})", release.name, release.version());
    println!("Tag: {}", release.tag_name);
    if let Some(published) = release.published_at {
        println!("Published: {}", published.format("%Y-%m-%d %H:%M UTC"));
    }
    for asset in &release.assets {
        println!("Asset: {} {}", asset.name, asset.browser_download_url);
    }

    Ok(ExitCode::SUCCESS)
}
