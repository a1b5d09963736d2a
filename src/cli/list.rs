use super::{container, report_failure};
use ghrel::core::GhrelResult;
use ghrel::github::Release;
use std::process::ExitCode;

pub async fn run(
    api_url: Option<String>,
    owner: &str,
    repo: &str,
    stable_only: bool,
    json: bool,
) -> GhrelResult<ExitCode> {
    let selector = container(api_url)?.selector();

    let result = if stable_only {
        selector.fetch_all_stable_releases(owner, repo).await
    } else {
        selector.fetch_all_releases(owner, repo).await
    };

    let releases = match result {
        Ok(releases) => releases,
        Err(e) => return Ok(report_failure(owner, repo, &e)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&releases)?);
        return Ok(ExitCode::SUCCESS);
    }

    if releases.is_empty() {
        println!("No stable releases for {}/{}", owner, repo);
        return Ok(ExitCode::SUCCESS);
    }

    for release in &releases {
        println!("{}", format_line(release));
    }

    Ok(ExitCode::SUCCESS)
}

/// One listing line: version, tag, publish date, name, flags.
fn format_line(release: &Release) -> String {
    let published = release
        .published_at
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut flags = Vec::new();
    if release.draft {
        flags.push("draft");
    }
    if release.prerelease {
        flags.push("prerelease");
    }
    if !release.draft && !release.prerelease && !ghrel::release::is_stable(release) {
        flags.push("unstable name");
    }

    let mut line = format!(
        "{:<14} {:<18} {:<10} {}",
        release.version().to_string(),
        release.tag_name,
        published,
        release.name
    );
    if !flags.is_empty() {
        line.push_str(&format!(" [{}]", flags.join(", ")));
    }
    line
}
