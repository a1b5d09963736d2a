use super::*;
use predicates::prelude::*;

#[tokio::test(flavor = "multi_thread")]
async fn test_check_without_version_prints_latest_stable() {
    let ctx = TestContext::new().await;
    ctx.mount_releases("owner", "repo", sample_listing()).await;

    ctx.ghrel()
        .args(["check", "owner", "repo"])
        .assert()
        .success()
        .stdout("The Empire strikes back -  v2.7.4\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_up_to_date_exits_zero() {
    let ctx = TestContext::new().await;
    ctx.mount_releases(
        "owner",
        "repo",
        json!([
            release(1, "v1.0.0", "v1.0.0", false, false),
            release(2, "v1.1.0", "v1.1.0", false, false),
        ]),
    )
    .await;

    ctx.ghrel()
        .args(["check", "owner", "repo", "--version", "1.1.0"])
        .assert()
        .success()
        .stdout("");

    ctx.ghrel()
        .args(["check", "owner", "repo", "--version", "v1.1.0"])
        .assert()
        .success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_outdated_exits_one_and_prints_url() {
    let ctx = TestContext::new().await;
    ctx.mount_releases(
        "owner",
        "repo",
        json!([
            release(1, "v1.0.0", "v1.0.0", false, false),
            release(2, "v1.1.0", "v1.1.0", false, false),
            release(3, "v1.2.0-rc.1", "v1.2.0-rc.1", false, false),
        ]),
    )
    .await;

    ctx.ghrel()
        .args(["check", "owner", "repo", "--version", "v1.0.0", "--url"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Not latest. Your Version 1.0.0 - Latest: 1.1.0",
        ))
        .stdout(predicate::str::contains(
            "URL: https://dl.example.com/v1.1.0/tool.tar.gz",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_outdated_without_url_flag() {
    let ctx = TestContext::new().await;
    ctx.mount_releases("owner", "repo", sample_listing()).await;

    ctx.ghrel()
        .args(["check", "owner", "repo", "-v", "1.2.0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Not latest"))
        .stdout(predicate::str::contains("URL:").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_missing_repository_fails() {
    let ctx = TestContext::new().await;
    ctx.mount_status("owner", "missing", 404).await;

    ctx.ghrel()
        .args(["check", "owner", "missing", "--version", "1.0.0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to fetch releases for owner/missing",
        ))
        .stderr(predicate::str::contains("404"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_without_stable_release_fails() {
    let ctx = TestContext::new().await;
    ctx.mount_releases(
        "owner",
        "repo",
        json!([release(1, "v1.0.0", "v1.0.0", false, true)]),
    )
    .await;

    ctx.ghrel()
        .args(["check", "owner", "repo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No stable release found for owner/repo"))
        .stderr(predicate::str::contains("Failed to fetch").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_empty_listing_fails() {
    let ctx = TestContext::new().await;
    ctx.mount_releases("owner", "repo", json!([])).await;

    ctx.ghrel()
        .args(["check", "owner", "repo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No releases found for owner/repo"))
        .stderr(predicate::str::contains("Failed to fetch").not());
}
