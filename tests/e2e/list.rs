use super::*;
use predicates::prelude::*;

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_all_ranked_by_version() {
    let ctx = TestContext::new().await;
    ctx.mount_releases("owner", "repo", sample_listing()).await;

    let output = ctx.ghrel().args(["list", "owner", "repo"]).output().unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("3.0.0"));
    assert!(lines[0].ends_with("[draft]"));
    assert!(lines[1].starts_with("2.9.0"));
    assert!(lines[2].starts_with("2.8.0-alpha"));
    assert!(lines[3].starts_with("2.7.4"));
    assert!(lines[4].starts_with("1.2.0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_stable_only() {
    let ctx = TestContext::new().await;
    ctx.mount_releases("owner", "repo", sample_listing()).await;

    let output = ctx
        .ghrel()
        .args(["list", "owner", "repo", "--stable"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("2.7.4"));
    assert!(lines[1].starts_with("1.2.0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_stable_when_nothing_is_stable() {
    let ctx = TestContext::new().await;
    ctx.mount_releases(
        "owner",
        "repo",
        json!([release(1, "v1.0.0-rc1", "v1.0.0-rc1", false, false)]),
    )
    .await;

    ctx.ghrel()
        .args(["list", "owner", "repo", "--stable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stable releases for owner/repo"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json_is_ranked() {
    let ctx = TestContext::new().await;
    ctx.mount_releases("owner", "repo", sample_listing()).await;

    let output = ctx
        .ghrel()
        .args(["list", "owner", "repo", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<u64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 5, 4, 2, 1]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_server_error() {
    let ctx = TestContext::new().await;
    ctx.mount_status("owner", "repo", 503).await;

    ctx.ghrel()
        .args(["list", "owner", "repo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("503"))
        .stderr(predicate::str::contains("Try again later"));
}
