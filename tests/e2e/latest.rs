use super::*;
use predicates::prelude::*;

#[tokio::test(flavor = "multi_thread")]
async fn test_latest_stable() {
    let ctx = TestContext::new().await;
    ctx.mount_releases("owner", "repo", sample_listing()).await;

    ctx.ghrel()
        .args(["latest", "owner", "repo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Empire strikes back -  v2.7.4 (2.7.4)"))
        .stdout(predicate::str::contains("Tag: v2.7.4"))
        .stdout(predicate::str::contains("Published: 2021-03-04 05:06 UTC"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_latest_including_prereleases() {
    let ctx = TestContext::new().await;
    ctx.mount_releases("owner", "repo", sample_listing()).await;

    ctx.ghrel()
        .args(["latest", "owner", "repo", "--include-prereleases"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tag: v3.0.0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_latest_json() {
    let ctx = TestContext::new().await;
    ctx.mount_releases("owner", "repo", sample_listing()).await;

    let output = ctx
        .ghrel()
        .args(["latest", "owner", "repo", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], 2);
    assert_eq!(value["tag_name"], "v2.7.4");
    assert_eq!(
        value["assets"][0]["browser_download_url"],
        "https://dl.example.com/v2.7.4/tool.tar.gz"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_latest_malformed_body_fails() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/releases"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&ctx.server)
        .await;

    ctx.ghrel()
        .args(["latest", "owner", "repo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to decode releases"));
}
