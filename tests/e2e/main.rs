//! End-to-end tests for the `ghrel` binary against a mock GitHub API.

use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod check;
mod latest;
mod list;

/// Test context that provides an isolated config directory and a mock API
pub struct TestContext {
    pub temp: TempDir,
    pub server: MockServer,
}

impl TestContext {
    pub async fn new() -> Self {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.child("config").path()).unwrap();
        let server = MockServer::start().await;
        Self { temp, server }
    }

    /// Create a Command for running ghrel with proper environment
    pub fn ghrel(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ghrel").unwrap();
        cmd.current_dir(&self.temp);
        cmd.env("GHREL_API_URL", self.server.uri());
        cmd.env_remove("GITHUB_TOKEN");
        cmd.env_remove("RUST_LOG");

        // Isolate the config directory the dirs crate resolves
        let config_dir = self.temp.child("config").to_path_buf();
        if cfg!(target_os = "windows") {
            cmd.env("APPDATA", &config_dir);
        } else if cfg!(target_os = "linux") {
            cmd.env("XDG_CONFIG_HOME", &config_dir);
            cmd.env("HOME", self.temp.path());
        } else {
            cmd.env("HOME", self.temp.path());
        }

        cmd
    }

    /// Write `config.yaml` where ghrel will look for it
    pub fn write_config(&self, content: &str) {
        let dir = if cfg!(target_os = "linux") || cfg!(target_os = "windows") {
            self.temp.child("config").child("ghrel")
        } else {
            self.temp
                .child("Library")
                .child("Application Support")
                .child("ghrel")
        };
        dir.create_dir_all().unwrap();
        dir.child("config.yaml").write_str(content).unwrap();
    }

    /// Serve `releases` as the listing of `owner/repo`
    pub async fn mount_releases(&self, owner: &str, repo: &str, releases: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/{}/{}/releases", owner, repo)))
            .respond_with(ResponseTemplate::new(200).set_body_json(releases))
            .mount(&self.server)
            .await;
    }

    /// Answer `owner/repo` with a bare status code
    pub async fn mount_status(&self, owner: &str, repo: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/{}/{}/releases", owner, repo)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}

/// A release object shaped like the GitHub API's
pub fn release(id: u64, name: &str, tag: &str, draft: bool, prerelease: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "tag_name": tag,
        "draft": draft,
        "prerelease": prerelease,
        "published_at": "2021-03-04T05:06:07Z",
        "assets": [
            {
                "id": id * 10,
                "name": format!("tool-{}.tar.gz", tag),
                "browser_download_url": format!("https://dl.example.com/{}/tool.tar.gz", tag)
            }
        ]
    })
}

/// A typical listing: newest stable is 2.7.4, listed out of order
pub fn sample_listing() -> Value {
    json!([
        release(1, "The great Emperor -  v1.2.0", "v1.2.0", false, false),
        release(2, "The Empire strikes back -  v2.7.4", "v2.7.4", false, false),
        release(3, "Next -  v3.0.0", "v3.0.0", true, false),
        release(4, "The Fall -  v2.8.0", "v2.8.0-alpha", false, true),
        release(5, "v2.9.0 beta", "v2.9.0", false, false),
    ])
}
