//! Mock implementations of service traits for testing

use super::traits::{ConfigProvider, ReleaseSource};
use crate::core::{GhrelError, GhrelResult};
use crate::github::types::Release;
use crate::release::rank::UnversionedPolicy;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock configuration provider for testing
///
/// # Example
///
/// ```
/// use ghrel::di::mocks::MockConfigProvider;
/// use ghrel::di::ConfigProvider;
///
/// let mut config = MockConfigProvider::default();
/// config.api_url = "http://127.0.0.1:8080".to_string();
///
/// assert_eq!(config.api_url(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone)]
pub struct MockConfigProvider {
    pub api_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub unversioned_releases: UnversionedPolicy,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            token: None,
            timeout_secs: 30,
            user_agent: "ghrel-test".to_string(),
            unversioned_releases: UnversionedPolicy::Last,
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn unversioned_releases(&self) -> UnversionedPolicy {
        self.unversioned_releases
    }
}

#[derive(Clone)]
enum MockResponse {
    Releases(Vec<Release>),
    Status(u16),
}

/// Mock release source for testing
///
/// Serves canned listings per `owner/repo` and counts calls. Unknown
/// repositories answer with a 404 status error.
///
/// # Example
///
/// ```
/// use ghrel::di::mocks::MockReleaseSource;
/// use ghrel::github::Release;
///
/// let source = MockReleaseSource::new();
/// source.add_releases("owner", "repo", vec![Release::default()]);
/// assert_eq!(source.call_count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct MockReleaseSource {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockReleaseSource {
    /// Create a new mock release source
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `releases` for `owner/repo`
    pub fn add_releases(&self, owner: &str, repo: &str, releases: Vec<Release>) {
        self.responses
            .lock()
            .unwrap()
            .insert(key(owner, repo), MockResponse::Releases(releases));
    }

    /// Answer `owner/repo` with an HTTP status error
    pub fn add_status(&self, owner: &str, repo: &str, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .insert(key(owner, repo), MockResponse::Status(status));
    }

    /// Number of fetches made so far
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

fn key(owner: &str, repo: &str) -> String {
    format!("{}/{}", owner, repo)
}

#[async_trait]
impl ReleaseSource for MockReleaseSource {
    async fn fetch_releases(&self, owner: &str, repo: &str) -> GhrelResult<Vec<Release>> {
        *self.calls.lock().unwrap() += 1;

        let url = format!("mock://repos/{}/{}/releases", owner, repo);
        let response = self.responses.lock().unwrap().get(&key(owner, repo)).cloned();
        match response {
            Some(MockResponse::Releases(releases)) => Ok(releases),
            Some(MockResponse::Status(status)) => Err(GhrelError::Status {
                url,
                status,
                status_text: String::new(),
            }),
            None => Err(GhrelError::Status {
                url,
                status: 404,
                status_text: "Not Found".to_string(),
            }),
        }
    }
}
