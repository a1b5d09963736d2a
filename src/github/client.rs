//! GitHub API client implementation

use crate::core::{GhrelError, GhrelResult};
use crate::di::traits::{ConfigProvider, ReleaseSource};
use crate::github::types::Release;
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, StatusCode};
use std::time::Duration;

/// GitHub API client
///
/// The API base URL is bound at construction, so tests can point the
/// client at a local mock server.
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: &dyn ConfigProvider) -> GhrelResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(config.user_agent())
                .map_err(|e| GhrelError::Config(format!("Invalid user agent: {}", e)))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        if let Some(token) = config.token() {
            let mut value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| GhrelError::Config(format!("Invalid GitHub token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()
            .map_err(|e| GhrelError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: config.api_url().trim_end_matches('/').to_string(),
        })
    }

    /// URL of the release listing for a repository
    pub fn releases_url(&self, owner: &str, repo: &str) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            self.api_url,
            urlencoding::encode(owner),
            urlencoding::encode(repo)
        )
    }

    /// Get releases for a repository, in the order the API lists them
    pub async fn get_releases(&self, owner: &str, repo: &str) -> GhrelResult<Vec<Release>> {
        let url = self.releases_url(owner, repo);
        let releases: Vec<Release> = self.api_get(&url).await?;
        tracing::debug!("Fetched {} releases from {}", releases.len(), url);
        Ok(releases)
    }

    /// Make an API request; anything but 200 OK is an error
    async fn api_request(&self, url: &str) -> GhrelResult<reqwest::Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|source| GhrelError::Fetch {
                url: url.to_string(),
                source,
            })?;

        if let Some(remaining) = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
        {
            tracing::debug!("GitHub rate limit remaining: {}", remaining);
        }

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("GitHub API answered {} for {}", status, url);
            return Err(GhrelError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        Ok(response)
    }

    /// Make an API GET request and parse JSON response
    async fn api_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> GhrelResult<T> {
        let response = self.api_request(url).await?;

        let body = response.bytes().await.map_err(|source| GhrelError::Fetch {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| GhrelError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ReleaseSource for GitHubClient {
    async fn fetch_releases(&self, owner: &str, repo: &str) -> GhrelResult<Vec<Release>> {
        self.get_releases(owner, repo).await
    }
}
