//! Trait definitions for dependency injection

use crate::core::GhrelResult;
use crate::github::types::Release;
use crate::release::rank::UnversionedPolicy;
use async_trait::async_trait;

/// Trait for configuration access
///
/// Provides read-only access to application configuration.
/// Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// Base URL of the GitHub REST API
    fn api_url(&self) -> &str;

    /// Token for authenticated requests (optional)
    fn token(&self) -> Option<&str>;

    /// Per-request timeout in seconds
    fn timeout_secs(&self) -> u64;

    /// User-Agent header value
    fn user_agent(&self) -> &str;

    /// Whether unversioned releases are kept last or dropped when ranking
    fn unversioned_releases(&self) -> UnversionedPolicy;
}

/// Trait for fetching the raw release listing of a repository
///
/// One call is one request. Implementations return releases in whatever
/// order the upstream lists them; ranking happens in the caller.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetch every release of `owner/repo`
    async fn fetch_releases(&self, owner: &str, repo: &str) -> GhrelResult<Vec<Release>>;
}
