//! Release selection over a [`ReleaseSource`]

use crate::core::{GhrelError, GhrelResult};
use crate::di::traits::ReleaseSource;
use crate::github::types::Release;
use crate::release::rank::{rank_with_policy, UnversionedPolicy};
use crate::release::stability::filter_stable;
use std::sync::Arc;

/// Answers "which releases are there, and which is the newest stable one".
///
/// Every operation makes exactly one request through the source; nothing
/// is cached between calls.
#[derive(Clone)]
pub struct ReleaseSelector {
    source: Arc<dyn ReleaseSource>,
    unversioned: UnversionedPolicy,
}

/// Outcome of comparing a caller's version against the latest stable release
#[derive(Debug, Clone)]
pub struct VersionCheck {
    /// The caller's version as given
    pub current: String,
    /// Latest stable release
    pub latest: Release,
    /// Whether `current` names the latest stable release
    pub up_to_date: bool,
}

impl VersionCheck {
    /// Name of the latest release without its leading 'v'
    pub fn latest_version(&self) -> &str {
        strip_v(&self.latest.name)
    }

    /// Download URL of the latest release's first asset
    pub fn download_url(&self) -> Option<&str> {
        self.latest.first_asset_url()
    }
}

impl ReleaseSelector {
    pub fn new(source: Arc<dyn ReleaseSource>) -> Self {
        Self {
            source,
            unversioned: UnversionedPolicy::default(),
        }
    }

    /// Choose how releases without a version are ranked.
    pub fn with_unversioned(mut self, policy: UnversionedPolicy) -> Self {
        self.unversioned = policy;
        self
    }

    /// Fetch the raw listing; an empty listing is an error.
    async fn fetch(&self, owner: &str, repo: &str) -> GhrelResult<Vec<Release>> {
        let releases = self.source.fetch_releases(owner, repo).await?;
        if releases.is_empty() {
            return Err(GhrelError::NoReleases {
                owner: owner.to_string(),
                repo: repo.to_string(),
            });
        }
        Ok(releases)
    }

    /// All releases, newest version first.
    pub async fn fetch_all_releases(&self, owner: &str, repo: &str) -> GhrelResult<Vec<Release>> {
        let releases = self.fetch(owner, repo).await?;
        Ok(rank_with_policy(releases, self.unversioned))
    }

    /// The newest release, which may be a draft or pre-release.
    pub async fn fetch_latest_release(&self, owner: &str, repo: &str) -> GhrelResult<Release> {
        self.fetch_all_releases(owner, repo)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| GhrelError::NoReleases {
                owner: owner.to_string(),
                repo: repo.to_string(),
            })
    }

    /// All stable releases, newest version first.
    ///
    /// Fails with [`GhrelError::NoReleases`] only when the repository has no
    /// releases at all; if none of them is stable the result is empty.
    pub async fn fetch_all_stable_releases(
        &self,
        owner: &str,
        repo: &str,
    ) -> GhrelResult<Vec<Release>> {
        let releases = self.fetch(owner, repo).await?;
        let total = releases.len();
        let stable = filter_stable(releases);
        tracing::debug!(
            "{} of {} releases of {}/{} are stable",
            stable.len(),
            total,
            owner,
            repo
        );
        Ok(rank_with_policy(stable, self.unversioned))
    }

    /// The newest stable release.
    ///
    /// Fails with [`GhrelError::NoStableReleases`] when the repository has
    /// releases but none of them is stable.
    pub async fn fetch_latest_stable_release(
        &self,
        owner: &str,
        repo: &str,
    ) -> GhrelResult<Release> {
        self.fetch_all_stable_releases(owner, repo)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| GhrelError::NoStableReleases {
                owner: owner.to_string(),
                repo: repo.to_string(),
            })
    }

    /// Compare `current` with the name of the latest stable release.
    ///
    /// One leading 'v' is ignored on both sides; otherwise the comparison is
    /// exact string equality.
    pub async fn check_version(
        &self,
        owner: &str,
        repo: &str,
        current: &str,
    ) -> GhrelResult<VersionCheck> {
        let latest = self.fetch_latest_stable_release(owner, repo).await?;
        let up_to_date = strip_v(current) == strip_v(&latest.name);
        Ok(VersionCheck {
            current: current.to_string(),
            latest,
            up_to_date,
        })
    }
}

fn strip_v(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}
