//! Ordering releases by semantic version

use crate::core::Version;
use crate::github::types::Release;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// What to do with releases whose version is the zero sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnversionedPolicy {
    /// Keep them after every versioned release
    #[default]
    Last,
    /// Leave them out of the ranked output
    Drop,
}

/// Sort key: versioned releases before zero-version ones, then by version.
fn rank_key(release: &Release) -> (bool, Version) {
    let version = release.version();
    (!version.is_zero(), version)
}

/// Order releases newest first by parsed version.
///
/// Publish date and listing order play no part. Releases with equal
/// versions have no guaranteed relative order.
pub fn rank(releases: &mut [Release]) {
    releases.sort_by_cached_key(|r| Reverse(rank_key(r)));
}

/// Rank releases, applying `policy` to the unversioned ones first.
pub fn rank_with_policy(mut releases: Vec<Release>, policy: UnversionedPolicy) -> Vec<Release> {
    if policy == UnversionedPolicy::Drop {
        let before = releases.len();
        releases.retain(|r| !r.version().is_zero());
        if releases.len() != before {
            tracing::debug!("Dropped {} unversioned releases", before - releases.len());
        }
    }
    rank(&mut releases);
    releases
}
