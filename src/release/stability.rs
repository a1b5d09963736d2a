//! Stable vs. pre-release classification

use crate::github::types::Release;

/// Substrings in a display name that mark an informal pre-release.
///
/// Matched case-sensitively anywhere in the name, so "Source drop" counts
/// as a release candidate too.
pub const INFORMAL_PRERELEASE_MARKERS: [&str; 2] = ["beta", "rc"];

/// A release is stable when it is neither a draft nor flagged as a
/// pre-release, and its name carries no informal pre-release marker.
pub fn is_stable(release: &Release) -> bool {
    !release.draft
        && !release.prerelease
        && !INFORMAL_PRERELEASE_MARKERS
            .iter()
            .any(|marker| release.name.contains(marker))
}

/// Keep only stable releases, preserving their order.
pub fn filter_stable(releases: Vec<Release>) -> Vec<Release> {
    releases.into_iter().filter(is_stable).collect()
}
