//! Version extraction from free-form release metadata

use crate::core::Version;
use crate::github::types::Release;
use regex::Regex;
use std::sync::LazyLock;

/// A dotted numeric triple with an optional non-whitespace suffix. It must
/// start the text or follow a non-digit, and end the text or precede
/// whitespace, so dates and long build numbers are skipped.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])([0-9]+\.[0-9]+\.[0-9]+\S*)(?:$|\s)")
        .expect("version pattern is a valid regex")
});

/// Return the first version-like substring of `text`, scanning left to right.
pub fn find_version(text: &str) -> Option<&str> {
    VERSION_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse the version of a release from its tag label, falling back to its
/// display name only when the tag has no match at all. Without a match, or
/// when a core component overflows, the result is the zero version.
pub fn extract_version(tag_name: &str, name: &str) -> Version {
    let Some(candidate) = find_version(tag_name).or_else(|| find_version(name)) else {
        return Version::zero();
    };

    match Version::parse_tolerant(candidate) {
        Ok(version) => version,
        Err(e) => {
            tracing::debug!("Ignoring unparseable version '{}': {}", candidate, e);
            Version::zero()
        }
    }
}

impl Release {
    /// Semantic version of this release (0.0.0 when none can be found).
    pub fn version(&self) -> Version {
        extract_version(&self.tag_name, &self.name)
    }
}
