use crate::core::error::{GhrelError, GhrelResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Pre-release version (e.g., "alpha.1", "beta.2", "rc.1")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<String>,
    /// Build metadata (e.g., "build.123")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_metadata: Option<String>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
            build_metadata: None,
        }
    }

    /// Create a new version with pre-release metadata
    pub fn with_prerelease(major: u64, minor: u64, patch: u64, prerelease: String) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Some(prerelease),
            build_metadata: None,
        }
    }

    /// The 0.0.0 sentinel used for releases without a usable version.
    pub fn zero() -> Self {
        Self::default()
    }

    /// True for exactly 0.0.0 without pre-release data.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Strict SemVer 2.0.0 parse: "1.2.3", "1.2.3-rc.1", "1.2.3-rc.1+build.5".
    ///
    /// Exactly three numeric core components without leading zeros.
    pub fn parse(s: &str) -> GhrelResult<Self> {
        // Split by '+' to separate build metadata
        let (version_prerelease, build_metadata) = match s.split_once('+') {
            Some((head, build)) => {
                validate_identifiers(build, s, false)?;
                (head, Some(build.to_string()))
            }
            None => (s, None),
        };

        // The first '-' starts the pre-release; later ones belong to it
        let (version_part, prerelease) = match version_prerelease.split_once('-') {
            Some((core, pre)) => {
                validate_identifiers(pre, s, true)?;
                (core, Some(pre.to_string()))
            }
            None => (version_prerelease, None),
        };

        let parts: Vec<&str> = version_part.split('.').collect();
        if parts.len() != 3 {
            return Err(GhrelError::Version(format!(
                "Expected major.minor.patch: {}",
                s
            )));
        }

        let major = parse_numeric(parts[0], "major", s)?;
        let minor = parse_numeric(parts[1], "minor", s)?;
        let patch = parse_numeric(parts[2], "patch", s)?;

        Ok(Self {
            major,
            minor,
            patch,
            prerelease,
            build_metadata,
        })
    }

    /// Lenient parse for versions found in the wild.
    ///
    /// Trims whitespace, drops one leading 'v', pads "1" and "1.2" with
    /// zeros (only when there is no pre-release/build suffix), and strips
    /// leading zeros from the core components before handing the result to
    /// [`Version::parse`].
    ///
    /// When that fails but the text still starts with a numeric
    /// major.minor.patch, the core is kept and whatever follows it becomes
    /// the pre-release verbatim, so "2.0.0!" ranks just below "2.0.0". Only
    /// text without such a core, or with a component too large for `u64`,
    /// is rejected.
    pub fn parse_tolerant(s: &str) -> GhrelResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('v').unwrap_or(s);

        let (core, suffix) = match s.find(['-', '+']) {
            Some(pos) => s.split_at(pos),
            None => (s, ""),
        };

        let mut parts: Vec<String> = core.split('.').map(strip_leading_zeros).collect();

        if parts.len() < 3 {
            if !suffix.is_empty() {
                return Err(GhrelError::Version(format!(
                    "Short version cannot carry pre-release or build data: {}",
                    s
                )));
            }
            parts.resize(3, "0".to_string());
        }

        let strict_err = match Self::parse(&format!("{}{}", parts.join("."), suffix)) {
            Ok(version) => return Ok(version),
            Err(e) => e,
        };

        let Some((core, rest)) = split_numeric_core(s) else {
            return Err(strict_err);
        };
        let major = parse_numeric(&strip_leading_zeros(core[0]), "major", s)?;
        let minor = parse_numeric(&strip_leading_zeros(core[1]), "minor", s)?;
        let patch = parse_numeric(&strip_leading_zeros(core[2]), "patch", s)?;

        // "1.2.3-" keeps its dash so it still sorts below "1.2.3"
        let prerelease = rest
            .strip_prefix('-')
            .filter(|pre| !pre.is_empty())
            .unwrap_or(rest);

        Ok(Self::with_prerelease(major, minor, patch, prerelease.to_string()))
    }
}

fn strip_leading_zeros(part: &str) -> String {
    let trimmed = part.trim_start_matches('0');
    if part.is_empty() || !trimmed.is_empty() {
        trimmed.to_string()
    } else {
        "0".to_string()
    }
}

/// Split "1.2.3<rest>" into its three digit runs and the remainder.
fn split_numeric_core(s: &str) -> Option<([&str; 3], &str)> {
    let mut core = [""; 3];
    let mut rest = s;
    for (i, slot) in core.iter_mut().enumerate() {
        if i > 0 {
            rest = rest.strip_prefix('.')?;
        }
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        *slot = &rest[..end];
        rest = &rest[end..];
    }
    Some((core, rest))
}

fn parse_numeric(part: &str, label: &str, original: &str) -> GhrelResult<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GhrelError::Version(format!(
            "Invalid {} version: {}",
            label, original
        )));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(GhrelError::Version(format!(
            "Leading zero in {} version: {}",
            label, original
        )));
    }
    part.parse()
        .map_err(|_| GhrelError::Version(format!("Invalid {} version: {}", label, original)))
}

/// Dot-separated identifiers: non-empty, `[0-9A-Za-z-]` only. Numeric
/// pre-release identifiers may not carry leading zeros.
fn validate_identifiers(ids: &str, original: &str, prerelease: bool) -> GhrelResult<()> {
    for id in ids.split('.') {
        if id.is_empty() {
            return Err(GhrelError::Version(format!(
                "Empty identifier in {}",
                original
            )));
        }
        if !id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(GhrelError::Version(format!(
                "Invalid character in identifier '{}' of {}",
                id, original
            )));
        }
        if prerelease && id.len() > 1 && id.starts_with('0') && id.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(GhrelError::Version(format!(
                "Leading zero in pre-release identifier '{}' of {}",
                id, original
            )));
        }
    }
    Ok(())
}

// Implement PartialEq and Eq manually to ignore build_metadata (per SemVer spec)
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch)) {
            Ordering::Equal => {
                // Build metadata is ignored in version precedence
                match (&self.prerelease, &other.prerelease) {
                    (None, None) => Ordering::Equal,
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (Some(a), Some(b)) => compare_prerelease_identifiers(a, b),
                }
            }
            other => other,
        }
    }
}

/// Compare pre-release identifiers according to SemVer spec
fn compare_prerelease_identifiers(a: &str, b: &str) -> Ordering {
    let a_parts: Vec<&str> = a.split('.').collect();
    let b_parts: Vec<&str> = b.split('.').collect();

    for (a_part, b_part) in a_parts.iter().zip(b_parts.iter()) {
        let ordering = match (is_numeric(a_part), is_numeric(b_part)) {
            (true, true) => compare_numeric(a_part, b_part),
            (true, false) => Ordering::Less, // Numeric < alphanumeric
            (false, true) => Ordering::Greater,
            (false, false) => a_part.cmp(b_part),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    // If all parts are equal, longer pre-release is greater
    a_parts.len().cmp(&b_parts.len())
}

fn is_numeric(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric order for digit strings of any length.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref pre) = self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(ref build) = self.build_metadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
