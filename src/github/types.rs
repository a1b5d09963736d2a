//! GitHub API type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// GitHub release information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub id: u64,
    /// Display name; GitHub sends `null` for releases created from a bare tag
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    /// Drafts are unpublished and carry `null`
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// GitHub release asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: u64,
    pub name: String,
    pub browser_download_url: String,
}

impl Release {
    /// Download URL of the first asset, if the release has any.
    pub fn first_asset_url(&self) -> Option<&str> {
        self.assets.first().map(|a| a.browser_download_url.as_str())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
