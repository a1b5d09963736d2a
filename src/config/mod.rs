use crate::core::path::config_file;
use crate::core::{GhrelError, GhrelResult};
use crate::di::ConfigProvider;
use crate::release::rank::UnversionedPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides `api_url`.
pub const API_URL_ENV: &str = "GHREL_API_URL";

/// Environment variable that overrides `token`.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the GitHub REST API (no trailing path)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Token sent as a bearer credential. `GITHUB_TOKEN` takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header (GitHub rejects requests without one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// What ranking does with releases that carry no version
    /// - "last": keep them after every versioned release (default)
    /// - "drop": leave them out of ranked output
    #[serde(default)]
    pub unversioned_releases: UnversionedPolicy,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("ghrel/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            unversioned_releases: UnversionedPolicy::default(),
        }
    }
}

impl Config {
    /// Load config from the platform-specific config directory, then apply
    /// environment overrides. A missing file means defaults; nothing is
    /// written to disk.
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\ghrel\config.yaml
    /// - Linux: ~/.config/ghrel/config.yaml
    /// - macOS: ~/Library/Application Support/ghrel/config.yaml
    pub fn load() -> GhrelResult<Self> {
        let config_path = config_file()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load config from an explicit path without consulting the environment.
    pub fn load_from(path: &Path) -> GhrelResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply `GHREL_API_URL` and `GITHUB_TOKEN`. Empty values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(url) = non_empty_env(API_URL_ENV) {
            self.api_url = url;
        }
        if let Some(token) = non_empty_env(TOKEN_ENV) {
            self.token = Some(token);
        }
    }

    fn validate(&self) -> GhrelResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(GhrelError::Config("api_url must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(GhrelError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the effective config as YAML with the token masked.
    pub fn to_display_yaml(&self) -> GhrelResult<String> {
        let mut shown = self.clone();
        if shown.token.is_some() {
            shown.token = Some("***".to_string());
        }
        Ok(serde_yaml::to_string(&shown)?)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl ConfigProvider for Config {
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
