//! Service container for dependency injection

use super::traits::{ConfigProvider, ReleaseSource};
use crate::config::Config;
use crate::core::GhrelResult;
use crate::github::GitHubClient;
use crate::release::ReleaseSelector;
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds the configuration and the release source behind trait objects so
/// tests can swap in mocks.
///
/// # Example (Testing)
///
/// ```
/// use ghrel::di::{ServiceContainer, mocks::*};
/// use std::sync::Arc;
///
/// let config = Arc::new(MockConfigProvider::default());
/// let source = Arc::new(MockReleaseSource::new());
///
/// let container = ServiceContainer::with_providers(config, source);
/// let _selector = container.selector();
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub release_source: Arc<dyn ReleaseSource>,
}

impl ServiceContainer {
    /// Create a new service container with production implementations
    ///
    /// Loads config from disk (plus environment overrides) and builds the
    /// GitHub HTTP client from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be parsed or the HTTP
    /// client cannot be built from it.
    pub fn new() -> GhrelResult<Self> {
        Self::with_config(Config::load()?)
    }

    /// Create a container for an already-resolved config
    pub fn with_config(config: Config) -> GhrelResult<Self> {
        let client = GitHubClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            release_source: Arc::new(client),
        })
    }

    /// Create a service container with custom provider implementations
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        release_source: Arc<dyn ReleaseSource>,
    ) -> Self {
        Self {
            config,
            release_source,
        }
    }

    /// Release selection over the configured source
    pub fn selector(&self) -> ReleaseSelector {
        ReleaseSelector::new(self.release_source.clone())
            .with_unversioned(self.config.unversioned_releases())
    }
}
