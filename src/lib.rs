//! ghrel: is this the latest stable GitHub release?
//!
//! This crate fetches the release listing of a GitHub repository, ranks the
//! releases by the semantic version found in their tag or name, filters out
//! drafts and pre-releases, and compares a caller's version against the
//! newest stable one.
//!
//! # Example
//!
//! ```no_run
//! use ghrel::di::ServiceContainer;
//!
//! # async fn example() -> ghrel::core::GhrelResult<()> {
//! let selector = ServiceContainer::new()?.selector();
//! let latest = selector.fetch_latest_stable_release("owner", "repo").await?;
//! println!("{} ({})", latest.name, latest.version());
//! # Ok(())
//! # }
//! ```

pub use ghrel_core::{format_error_with_help, ErrorHelp, GhrelError, GhrelResult, Version};

/// Core module re-exported from `ghrel-core`.
pub mod core {
    pub use ghrel_core::core::*;
    pub use ghrel_core::{format_error_with_help, ErrorHelp, Version};
}

/// Configuration management.
pub mod config;

/// Dependency injection infrastructure.
pub mod di;

/// GitHub release listing client.
pub mod github;

/// Version extraction, stability, ranking and selection.
pub mod release;
