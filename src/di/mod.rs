//! Dependency injection infrastructure for ghrel
//!
//! Trait-based seams between the release selection logic, the
//! configuration, and the GitHub transport.
//!
//! # Example (Production)
//! ```no_run
//! use ghrel::di::ServiceContainer;
//!
//! # fn example() -> ghrel::core::GhrelResult<()> {
//! let container = ServiceContainer::new()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use ghrel::di::{ServiceContainer, mocks::*};
//! use std::sync::Arc;
//!
//! let config = Arc::new(MockConfigProvider::default());
//! let source = Arc::new(MockReleaseSource::new());
//!
//! let container = ServiceContainer::with_providers(config, source);
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{ConfigProvider, ReleaseSource};
