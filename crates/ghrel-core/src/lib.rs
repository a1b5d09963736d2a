//! Core utilities shared by the ghrel binary and library.
//!
//! Holds the error type, the semantic version model and the
//! platform-specific path helpers.

pub mod core;

pub use crate::core::error::{GhrelError, GhrelResult};
pub use crate::core::error_help::{format_error_with_help, ErrorHelp};
pub use crate::core::version::Version;
