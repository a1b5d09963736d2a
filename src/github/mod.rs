//! GitHub integration
//!
//! This module fetches the release listing of a repository from the GitHub
//! REST API and decodes it into [`Release`] records.

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{Asset, Release};
