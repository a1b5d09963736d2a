//! Release selection
//!
//! Everything between the raw GitHub listing and the answer to "which
//! release is the newest stable one":
//! - [`extract`] pulls a semantic version out of a tag label or name
//! - [`stability`] decides whether a release counts as stable
//! - [`rank`] orders releases newest first by version
//! - [`selector`] ties fetching, filtering and ranking together

pub mod extract;
pub mod rank;
pub mod selector;
pub mod stability;

pub use extract::{extract_version, find_version};
pub use rank::{rank, rank_with_policy, UnversionedPolicy};
pub use selector::{ReleaseSelector, VersionCheck};
pub use stability::{filter_stable, is_stable};
