//! Human-facing hints for errors printed by the CLI.

use crate::core::error::GhrelError;

/// Suggests a next step for an error, if there is an obvious one.
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for GhrelError {
    fn help(&self) -> Option<String> {
        match self {
            GhrelError::Status { status: 404, .. } => Some(
                "Check the owner and repository names; private repositories need a token (GITHUB_TOKEN)."
                    .to_string(),
            ),
            GhrelError::Status {
                status: 401 | 403, ..
            } => Some(
                "The API refused the request. Set GITHUB_TOKEN to authenticate and raise the rate limit."
                    .to_string(),
            ),
            GhrelError::Status { status, .. } if *status >= 500 => {
                Some("The API is having trouble. Try again later.".to_string())
            }
            GhrelError::Fetch { source, .. } if source.is_timeout() => Some(
                "The request timed out. Increase `timeout_secs` in the config file.".to_string(),
            ),
            GhrelError::Fetch { .. } => {
                Some("Check your network connection and the configured `api_url`.".to_string())
            }
            GhrelError::Decode { .. } => Some(
                "The response was not a release listing. Is `api_url` pointing at a GitHub API?"
                    .to_string(),
            ),
            GhrelError::NoStableReleases { .. } => Some(
                "All releases are drafts or pre-releases. Use --include-prereleases to see them."
                    .to_string(),
            ),
            GhrelError::Yaml(_) | GhrelError::Config(_) => {
                Some("Run `ghrel config path` to locate the config file.".to_string())
            }
            _ => None,
        }
    }
}

/// Format an error followed by its hint, if any.
pub fn format_error_with_help(error: &GhrelError) -> String {
    match error.help() {
        Some(help) => format!("Error: {}\n\nHelp: {}", error, help),
        None => format!("Error: {}", error),
    }
}
