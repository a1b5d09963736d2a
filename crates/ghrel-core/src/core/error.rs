use thiserror::Error;

pub type GhrelResult<T> = Result<T, GhrelError>;

#[derive(Error, Debug)]
pub enum GhrelError {
    /// The request never produced a response (DNS, TLS, timeout, body read).
    #[error("Failed to fetch from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The release listing answered with anything other than 200 OK.
    #[error("Failed to fetch from {url}: {status} - {status_text}")]
    Status {
        url: String,
        status: u16,
        status_text: String,
    },

    /// The response body was not a JSON array of releases.
    #[error("Failed to decode releases from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No releases found for {owner}/{repo}")]
    NoReleases { owner: String, repo: String },

    #[error("No stable release found for {owner}/{repo}")]
    NoStableReleases { owner: String, repo: String },

    #[error("Version error: {0}")]
    Version(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GhrelError {
    /// HTTP status code carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            GhrelError::Status { status, .. } => Some(*status),
            GhrelError::Fetch { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Request URL for fetch, status and decode failures.
    pub fn url(&self) -> Option<&str> {
        match self {
            GhrelError::Fetch { url, .. }
            | GhrelError::Status { url, .. }
            | GhrelError::Decode { url, .. } => Some(url),
            _ => None,
        }
    }

    /// True for the two "nothing to select" outcomes.
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            GhrelError::NoReleases { .. } | GhrelError::NoStableReleases { .. }
        )
    }
}
