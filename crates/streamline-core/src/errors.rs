//! Error taxonomy for every failure the icon client can report
//!
//! Errors are grouped by where they originate: credential lookup, the network,
//! the remote service, local decoding, and name resolution. Callers match on
//! the variant to decide whether a failure is terminal for the command
//! (`MissingCredential`), recoverable per family (`PerSlugFailure`), or simply
//! rendered and propagated.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StreamlineError {
    #[error("API key not found")]
    MissingCredential,
    #[error("Network error: {0}")]
    TransportFailure(String),
    #[error("{message}")]
    RemoteRequestFailed {
        status: u16,
        message: String,
        /// Error code from a structured error body, when the body parsed.
        error_code: Option<String>,
        /// Raw body text, kept only when the body did not parse.
        body: Option<String>,
    },
    #[error("Failed to parse response: {0}")]
    DecodeFailure(String),
    #[error("No family or set matches '{input}'")]
    NoMatch {
        input: String,
        suggestions: Vec<String>,
    },
    #[error("Search failed for family '{slug}': {message}")]
    PerSlugFailure { slug: String, message: String },
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    IoError(String),
}

impl StreamlineError {
    /// HTTP status carried by a remote failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            StreamlineError::RemoteRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Wrap an error raised while querying one slug of a multi-family search.
    pub fn for_slug(slug: &str, err: &StreamlineError) -> Self {
        StreamlineError::PerSlugFailure {
            slug: slug.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for StreamlineError {
    fn from(err: std::io::Error) -> Self {
        StreamlineError::IoError(err.to_string())
    }
}

impl From<reqwest::Error> for StreamlineError {
    fn from(err: reqwest::Error) -> Self {
        StreamlineError::TransportFailure(err.to_string())
    }
}

impl From<serde_json::Error> for StreamlineError {
    fn from(err: serde_json::Error) -> Self {
        StreamlineError::DecodeFailure(err.to_string())
    }
}

impl From<toml::de::Error> for StreamlineError {
    fn from(err: toml::de::Error) -> Self {
        StreamlineError::ConfigError(err.to_string())
    }
}
