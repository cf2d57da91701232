//! Error types for stacks-client

use thiserror::Error;

/// Errors produced by the stacks client
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level HTTP failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("stacks API returned {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Request URL
        url: String,
    },

    /// Response body did not match the stack list shape
    #[error("failed to parse stacks response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request URL could not be built
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Stack id not present in the fetched list
    #[error("stack '{0}' not found")]
    StackNotFound(String),

    /// Operation is declared but has no implementation yet
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Result alias for stacks-client operations
pub type Result<T> = std::result::Result<T, Error>;
