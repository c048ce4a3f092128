// src/error.rs
// =============================================================================
// Error types for the crawler.
//
// Two families:
// - CrawlError: fatal, returned to the caller before any page is fetched
// - FetchError: per-page, logged by the crawler and treated as "no links"
// =============================================================================

use thiserror::Error;

/// Errors that abort a crawl before it starts.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed is not an absolute URL with a host.
    #[error("invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    /// A configuration value the crawler cannot run with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Why a single page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("{0}")]
    Request(String),
}

impl FetchError {
    /// Sorts a reqwest error into one of our variants.
    ///
    /// Same order of checks as a link checker would use: timeouts first,
    /// then connection problems, everything else kept as its message.
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_connect() {
            FetchError::Connect(error.to_string())
        } else if error.is_body() || error.is_decode() {
            FetchError::Body(error.to_string())
        } else {
            FetchError::Request(error.to_string())
        }
    }
}
