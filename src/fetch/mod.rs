// src/fetch/mod.rs
// =============================================================================
// This module fetches pages for the crawler.
//
// The crawler only talks to the Fetcher trait, so tests can hand it an
// in-memory site instead of the network.
//
// Submodules:
// - http: the reqwest-backed implementation used by the CLI
// =============================================================================

mod http;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use url::Url;

use crate::error::FetchError;

pub use http::HttpFetcher;

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Where the content actually came from, after any redirects.
    /// Relative links on the page resolve against this, not the requested URL.
    pub url: Url,
    pub body: Vec<u8>,
}

/// A single best-effort GET.
///
/// Any failure (connection, timeout, non-2xx status) comes back as an
/// error; the crawler logs it and moves on. Implementations own their
/// timeouts and must not block forever.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Page, FetchError>;
}
