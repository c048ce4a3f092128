// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP with reqwest.
//
// Key functionality:
// - One shared Client (connection pooling) for the whole crawl
// - Per-request timeout and User-Agent from CrawlConfig
// - Non-2xx responses become FetchError::Status
// - Redirects are followed; the Page carries the URL they ended at
// - reqwest errors are sorted by FetchError::from_reqwest
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{Fetcher, Page};
use crate::config::CrawlConfig;
use crate::error::{CrawlError, FetchError};

/// Follow at most this many redirects before giving up on a page.
const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the shared client from the crawl configuration
    //
    // Returns: CrawlError::Client if reqwest cannot set up TLS etc.
    pub fn new(config: &CrawlConfig) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Page, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let final_url = response.url().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        Ok(Page {
            url: final_url,
            body: body.to_vec(),
        })
    }
}
