// src/config.rs
// =============================================================================
// Crawl configuration.
//
// Built from CLI flags in main.rs; tests construct it directly.
// =============================================================================

use std::time::Duration;

use crate::error::CrawlError;

/// Default cap on fetches physically in flight.
pub const DEFAULT_CONCURRENCY: usize = 20;

/// Default number of link hops to follow from the seed.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Pages discovered at this depth are recorded but not fetched.
    /// 0 means "just the seed".
    pub max_depth: usize,
    /// Maximum number of fetches in flight at once.
    pub concurrency: usize,
    /// Timeout applied to every HTTP request.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("site-mapper/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CrawlConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Rejects values the crawler cannot run with.
    pub fn validate(&self) -> Result<(), CrawlError> {
        if self.concurrency == 0 {
            return Err(CrawlError::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(CrawlError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
