// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Every flag can also come from a SITE_MAPPER_* environment variable;
// an explicit flag wins.
// =============================================================================

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::{CrawlConfig, DEFAULT_CONCURRENCY, DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(
    name = "site-mapper",
    version,
    about = "Crawl a website and print its sitemap",
    long_about = "site-mapper follows links from a starting page, staying on the same host, \
                  and prints every page it finds as a sitemap. Pages that fail to load are \
                  still listed but not followed."
)]
pub struct Cli {
    /// URL of the site to map; also fixes the host the crawl stays on
    #[arg(long, env = "SITE_MAPPER_URL", default_value = "https://gophercises.com")]
    pub url: String,

    /// Maximum number of links deep to traverse
    ///
    /// 0 = just the starting page, 1 = starting page + the pages it links to, etc.
    /// Pages at the maximum depth are listed but their links are not followed.
    #[arg(long, env = "SITE_MAPPER_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub depth: usize,

    /// Maximum number of pages fetched at the same time
    #[arg(long, env = "SITE_MAPPER_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-request timeout, in seconds
    #[arg(long, env = "SITE_MAPPER_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Output format
    #[arg(long, env = "SITE_MAPPER_FORMAT", value_enum, default_value_t = OutputFormat::Xml)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// sitemaps.org XML
    Xml,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig::default()
            .with_max_depth(self.depth)
            .with_concurrency(self.concurrency)
            .with_timeout(Duration::from_secs(self.timeout))
    }
}
