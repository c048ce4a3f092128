// src/main.rs
// =============================================================================
// Entry point of the site-mapper CLI.
//
// What happens here:
// 1. Set up logging (tracing, to stderr so stdout stays a clean sitemap)
// 2. Parse command-line arguments using clap
// 3. Crawl the site with the HTTP fetcher
// 4. Print the sitemap as XML or JSON
// 5. Exit with 0 on success, 2 on a fatal error (bad URL, bad flags)
//
// Pages that fail to load are not fatal: they are logged and the crawl goes on.
// =============================================================================

mod cli;
mod config;
mod crawl;
mod error;
mod extract;
mod fetch;
mod sitemap;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, OutputFormat};
use crawl::Crawler;
use fetch::HttpFetcher;
use sitemap::Sitemap;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.crawl_config();

    let fetcher = HttpFetcher::new(&config)?;
    let crawler = Crawler::new(Arc::new(fetcher), config);

    let pages = crawler
        .crawl(&cli.url)
        .await
        .with_context(|| format!("cannot map {}", cli.url))?;

    let sitemap = Sitemap::from_urls(pages);
    let output = match cli.format {
        OutputFormat::Xml => sitemap.to_xml(),
        OutputFormat::Json => sitemap.to_json().context("encoding sitemap as JSON")?,
    };

    print!("{}", output);
    if cli.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
