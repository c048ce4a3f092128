// src/crawl/frontier.rs
// =============================================================================
// Concurrent breadth-first crawl of a single site.
//
// How it works:
// 1. The seed is posted as a batch of depth 0 (no fetch needed for it)
// 2. The coordinator loop receives one DiscoveryBatch per finished task
// 3. Each URL in the batch not seen before is recorded
// 4. Unless the batch is at max depth, a task is spawned for that URL: it
//    waits for a semaphore permit, fetches, extracts links and posts a new
//    batch at depth + 1
// 5. The loop stops when every spawned task has reported back
//
// Only the coordinator touches the visited set. Tasks reach it through the
// channel and nothing else, so the set needs no lock.
// =============================================================================

use std::collections::HashSet;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, error, info, trace, warn};
use url::Url;

use super::normalize::{normalize, parse_seed, same_host};
use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::extract::extract_links;
use crate::fetch::Fetcher;

// The same-host links found on one page, tagged with their depth
#[derive(Debug)]
struct DiscoveryBatch {
    depth: usize,
    links: Vec<Url>,
    // The page could not be fetched (links is empty)
    failed: bool,
}

/// Crawls one site with a bounded number of fetches in flight.
///
/// A `Crawler` holds no per-crawl state: each call to [`Crawler::crawl`]
/// builds its own visited set, channel and semaphore and drops them on
/// return, so one crawler can run several crawls, even concurrently.
#[derive(Clone)]
pub struct Crawler {
    fetcher: Arc<dyn Fetcher>,
    config: CrawlConfig,
}

impl Crawler {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: CrawlConfig) -> Self {
        Self { fetcher, config }
    }

    /// Crawls the site rooted at `seed` down to `config.max_depth`.
    pub async fn crawl(&self, seed: &str) -> Result<HashSet<String>, CrawlError> {
        self.crawl_to_depth(seed, self.config.max_depth).await
    }

    // Crawls the site rooted at `seed`
    //
    // Parameters:
    //   seed: absolute http(s) URL, also fixes the host the crawl stays on
    //   max_depth: pages this many links from the seed are listed but not
    //              fetched; 0 returns just the seed
    //
    // Returns: every URL discovered, seed included, in no particular order.
    //   Only a bad seed or bad config is an error; failed pages are logged
    //   and contribute no links.
    pub async fn crawl_to_depth(
        &self,
        seed: &str,
        max_depth: usize,
    ) -> Result<HashSet<String>, CrawlError> {
        self.config.validate()?;
        let seed = parse_seed(seed)?;

        info!(
            seed = %seed,
            max_depth,
            concurrency = self.config.concurrency,
            "starting crawl"
        );

        let host = Arc::new(seed.clone());
        let permits = Arc::new(Semaphore::new(self.config.concurrency));
        let (tx, mut rx) = mpsc::unbounded_channel::<DiscoveryBatch>();

        // The seed "task": it fetches nothing and only reports the seed.
        // `rx` is alive, so this send cannot fail.
        let _ = tx.send(DiscoveryBatch {
            depth: 0,
            links: vec![seed],
            failed: false,
        });

        let mut seen: HashSet<String> = HashSet::new();
        let mut failed = 0usize;
        let mut pending = 1usize;

        while pending > 0 {
            // The coordinator holds `tx`, so None never happens in practice.
            let Some(batch) = rx.recv().await else {
                break;
            };
            pending -= 1;

            if batch.failed {
                failed += 1;
            }

            for link in batch.links {
                if !seen.insert(link.as_str().to_string()) {
                    continue;
                }
                if batch.depth >= max_depth {
                    // Recorded, but its own links are past the depth limit.
                    continue;
                }

                pending += 1;
                let task = PageTask {
                    url: link,
                    depth: batch.depth,
                    fetcher: self.fetcher.clone(),
                    host: host.clone(),
                    permits: permits.clone(),
                    tx: tx.clone(),
                };
                tokio::spawn(task.run());
            }
        }

        info!(pages = seen.len(), failed, "crawl finished");

        Ok(seen)
    }
}

// One in-flight page: fetch it, report its links one level deeper
struct PageTask {
    url: Url,
    depth: usize,
    fetcher: Arc<dyn Fetcher>,
    host: Arc<Url>,
    permits: Arc<Semaphore>,
    tx: mpsc::UnboundedSender<DiscoveryBatch>,
}

impl PageTask {
    // Always sends exactly one batch, even if the fetch panics, so the
    // coordinator's pending count reaches zero.
    async fn run(self) {
        let work = visit(self.fetcher.as_ref(), &self.url, &self.host, &self.permits);

        let links = match AssertUnwindSafe(work).catch_unwind().await {
            Ok(links) => links,
            Err(_) => {
                error!(url = %self.url, "fetch task panicked");
                None
            }
        };

        let batch = DiscoveryBatch {
            depth: self.depth + 1,
            failed: links.is_none(),
            links: links.unwrap_or_default(),
        };

        // Fails only if the coordinator is gone, and then nobody is listening.
        let _ = self.tx.send(batch);
    }
}

// Fetches `url` under a permit and returns its same-host links.
// None means the page failed; the error has already been logged.
async fn visit(
    fetcher: &dyn Fetcher,
    url: &Url,
    host: &Url,
    permits: &Semaphore,
) -> Option<Vec<Url>> {
    let page = {
        let Ok(_permit) = permits.acquire().await else {
            warn!(url = %url, "concurrency limiter closed, skipping page");
            return None;
        };

        match fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url = %url, error = %e, "failed to fetch page");
                return None;
            }
        }
    };

    // A redirect off the site: the content belongs to another host, so none
    // of its links (relative ones included) are ours to follow.
    if !same_host(&page.url, host) {
        debug!(url = %url, landed = %page.url, "redirected off site, ignoring links");
        return Some(Vec::new());
    }

    let links = page_links(&page.body, &page.url, host);
    debug!(url = %url, landed = %page.url, links = links.len(), "fetched page");
    Some(links)
}

// Extracts, resolves and host-filters the links of one page, in document order
fn page_links(content: &[u8], page: &Url, host: &Url) -> Vec<Url> {
    extract_links(content)
        .into_iter()
        .filter_map(|link| {
            let resolved = normalize(&link.href, page);
            if resolved.is_none() {
                trace!(page = %page, href = %link.href, text = %link.text, "dropping unusable href");
            }
            resolved
        })
        .filter(|url| same_host(url, host))
        .collect()
}
