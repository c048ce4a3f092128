// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Concurrent breadth-first crawling from a seed URL
// - A fixed cap on fetches in flight (tokio Semaphore)
// - Same-site restriction (scheme + host + port of the seed)
// - Depth limit: pages at max depth are listed but not fetched
// - Query strings and fragments are ignored when comparing URLs
// =============================================================================

mod frontier;
mod normalize;

pub use frontier::Crawler;
