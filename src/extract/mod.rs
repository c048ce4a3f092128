// src/extract/mod.rs
// =============================================================================
// Link extraction from fetched pages.
//
// Pure functions only: no network, no state.
// =============================================================================

mod html;

pub use html::extract_links;
