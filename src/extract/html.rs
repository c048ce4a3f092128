// src/extract/html.rs
// =============================================================================
// This module pulls <a> elements out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (html5ever underneath, never fails)
// - Lets us select elements with CSS selectors, in document order
//
// The result is raw: hrefs are returned exactly as written in the page.
// Resolving and filtering them is the crawler's job (crawl::normalize).
// =============================================================================

use std::sync::LazyLock;

use scraper::{Html, Selector};

// Every anchor, with or without an href
static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("'a' is a valid selector"));

/// An anchor element: its href attribute and its visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Empty when the anchor has no href attribute.
    pub href: String,
    /// Descendant text with runs of whitespace collapsed to one space.
    pub text: String,
}

// Extracts all anchors from raw page content
//
// Parameters:
//   content: the page body as fetched (bytes, invalid UTF-8 is replaced)
//
// Returns: Vec<Link> in document order
//
// Example:
//   content = "<a href='/docs'>Read <b>the</b>\n docs</a>"
//   result  = [Link { href: "/docs", text: "Read the docs" }]
pub fn extract_links(content: &[u8]) -> Vec<Link> {
    let html = String::from_utf8_lossy(content);
    let document = Html::parse_document(&html);

    document
        .select(&ANCHOR)
        .map(|element| Link {
            href: element.value().attr("href").unwrap_or_default().to_string(),
            text: collapse_whitespace(element.text()),
        })
        .collect()
}

// Joins text nodes and squeezes every whitespace run into a single space,
// trimming both ends
fn collapse_whitespace<'a>(pieces: impl Iterator<Item = &'a str>) -> String {
    let joined: String = pieces.collect();
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}
