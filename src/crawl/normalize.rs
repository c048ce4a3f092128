// src/crawl/normalize.rs
// =============================================================================
// URL handling for the crawler.
//
// - parse_seed: validates the starting URL (the only fatal input error)
// - normalize: resolves an href against the page it was found on and strips
//   the query string and fragment, so "/a?x=1" and "/a#top" are both "/a"
// - same_host: keeps the crawl on the seed's scheme + host + port
// =============================================================================

use url::Url;

use crate::error::CrawlError;

// Parses and normalizes the seed URL
//
// The seed goes through the same stripping as discovered links, so it
// dedupes against them (e.g. "http://site" and a link to "/" are one page).
//
// Returns: CrawlError::InvalidSeed unless the URL is absolute http(s) with a host
pub fn parse_seed(seed: &str) -> Result<Url, CrawlError> {
    let invalid = |reason: &str| CrawlError::InvalidSeed {
        url: seed.to_string(),
        reason: reason.to_string(),
    };

    let mut url = Url::parse(seed.trim()).map_err(|e| invalid(&e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(invalid("URL has no host"));
    }

    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

// Resolves a (possibly relative) href to an absolute URL without query or fragment
//
// Parameters:
//   href: the raw href attribute value
//   base: the URL of the page the href was found on
//
// Returns: None for empty hrefs and hrefs the url crate refuses
//
// Examples (base = "https://example.com/docs/intro"):
//   "/about"          -> "https://example.com/about"
//   "guide?page=2"    -> "https://example.com/docs/guide"
//   "#install"        -> "https://example.com/docs/intro"
//   "http://[::1"     -> None
pub fn normalize(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let mut url = base.join(href).ok()?;
    url.set_query(None);
    url.set_fragment(None);
    Some(url)
}

/// True when `url` has the same scheme, host and effective port as `host_url`.
///
/// Ports are compared after applying scheme defaults, so
/// `https://example.com:443/x` is on the same site as `https://example.com`.
/// Non-http schemes like `mailto:` never match an http(s) seed.
pub fn same_host(url: &Url, host_url: &Url) -> bool {
    url.scheme() == host_url.scheme()
        && url.host_str() == host_url.host_str()
        && url.port_or_known_default() == host_url.port_or_known_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_seed_strips_query_and_fragment() {
        for seed in [
            "https://www.test.com/path",
            "https://www.test.com/path#fragment",
            "https://www.test.com/path?query=test",
            "  https://www.test.com/path  ",
        ] {
            assert_eq!(
                parse_seed(seed).unwrap().as_str(),
                "https://www.test.com/path",
                "seed {seed:?}"
            );
        }
    }

    #[test]
    fn test_seed_gets_root_path() {
        assert_eq!(
            parse_seed("https://www.test.com").unwrap().as_str(),
            "https://www.test.com/"
        );
    }

    #[test]
    fn test_seed_rejects_relative_url() {
        assert!(matches!(
            parse_seed("/about"),
            Err(CrawlError::InvalidSeed { .. })
        ));
    }

    #[test]
    fn test_seed_rejects_non_http_schemes() {
        assert!(parse_seed("mailto:someone@test.com").is_err());
        assert!(parse_seed("ftp://test.com/").is_err());
        assert!(parse_seed("file:///etc/hosts").is_err());
    }

    #[test]
    fn test_normalize_relative_link() {
        let base = url("https://example.com/page");
        assert_eq!(
            normalize("/docs", &base).unwrap().as_str(),
            "https://example.com/docs"
        );
    }

    #[test]
    fn test_normalize_resolves_against_page() {
        let base = url("https://example.com/docs/intro");
        assert_eq!(
            normalize("guide", &base).unwrap().as_str(),
            "https://example.com/docs/guide"
        );
        assert_eq!(
            normalize("../blog", &base).unwrap().as_str(),
            "https://example.com/blog"
        );
    }

    #[test]
    fn test_normalize_strips_query_and_fragment() {
        let base = url("https://example.com/");
        assert_eq!(
            normalize("/test.com/page3?query=hasone", &base).unwrap().as_str(),
            "https://example.com/test.com/page3"
        );
        assert_eq!(
            normalize("/about#team", &base).unwrap().as_str(),
            "https://example.com/about"
        );
    }

    #[test]
    fn test_normalize_fragment_only_is_the_page_itself() {
        let base = url("https://example.com/page");
        assert_eq!(normalize("#section", &base), Some(base.clone()));
    }

    #[test]
    fn test_normalize_absolute_link() {
        let base = url("https://example.com/page");
        assert_eq!(
            normalize("https://other.com", &base).unwrap().as_str(),
            "https://other.com/"
        );
    }

    #[test]
    fn test_normalize_rejects_empty_and_malformed() {
        let base = url("https://example.com/page");
        assert_eq!(normalize("", &base), None);
        assert_eq!(normalize("   ", &base), None);
        assert_eq!(normalize("http://[::1", &base), None);
    }

    #[test]
    fn test_same_host() {
        let host = url("https://test.com/");
        assert!(same_host(&url("https://test.com/page1"), &host));
        assert!(same_host(&url("https://TEST.com:443/x"), &host));
        assert!(!same_host(&url("http://test.com/page1"), &host));
        assert!(!same_host(&url("https://test.com.evil.org/"), &host));
        assert!(!same_host(&url("https://www.test.com/"), &host));
        assert!(!same_host(&url("https://test.com:8443/"), &host));
        assert!(!same_host(&url("mailto:test@test.com"), &host));
    }
}
