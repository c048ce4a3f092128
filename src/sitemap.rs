// src/sitemap.rs
// =============================================================================
// Renders the crawl result as a sitemap.
//
// Two formats:
// - XML following the sitemaps.org 0.9 protocol (<urlset><url><loc>)
// - JSON, for piping into other tools
//
// URLs are sorted first. The crawler returns a set, and a stable listing is
// much nicer to diff between runs.
// =============================================================================

use std::collections::HashSet;
use std::fmt::Write;

use serde::Serialize;

/// Namespace of the sitemaps.org protocol.
pub const XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sitemap {
    pub xmlns: &'static str,
    pub urls: Vec<String>,
}

impl Sitemap {
    pub fn from_urls(urls: HashSet<String>) -> Self {
        let mut urls: Vec<String> = urls.into_iter().collect();
        urls.sort();
        Self { xmlns: XMLNS, urls }
    }

    // Produces:
    //   <?xml version="1.0" encoding="UTF-8"?>
    //   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
    //     <url>
    //       <loc>https://example.com/</loc>
    //     </url>
    //   </urlset>
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        // Writing to a String cannot fail.
        let _ = writeln!(xml, "<urlset xmlns=\"{}\">", self.xmlns);
        for url in &self.urls {
            let _ = writeln!(
                xml,
                "  <url>\n    <loc>{}</loc>\n  </url>",
                html_escape::encode_text(url)
            );
        }
        xml.push_str("</urlset>\n");
        xml
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sitemap(urls: &[&str]) -> Sitemap {
        Sitemap::from_urls(urls.iter().map(|u| u.to_string()).collect())
    }

    #[test]
    fn test_urls_are_sorted() {
        let map = sitemap(&["https://a.test/z", "https://a.test/", "https://a.test/m"]);
        assert_eq!(
            map.urls,
            vec!["https://a.test/", "https://a.test/m", "https://a.test/z"]
        );
    }

    #[test]
    fn test_xml_layout() {
        let xml = sitemap(&["https://a.test/", "https://a.test/about"]).to_xml();
        let want = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">
  <url>
    <loc>https://a.test/</loc>
  </url>
  <url>
    <loc>https://a.test/about</loc>
  </url>
</urlset>
";
        assert_eq!(xml, want);
    }

    #[test]
    fn test_xml_escapes_loc() {
        let xml = sitemap(&["https://a.test/a&b<c>"]).to_xml();
        assert!(xml.contains("<loc>https://a.test/a&amp;b&lt;c&gt;</loc>"));
    }

    #[test]
    fn test_empty_sitemap() {
        let xml = sitemap(&[]).to_xml();
        assert!(xml.ends_with("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n</urlset>\n"));
    }

    #[test]
    fn test_json() {
        let json = sitemap(&["https://a.test/"]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["xmlns"], XMLNS);
        assert_eq!(value["urls"][0], "https://a.test/");
    }
}
