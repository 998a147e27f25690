use serde::Serialize;

/// A single page listed in a sitemap.
///
/// `location` is an absolute, percent-encoded URL rooted at the configured
/// base URL. `last_modified` is an RFC 3339 timestamp in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// Fully-qualified page URL
    pub location: String,
    /// When the page content last changed
    pub last_modified: String,
}

impl SitemapEntry {
    pub fn new(location: impl Into<String>, last_modified: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            last_modified: last_modified.into(),
        }
    }
}

/// Metadata for one generated sitemap file, consumed when building the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapMeta {
    /// File name inside the sitemap directory, e.g. `sitemap-docs.xml`
    pub filename: String,
    /// Public URL of the sitemap file
    pub location: String,
    /// Newest `last_modified` among the sitemap's entries
    pub last_modified: String,
    /// Number of `<url>` elements in the sitemap
    pub url_count: usize,
}

/// Latest timestamp among `entries`.
///
/// RFC 3339 strings in a single timezone sort chronologically, so the
/// lexicographic maximum is the most recent one. Returns `None` for an
/// empty slice.
pub fn newest_last_modified(entries: &[SitemapEntry]) -> Option<&str> {
    entries
        .iter()
        .map(|entry| entry.last_modified.as_str())
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_last_modified() {
        let entries = vec![
            SitemapEntry::new("https://a.test/1.html", "2024-01-02T00:00:00Z"),
            SitemapEntry::new("https://a.test/2.html", "2024-03-01T12:00:00Z"),
            SitemapEntry::new("https://a.test/3.html", "2023-12-31T23:59:59Z"),
        ];

        assert_eq!(
            newest_last_modified(&entries),
            Some("2024-03-01T12:00:00Z")
        );
    }

    #[test]
    fn test_newest_last_modified_empty() {
        assert_eq!(newest_last_modified(&[]), None);
    }

    #[test]
    fn test_sitemap_meta_serializes() {
        let meta = SitemapMeta {
            filename: "sitemap-a.xml".to_string(),
            location: "https://a.test/sitemaps/sitemap-a.xml".to_string(),
            last_modified: "2024-01-01T00:00:00Z".to_string(),
            url_count: 2,
        };

        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains(r#""filename":"sitemap-a.xml""#));
        assert!(json.contains(r#""url_count":2"#));
    }
}
