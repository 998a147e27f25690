use quick_xml::escape::escape;

use crate::core::constants::xml;
use crate::core::types::SitemapEntry;

/// Serializes entries into Sitemaps.org 0.9 documents.
///
/// `<lastmod>` is only written when `emit_lastmod` is set; by default each
/// element carries just its `<loc>`. Values are XML-escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SitemapRenderer {
    pub emit_lastmod: bool,
}

impl SitemapRenderer {
    pub fn new(emit_lastmod: bool) -> Self {
        Self { emit_lastmod }
    }

    /// A `<urlset>` with one `<url>` per entry, in the given order
    pub fn render_sitemap(&self, entries: &[SitemapEntry]) -> String {
        self.render_document("urlset", "url", entries)
    }

    /// A `<sitemapindex>` with one `<sitemap>` per entry, in the given order
    pub fn render_sitemap_index(&self, sitemaps: &[SitemapEntry]) -> String {
        self.render_document("sitemapindex", "sitemap", sitemaps)
    }

    fn render_document(&self, root: &str, element: &str, entries: &[SitemapEntry]) -> String {
        let items = entries
            .iter()
            .map(|entry| self.render_element(element, entry))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n<{root} xmlns=\"{}\">\n{items}\n</{root}>",
            xml::DECLARATION,
            xml::NAMESPACE
        )
    }

    fn render_element(&self, element: &str, entry: &SitemapEntry) -> String {
        let mut out = format!(
            "  <{element}>\n    <loc>{}</loc>\n",
            escape(entry.location.as_str())
        );
        if self.emit_lastmod {
            out.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                escape(entry.last_modified.as_str())
            ));
        }
        out.push_str(&format!("  </{element}>"));
        out
    }
}
