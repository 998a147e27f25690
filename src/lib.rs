//! Generate XML sitemaps and a sitemap index for a static site.
//!
//! Every non-excluded top-level directory of the site root that contains
//! pages gets its own `sitemap-<name>.xml`, pages directly in the root go to
//! `sitemap-root.xml`, and `sitemap_index.xml` at the root lists them all.

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod sitemap;
pub mod ui;

pub use crate::config::{Config, Settings};
pub use crate::core::{Result, SitemapEntry, SitemapError, SitemapMeta};
pub use crate::discovery::PathFilter;
pub use crate::sitemap::{
    FixedLastModified, GitLastModified, LastModified, RunReport, SitemapGenerator,
    SitemapRenderer,
};
