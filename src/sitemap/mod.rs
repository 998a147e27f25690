//! Sitemap generation
//!
//! Last-modified resolution, XML rendering, and the generator that ties
//! discovery and rendering together.

pub mod generator;
pub mod lastmod;
pub mod render;

// Re-export commonly used items
pub use generator::{RunReport, SitemapGenerator};
pub use lastmod::{FixedLastModified, GitLastModified, LastModified};
pub use render::SitemapRenderer;
