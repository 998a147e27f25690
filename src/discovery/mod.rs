//! Page discovery and URL building
//!
//! This module decides which files are pages, walks the site tree,
//! and turns file paths into public URLs.

pub mod filter;
pub mod urls;
pub mod walker;

// Re-export commonly used items
pub use filter::PathFilter;
pub use urls::{build_url, safe_name, sitemap_filename, sitemap_location};
pub use walker::{collect_files, list_root_files, list_top_level_dirs};
