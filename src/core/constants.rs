/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Defaults, file names and XML vocabulary live here so the walker, the
/// renderer and the configuration layer agree on them.
/// Output format constants
pub mod output_formats {
    /// Text output format - one line per written file plus a summary
    pub const TEXT: &str = "text";
    /// JSON output format - structured run report for automation
    pub const JSON: &str = "json";
    /// Minimal output format - summary line only, no emojis
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Default configuration values
pub mod defaults {
    /// Base URL used when `BASE_URL` is unset or empty
    pub const BASE_URL: &str = "https://mjm-travel.github.io/Directory/";
    /// Directory that receives the per-folder sitemap files
    pub const SITEMAP_DIR: &str = "sitemaps";
    /// File extensions (lowercase, without the dot) that count as pages
    pub const INCLUDE_EXTENSIONS: [&str; 1] = ["html"];
    /// Directory names never descended into. The sitemap dir is added at runtime.
    pub const EXCLUDE_DIRS: [&str; 7] = [
        ".git",
        "node_modules",
        ".github",
        ".gitlab",
        "dist",
        "build",
        "assets",
    ];
}

/// Environment variable names
pub mod env_vars {
    pub const BASE_URL: &str = "BASE_URL";
    pub const SITEMAP_DIR: &str = "SITEMAP_DIR";
}

/// File name constants
pub mod files {
    /// Index file, written at the site root rather than inside the sitemap dir
    pub const INDEX_FILENAME: &str = "sitemap_index.xml";
    /// Sitemap for pages that sit directly in the root
    pub const ROOT_SITEMAP_FILENAME: &str = "sitemap-root.xml";
    /// Prefix for per-folder sitemap files
    pub const SITEMAP_PREFIX: &str = "sitemap-";
    /// Extension for all sitemap files
    pub const SITEMAP_EXTENSION: &str = ".xml";
    /// Config file looked up in the root directory
    pub const CONFIG_FILENAME: &str = ".sitemapgen.toml";
}

/// Sitemaps.org XML vocabulary
pub mod xml {
    pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
    pub const NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
}

/// Display constants
pub mod display {
    /// Emoji for a successful run
    pub const SUCCESS_EMOJI: &str = "✅";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(defaults::SITEMAP_DIR, "sitemaps");
        assert!(defaults::BASE_URL.starts_with("https://"));
        assert_eq!(defaults::INCLUDE_EXTENSIONS, ["html"]);
        assert!(defaults::EXCLUDE_DIRS.contains(&"node_modules"));
        assert!(defaults::EXCLUDE_DIRS.contains(&".git"));
    }

    #[test]
    fn test_file_constants() {
        assert_eq!(files::INDEX_FILENAME, "sitemap_index.xml");
        assert_eq!(files::ROOT_SITEMAP_FILENAME, "sitemap-root.xml");
        assert!(files::ROOT_SITEMAP_FILENAME.starts_with(files::SITEMAP_PREFIX));
        assert!(files::ROOT_SITEMAP_FILENAME.ends_with(files::SITEMAP_EXTENSION));
    }
}
