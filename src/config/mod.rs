//! Configuration management
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then the `BASE_URL` / `SITEMAP_DIR` environment variables, then CLI
//! flags. The merged [`Config`] is resolved once into an immutable
//! [`Settings`] value that every component receives explicitly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{defaults, env_vars, files, output_formats};
use crate::core::error::{Result, SitemapError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Public URL the site is served from
    pub base_url: Option<String>,

    /// Directory (relative to the root) that receives the sitemap files
    pub sitemap_dir: Option<String>,

    /// File extensions treated as pages
    pub include_extensions: Option<Vec<String>>,

    /// Directory names that are never descended into
    pub exclude_dirs: Option<Vec<String>>,

    /// Emit `<lastmod>` elements in sitemaps and the index
    pub emit_lastmod: Option<bool>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Some(defaults::BASE_URL.to_string()),
            sitemap_dir: Some(defaults::SITEMAP_DIR.to_string()),
            include_extensions: Some(
                defaults::INCLUDE_EXTENSIONS
                    .iter()
                    .map(|ext| ext.to_string())
                    .collect(),
            ),
            exclude_dirs: Some(
                defaults::EXCLUDE_DIRS
                    .iter()
                    .map(|dir| dir.to_string())
                    .collect(),
            ),
            emit_lastmod: Some(false),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SitemapError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            SitemapError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load `.sitemapgen.toml` from the root directory if present, else defaults
    pub fn load_from_standard_locations(root: &Path) -> Result<Self> {
        let path = root.join(files::CONFIG_FILENAME);
        if path.is_file() {
            return Self::load_from_file(path);
        }
        Ok(Self::default())
    }

    /// Overlay `BASE_URL` and `SITEMAP_DIR` from an environment lookup.
    ///
    /// Empty values count as unset, so a blank `BASE_URL` falls back to
    /// whatever the lower layers provided.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(env_vars::BASE_URL)
            && !base_url.trim().is_empty()
        {
            self.base_url = Some(base_url);
        }
        if let Some(sitemap_dir) = lookup(env_vars::SITEMAP_DIR)
            && !sitemap_dir.trim().is_empty()
        {
            self.sitemap_dir = Some(sitemap_dir);
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref base_url) = cli_config.base_url {
            self.base_url = Some(base_url.clone());
        }
        if let Some(ref sitemap_dir) = cli_config.sitemap_dir {
            self.sitemap_dir = Some(sitemap_dir.clone());
        }
        if let Some(ref include) = cli_config.include_extensions {
            self.include_extensions = Some(include.clone());
        }
        if !cli_config.exclude_dirs.is_empty() {
            let dirs = self.exclude_dirs.get_or_insert_with(Vec::new);
            dirs.extend(cli_config.exclude_dirs.iter().cloned());
        }
        if cli_config.emit_lastmod {
            self.emit_lastmod = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref dir) = self.sitemap_dir
            && dir.trim().is_empty()
        {
            return Err(SitemapError::Config(
                "Sitemap directory cannot be empty.".to_string(),
            ));
        }

        if let Some(ref extensions) = self.include_extensions
            && extensions.iter().all(|ext| normalize_extension(ext).is_none())
        {
            return Err(SitemapError::Config(
                "At least one file extension must be included (e.g. html).".to_string(),
            ));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(SitemapError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }

    /// Output format, falling back to the default
    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Resolve the immutable settings used by the generator
    pub fn into_settings(&self, root: &Path) -> Result<Settings> {
        self.validate()?;

        let root = std::path::absolute(root)?;
        let base_url = normalize_base_url(self.base_url.as_deref());
        let sitemap_dir = self
            .sitemap_dir
            .clone()
            .unwrap_or_else(|| defaults::SITEMAP_DIR.to_string());

        let include_extensions: BTreeSet<String> = match self.include_extensions {
            Some(ref extensions) => extensions
                .iter()
                .filter_map(|ext| normalize_extension(ext))
                .collect(),
            None => defaults::INCLUDE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        };

        // Configured names extend the built-in deny-set, never replace it
        let mut exclude_dirs: BTreeSet<String> = defaults::EXCLUDE_DIRS
            .iter()
            .map(|dir| dir.to_string())
            .collect();
        exclude_dirs.extend(
            self.exclude_dirs
                .iter()
                .flatten()
                .map(|dir| dir.trim().to_string()),
        );
        exclude_dirs.insert(sitemap_dir.trim().to_string());
        exclude_dirs.remove("");

        Ok(Settings {
            root,
            base_url,
            sitemap_dir,
            include_extensions,
            exclude_dirs,
            emit_lastmod: self.emit_lastmod.unwrap_or(false),
        })
    }
}

/// Immutable, fully-resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Absolute site root; URLs are computed relative to it
    pub root: PathBuf,
    /// Base URL without trailing slash
    pub base_url: String,
    /// Sitemap directory, relative to the root unless absolute
    pub sitemap_dir: String,
    /// Lowercase extensions without the leading dot
    pub include_extensions: BTreeSet<String>,
    /// Exact, case-sensitive directory names to skip. The sitemap
    /// directory is also skipped by path, see [`Settings::output_dir`].
    pub exclude_dirs: BTreeSet<String>,
    /// Whether rendered XML carries `<lastmod>` elements
    pub emit_lastmod: bool,
}

impl Settings {
    /// Directory on disk that receives the per-folder sitemaps
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.sitemap_dir)
    }

    /// Location of the sitemap index, at the root of the site
    pub fn index_path(&self) -> PathBuf {
        self.root.join(files::INDEX_FILENAME)
    }
}

/// Strip trailing slashes, substituting the default for a blank value
pub fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    let base = if trimmed.trim_end_matches('/').is_empty() {
        defaults::BASE_URL
    } else {
        trimmed
    };
    base.trim_end_matches('/').to_string()
}

/// `".HTML"` and `"html"` both become `"html"`; blank input yields `None`
pub fn normalize_extension(raw: &str) -> Option<String> {
    let ext = raw.trim().trim_start_matches('.').to_lowercase();
    if ext.is_empty() { None } else { Some(ext) }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub root: Option<String>,                    // --root
    pub base_url: Option<String>,                // --base-url
    pub sitemap_dir: Option<String>,             // --sitemap-dir
    pub include_extensions: Option<Vec<String>>, // --include
    pub exclude_dirs: Vec<String>,               // --exclude-dir
    pub emit_lastmod: bool,                      // --lastmod

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
