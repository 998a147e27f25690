// Command-line interface definitions and parsing for sitemapgen

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Core Options
    /// Site root to scan (default: current directory)
    #[arg(long, value_name = "DIR", help_heading = "Core Options")]
    pub root: Option<String>,

    /// Public base URL of the site [env: BASE_URL]
    #[arg(long, value_name = "URL", help_heading = "Core Options")]
    pub base_url: Option<String>,

    /// Directory for sitemap files, relative to the root [env: SITEMAP_DIR]
    #[arg(long, value_name = "DIR", help_heading = "Core Options")]
    pub sitemap_dir: Option<String>,

    // Filtering & Content
    /// Page file extensions (e.g., html,htm)
    #[arg(long, value_name = "EXTENSIONS", help_heading = "Filtering & Content")]
    pub include: Option<String>,

    /// Additional directory name to skip (repeatable)
    #[arg(long, value_name = "NAME", help_heading = "Filtering & Content")]
    pub exclude_dir: Vec<String>,

    /// Emit <lastmod> elements
    #[arg(long, help_heading = "Filtering & Content")]
    pub lastmod: bool,

    // Output & Verbosity
    /// Suppress all output except errors
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert the parsed CLI into CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        root: cli.root.clone(),
        base_url: cli.base_url.clone(),
        sitemap_dir: cli.sitemap_dir.clone(),
        include_extensions: cli.include.as_ref().map(|include_str| {
            include_str
                .split(',')
                .filter_map(|s| {
                    if s.trim().is_empty() {
                        None
                    } else {
                        Some(s.trim().to_string())
                    }
                })
                .collect()
        }),
        exclude_dirs: cli
            .exclude_dir
            .iter()
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .collect(),
        emit_lastmod: cli.lastmod,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
