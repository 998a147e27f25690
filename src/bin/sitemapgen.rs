use clap::Parser;
use sitemapgen::config::{CliConfig, Config};
use sitemapgen::reporting::logging;
use sitemapgen::sitemap::{GitLastModified, SitemapGenerator};
use sitemapgen::ui::{Cli, cli_to_config, display_report};

use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_sitemapgen_logic(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Main generation logic extracted from main() for testing
pub fn run_sitemapgen_logic(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    let root = match cli_config.root {
        Some(ref root) => PathBuf::from(root),
        None => std::env::current_dir()?,
    };

    let config = load_and_merge_config(&cli_config, &root)?;
    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    let settings = config.into_settings(&root)?;
    logging::log_settings(&settings);

    let resolver = GitLastModified::new(settings.root.clone());
    let generator = SitemapGenerator::new(settings, resolver);
    let report = generator.run().inspect_err(|e| {
        logging::log_error("Sitemap generation failed", Some(e));
    })?;

    if !cli_config.quiet {
        display_report(&report, config.output_format(), &generator.settings().root)?;
    }
    Ok(())
}

/// Load configuration (file, then environment) and merge with CLI config
pub fn load_and_merge_config(
    cli_config: &CliConfig,
    root: &std::path::Path,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations(root)?
    };

    config.apply_env(|key| std::env::var(key).ok());
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
