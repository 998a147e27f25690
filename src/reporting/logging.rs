use crate::config::Settings;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the resolved settings for this run
pub fn log_settings(settings: &Settings) {
    info!("Root: {}", settings.root.display());
    info!(
        "Base URL: {}, sitemap dir: {}",
        settings.base_url, settings.sitemap_dir
    );
    debug!(
        "Include extensions: {:?}, excluded directories: {:?}, lastmod: {}",
        settings.include_extensions, settings.exclude_dirs, settings.emit_lastmod
    );
}

/// Log a written sitemap or index file
pub fn log_sitemap_written(path: &Path, url_count: usize) {
    info!("Wrote {} ({url_count} entries)", path.display());
}

/// Log a top-level directory that contained no pages
pub fn log_skipped_directory(path: &Path) {
    debug!("No pages under {}, skipping", path.display());
}

/// Log two folders mapping to the same sitemap file name
pub fn log_name_collision(folder: &str, filename: &str) {
    warn!("Folder '{folder}' maps to {filename}, which was already written; overwriting");
}

/// Log run completion
pub fn log_run_complete(sitemap_count: usize, duration_ms: u128) {
    info!("Generated {sitemap_count} sitemap(s) and the index ({duration_ms}ms)");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
