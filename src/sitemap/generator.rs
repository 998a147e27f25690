use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::Settings;
use crate::core::constants::files;
use crate::core::error::{Result, SitemapError};
use crate::core::types::{SitemapEntry, SitemapMeta, newest_last_modified};
use crate::discovery::{
    PathFilter, build_url, collect_files, list_root_files, list_top_level_dirs, sitemap_filename,
    sitemap_location,
};
use crate::reporting::logging;
use crate::sitemap::lastmod::{LastModified, now_utc};
use crate::sitemap::render::SitemapRenderer;

/// What a run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// One entry per sitemap file, in index order
    pub sitemaps: Vec<SitemapMeta>,
    /// Every file written, in write order, the index last
    pub written: Vec<PathBuf>,
    pub index_path: PathBuf,
}

/// Drives the scan → render → write pipeline for one site root.
///
/// Each non-excluded top-level directory with at least one page becomes
/// `sitemap-<name>.xml`, pages directly in the root become
/// `sitemap-root.xml`, and `sitemap_index.xml` at the root lists them all.
/// The first I/O failure aborts the run; files already written stay.
pub struct SitemapGenerator<L: LastModified> {
    settings: Settings,
    filter: PathFilter,
    renderer: SitemapRenderer,
    last_modified: L,
}

impl<L: LastModified> SitemapGenerator<L> {
    pub fn new(settings: Settings, last_modified: L) -> Self {
        let filter = PathFilter::from_settings(&settings);
        let renderer = SitemapRenderer::new(settings.emit_lastmod);
        Self {
            settings,
            filter,
            renderer,
            last_modified,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn run(&self) -> Result<RunReport> {
        let started = Instant::now();
        let root = &self.settings.root;
        if !root.is_dir() {
            return Err(SitemapError::InvalidArgument(format!(
                "Root '{}' is not a directory",
                root.display()
            )));
        }
        let output_dir = self.settings.output_dir();
        fs::create_dir_all(&output_dir)?;

        let mut sitemaps = Vec::new();
        let mut written = Vec::new();
        let mut filenames = HashSet::new();

        for (folder, folder_path) in list_top_level_dirs(root, &self.filter)? {
            let pages = collect_files(&folder_path, &self.filter)?;
            if pages.is_empty() {
                logging::log_skipped_directory(&folder_path);
                continue;
            }

            let filename = sitemap_filename(&folder);
            if !filenames.insert(filename.clone()) {
                logging::log_name_collision(&folder, &filename);
            }
            let meta = self.write_sitemap(&output_dir, &filename, &pages, &mut written)?;
            sitemaps.push(meta);
        }

        let root_pages = list_root_files(root, &self.filter)?;
        if !root_pages.is_empty() {
            let filename = files::ROOT_SITEMAP_FILENAME.to_string();
            if !filenames.insert(filename.clone()) {
                logging::log_name_collision(".", &filename);
            }
            let meta = self.write_sitemap(&output_dir, &filename, &root_pages, &mut written)?;
            sitemaps.push(meta);
        }

        let index_entries: Vec<SitemapEntry> = sitemaps
            .iter()
            .map(|meta| SitemapEntry::new(meta.location.clone(), meta.last_modified.clone()))
            .collect();
        let index_path = self.settings.index_path();
        write_xml(
            &index_path,
            &self.renderer.render_sitemap_index(&index_entries),
            index_entries.len(),
        )?;
        written.push(index_path.clone());

        logging::log_run_complete(sitemaps.len(), started.elapsed().as_millis());

        Ok(RunReport {
            sitemaps,
            written,
            index_path,
        })
    }

    /// URL plus last-modified timestamp for every page, in the given order
    pub fn build_entries(&self, pages: &[PathBuf]) -> Result<Vec<SitemapEntry>> {
        pages
            .iter()
            .map(|page| -> Result<SitemapEntry> {
                Ok(SitemapEntry::new(
                    build_url(page, &self.settings.base_url, &self.settings.root),
                    self.last_modified.last_modified(page)?,
                ))
            })
            .collect()
    }

    fn write_sitemap(
        &self,
        output_dir: &Path,
        filename: &str,
        pages: &[PathBuf],
        written: &mut Vec<PathBuf>,
    ) -> Result<SitemapMeta> {
        let entries = self.build_entries(pages)?;
        let last_modified = newest_last_modified(&entries)
            .map(str::to_string)
            .unwrap_or_else(now_utc);

        let path = output_dir.join(filename);
        write_xml(&path, &self.renderer.render_sitemap(&entries), entries.len())?;
        written.push(path);

        Ok(SitemapMeta {
            filename: filename.to_string(),
            location: sitemap_location(
                &self.settings.base_url,
                &self.settings.sitemap_dir,
                filename,
            ),
            last_modified,
            url_count: entries.len(),
        })
    }
}

fn write_xml(path: &Path, content: &str, entry_count: usize) -> Result<()> {
    fs::write(path, content)?;
    logging::log_sitemap_written(path, entry_count);
    Ok(())
}
