//! Path filtering: which directories are skipped and which files are pages.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::{Settings, normalize_extension};

#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    include_extensions: BTreeSet<String>,
    exclude_dirs: BTreeSet<String>,
    exclude_paths: BTreeSet<PathBuf>,
}

impl PathFilter {
    /// Extensions are normalized to lowercase without the leading dot.
    /// Directory names are kept verbatim.
    pub fn new<I, E, S, T>(include_extensions: I, exclude_dirs: E) -> Self
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: Into<String>,
    {
        Self {
            include_extensions: include_extensions
                .into_iter()
                .filter_map(|ext| normalize_extension(ext.as_ref()))
                .collect(),
            exclude_dirs: exclude_dirs.into_iter().map(Into::into).collect(),
            exclude_paths: BTreeSet::new(),
        }
    }

    /// Skip the directory at exactly `path`, whatever its name
    pub fn with_excluded_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude_paths.insert(path.into());
        self
    }

    /// Name deny-set from the settings, plus the output directory by path
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            include_extensions: settings.include_extensions.clone(),
            exclude_dirs: settings.exclude_dirs.clone(),
            exclude_paths: BTreeSet::from([settings.output_dir()]),
        }
    }

    /// Exact, case-sensitive match against the deny-set. No globbing.
    pub fn is_excluded_directory(&self, name: &str) -> bool {
        self.exclude_dirs.contains(name)
    }

    /// Whether the walker must not descend into the directory at `path`
    pub fn is_excluded_path(&self, path: &Path) -> bool {
        let by_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.is_excluded_directory(name));
        by_name || self.exclude_paths.iter().any(|excluded| excluded == path)
    }

    /// True iff the lowercased extension of `path` is in the allow-set.
    /// Dotfiles such as `.html` have no extension and never match.
    pub fn is_included_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.include_extensions.contains(&ext.to_lowercase()))
    }
}
