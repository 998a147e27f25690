use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::discovery::filter::PathFilter;

/// Recursively collect every page under `start_dir`.
///
/// Excluded directories are pruned before descent, so nothing beneath them
/// is ever listed. Symlinks are followed. Entries are yielded depth-first and
/// sorted by file name within each directory, which keeps the output stable
/// across platforms. An unreadable directory aborts the walk.
pub fn collect_files(start_dir: &Path, filter: &PathFilter) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(start_dir);
    builder
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b));

    let prune = filter.clone();
    builder.filter_entry(move |entry| {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if is_dir && prune.is_excluded_path(entry.path()) {
            debug!("Skipping excluded directory {}", entry.path().display());
            return false;
        }
        true
    });

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
        if is_file && filter.is_included_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Non-excluded directories directly inside `root`, sorted by name.
pub fn list_top_level_dirs(root: &Path, filter: &PathFilter) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for (name, path, metadata) in read_dir_sorted(root)? {
        if metadata.is_dir() && !filter.is_excluded_path(&path) {
            dirs.push((name, path));
        }
    }
    Ok(dirs)
}

/// Pages directly inside `root` (no recursion), sorted by name.
pub fn list_root_files(root: &Path, filter: &PathFilter) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for (_, path, metadata) in read_dir_sorted(root)? {
        if metadata.is_file() && filter.is_included_file(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Lists a directory following symlinks. A dangling link fails the listing,
/// the same way it fails [`collect_files`].
fn read_dir_sorted(dir: &Path) -> Result<Vec<(String, PathBuf, fs::Metadata)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let metadata = fs::metadata(&path)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push((name, path, metadata));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use tempfile::TempDir;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn filter() -> PathFilter {
        PathFilter::new(["html"], ["node_modules", ".git", "sitemaps", "assets"])
    }

    fn create_test_structure() -> std::result::Result<TempDir, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();

        fs::create_dir_all(base.join("a/sub/deeper"))?;
        fs::create_dir_all(base.join("a/node_modules/pkg"))?;
        fs::create_dir_all(base.join("node_modules"))?;
        fs::create_dir_all(base.join("empty"))?;
        fs::create_dir_all(base.join(".git"))?;

        fs::write(base.join("a/index.html"), "<h1>a</h1>")?;
        fs::write(base.join("a/sub/page.html"), "<p>sub</p>")?;
        fs::write(base.join("a/sub/deeper/PAGE.HTML"), "<p>deep</p>")?;
        fs::write(base.join("a/sub/style.css"), "body {}")?;
        fs::write(base.join("a/node_modules/pkg/readme.html"), "nope")?;
        fs::write(base.join("node_modules/x.html"), "nope")?;
        fs::write(base.join(".git/description.html"), "nope")?;
        fs::write(base.join("b.html"), "<p>b</p>")?;
        fs::write(base.join("notes.txt"), "text")?;

        Ok(temp_dir)
    }

    fn names(paths: &[PathBuf], root: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_collect_files__recurses_and_filters() -> TestResult {
        let temp_dir = create_test_structure()?;
        let base = temp_dir.path();

        let files = collect_files(&base.join("a"), &filter())?;

        assert_eq!(
            names(&files, base),
            vec!["a/index.html", "a/sub/deeper/PAGE.HTML", "a/sub/page.html"]
        );
        Ok(())
    }

    #[test]
    fn test_collect_files__never_enters_excluded_directories() -> TestResult {
        let temp_dir = create_test_structure()?;
        let base = temp_dir.path();

        let files = collect_files(base, &filter())?;

        for path in &files {
            for component in path.strip_prefix(base)?.components() {
                let name = component.as_os_str().to_string_lossy();
                assert_ne!(name, "node_modules");
                assert_ne!(name, ".git");
            }
        }
        assert!(names(&files, base).contains(&"b.html".to_string()));
        Ok(())
    }

    #[test]
    fn test_collect_files__empty_directory() -> TestResult {
        let temp_dir = create_test_structure()?;

        let files = collect_files(&temp_dir.path().join("empty"), &filter())?;
        assert!(files.is_empty());
        Ok(())
    }

    #[test]
    fn test_collect_files__returns_absolute_paths() -> TestResult {
        let temp_dir = create_test_structure()?;
        let base = std::path::absolute(temp_dir.path())?;

        let files = collect_files(&base.join("a"), &filter())?;
        assert!(files.iter().all(|p| p.is_absolute()));
        Ok(())
    }

    #[test]
    fn test_collect_files__missing_directory_fails() {
        let result = collect_files(Path::new("/definitely/not/here"), &filter());
        assert!(result.is_err());
    }

    #[test]
    fn test_list_top_level_dirs__sorted_and_filtered() -> TestResult {
        let temp_dir = create_test_structure()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("assets"))?;

        let dirs = list_top_level_dirs(base, &filter())?;
        let dir_names: Vec<&str> = dirs.iter().map(|(name, _)| name.as_str()).collect();

        assert_eq!(dir_names, vec!["a", "empty"]);
        Ok(())
    }

    #[test]
    fn test_list_root_files__only_immediate_pages() -> TestResult {
        let temp_dir = create_test_structure()?;
        let base = temp_dir.path();
        fs::write(base.join("about.HTML"), "about")?;

        let files = list_root_files(base, &filter())?;
        assert_eq!(names(&files, base), vec!["about.HTML", "b.html"]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink__fails_root_listing_and_walk() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("a"))?;
        fs::write(base.join("real.html"), "real")?;
        std::os::unix::fs::symlink(base.join("gone.html"), base.join("link.html"))?;
        std::os::unix::fs::symlink(base.join("a/gone.html"), base.join("a/link.html"))?;

        assert!(list_root_files(base, &filter()).is_err());
        assert!(list_top_level_dirs(base, &filter()).is_err());
        assert!(collect_files(&base.join("a"), &filter()).is_err());
        Ok(())
    }

    #[test]
    fn test_collect_files__nested_output_dir_pruned_by_path() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("public/maps"))?;
        fs::create_dir_all(base.join("docs/maps"))?;
        fs::write(base.join("public/maps/stray.html"), "no")?;
        fs::write(base.join("public/index.html"), "yes")?;
        fs::write(base.join("docs/maps/index.html"), "yes")?;

        let filter = filter().with_excluded_path(base.join("public/maps"));
        let files = collect_files(base, &filter)?;

        assert_eq!(
            names(&files, base),
            vec!["docs/maps/index.html", "public/index.html"]
        );
        Ok(())
    }

    #[test]
    fn test_list_top_level_dirs__skips_output_dir_by_path() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("out"))?;
        fs::create_dir_all(base.join("blog"))?;

        let filter = filter().with_excluded_path(base.join("out"));
        let dirs = list_top_level_dirs(base, &filter)?;
        let dir_names: Vec<&str> = dirs.iter().map(|(name, _)| name.as_str()).collect();

        assert_eq!(dir_names, vec!["blog"]);
        Ok(())
    }
}
