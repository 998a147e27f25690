//! Last-modified timestamps for pages.
//!
//! All timestamps are UTC RFC 3339 with second precision
//! (`2024-05-01T09:30:00Z`), so string order is chronological order.

use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::error::Result;

/// Source of "last changed" timestamps for page files
pub trait LastModified {
    fn last_modified(&self, path: &Path) -> Result<String>;
}

/// Plain functions and closures can be used as a resolver
impl<F> LastModified for F
where
    F: Fn(&Path) -> String,
{
    fn last_modified(&self, path: &Path) -> Result<String> {
        Ok(self(path))
    }
}

/// Commit date of the last commit touching the file.
///
/// Falls back to the file system modification time when git is missing,
/// the directory is not a repository, or the file has no history yet.
#[derive(Debug, Clone)]
pub struct GitLastModified {
    repo_dir: PathBuf,
}

impl GitLastModified {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    fn from_git(&self, path: &Path) -> Option<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo_dir)
            .args(["log", "-1", "--format=%cI", "--"])
            .arg(path)
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }
        normalize_timestamp(String::from_utf8_lossy(&output.stdout).trim())
    }
}

impl LastModified for GitLastModified {
    fn last_modified(&self, path: &Path) -> Result<String> {
        match self.from_git(path) {
            Some(timestamp) => Ok(timestamp),
            None => {
                debug!(
                    "No git history for {}, using file modification time",
                    path.display()
                );
                file_modified(path)
            }
        }
    }
}

/// The same timestamp for every file; useful for reproducible output
#[derive(Debug, Clone)]
pub struct FixedLastModified(pub String);

impl LastModified for FixedLastModified {
    fn last_modified(&self, _path: &Path) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// File system modification time of `path`
pub fn file_modified(path: &Path) -> Result<String> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(format_utc(DateTime::<Utc>::from(modified)))
}

/// Parse any RFC 3339 timestamp and re-render it in UTC
pub fn normalize_timestamp(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| format_utc(dt.with_timezone(&Utc)))
}

pub fn format_utc(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn now_utc() -> String {
    format_utc(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_normalize_timestamp_converts_offsets_to_utc() {
        assert_eq!(
            normalize_timestamp("2024-05-01T11:30:00+02:00"),
            Some("2024-05-01T09:30:00Z".to_string())
        );
        assert_eq!(
            normalize_timestamp("2024-05-01T09:30:00Z"),
            Some("2024-05-01T09:30:00Z".to_string())
        );
        assert_eq!(normalize_timestamp(""), None);
        assert_eq!(normalize_timestamp("yesterday"), None);
    }

    #[test]
    fn test_normalized_timestamps_sort_chronologically() {
        let earlier = normalize_timestamp("2024-05-01T10:00:00+00:00").unwrap();
        let later = normalize_timestamp("2024-05-01T11:30:00+01:00").unwrap();
        // 10:30Z vs 10:00Z
        assert!(later > earlier);
    }

    #[test]
    fn test_fixed_last_modified() -> TestResult {
        let resolver = FixedLastModified("2020-01-01T00:00:00Z".to_string());
        assert_eq!(
            resolver.last_modified(Path::new("any.html"))?,
            "2020-01-01T00:00:00Z"
        );
        Ok(())
    }

    #[test]
    fn test_closure_as_resolver() -> TestResult {
        let resolver = |path: &Path| format!("stamp-{}", path.display());
        assert_eq!(resolver.last_modified(Path::new("a.html"))?, "stamp-a.html");
        Ok(())
    }

    #[test]
    fn test_file_modified() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("page.html");
        fs::write(&path, "x")?;

        let stamp = file_modified(&path)?;
        assert!(stamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
        Ok(())
    }

    #[test]
    fn test_file_modified_missing_file() {
        assert!(file_modified(Path::new("/definitely/not/here.html")).is_err());
    }

    #[test]
    fn test_git_last_modified_falls_back_outside_repository() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("page.html");
        fs::write(&path, "x")?;

        let resolver = GitLastModified::new(dir.path());
        let stamp = resolver.last_modified(&path)?;

        assert!(stamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&stamp).is_ok());
        Ok(())
    }
}
