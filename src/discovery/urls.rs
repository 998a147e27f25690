//! URL building and sitemap file naming.

use once_cell::sync::Lazy;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use std::path::{Component, Path};

use crate::core::constants::files;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the URI component set
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static UNSAFE_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.\-]").expect("Failed to compile safe name regex"));

/// Build the public URL of `file_path`.
///
/// The path is made relative to `root_dir`, each segment is percent-encoded
/// on its own and the segments are joined with `/`. `base_url` is expected
/// without a trailing slash.
pub fn build_url(file_path: &Path, base_url: &str, root_dir: &Path) -> String {
    let relative =
        pathdiff::diff_paths(file_path, root_dir).unwrap_or_else(|| file_path.to_path_buf());
    format!("{base_url}/{}", encode_path(&relative))
}

/// Percent-encode every segment of a relative path and join with `/`
pub fn encode_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(encode_segment(&segment.to_string_lossy())),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Public URL of a sitemap file stored in `sitemap_dir`
pub fn sitemap_location(base_url: &str, sitemap_dir: &str, filename: &str) -> String {
    format!(
        "{base_url}/{}/{}",
        encode_path(Path::new(sitemap_dir)),
        encode_segment(filename)
    )
}

/// Percent-encode a single path segment. `/` inside it is encoded too.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, URI_COMPONENT).to_string()
}

/// Replace anything outside `[A-Za-z0-9_.-]` with `-`, then lowercase
pub fn safe_name(name: &str) -> String {
    UNSAFE_NAME_CHARS.replace_all(name, "-").to_lowercase()
}

/// `sitemap-<safe name>.xml` for a top-level folder
pub fn sitemap_filename(folder: &str) -> String {
    format!(
        "{}{}{}",
        files::SITEMAP_PREFIX,
        safe_name(folder),
        files::SITEMAP_EXTENSION
    )
}
