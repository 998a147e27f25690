//! Output formatting and display logic for sitemapgen

use std::path::Path;

use crate::core::constants::{display, files, output_formats};
use crate::core::error::Result;
use crate::sitemap::RunReport;

/// Render the run report in the requested output format.
///
/// Paths are shown relative to `root` when they live under it.
pub fn format_report(report: &RunReport, format: &str, root: &Path) -> Result<String> {
    match format {
        output_formats::JSON => Ok(serde_json::to_string_pretty(report)?),
        output_formats::MINIMAL => Ok(summary_line(report.sitemaps.len())),
        _ => {
            let mut lines: Vec<String> = report
                .written
                .iter()
                .map(|path| format!("WROTE {}", display_path(path, root)))
                .collect();
            lines.push(format!(
                "{} Done. {}",
                display::SUCCESS_EMOJI,
                summary_line(report.sitemaps.len())
            ));
            Ok(lines.join("\n"))
        }
    }
}

/// Print the run report to stdout
pub fn display_report(report: &RunReport, format: &str, root: &Path) -> Result<()> {
    println!("{}", format_report(report, format, root)?);
    Ok(())
}

fn summary_line(sitemap_count: usize) -> String {
    format!(
        "Generated {sitemap_count} sitemaps and {}",
        files::INDEX_FILENAME
    )
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
