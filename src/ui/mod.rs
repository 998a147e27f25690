//! User interface
//!
//! Command-line parsing and formatting of the run summary.

pub mod cli;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use output::{display_report, format_report};
