//! User interface and interaction
//!
//! This module contains the components related to user interaction:
//! CLI parsing and output formatting.

pub mod cli;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use output::{ScanReport, display_reports, render_reports};
