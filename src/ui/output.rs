//! Output formatting and display logic for urlscan

use serde::Serialize;

use crate::core::constants::output_formats;
use crate::core::error::Result;

/// Links found in one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub source: String,
    pub urls: Vec<String>,
}

impl ScanReport {
    pub fn new(source: impl Into<String>, urls: Vec<String>) -> Self {
        Self {
            source: source.into(),
            urls,
        }
    }
}

/// Render scan reports in the requested format.
///
/// Text output is one URL per line across all inputs, in input order.
/// JSON output is an array of `{"source", "urls"}` objects.
pub fn render_reports(reports: &[ScanReport], output_format: &str) -> Result<String> {
    match output_format {
        output_formats::JSON => Ok(serde_json::to_string_pretty(reports)?),
        _ => Ok(reports
            .iter()
            .flat_map(|report| report.urls.iter())
            .map(|url| format!("{url}\n"))
            .collect()),
    }
}

/// Display scan reports on stdout
pub fn display_reports(reports: &[ScanReport], output_format: &str) -> Result<()> {
    let rendered = render_reports(reports, output_format)?;
    match output_format {
        output_formats::JSON => println!("{rendered}"),
        _ => print!("{rendered}"),
    }
    Ok(())
}
