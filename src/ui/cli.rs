// Command-line interface definitions and parsing for urlscan

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use crate::core::error::{Result, UrlScanError};
use crate::core::types::ScanBackend;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files to scan ('-' or nothing reads standard input)
    pub files: Vec<String>,

    // Detection
    /// Detection backend (default: grammar)
    #[arg(short = 'b', long, value_enum, help_heading = "Detection")]
    pub backend: Option<ScanBackend>,

    /// Suffix rule file replacing the bundled list
    #[arg(long, value_name = "FILE", help_heading = "Detection")]
    pub suffix_list: Option<String>,

    /// Largest accepted input in UTF-16 code units (default: 100000)
    #[arg(long, value_name = "UNITS", help_heading = "Detection")]
    pub max_length: Option<usize>,

    // Output & Verbosity
    /// Suppress log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> Result<CliConfig> {
    if cli.max_length == Some(0) {
        return Err(UrlScanError::InvalidArgument(
            "Maximum length cannot be 0. Expected a positive number of UTF-16 code units."
                .to_string(),
        ));
    }
    if let Some(ref path) = cli.suffix_list
        && path.trim().is_empty()
    {
        return Err(UrlScanError::InvalidArgument(
            "Suffix list path cannot be empty.".to_string(),
        ));
    }

    Ok(CliConfig {
        backend: cli.backend,
        suffix_list: cli.suffix_list.clone(),
        max_input_length: cli.max_length,

        // Output & format
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),

        // Configuration
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    })
}
