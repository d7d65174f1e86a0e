use clap::Parser;
use urlscan::config::{CliConfig, Config};
use urlscan::discovery::{read_source, resolve_sources, source_name};
use urlscan::engine::{build_scanner, scan_all};
use urlscan::logging;
use urlscan::ui::{Cli, ScanReport, cli_to_config, display_reports};

use std::time::Instant;

fn main() {
    let cli = Cli::parse();

    match run_urlscan_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main scanning logic extracted from main() for testing
pub fn run_urlscan_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli)?;

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;
    config.validate()?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let sources = resolve_sources(&cli.files);
    logging::log_input_info(&sources);

    let limit = config.max_input_length();
    let texts = sources
        .iter()
        .map(|source| read_source(source, limit))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| logging::log_error("Could not read input", Some(e)))?;

    let scanner = build_scanner(config.backend(), &config.suffix_source())?;

    let started = Instant::now();
    let results = scan_all(scanner.as_ref(), &texts);
    let reports: Vec<ScanReport> = sources
        .iter()
        .zip(results)
        .map(|(source, urls)| ScanReport::new(source_name(source), urls))
        .collect();

    let total_urls = reports.iter().map(|report| report.urls.len()).sum();
    logging::log_scan_summary(reports.len(), total_urls, started.elapsed().as_millis());

    display_reports(&reports, config.output_format())?;
    Ok(0)
}

/// Load the configuration file (if any) and apply CLI overrides
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    Ok(config)
}
