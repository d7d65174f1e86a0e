use crate::config::Config;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: backend={}, max_input_length={}, format={}",
        config.backend(),
        config.max_input_length(),
        config.output_format()
    );
    match config.suffix_list {
        Some(ref path) => info!("Suffix list: {path}"),
        None => info!("Suffix list: bundled"),
    }
}

/// Log input discovery information
pub fn log_input_info(sources: &[String]) {
    info!("Scanning {} input(s)", sources.len());
    for (i, source) in sources.iter().enumerate() {
        debug!("  {}. {}", i + 1, source);
    }
}

/// Log scan completion
pub fn log_scan_summary(inputs: usize, urls: usize, duration_ms: u128) {
    if urls == 0 {
        warn!("No URLs found in {inputs} input(s) ({duration_ms}ms)");
    } else {
        info!("Found {urls} URL(s) in {inputs} input(s) ({duration_ms}ms)");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
