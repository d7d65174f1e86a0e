//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{files, limits, output_formats};
use crate::core::error::{Result, UrlScanError};
use crate::core::types::ScanBackend;
use crate::registry::SuffixSource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Detection strategy (pattern, grammar)
    pub backend: Option<ScanBackend>,

    /// Path to a suffix rule file replacing the bundled list
    pub suffix_list: Option<String>,

    /// Largest accepted input, in UTF-16 code units
    pub max_input_length: Option<usize>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Some(ScanBackend::default()),
            suffix_list: None, // Bundled list
            max_input_length: Some(limits::DEFAULT_MAX_INPUT_LENGTH),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlScanError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UrlScanError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::load_from_standard_locations_in(Path::new("."))
    }

    /// Look for the config file in `dir` and up to three of its parents.
    pub fn load_from_standard_locations_in(dir: &Path) -> Self {
        for depth in 0..=files::CONFIG_SEARCH_DEPTH {
            let mut path = PathBuf::from(dir);
            for _ in 0..depth {
                path.push("..");
            }
            path.push(files::CONFIG_FILE_NAME);

            if let Ok(config) = Self::load_from_file(&path) {
                debug!("Loaded configuration from {}", path.display());
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(backend) = cli_config.backend {
            self.backend = Some(backend);
        }
        if let Some(ref suffix_list) = cli_config.suffix_list {
            self.suffix_list = Some(suffix_list.clone());
        }
        if let Some(max_length) = cli_config.max_input_length {
            self.max_input_length = Some(max_length);
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    pub fn backend(&self) -> ScanBackend {
        self.backend.unwrap_or_default()
    }

    pub fn suffix_source(&self) -> SuffixSource {
        SuffixSource::from_option(self.suffix_list.as_deref())
    }

    pub fn max_input_length(&self) -> usize {
        self.max_input_length
            .unwrap_or(limits::DEFAULT_MAX_INPUT_LENGTH)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_input_length == Some(0) {
            return Err(UrlScanError::Config(
                "Maximum input length cannot be 0. Expected a positive number of UTF-16 code units."
                    .to_string(),
            ));
        }

        if let Some(ref path) = self.suffix_list
            && path.trim().is_empty()
        {
            return Err(UrlScanError::Config(
                "Suffix list path cannot be empty.".to_string(),
            ));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(UrlScanError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub backend: Option<ScanBackend>,      // --backend
    pub suffix_list: Option<String>,       // --suffix-list
    pub max_input_length: Option<usize>,   // --max-length

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
