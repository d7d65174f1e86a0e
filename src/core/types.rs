use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::UrlScanError;

/// A span of the input that looks like it might be a link.
///
/// Offsets are byte positions into the scanned text, so
/// `&text[candidate.start..candidate.end] == candidate.text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'t> {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// The matched text
    pub text: &'t str,
}

impl<'t> Candidate<'t> {
    pub fn new(start: usize, end: usize, text: &'t str) -> Self {
        Self { start, end, text }
    }
}

/// Classification of a URI host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    IPv4,
    IPv6,
    DomainName,
    /// Empty or unparseable host
    Unknown,
}

impl HostKind {
    pub fn is_ip_literal(self) -> bool {
        matches!(self, HostKind::IPv4 | HostKind::IPv6)
    }
}

/// Which detection strategy a scanner uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScanBackend {
    /// Hand-rolled pattern grammar with IDN validation
    Pattern,
    /// `linkify`-based detector, more permissive
    #[default]
    Grammar,
}

impl ScanBackend {
    pub const ALL: [ScanBackend; 2] = [ScanBackend::Pattern, ScanBackend::Grammar];

    pub fn as_str(self) -> &'static str {
        match self {
            ScanBackend::Pattern => "pattern",
            ScanBackend::Grammar => "grammar",
        }
    }
}

impl fmt::Display for ScanBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanBackend {
    type Err = UrlScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pattern" => Ok(ScanBackend::Pattern),
            "grammar" => Ok(ScanBackend::Grammar),
            other => Err(UrlScanError::InvalidArgument(format!(
                "Unknown scan backend '{other}'. Expected one of: pattern, grammar."
            ))),
        }
    }
}
