//! urlscan finds web links in free-form text and returns them as
//! canonical absolute URIs.
//!
//! ```
//! use urlscan::{ScanBackend, SuffixSource, build_scanner};
//!
//! let scanner = build_scanner(ScanBackend::Pattern, &SuffixSource::Bundled).unwrap();
//! assert_eq!(scanner.scan("Visit www.flickr.com today"), vec!["http://www.flickr.com/"]);
//! ```

pub mod config;
pub mod core;
pub mod discovery;
pub mod engine;
pub mod logging;
pub mod registry;
pub mod ui;
pub mod uri;
pub mod validation;

// Re-export commonly used items
pub use crate::core::{Candidate, HostKind, Result, ScanBackend, UrlScanError};
pub use engine::{GrammarScanner, PatternScanner, UrlScanner, build_scanner, scan_all};
pub use registry::{SuffixSet, SuffixSource};
pub use uri::ParsedUri;
