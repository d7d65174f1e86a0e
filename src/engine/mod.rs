//! Detection engine
//!
//! Both detection strategies sit behind the [`UrlScanner`] trait. Callers
//! pick one with [`ScanBackend`] and never see the concrete type.

pub mod grammar;
pub mod pattern;

use log::debug;
use rayon::prelude::*;

use crate::core::error::Result;
use crate::core::types::ScanBackend;
use crate::registry::{self, SuffixSource};

pub use grammar::GrammarScanner;
pub use pattern::PatternScanner;

/// Finds links in text and returns them as canonical absolute URIs.
///
/// Results keep the left-to-right order of the input and repeat a link as
/// often as it occurs. Candidates that turn out not to be links are
/// dropped without error.
pub trait UrlScanner: Send + Sync {
    fn scan(&self, text: &str) -> Vec<String>;

    fn backend(&self) -> ScanBackend;
}

/// Build a scanner for `backend` on top of the process-wide suffix registry.
///
/// The registry is loaded from `source` on first use; a load failure is
/// returned here and by every later call.
pub fn build_scanner(backend: ScanBackend, source: &SuffixSource) -> Result<Box<dyn UrlScanner>> {
    let suffixes = registry::shared(source)?;
    debug!("Using {backend} scanner with {} suffix rules", suffixes.len());

    Ok(match backend {
        ScanBackend::Pattern => Box::new(PatternScanner::new(suffixes)),
        ScanBackend::Grammar => Box::new(GrammarScanner::new(suffixes)),
    })
}

/// Scan several documents in parallel. Output order follows input order.
pub fn scan_all<S: AsRef<str> + Sync>(scanner: &dyn UrlScanner, texts: &[S]) -> Vec<Vec<String>> {
    texts
        .par_iter()
        .map(|text| scanner.scan(text.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_scanner_selects_backend() {
        for backend in ScanBackend::ALL {
            let scanner = build_scanner(backend, &SuffixSource::Bundled).unwrap();
            assert_eq!(scanner.backend(), backend);
        }
    }

    #[test]
    fn test_both_backends_agree_on_plain_links() {
        for backend in ScanBackend::ALL {
            let scanner = build_scanner(backend, &SuffixSource::Bundled).unwrap();
            assert_eq!(scanner.scan("google.com"), vec!["http://google.com/"]);
            assert_eq!(scanner.scan("http://142.42.1.1/"), vec!["http://142.42.1.1/"]);
            assert!(scanner.scan("").is_empty());
        }
    }

    #[test]
    fn test_scan_all_keeps_document_order() {
        let scanner = build_scanner(ScanBackend::Pattern, &SuffixSource::Bundled).unwrap();
        let texts = ["first.com", "nothing here", "second.org and third.net"];

        let results = scan_all(scanner.as_ref(), &texts);

        assert_eq!(
            results,
            vec![
                vec!["http://first.com/".to_string()],
                vec![],
                vec!["http://second.org/".to_string(), "http://third.net/".to_string()],
            ]
        );
    }
}
