//! The suffix registry is process-wide, so its failed state is checked in
//! a test binary of its own.

use urlscan::registry::shared;
use urlscan::{ScanBackend, SuffixSource, UrlScanError, build_scanner};

use std::path::PathBuf;

#[test]
fn test_registry_stays_failed_after_load_error() {
    let missing = SuffixSource::File(PathBuf::from("/nonexistent/suffixes.dat"));

    let first = shared(&missing);
    assert!(matches!(first, Err(UrlScanError::SuffixList(_))));

    // Not retried, not even with a source that would load.
    assert!(matches!(
        shared(&SuffixSource::Bundled),
        Err(UrlScanError::SuffixList(_))
    ));

    for backend in ScanBackend::ALL {
        let err = build_scanner(backend, &SuffixSource::Bundled)
            .err()
            .expect("scanner must not be built without a registry");
        assert!(err.to_string().starts_with("Suffix list error"));
    }
}
