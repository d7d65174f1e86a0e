use log::trace;

use std::sync::Arc;

use crate::core::types::ScanBackend;
use crate::discovery::extract;
use crate::engine::UrlScanner;
use crate::registry::SuffixSet;
use crate::uri::{idn, normalize};
use crate::validation::{PlausibilityFilter, SuffixMatch};

/// Scanner built on the hand-written pattern grammar.
///
/// Stricter of the two backends: hosts must survive a punycode round trip
/// and the final URI must be well formed.
#[derive(Debug, Clone)]
pub struct PatternScanner {
    filter: PlausibilityFilter,
}

impl PatternScanner {
    pub fn new(suffixes: Arc<SuffixSet>) -> Self {
        Self {
            filter: PlausibilityFilter::new(suffixes, SuffixMatch::CaseSensitive),
        }
    }
}

impl UrlScanner for PatternScanner {
    fn scan(&self, text: &str) -> Vec<String> {
        extract(text)
            .into_iter()
            .filter_map(|candidate| {
                let uri = normalize(candidate.text)?;
                // The suffix list is written in readable script.
                let uri = idn::decode_host(&uri);
                if self.filter.accepts(&uri) {
                    Some(uri.to_canonical_string())
                } else {
                    trace!("Implausible link {:?} at {}", candidate.text, candidate.start);
                    None
                }
            })
            .collect()
    }

    fn backend(&self) -> ScanBackend {
        ScanBackend::Pattern
    }
}
