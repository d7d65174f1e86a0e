//! Reject structurally valid URIs that are unlikely to be real links.
//!
//! File names such as `picture.dog.jpg` look exactly like domains to the
//! grammar. What tells them apart is the final label: `jpg` is not a
//! top-level domain.

use std::sync::Arc;

use crate::core::constants::schemes;
use crate::registry::SuffixSet;
use crate::uri::ParsedUri;

/// How host suffixes are compared against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixMatch {
    CaseSensitive,
    CaseInsensitive,
}

#[derive(Debug, Clone)]
pub struct PlausibilityFilter {
    suffixes: Arc<SuffixSet>,
    matching: SuffixMatch,
}

impl PlausibilityFilter {
    pub fn new(suffixes: Arc<SuffixSet>, matching: SuffixMatch) -> Self {
        Self { suffixes, matching }
    }

    /// Decide whether an absolute URI (host in readable form) is kept.
    ///
    /// IP literals and loopback hosts only need a scheme. Transport schemes
    /// need a host ending in a known suffix. Other schemes pass.
    pub fn accepts(&self, uri: &ParsedUri) -> bool {
        let scheme = uri.scheme_lowercase();

        if uri.host_kind.is_ip_literal() || uri.is_loopback() {
            return !scheme.is_empty();
        }

        if schemes::is_transport(&scheme) {
            return match self.matching {
                SuffixMatch::CaseSensitive => self.suffixes.matches_host(&uri.host),
                SuffixMatch::CaseInsensitive => self.suffixes.matches_host_ignore_case(&uri.host),
            };
        }

        true
    }
}
