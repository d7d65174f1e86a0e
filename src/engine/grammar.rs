use linkify::{LinkFinder, LinkKind};
use log::trace;
use once_cell::sync::Lazy;

use std::sync::Arc;

use crate::core::constants::schemes;
use crate::core::types::ScanBackend;
use crate::discovery::{extract, recut};
use crate::engine::UrlScanner;
use crate::registry::SuffixSet;
use crate::uri::{ParsedUri, with_default_scheme};
use crate::validation::{PlausibilityFilter, SuffixMatch};

static LINK_FINDER: Lazy<LinkFinder> = Lazy::new(|| {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]).url_must_have_scheme(false);
    finder
});

/// Scanner built on `linkify`.
///
/// `linkify` already copes with links wrapped in quotes, brackets, JSON
/// and markup, so candidates are only checked against the scheme
/// allow-list and the suffix registry. Hosts are kept in the form they
/// were written in.
///
/// `linkify` never reports IP literals, hosts under a non-ASCII TLD or
/// authorities with escaped userinfo. Spans of the pattern grammar that no
/// reported link overlaps are checked with the same rules.
#[derive(Debug, Clone)]
pub struct GrammarScanner {
    filter: PlausibilityFilter,
}

impl GrammarScanner {
    pub fn new(suffixes: Arc<SuffixSet>) -> Self {
        Self {
            filter: PlausibilityFilter::new(suffixes, SuffixMatch::CaseInsensitive),
        }
    }

    fn keep(&self, link: &str) -> Option<String> {
        let uri = canonicalize_link(link)?;
        if !schemes::is_transport(&uri.scheme_lowercase()) {
            trace!("Scheme not allowed for {link:?}");
            return None;
        }
        if !self.filter.accepts(&uri) {
            trace!("Implausible link {link:?}");
            return None;
        }
        Some(uri.to_canonical_string())
    }
}

impl UrlScanner for GrammarScanner {
    fn scan(&self, text: &str) -> Vec<String> {
        let mut spans: Vec<Span<'_>> = LINK_FINDER
            .links(text)
            .filter(|link| !text[..link.start()].ends_with('%'))
            .map(|link| Span {
                start: link.start(),
                end: link.end(),
                text: link.as_str(),
                from_finder: true,
            })
            .collect();

        let missed: Vec<Span<'_>> = extract(text)
            .into_iter()
            .filter(|c| !spans.iter().any(|s| s.start < c.end && c.start < s.end))
            .map(|c| Span {
                start: c.start,
                end: c.end,
                text: c.text,
                from_finder: false,
            })
            .collect();

        spans.extend(missed);
        spans.sort_by_key(|span| span.start);

        spans
            .into_iter()
            .filter_map(|span| {
                if span.from_finder {
                    return self.keep(span.text);
                }
                // Pattern spans may still carry trailing punctuation.
                recut(span.text)
                    .and_then(|cut| self.keep(cut))
                    .or_else(|| self.keep(span.text))
            })
            .collect()
    }

    fn backend(&self) -> ScanBackend {
        ScanBackend::Grammar
    }
}

struct Span<'t> {
    start: usize,
    end: usize,
    text: &'t str,
    from_finder: bool,
}

/// Parse a link as an absolute URI with a host.
///
/// Links written without a scheme, or as `domain:port`, are read as
/// `http`. Opaque schemes such as `mailto` are never re-read.
pub fn canonicalize_link(link: &str) -> Option<ParsedUri> {
    match ParsedUri::parse_absolute(link) {
        Some(uri) if uri.has_host() => Some(uri),
        Some(uri) if uri.scheme.as_deref().is_some_and(schemes::is_opaque) => None,
        _ if link.contains("://") => None,
        _ => ParsedUri::parse_absolute(&with_default_scheme(link)).filter(ParsedUri::has_host),
    }
}
