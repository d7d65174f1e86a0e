//! Pattern grammar for link-shaped spans.
//!
//! A match is an *anchor* (scheme, `localhost`, an IPv4 address or a
//! Unicode domain with a 2-26 letter final label), followed by a body of
//! non-space characters and balanced parentheses nested up to two levels,
//! followed by a trailing block that may not end in prose punctuation.
//!
//! The liberal grammar makes the trailing block optional, so it finds
//! every candidate but may keep trailing punctuation. The strict grammar
//! requires exactly one trailing element and is only used to re-cut a
//! candidate whose first cut did not parse.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::core::types::Candidate;

const ANCHOR: &str = r##"
    (?:
        [a-z][\w-]+:                    # scheme and colon, followed by
        (?:
            /{1,3}                      # 1-3 slashes
            | [0-9]{1,6}                # or a port number
            | [a-z0-9%]                 # or one letter, digit or percent sign
        )
        | localhost(?::[0-9]{1,6})?
        | (?:[0-9]{1,3}\.){3}[0-9]{1,3}(?::[0-9]{1,6})?
        | [\p{L}\p{N}\p{S}\p{M}\p{Cf}.\-@~!&'*+=]+\.\p{L}{2,26}(?::[0-9]{1,6})?
    )
"##;

const BODY: &str = r##"
    (?:
        [^\s()<>]
        | \((?:[^\s()<>]|\([^\s()<>]+\))*\)     # balanced parens, two levels
    )*
"##;

const TAIL: &str = r##"
    (?:
        \((?:[^\s()<>]|\([^\s()<>]+\))*\)
        | [^\s`!()\[\]{};:'".,<>?«»“”‘’]
    )
"##;

// The unicode classes repeated by `{2,26}` need more room than the default.
const SIZE_LIMIT: usize = 1 << 25;

static LIBERAL: Lazy<Regex> = Lazy::new(|| {
    compile(&format!("(?xi) {ANCHOR} {BODY} {TAIL}*"))
        .expect("Failed to compile liberal URL grammar")
});

static STRICT: Lazy<Regex> = Lazy::new(|| {
    compile(&format!("(?xi) {ANCHOR} {BODY} {TAIL}"))
        .expect("Failed to compile strict URL grammar")
});

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).size_limit(SIZE_LIMIT).build()
}

/// All candidate spans in `text`, left to right, non-overlapping.
pub fn extract(text: &str) -> Vec<Candidate<'_>> {
    LIBERAL
        .find_iter(text)
        .map(|m| Candidate::new(m.start(), m.end(), m.as_str()))
        .collect()
}

/// Re-cut a candidate with the strict grammar.
///
/// Returns the first strict match inside `text`, which never ends in one of
/// the excluded punctuation characters.
pub fn recut(text: &str) -> Option<&str> {
    STRICT.find(text).map(|m| m.as_str())
}
