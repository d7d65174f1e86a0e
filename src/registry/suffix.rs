use log::{debug, error};
use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;

use crate::core::error::{Result, UrlScanError};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Rule file compiled into the binary.
const BUNDLED_SUFFIXES: &str = include_str!("../../data/suffixes.dat");

/// Outcome of the first registry load; errors are kept as messages so the
/// failed state can be handed out to every later caller.
static SHARED: OnceCell<std::result::Result<Arc<SuffixSet>, String>> = OnceCell::new();

/// Where a suffix rule file comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuffixSource {
    /// The rule file shipped inside the crate
    #[default]
    Bundled,
    /// A rule file on disk, in public suffix list format
    File(PathBuf),
}

impl SuffixSource {
    pub fn from_option(path: Option<&str>) -> Self {
        match path {
            Some(path) => SuffixSource::File(PathBuf::from(path)),
            None => SuffixSource::Bundled,
        }
    }
}

/// Immutable set of recognized top-level domains.
#[derive(Debug, Clone, Default)]
pub struct SuffixSet {
    entries: FxHashSet<String>,
    folded: FxHashSet<String>,
}

impl SuffixSet {
    /// Build a set from rule file contents.
    ///
    /// Comment (`//`), wildcard (`*`), exception (`!`) and blank lines are
    /// skipped; every other line is trimmed and kept verbatim.
    pub fn parse(content: &str) -> Self {
        let entries: FxHashSet<String> = content
            .lines()
            .filter(|line| !is_ignored_rule(line))
            .map(|line| line.trim().to_string())
            .collect();
        let folded = entries.iter().map(|entry| entry.to_lowercase()).collect();

        Self { entries, folded }
    }

    /// The rule file shipped with the crate.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_SUFFIXES)
    }

    /// Read and parse a rule file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlScanError::SuffixList(format!(
                "Could not read suffix list '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::parse(&content))
    }

    pub fn load(source: &SuffixSource) -> Result<Self> {
        match source {
            SuffixSource::Bundled => Ok(Self::bundled()),
            SuffixSource::File(path) => Self::from_path(path),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.entries.contains(suffix)
    }

    /// True when `host` ends with a dot followed by a known suffix.
    /// Comparison is ordinal and case-sensitive.
    pub fn matches_host(&self, host: &str) -> bool {
        host.match_indices('.')
            .any(|(i, _)| self.entries.contains(&host[i + 1..]))
    }

    /// Case-insensitive variant of [`SuffixSet::matches_host`].
    pub fn matches_host_ignore_case(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        host.match_indices('.')
            .any(|(i, _)| self.folded.contains(&host[i + 1..]))
    }
}

fn is_ignored_rule(line: &str) -> bool {
    line.starts_with("//")
        || line.starts_with('*')
        || line.starts_with('!')
        || line.trim().is_empty()
}

/// Process-wide suffix set, loaded on first use.
///
/// Concurrent first callers block until exactly one load has finished. The
/// first caller's source wins. A failed load is not retried: every call for
/// the rest of the process returns the same error.
pub fn shared(source: &SuffixSource) -> Result<Arc<SuffixSet>> {
    let outcome = SHARED.get_or_init(|| match SuffixSet::load(source) {
        Ok(set) => {
            debug!("Loaded {} suffix rules from {source:?}", set.len());
            Ok(Arc::new(set))
        }
        Err(e) => {
            error!("Suffix registry unavailable: {e}");
            Err(e.to_string())
        }
    });

    outcome.clone().map_err(UrlScanError::SuffixList)
}
