use std::fmt;

/// Error types for urlscan operations.
///
/// Per-candidate failures during a scan are never represented here: a span
/// that cannot be turned into a URI simply produces nothing.
#[derive(Debug)]
pub enum UrlScanError {
    /// IO error (reading input or a suffix list from disk)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// The suffix registry could not be loaded
    SuffixList(String),

    /// Input exceeds the caller-side length limit (UTF-16 code units)
    InputTooLarge { length: usize, limit: usize },

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for UrlScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlScanError::Io(err) => write!(f, "IO error: {err}"),
            UrlScanError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlScanError::SuffixList(msg) => write!(f, "Suffix list error: {msg}"),
            UrlScanError::InputTooLarge { length, limit } => write!(
                f,
                "Input too large: {length} UTF-16 code units (limit is {limit})"
            ),
            UrlScanError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrlScanError::Json(err) => write!(f, "JSON error: {err}"),
            UrlScanError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for UrlScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlScanError::Io(err) => Some(err),
            UrlScanError::TomlParsing(err) => Some(err),
            UrlScanError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlScanError {
    fn from(err: std::io::Error) -> Self {
        UrlScanError::Io(err)
    }
}

impl From<toml::de::Error> for UrlScanError {
    fn from(err: toml::de::Error) -> Self {
        UrlScanError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for UrlScanError {
    fn from(err: serde_json::Error) -> Self {
        UrlScanError::Json(err)
    }
}

/// Type alias for Results using UrlScanError
pub type Result<T> = std::result::Result<T, UrlScanError>;
