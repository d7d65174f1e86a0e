/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Output format constants
pub mod output_formats {
    /// Text output format - one URL per line
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// Scheme handling
pub mod schemes {
    /// Prefix used when making a relative candidate absolute
    pub const DEFAULT_PREFIX: &str = "http://";

    /// Transport schemes whose hosts must end in a known suffix.
    /// The grammar backend also uses this as its scheme allow-list.
    pub const TLD_CHECKED: [&str; 6] = ["http", "https", "ftp", "ftps", "ws", "wss"];

    /// Schemes without an authority; their `user@host` part is never a
    /// misparsed `http` link
    pub const OPAQUE: [&str; 10] = [
        "mailto", "tel", "sms", "urn", "data", "news", "javascript", "about", "magnet", "xmpp",
    ];

    pub fn is_transport(scheme: &str) -> bool {
        TLD_CHECKED.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }

    pub fn is_opaque(scheme: &str) -> bool {
        OPAQUE.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }

    /// Port implied by a scheme, omitted from canonical output
    pub fn default_port(scheme: &str) -> Option<u16> {
        match scheme {
            "http" | "ws" => Some(80),
            "https" | "wss" => Some(443),
            "ftp" => Some(21),
            _ => None,
        }
    }
}

/// Input limits enforced by callers of the engine
pub mod limits {
    /// Maximum accepted input, in UTF-16 code units
    pub const DEFAULT_MAX_INPUT_LENGTH: usize = 100_000;
    /// Longest DNS label, in octets
    pub const MAX_LABEL_LENGTH: usize = 63;
}

/// Configuration file lookup
pub mod files {
    /// Config file name searched in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".urlscan.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
    /// Argument naming standard input
    pub const STDIN_MARKER: &str = "-";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 2);
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(schemes::default_port("http"), Some(80));
        assert_eq!(schemes::default_port("wss"), Some(443));
        assert_eq!(schemes::default_port("ftp"), Some(21));
        assert_eq!(schemes::default_port("ftps"), None);
        assert_eq!(schemes::default_port("bingmaps"), None);
    }

    #[test]
    fn test_scheme_classes() {
        assert!(schemes::is_transport("HTTPS"));
        assert!(!schemes::is_transport("bingmaps"));
        assert!(schemes::is_opaque("mailto"));
        assert!(schemes::is_opaque("MailTo"));
        assert!(!schemes::is_opaque("rid"));
        assert!(!schemes::is_opaque("http"));
    }

    #[test]
    fn test_limits() {
        assert_eq!(limits::DEFAULT_MAX_INPUT_LENGTH, 100_000);
        assert_eq!(limits::MAX_LABEL_LENGTH, 63);
    }
}
