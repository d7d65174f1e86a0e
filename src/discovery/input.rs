use std::fs;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

use crate::core::constants::files;
use crate::core::error::{Result, UrlScanError};

/// Name used for standard input in reports.
pub const STDIN_SOURCE: &str = "<stdin>";

/// Input sources named on the command line; no names means standard input.
pub fn resolve_sources(files: &[String]) -> Vec<String> {
    if files.is_empty() {
        vec![files::STDIN_MARKER.to_string()]
    } else {
        files.to_vec()
    }
}

/// Display name for a source.
pub fn source_name(source: &str) -> &str {
    if source == files::STDIN_MARKER {
        STDIN_SOURCE
    } else {
        source
    }
}

/// Reject text longer than `limit` UTF-16 code units.
pub fn check_input_length(text: &str, limit: usize) -> Result<()> {
    // Byte length bounds the UTF-16 length from above.
    if text.len() <= limit {
        return Ok(());
    }

    let length = text.encode_utf16().count();
    if length > limit {
        return Err(UrlScanError::InputTooLarge { length, limit });
    }
    Ok(())
}

/// Read one source (a file path or `-` for stdin) and enforce the length cap.
pub fn read_source(source: &str, limit: usize) -> Result<String> {
    let text = if source == files::STDIN_MARKER {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        read_file(Path::new(source))?
    };

    debug!("Read {} bytes from {}", text.len(), source_name(source));
    check_input_length(&text, limit)?;
    Ok(text)
}

fn read_file(path: &Path) -> Result<String> {
    if path.is_dir() {
        return Err(UrlScanError::InvalidArgument(format!(
            "'{}' is a directory. Expected a text file.",
            path.display()
        )));
    }
    Ok(fs::read_to_string(path)?)
}
