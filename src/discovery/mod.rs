//! Candidate discovery
//!
//! This module reads input sources and scans free-form text for spans
//! that might be links.

pub mod extractor;
pub mod input;

// Re-export commonly used items
pub use extractor::{extract, recut};
pub use input::{check_input_length, read_source, resolve_sources, source_name};
