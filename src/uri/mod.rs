//! URI structure and normalization
//!
//! This module decomposes candidate text into URI components, repairs
//! informally written links into absolute URIs and handles the punycode
//! round trip for internationalized hosts.

pub mod idn;
pub mod normalizer;
pub mod parser;

// Re-export commonly used items
pub use normalizer::{normalize, strip_trailing_punctuation, with_default_scheme};
pub use parser::ParsedUri;
