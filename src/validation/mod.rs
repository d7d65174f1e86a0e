//! Plausibility checks
//!
//! This module decides whether a normalized URI names a real host,
//! using the suffix registry and IP-literal detection.

pub mod plausibility;

// Re-export commonly used items
pub use plausibility::{PlausibilityFilter, SuffixMatch};
