//! Suffix registry
//!
//! Loads the list of recognized top-level domains once per process
//! and shares it read-only between scans.

pub mod suffix;

// Re-export commonly used items
pub use suffix::{SuffixSet, SuffixSource, shared};
