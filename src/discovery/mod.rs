//! Include discovery and file processing
//!
//! This module handles finding include references in files and managing
//! file path operations and directory traversal.

pub mod finder;
pub mod path_utils;

// Re-export commonly used items
pub use finder::{Finder, IncludeFinder, MatchMode, Rewrite};
pub use path_utils::{current_scan_root, walk_candidates};
