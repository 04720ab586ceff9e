//! # relink
//!
//! Move a C/C++ source file and rewrite every include-like token that names
//! it, or wrap a file in an `#ifdef` guard.
//!
//! ## Module Organization
//!
//! - [`core`] - Fundamental types, errors, and constants
//! - [`config`] - TOML configuration and CLI overlay
//! - [`discovery`] - Include token matching and directory traversal
//! - [`relocate`] - Move-then-rewrite operation
//! - [`guard`] - `#ifdef` wrapping
//! - [`reporting`] - Structured logging
//! - [`ui`] - CLI definitions, status lines and summaries

pub mod config;
pub mod core;
pub mod discovery;
pub mod guard;
pub mod relocate;
pub mod reporting;
pub mod ui;

// Re-export commonly used items for convenience
pub use crate::core::{
    FileOutcome, IncludeReference, MoveRequest, RelinkError, Result, ScanReport, SkipReason,
};
pub use config::Config;
pub use discovery::{Finder, IncludeFinder, MatchMode};
pub use guard::{wrap_content, wrap_file};
pub use relocate::{RelocateOptions, RelocateProgress, relink, relocate};
