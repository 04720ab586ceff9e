//! Relocate-and-relink
//!
//! Moves one file and rewrites the include-like tokens that name it in every
//! candidate file under a scan root. The rewrite pass is best effort and not
//! transactional: an unreadable file is recorded and passed over, and files
//! rewritten before an interruption stay rewritten.

pub mod mover;

use std::fs;
use std::path::Path;

use crate::core::constants::files;
use crate::core::error::Result;
use crate::core::types::{FileOutcome, MoveRequest, ScanReport, SkipReason};
use crate::discovery::finder::{Finder, IncludeFinder, MatchMode};
use crate::discovery::path_utils::walk_candidates;
use crate::reporting::logging;

pub use mover::{ensure_parent_dir, move_file, resolve_destination};

/// Knobs for one relocate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocateOptions {
    /// Suffixes of files scanned for references
    pub extensions: Vec<String>,
    pub match_mode: MatchMode,
    /// Compute the report without moving or writing anything
    pub dry_run: bool,
}

impl Default for RelocateOptions {
    fn default() -> Self {
        Self {
            extensions: files::DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            match_mode: MatchMode::default(),
            dry_run: false,
        }
    }
}

/// Receives status events as the run progresses.
pub trait RelocateProgress {
    fn moved(&mut self, from: &Path, to: &Path);
    fn updated(&mut self, path: &Path, references: usize);
}

/// Progress sink that discards every event.
#[derive(Debug, Default)]
pub struct Silent;

impl RelocateProgress for Silent {
    fn moved(&mut self, _from: &Path, _to: &Path) {}
    fn updated(&mut self, _path: &Path, _references: usize) {}
}

/// The request with an existing-directory destination replaced by the file
/// path inside it, so rewritten references name the file itself.
pub fn resolve_request(request: &MoveRequest) -> MoveRequest {
    MoveRequest {
        source_path: request.source_path.clone(),
        destination_path: resolve_destination(request.source(), request.destination()),
    }
}

/// Move the requested file, then rewrite references to it under `scan_root`.
///
/// A failed move is returned as an error and no file is scanned. Failures on
/// individual candidate files never abort the pass; they show up as
/// [`FileOutcome::Skipped`] in the report.
pub fn relocate(
    request: &MoveRequest,
    scan_root: &Path,
    options: &RelocateOptions,
    progress: &mut dyn RelocateProgress,
) -> Result<ScanReport> {
    let request = &resolve_request(request);
    logging::log_move_request(request, options.dry_run);

    if !options.dry_run {
        move_file(request.source(), request.destination())?;
    }
    progress.moved(request.source(), request.destination());

    Ok(relink(request, scan_root, options, progress))
}

/// Rewrite references to the requested file under `scan_root` without moving it.
pub fn relink(
    request: &MoveRequest,
    scan_root: &Path,
    options: &RelocateOptions,
    progress: &mut dyn RelocateProgress,
) -> ScanReport {
    let finder = Finder::new(request, options.match_mode);
    let mut report = ScanReport::new();

    logging::log_scan_start(scan_root, &options.extensions, options.match_mode);

    for path in walk_candidates(scan_root, &options.extensions) {
        let outcome = relink_file(&finder, &path, options.dry_run);

        match &outcome {
            FileOutcome::Rewritten { references } => progress.updated(&path, *references),
            FileOutcome::Skipped { reason } => logging::log_skipped_file(&path, reason),
            FileOutcome::Unchanged => {}
        }

        report.record(path, outcome);
    }

    logging::log_scan_summary(&report);
    report
}

/// Rewrite one candidate file in place if it references the moved file.
pub fn relink_file<F: IncludeFinder>(finder: &F, path: &Path, dry_run: bool) -> FileOutcome {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            return FileOutcome::Skipped {
                reason: SkipReason::Io(err.to_string()),
            };
        }
    };

    let Ok(content) = String::from_utf8(bytes) else {
        return FileOutcome::Skipped {
            reason: SkipReason::NotText,
        };
    };

    let Some(rewrite) = finder.rewrite(&content) else {
        return FileOutcome::Unchanged;
    };

    if !dry_run && let Err(err) = fs::write(path, rewrite.content) {
        return FileOutcome::Skipped {
            reason: SkipReason::Io(err.to_string()),
        };
    }

    FileOutcome::Rewritten {
        references: rewrite.references,
    }
}
