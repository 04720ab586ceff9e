use serde::Serialize;
use std::path::Path;

use crate::core::error::RelinkError;
use crate::core::types::{FileOutcome, MoveRequest, ScanReport};
use crate::discovery::finder::MatchMode;

/// Status line printed once the file has been moved
pub fn moved_line(from: &Path, to: &Path, dry_run: bool) -> String {
    let verb = if dry_run { "Would move" } else { "Moved" };
    format!("{verb}: {} -> {}", from.display(), to.display())
}

/// Status line printed after a file has been rewritten
pub fn updated_line(path: &Path, dry_run: bool) -> String {
    let verb = if dry_run { "Would update" } else { "Updated" };
    format!("{verb}: {}", path.display())
}

/// Ifdef-wrap success message
pub fn wrapped_line(file: &str) -> String {
    format!("Updated file '{file}' successfully.")
}

/// Ifdef-wrap failure message, distinguishing a missing file from other errors
pub fn wrap_error_line(file: &str, err: &RelinkError) -> String {
    if err.is_not_found() {
        format!("Error: File '{file}' not found.")
    } else {
        format!("An error occurred: {err}")
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Structured summary of a relocate run for `--format json`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RunSummary {
    pub moved_from: String,
    pub moved_to: String,
    pub dry_run: bool,
    pub match_mode: String,
    pub scanned: usize,
    pub rewritten: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub references: usize,
    pub updated_files: Vec<String>,
    pub skipped_files: Vec<SkippedFile>,
}

impl RunSummary {
    pub fn new(
        request: &MoveRequest,
        report: &ScanReport,
        match_mode: MatchMode,
        dry_run: bool,
    ) -> Self {
        let skipped_files = report
            .entries()
            .iter()
            .filter_map(|entry| match &entry.outcome {
                FileOutcome::Skipped { reason } => Some(SkippedFile {
                    path: entry.path.display().to_string(),
                    reason: reason.to_string(),
                }),
                _ => None,
            })
            .collect();

        Self {
            moved_from: request.source().display().to_string(),
            moved_to: request.destination().display().to_string(),
            dry_run,
            match_mode: match_mode.to_string(),
            scanned: report.scanned(),
            rewritten: report.rewritten(),
            unchanged: report.unchanged(),
            skipped: report.skipped(),
            references: report.references(),
            updated_files: report
                .rewritten_paths()
                .map(|path| path.display().to_string())
                .collect(),
            skipped_files,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
