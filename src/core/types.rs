use std::fmt;
use std::path::{Path, PathBuf};

use crate::discovery::path_utils::{basename, to_forward_slashes};

/// A request to move one file, built from the two invocation arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    /// Path of the existing file
    pub source_path: PathBuf,
    /// Path the file is moved to; its directory may not exist yet
    pub destination_path: PathBuf,
}

/// Errors that can occur when building a `MoveRequest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRequestError {
    /// Source path is missing or empty
    MissingSource,
    /// Destination path is missing or empty
    MissingDestination,
    /// Source path has no final component to match includes against
    NoFileName,
}

impl fmt::Display for MoveRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSource => write!(f, "Source path is required and cannot be empty"),
            Self::MissingDestination => {
                write!(f, "Destination path is required and cannot be empty")
            }
            Self::NoFileName => write!(f, "Source path must name a file"),
        }
    }
}

impl std::error::Error for MoveRequestError {}

impl MoveRequest {
    /// Create a new MoveRequest with validation.
    ///
    /// # Examples
    /// ```
    /// use relink::core::types::MoveRequest;
    ///
    /// let request = MoveRequest::new("foo/bar.h", "foo/qux/bar.h").unwrap();
    /// assert_eq!(request.old_basename(), "bar.h");
    /// assert_eq!(request.include_target(), "foo/qux/bar.h");
    /// ```
    pub fn new<S: AsRef<str>, D: AsRef<str>>(
        source: S,
        destination: D,
    ) -> Result<Self, MoveRequestError> {
        let source = source.as_ref();
        let destination = destination.as_ref();

        if source.trim().is_empty() {
            return Err(MoveRequestError::MissingSource);
        }
        if destination.trim().is_empty() {
            return Err(MoveRequestError::MissingDestination);
        }
        if basename(source).is_empty() {
            return Err(MoveRequestError::NoFileName);
        }

        Ok(Self {
            source_path: PathBuf::from(source),
            destination_path: PathBuf::from(destination),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source_path
    }

    pub fn destination(&self) -> &Path {
        &self.destination_path
    }

    /// Final component of the source path, the only part matched against includes.
    pub fn old_basename(&self) -> String {
        basename(&self.source_path.to_string_lossy()).to_string()
    }

    /// Destination path as it is written inside the rewritten `<...>` token.
    pub fn include_target(&self) -> String {
        to_forward_slashes(&self.destination_path.to_string_lossy())
    }
}

/// One include-like token found in a scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeReference {
    /// Byte range of the whole delimited token, delimiters included
    pub span: (usize, usize),
    /// Text between the delimiters
    pub target: String,
    /// Line number where the token starts (1-indexed)
    pub line: u64,
}

impl IncludeReference {
    pub fn basename(&self) -> &str {
        basename(&self.target)
    }
}

/// Why a candidate file was left out of the rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Content is not valid UTF-8
    NotText,
    /// Reading or writing the file failed
    Io(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotText => write!(f, "not valid UTF-8 text"),
            Self::Io(msg) => write!(f, "{msg}"),
        }
    }
}

/// What the rewrite pass did to a single candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one reference was replaced and the file was written back
    Rewritten { references: usize },
    /// No reference matched; the file was not touched
    Unchanged,
    /// The file could not be read or written and was passed over
    Skipped { reason: SkipReason },
}

/// Per-file outcome of a rewrite pass, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Collects the outcome of every candidate file instead of failing the pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    entries: Vec<FileEntry>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record<P: Into<PathBuf>>(&mut self, path: P, outcome: FileOutcome) {
        self.entries.push(FileEntry {
            path: path.into(),
            outcome,
        });
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Number of candidate files visited
    pub fn scanned(&self) -> usize {
        self.entries.len()
    }

    pub fn rewritten(&self) -> usize {
        self.rewritten_paths().count()
    }

    pub fn unchanged(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome == FileOutcome::Unchanged)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, FileOutcome::Skipped { .. }))
            .count()
    }

    /// Total number of replaced tokens across all rewritten files
    pub fn references(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match entry.outcome {
                FileOutcome::Rewritten { references } => references,
                _ => 0,
            })
            .sum()
    }

    pub fn rewritten_paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().filter_map(|entry| match entry.outcome {
            FileOutcome::Rewritten { .. } => Some(entry.path.as_path()),
            _ => None,
        })
    }

    pub fn outcome_for(&self, path: &Path) -> Option<&FileOutcome> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| &entry.outcome)
    }
}
