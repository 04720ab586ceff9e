use std::path::Path;

use crate::relocate::RelocateProgress;
use crate::ui::output::{moved_line, updated_line};

/// Prints one status line per move and per rewritten file.
pub struct ProgressReporter {
    enabled: bool,
    dry_run: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool, dry_run: bool) -> Self {
        Self { enabled, dry_run }
    }
}

impl RelocateProgress for ProgressReporter {
    fn moved(&mut self, from: &Path, to: &Path) {
        if self.enabled {
            println!("{}", moved_line(from, to, self.dry_run));
        }
    }

    fn updated(&mut self, path: &Path, _references: usize) {
        if self.enabled {
            println!("{}", updated_line(path, self.dry_run));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_disabled() {
        let mut reporter = ProgressReporter::new(false, false);

        reporter.moved(Path::new("a.h"), Path::new("b/a.h"));
        reporter.updated(Path::new("main.c"), 1);

        assert!(!reporter.enabled);
        assert!(!reporter.dry_run);
    }

    #[test]
    fn test_progress_reporter_enabled() {
        let mut reporter = ProgressReporter::new(true, true);

        reporter.moved(Path::new("a.h"), Path::new("b/a.h"));
        reporter.updated(Path::new("main.c"), 1);

        assert!(reporter.enabled);
        assert!(reporter.dry_run);
    }
}
