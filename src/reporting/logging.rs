use crate::config::Config;
use crate::core::types::{MoveRequest, ScanReport, SkipReason};
use crate::discovery::finder::MatchMode;
use log::{debug, error, info, warn};
use std::io::Write;
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Status lines are the only default output
    };

    let initialized = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();

    if initialized.is_ok() {
        debug!("Logger initialized with level: {level:?}");
    }
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let extensions = config.extensions().join(", ");
    let match_mode = config.match_mode.as_deref().unwrap_or("basename");
    let output_format = config.output_format();

    info!("Configuration: match_mode={match_mode}, output_format={output_format}");
    info!("Extensions: {extensions}");
}

/// Log the move about to be attempted
pub fn log_move_request(request: &MoveRequest, dry_run: bool) {
    let prefix = if dry_run { "Dry run: " } else { "" };
    info!(
        "{prefix}moving {} -> {} (basename '{}')",
        request.source().display(),
        request.destination().display(),
        request.old_basename()
    );
}

/// Log the start of a rewrite pass
pub fn log_scan_start<S: AsRef<str>>(scan_root: &Path, extensions: &[S], mode: MatchMode) {
    let extensions: Vec<&str> = extensions.iter().map(AsRef::as_ref).collect();
    info!(
        "Scanning {} for [{}] files, match mode {mode}",
        scan_root.display(),
        extensions.join(", ")
    );
}

/// Log a candidate file passed over by the rewrite pass
pub fn log_skipped_file(path: &Path, reason: &SkipReason) {
    debug!("Skipped {}: {reason}", path.display());
}

/// Log a directory entry the walker could not read
pub fn log_walk_error(err: &ignore::Error) {
    debug!("Skipped unreadable entry: {err}");
}

/// Log rewrite pass completion
pub fn log_scan_summary(report: &ScanReport) {
    let summary = format!(
        "Scan complete: {} file(s) scanned, {} rewritten ({} reference(s)), {} unchanged, {} skipped",
        report.scanned(),
        report.rewritten(),
        report.references(),
        report.unchanged(),
        report.skipped()
    );

    if report.skipped() == 0 {
        info!("{summary}");
    } else {
        warn!("{summary}");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
