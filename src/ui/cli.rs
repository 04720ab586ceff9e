// Command-line interface definitions and parsing for relink and ifdef-wrap

use crate::config::CliConfig;
use crate::core::constants::{matching, output_formats};
use clap::Parser;

/// Move a source file and rewrite the include directives that reference it.
///
/// Every .c, .h, .cpp, .hpp, .txt and .inl file under the directory one level
/// above the current directory is scanned.
#[derive(Parser, Debug)]
#[command(name = "relink", version, long_about = None)]
pub struct RelinkCli {
    /// Old path and new path of the file to move
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    // Matching
    /// How include tokens are compared to the old path (default: basename)
    #[arg(long = "match", value_name = "MODE", value_parser = matching::ALL, help_heading = "Matching")]
    pub match_mode: Option<String>,

    /// Report what would change without moving or writing anything
    #[arg(long, help_heading = "Matching")]
    pub dry_run: bool,

    // Output & Verbosity
    /// Suppress status output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

impl RelinkCli {
    /// The old and new path, when exactly two were given.
    pub fn path_pair(&self) -> Option<(&str, &str)> {
        match self.paths.as_slice() {
            [old_path, new_path] => Some((old_path.as_str(), new_path.as_str())),
            _ => None,
        }
    }
}

/// Wrap a file's contents in an #ifdef block.
#[derive(Parser, Debug)]
#[command(name = "ifdef-wrap", version, long_about = None)]
pub struct IfdefWrapCli {
    /// Guard token and file path
    #[arg(value_name = "ARG")]
    pub args: Vec<String>,

    /// Suppress logging
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl IfdefWrapCli {
    /// The guard token and file path, when exactly two were given.
    pub fn token_and_file(&self) -> Option<(&str, &str)> {
        match self.args.as_slice() {
            [token, file] => Some((token.as_str(), file.as_str())),
            _ => None,
        }
    }
}

/// Convert the derive-based CLI into the config overlay
pub fn cli_to_config(cli: &RelinkCli) -> CliConfig {
    CliConfig {
        match_mode: cli.match_mode.clone(),
        dry_run: cli.dry_run,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
