use clap::Parser;
use relink::config::{CliConfig, Config};
use relink::core::constants::{exit_codes, output_formats, usage};
use relink::core::types::MoveRequest;
use relink::discovery::current_scan_root;
use relink::relocate::{relocate, resolve_request};
use relink::reporting::logging;
use relink::ui::{ProgressReporter, RelinkCli, RunSummary, cli_to_config};

fn main() {
    let cli = RelinkCli::parse();

    // Exactly two positional arguments are accepted
    let Some((old_path, new_path)) = cli.path_pair() else {
        println!("{}", usage::RELINK);
        std::process::exit(exit_codes::FAILURE);
    };

    match run_relink_logic(&cli, old_path, new_path) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

/// Main relocate logic extracted from main() for testing
pub fn run_relink_logic(
    cli: &RelinkCli,
    old_path: &str,
    new_path: &str,
) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;
    let verbose = config.verbose.unwrap_or(false);
    logging::init_logger(verbose, cli_config.quiet);
    logging::log_config_info(&config);

    let request = resolve_request(&MoveRequest::new(old_path, new_path)?);
    let scan_root = current_scan_root()?;
    let options = config.relocate_options(cli_config.dry_run)?;

    let text_output = config.output_format() == output_formats::TEXT;
    let mut progress = ProgressReporter::new(text_output && !cli_config.quiet, options.dry_run);

    let report =
        relocate(&request, &scan_root, &options, &mut progress).inspect_err(|e| {
            logging::log_error("Could not relocate file", Some(e));
        })?;

    if config.output_format() == output_formats::JSON {
        let summary = RunSummary::new(&request, &report, options.match_mode, options.dry_run);
        println!("{}", summary.to_json()?);
    }

    Ok(exit_codes::SUCCESS)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations(&std::env::current_dir()?)?
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
