use clap::Parser;
use relink::core::constants::{exit_codes, usage};
use relink::guard::wrap_file;
use relink::reporting::logging;
use relink::ui::IfdefWrapCli;
use relink::ui::output::{wrap_error_line, wrapped_line};

use std::path::Path;

fn main() {
    let cli = IfdefWrapCli::parse();

    let Some((token, file)) = cli.token_and_file() else {
        println!("{}", usage::IFDEF_WRAP);
        std::process::exit(exit_codes::FAILURE);
    };

    logging::init_logger(cli.verbose, cli.quiet);

    match wrap_file(token, Path::new(file)) {
        Ok(()) => println!("{}", wrapped_line(file)),
        Err(e) => {
            logging::log_error("Could not wrap file", Some(&e));
            println!("{}", wrap_error_line(file, &e));
            std::process::exit(exit_codes::FAILURE);
        }
    }
}
