//! lint-filter CLI entry point

use clap::Parser;
use lint_filter::cli::{Cli, common, run};
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and exit successfully
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(common::EXIT_ERROR);
        }
    };
    common::init_logging(cli.verbose);

    let exit_code = run::run_filter(&cli);

    process::exit(exit_code);
}
