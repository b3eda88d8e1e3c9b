use std::process::ExitCode;

use clap::Parser;
use declutter::cli::{Cli, run_cli};
use declutter::logging;
use declutter::output::OutputFormatter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            OutputFormatter::error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}
