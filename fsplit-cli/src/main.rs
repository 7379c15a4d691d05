//! `fsplit` binary entry point

use clap::Parser;
use fsplit_cli::commands::SplitArgs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = SplitArgs::parse();

    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fsplit: {err:#}");
            ExitCode::FAILURE
        }
    }
}
