//! `matrix-norm` - times one partitioned row-sum reduction and prints a
//! `size;partitions;elapsed_us` record for benchmark collection scripts.

mod args;
mod error;
mod logging;
mod report;
mod run;

use std::process::ExitCode;

use clap::Parser;

use crate::args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    match run::run(&cli) {
        Ok(record) => {
            println!("{record}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
