use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use varlint::args::Args;
use varlint::run;
use varlint::status::ExitStatus;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{}: {err:#}", "Error".red().bold());
            ExitStatus::Error.into()
        }
    }
}
