use std::process::ExitCode;

use clap::Parser;
use i18n_extract::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    i18n_extract::logging::init(args.verbose());

    match i18n_extract::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
