//! Command-line interface layer.

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{extract::extract, find::find, init::init, lookup::lookup};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Init) => init(),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Find(cmd)) => find(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        None => Ok(ExitStatus::Success),
    }
}
