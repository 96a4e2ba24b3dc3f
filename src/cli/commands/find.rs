use std::io;

use anyhow::Result;

use super::super::args::FindCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_found_to, print_not_found_to};
use super::ProjectContext;

pub fn find(cmd: FindCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let mut out = io::stdout().lock();

    match ctx.resources.find_by_text(&cmd.text) {
        Some(found) => {
            print_found_to(&cmd.text, &found.key, &found.locale, &mut out);
            Ok(ExitStatus::Success)
        }
        None => {
            print_not_found_to(&cmd.text, ctx.resources.file_name(), &mut out);
            Ok(ExitStatus::Failure)
        }
    }
}
