use std::io;

use anyhow::Result;

use super::super::args::LookupCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_lookup_header_to, print_lookup_to};
use super::ProjectContext;

/// Print `key` for every locale. Fails when no locale has text at the key.
pub fn lookup(cmd: LookupCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let mut out = io::stdout().lock();

    print_lookup_header_to(&cmd.key, ctx.resources.file_name(), &mut out);
    let found = print_lookup_to(&cmd.key, ctx.resources.files(), &mut out);

    Ok(if found > 0 {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}
