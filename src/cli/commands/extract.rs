use std::{fs, io};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::ExtractCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{
    print_conflicts_to, print_reference_to, print_replacement_to, print_source_rewritten_to,
    print_source_untouched_to, print_writes_to,
};
use super::ProjectContext;
use crate::core::{ExtractPlan, ExtractRequest, apply_plan, plan_extraction, rewrite_source};

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let mut ctx = ProjectContext::new(&cmd.common)?;
    let style = cmd.style.unwrap_or(ctx.config.default_style);
    let request = ExtractRequest {
        text: &cmd.text,
        key: cmd.key.as_deref(),
        style,
        overwrite: cmd.overwrite,
    };

    let plan = plan_extraction(&ctx.resources, &request)?;
    let mut out = io::stdout().lock();

    let replacement = match &plan {
        ExtractPlan::Conflict { key, conflicts } => {
            print_conflicts_to(key, conflicts, &mut out);
            return Ok(ExitStatus::Failure);
        }
        plan => match plan.replacement() {
            Some(replacement) => replacement,
            None => return Ok(ExitStatus::Failure),
        },
    };

    // Locate the text before touching any resource file.
    let rewritten = if cmd.write_source {
        let content = fs::read_to_string(&ctx.source)
            .with_context(|| format!("Failed to read file: {}", ctx.source.display()))?;
        match rewrite_source(&content, &cmd.text, replacement, style) {
            Some(rewritten) => Some(rewritten),
            None => {
                print_source_untouched_to(&ctx.source, &mut io::stderr().lock());
                return Ok(ExitStatus::Failure);
            }
        }
    } else {
        None
    };

    match &plan {
        ExtractPlan::Reference { key, locale, .. } => {
            print_reference_to(key, locale, &mut out);
        }
        ExtractPlan::Create { key, writes, .. } => {
            if cmd.apply {
                let written = apply_plan(&mut ctx.resources, &plan)?;
                debug!(written, "resource files written");
            }
            print_writes_to(key, writes, cmd.apply, &mut out);
        }
        ExtractPlan::Conflict { .. } => {}
    }

    if let Some(rewritten) = rewritten {
        fs::write(&ctx.source, rewritten)
            .with_context(|| format!("Failed to write file: {}", ctx.source.display()))?;
        print_source_rewritten_to(&ctx.source, &mut out);
    }

    print_replacement_to(replacement, &mut out);
    Ok(ExitStatus::Success)
}
