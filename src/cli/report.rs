//! Output formatting for CLI commands.
//!
//! Every printer takes a writer so output can be captured in tests. The
//! replacement text of an extraction is always printed last and uncolored so
//! wrapper scripts can pick it up with `tail -n 1`.

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{KeyConflict, PlannedWrite, ResourceFile};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const MISSING: &str = "(missing)";
const NOT_TEXT: &str = "(not text)";

/// Pad `text` to `width` display columns (CJK-aware).
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn locale_width<'a>(locales: impl Iterator<Item = &'a str>) -> usize {
    locales.map(|locale| locale.width()).max().unwrap_or(0)
}

/// Print the value of `key` in every locale. Returns how many locales had it.
pub fn print_lookup_to<W: Write>(key: &str, files: &[ResourceFile], writer: &mut W) -> usize {
    let width = locale_width(files.iter().map(ResourceFile::locale));
    let mut found = 0;

    for file in files {
        let locale = pad(file.locale(), width);
        match (file.lookup(key), file.resolve(key)) {
            (Some(text), _) => {
                found += 1;
                let _ = writeln!(writer, "  {}  {}", locale.cyan(), text);
            }
            (None, Some(_)) => {
                let _ = writeln!(writer, "  {}  {}", locale.cyan(), NOT_TEXT.yellow());
            }
            (None, None) => {
                let _ = writeln!(writer, "  {}  {}", locale.cyan(), MISSING.dimmed());
            }
        }
    }
    found
}

pub fn print_lookup_header_to<W: Write>(key: &str, file_name: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} in {}", key.bold(), file_name);
}

pub fn print_found_to<W: Write>(text: &str, key: &str, locale: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {:?} is {} ({})",
        SUCCESS_MARK.green(),
        text,
        key.bold(),
        locale
    );
}

pub fn print_not_found_to<W: Write>(text: &str, file_name: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} No translation matches {:?} in {}",
        FAILURE_MARK.red(),
        text,
        file_name
    );
}

pub fn print_reference_to<W: Write>(key: &str, locale: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} Found existing key {} ({})",
        SUCCESS_MARK.green(),
        key.bold(),
        locale
    );
}

/// Print the files a create plan touches.
pub fn print_writes_to<W: Write>(
    key: &str,
    writes: &[PlannedWrite],
    is_apply: bool,
    writer: &mut W,
) {
    let verb = if is_apply {
        "Wrote".green().bold()
    } else {
        "Would write".yellow().bold()
    };
    let _ = writeln!(
        writer,
        "{} {} to {} file(s):",
        verb,
        key.bold(),
        writes.len()
    );

    let width = locale_width(writes.iter().map(|w| w.locale.as_str()));
    for write in writes {
        let _ = writeln!(
            writer,
            "  {}  {} ({})",
            pad(&write.locale, width).cyan(),
            write.file_path.display(),
            write.action.as_str()
        );
    }

    if !is_apply {
        let _ = writeln!(writer, "Run with {} to write these files.", "--apply".cyan());
    }
}

pub fn print_conflicts_to<W: Write>(key: &str, conflicts: &[KeyConflict], writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} Key {} already exists:",
        FAILURE_MARK.red(),
        key.bold()
    );

    let width = locale_width(conflicts.iter().map(|c| c.locale.as_str()));
    for conflict in conflicts {
        let existing = match &conflict.existing {
            Some(text) => text.as_str().normal(),
            None => NOT_TEXT.yellow(),
        };
        let locale = pad(&conflict.locale, width);
        if conflict.key == key {
            let _ = writeln!(writer, "  {}  {}", locale.cyan(), existing);
        } else {
            let _ = writeln!(
                writer,
                "  {}  {} (at {})",
                locale.cyan(),
                existing,
                conflict.key.bold()
            );
        }
    }
    let _ = writeln!(
        writer,
        "Use {} to replace it in every locale.",
        "--overwrite".cyan()
    );
}

pub fn print_source_rewritten_to<W: Write>(source: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        "Rewrote".green().bold(),
        source.display()
    );
}

pub fn print_source_untouched_to<W: Write>(source: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} text not found in {}, nothing was written",
        "warning:".bold().yellow(),
        source.display()
    );
}

pub fn print_replacement_to<W: Write>(replacement: &str, writer: &mut W) {
    let _ = writeln!(writer, "{}", replacement);
}
