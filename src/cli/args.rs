//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Initialize the `.i18nrc.json` configuration file
//! - `lookup`: Show the value of a dotted key in every locale
//! - `find`: Find the key whose value is a given text
//! - `extract`: Move a piece of text into the resource files and print its lookup call

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::CallStyle;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Find(cmd)) => cmd.common.verbose,
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all resource-file commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory used to find .i18nrc.json and resolve messagesRoot
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Source file the text belongs to; selects the <stem>.json resource file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Locale directory names, comma separated (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub locales: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Dotted translation key, e.g. lang.demo.key
    pub key: String,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FindCommand {
    /// Translated text to search for
    pub text: String,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Text to extract
    pub text: String,

    /// Dotted key to store the text under (default: reference an existing translation)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Lookup call style (overrides config file)
    #[arg(long, value_enum)]
    pub style: Option<CallStyle>,

    /// Replace the key in locales where it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Actually write resource files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Also replace the text in the source file (requires --apply)
    #[arg(long, requires = "apply")]
    pub write_source: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .i18nrc.json configuration file
    Init,
    /// Show the value of a dotted key in every locale
    Lookup(LookupCommand),
    /// Find the key whose translation equals the given text
    Find(FindCommand),
    /// Extract text into the locale resource files
    Extract(ExtractCommand),
}
