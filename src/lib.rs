//! i18n-extract - move hard-coded UI strings into i18n resource files
//!
//! Selected text is stored under a dotted key (`lang.demo.key`) in one nested
//! JSON resource file per locale, and replaced in the source by a lookup call
//! such as `{{$t("lang.demo.key")}}`. Text that is already translated is
//! referenced by its existing key instead.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: `.i18nrc.json` loading and validation
//! - `core`: Key resolution, merging, resource files and extraction planning
//! - `logging`: `tracing` subscriber setup

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
