//! Extraction planning.
//!
//! Given a piece of selected text, decide whether it can reference an existing
//! translation, must be created under a new key, or collides with keys that are
//! already taken. Planning reads resource files but never writes them;
//! [`apply_plan`] does the writing.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::key_path::KeyPath;
use super::resources::{KeyAction, KeyConflict, ResourceSet};

/// How the lookup call replacing the text is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallStyle {
    /// `{{$t("key")}}`, for text inside a template.
    #[default]
    Template,
    /// `this.$t("key")`, for string literals inside script code.
    Script,
}

impl CallStyle {
    pub fn render(self, key: &str) -> String {
        match self {
            CallStyle::Template => format!("{{{{$t(\"{}\")}}}}", key),
            CallStyle::Script => format!("this.$t(\"{}\")", key),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CallStyle::Template => "template",
            CallStyle::Script => "script",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExtractRequest<'a> {
    pub text: &'a str,
    pub key: Option<&'a str>,
    pub style: CallStyle,
    pub overwrite: bool,
}

/// One locale's pending write.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedWrite {
    pub locale: String,
    pub file_path: PathBuf,
    pub action: KeyAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractPlan {
    /// The text already exists under `key`; only the source changes.
    Reference {
        key: String,
        locale: String,
        replacement: String,
    },
    /// Store the text under `key` in every locale.
    Create {
        key: String,
        text: String,
        replacement: String,
        writes: Vec<PlannedWrite>,
    },
    /// `key` is taken in some locales and overwriting was not requested.
    Conflict {
        key: String,
        conflicts: Vec<KeyConflict>,
    },
}

impl ExtractPlan {
    /// The text that should replace the selection, if the plan can proceed.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            ExtractPlan::Reference { replacement, .. } | ExtractPlan::Create { replacement, .. } => {
                Some(replacement.as_str())
            }
            ExtractPlan::Conflict { .. } => None,
        }
    }
}

pub fn plan_extraction(resources: &ResourceSet, request: &ExtractRequest<'_>) -> Result<ExtractPlan> {
    if request.text.trim().is_empty() {
        bail!("Nothing to extract: the selected text is empty.");
    }

    let Some(key) = request.key else {
        return match resources.find_by_text(request.text) {
            Some(found) => {
                debug!(key = %found.key, locale = %found.locale, "referencing existing translation");
                Ok(ExtractPlan::Reference {
                    replacement: request.style.render(&found.key),
                    key: found.key,
                    locale: found.locale,
                })
            }
            None => bail!(
                "No existing translation matches {:?} in {}.\n\
                 Hint: Pass --key to create one, for example: --key lang.demo.key",
                request.text,
                resources.file_name()
            ),
        };
    };

    if key.is_empty() {
        bail!("The translation key must not be empty.");
    }
    if KeyPath::parse(key).has_empty_segment() {
        bail!("Invalid translation key {:?}: every segment between dots must be non-empty.", key);
    }

    let conflicts = resources.existing(key);
    if !conflicts.is_empty() && !request.overwrite {
        debug!(key, locales = conflicts.len(), "key already taken");
        return Ok(ExtractPlan::Conflict {
            key: key.to_string(),
            conflicts,
        });
    }

    let writes = resources
        .files()
        .iter()
        .map(|file| PlannedWrite {
            locale: file.locale().to_string(),
            file_path: file.file_path().to_path_buf(),
            action: file.action_for(key, request.text),
        })
        .collect();
    debug!(key, overwrite = request.overwrite, "creating translation");

    Ok(ExtractPlan::Create {
        key: key.to_string(),
        text: request.text.to_string(),
        replacement: request.style.render(key),
        writes,
    })
}

/// Write a `Create` plan to every locale. Other plans leave files untouched.
///
/// Returns the number of files written; files whose content would not change
/// are skipped.
pub fn apply_plan(resources: &mut ResourceSet, plan: &ExtractPlan) -> Result<usize> {
    let ExtractPlan::Create { key, text, .. } = plan else {
        return Ok(0);
    };

    let mut written = 0;
    for file in resources.files_mut() {
        if file.insert(key, text) == KeyAction::Unchanged && file.exists() {
            continue;
        }
        file.save()?;
        written += 1;
    }
    Ok(written)
}
