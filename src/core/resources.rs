//! Per-locale JSON resource files.
//!
//! Layout on disk is `<messages_root>/<locale>/<stem>.json`, one file per source
//! file and locale. Reading tolerates missing and empty files, writing always
//! produces pretty-printed JSON with a trailing newline.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::key_path::{self, KeyPath};
use super::merge::merge_into;
use super::node::{TranslationMap, TranslationNode};
use super::search::find_key_by_text;

/// What an insert did to the key it targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
    Unchanged,
}

impl KeyAction {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
            KeyAction::Unchanged => "unchanged",
        }
    }
}

/// The resource file name for a source file: its stem with a `.json` extension.
///
/// Examples:
/// - "src/views/home.vue" -> "home.json"
/// - "api.client.ts" -> "api.client.json"
pub fn resource_file_name(source: impl AsRef<Path>) -> Result<String> {
    let source = source.as_ref();
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .with_context(|| format!("Cannot derive a resource file name from {:?}", source))?;
    Ok(format!("{}.json", stem))
}

/// List locale directories under `messages_root`, sorted by name.
pub fn discover_locales(messages_root: impl AsRef<Path>) -> Result<Vec<String>> {
    let messages_root = messages_root.as_ref();

    if !messages_root.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .i18nrc.json 'messagesRoot' setting.",
            messages_root.display()
        );
    }

    if !messages_root.is_dir() {
        bail!("'{}' is not a directory.", messages_root.display());
    }

    let mut locales = Vec::new();
    for entry in fs::read_dir(messages_root)? {
        let path = entry?.path();
        if path.is_dir()
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            locales.push(name.to_string());
        }
    }
    locales.sort();
    Ok(locales)
}

/// One locale's resource file.
#[derive(Debug)]
pub struct ResourceFile {
    locale: String,
    file_path: PathBuf,
    root: TranslationMap,
    exists: bool,
}

impl ResourceFile {
    /// Open a resource file. Missing or blank files start out empty.
    pub fn open(path: &Path, locale: &str) -> Result<Self> {
        let exists = path.exists();
        let root = if exists {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            parse_resource(&content)
                .with_context(|| format!("Failed to parse JSON: {}", path.display()))?
        } else {
            TranslationMap::new()
        };
        debug!(locale, path = %path.display(), exists, "opened resource file");

        Ok(Self {
            locale: locale.to_string(),
            file_path: path.to_path_buf(),
            root,
            exists,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn root(&self) -> &TranslationMap {
        &self.root
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        key_path::lookup_str(key, &self.root)
    }

    pub fn resolve(&self, key: &str) -> Option<&TranslationNode> {
        key_path::resolve(&KeyPath::parse(key), &self.root)
    }

    /// Where writing `key` would clobber an existing value, if anywhere.
    ///
    /// That is the key itself when anything other than an empty placeholder
    /// sits at it, or a shorter prefix of it holding a text or other non-map
    /// value.
    pub fn taken_at(&self, key: &str) -> Option<(String, &TranslationNode)> {
        let path = KeyPath::parse(key);
        if let Some(node) = key_path::resolve(&path, &self.root) {
            return (!node.is_blank()).then(|| (key.to_string(), node));
        }
        key_path::blocking_prefix(&path, &self.root)
            .filter(|(_, node)| !node.is_blank())
            .map(|(prefix, node)| (prefix.to_string(), node))
    }

    pub fn is_taken(&self, key: &str) -> bool {
        self.taken_at(key).is_some()
    }

    /// What [`ResourceFile::insert`] would report, without changing anything.
    pub fn action_for(&self, key: &str, value: &str) -> KeyAction {
        let path = KeyPath::parse(key);
        match key_path::resolve(&path, &self.root) {
            Some(node) if node.as_text() == Some(value) => KeyAction::Unchanged,
            Some(_) => KeyAction::Updated,
            None if key_path::blocking_prefix(&path, &self.root).is_some() => KeyAction::Updated,
            None => KeyAction::Added,
        }
    }

    /// Merge `value` into the tree at `key`.
    pub fn insert(&mut self, key: &str, value: &str) -> KeyAction {
        let action = self.action_for(key, value);
        merge_into(&mut self.root, key_path::build_str(key, value));
        action
    }

    pub fn find_key_by_text(&self, text: &str) -> Option<String> {
        find_key_by_text(&self.root, text)
    }

    pub fn save(&mut self) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut content =
            serde_json::to_string_pretty(&self.root).context("Failed to serialize JSON")?;
        if !content.ends_with('\n') {
            content.push('\n');
        }

        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;
        self.exists = true;
        debug!(locale = %self.locale, path = %self.file_path.display(), "saved resource file");
        Ok(())
    }
}

fn parse_resource(content: &str) -> Result<TranslationMap> {
    if content.trim().is_empty() {
        return Ok(TranslationMap::new());
    }
    match serde_json::from_str::<TranslationNode>(content)? {
        TranslationNode::Node(map) => Ok(map),
        _ => bail!("Resource file root must be a JSON object"),
    }
}

/// A match found by reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    pub key: String,
    pub locale: String,
}

/// A locale in which a key is already taken.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyConflict {
    pub locale: String,
    pub file_path: PathBuf,
    /// Where the existing value sits: the requested key or a prefix of it.
    pub key: String,
    /// The existing text, or `None` when the key holds a subtree or non-text value.
    pub existing: Option<String>,
}

/// The same resource file across every locale.
#[derive(Debug)]
pub struct ResourceSet {
    file_name: String,
    files: Vec<ResourceFile>,
}

impl ResourceSet {
    pub fn load(messages_root: &Path, locales: &[String], file_name: &str) -> Result<Self> {
        let files = locales
            .iter()
            .map(|locale| ResourceFile::open(&messages_root.join(locale).join(file_name), locale))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            file_name: file_name.to_string(),
            files,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn files(&self) -> &[ResourceFile] {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut [ResourceFile] {
        &mut self.files
    }

    /// Search locales in order for a leaf equal to `text`.
    pub fn find_by_text(&self, text: &str) -> Option<TextMatch> {
        self.files.iter().find_map(|file| {
            file.find_key_by_text(text).map(|key| TextMatch {
                key,
                locale: file.locale().to_string(),
            })
        })
    }

    /// Every locale where `key` is already taken.
    pub fn existing(&self, key: &str) -> Vec<KeyConflict> {
        self.files
            .iter()
            .filter_map(|file| {
                let (at, node) = file.taken_at(key)?;
                Some(KeyConflict {
                    locale: file.locale().to_string(),
                    file_path: file.file_path().to_path_buf(),
                    key: at,
                    existing: node.as_text().map(str::to_string),
                })
            })
            .collect()
    }
}
