use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::CallStyle;

pub const CONFIG_FILE_NAME: &str = ".i18nrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root", alias = "configPath")]
    pub messages_root: String,
    /// Locale directory names. Empty means every subdirectory of `messages_root`.
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default)]
    pub default_style: CallStyle,
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
}

fn default_messages_root() -> String {
    "./locales".to_string()
}

fn default_source_extensions() -> Vec<String> {
    ["vue", "js", "ts"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            locales: Vec::new(),
            default_style: CallStyle::default(),
            source_extensions: default_source_extensions(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Locales go through [`validate_locale`]. Extensions are compared without
    /// their leading dot.
    pub fn validate(&self) -> Result<()> {
        for locale in &self.locales {
            validate_locale(locale)?;
        }

        for ext in &self.source_extensions {
            if ext.is_empty() || ext.starts_with('.') {
                bail!(
                    "Invalid extension in 'sourceExtensions': \"{}\" (write it without the leading dot)",
                    ext
                );
            }
        }

        Ok(())
    }

    /// Check that `source` is a file type this project extracts from.
    pub fn check_source(&self, source: &Path) -> Result<()> {
        let ext = source.extension().and_then(|e| e.to_str()).unwrap_or("");
        if self.source_extensions.iter().any(|allowed| allowed == ext) {
            return Ok(());
        }
        bail!(
            "Unsupported source file {:?}.\n\
             Hint: Supported extensions are [{}]; see 'sourceExtensions' in {}.",
            source,
            self.source_extensions.join(", "),
            CONFIG_FILE_NAME
        )
    }
}

/// Locale names become directory names under `messagesRoot`, so they must be
/// non-empty and unable to step out of it.
pub fn validate_locale(locale: &str) -> Result<()> {
    if locale.is_empty() || locale.contains(['/', '\\']) || locale == "." || locale == ".." {
        bail!("Invalid locale in 'locales': \"{}\"", locale);
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` looking for the config file, stopping at the
/// repository root. A relative `start_dir` is made absolute first so the walk
/// can climb past it.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config came from, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// The directory relative config paths are resolved against: the one
    /// holding the config file, or `fallback` when defaults are in use.
    pub fn base_dir<'a>(&'a self, fallback: &'a Path) -> &'a Path {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(fallback)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
