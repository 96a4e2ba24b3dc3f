use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::config::{Config, load_config, validate_locale};
use crate::core::{ResourceSet, discover_locales, resource_file_name};

/// Everything a resource-file command needs, resolved from args and config.
///
/// Command line flags win over `.i18nrc.json`, which wins over defaults.
#[derive(Debug)]
pub struct ProjectContext {
    pub config: Config,
    pub source: PathBuf,
    pub resources: ResourceSet,
}

impl ProjectContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let config_result = load_config(&args.path)?;
        match &config_result.path {
            Some(path) => debug!(path = %path.display(), "loaded config"),
            None => debug!("no config file found, using defaults"),
        }
        config_result.config.check_source(&args.file)?;

        // `messagesRoot` is relative to the directory holding the config file.
        let messages_root = match &args.messages_root {
            Some(root) => root.clone(),
            None => {
                let base = config_result.base_dir(&args.path);
                if base == Path::new(".") {
                    PathBuf::from(&config_result.config.messages_root)
                } else {
                    base.join(&config_result.config.messages_root)
                }
            }
        };
        let config = config_result.config;

        let locales = if !args.locales.is_empty() {
            for locale in &args.locales {
                validate_locale(locale)?;
            }
            args.locales.clone()
        } else if !config.locales.is_empty() {
            config.locales.clone()
        } else {
            discover_locales(&messages_root)?
        };
        if locales.is_empty() {
            bail!(
                "No locales found in '{}'.\n\
                 Hint: Create one directory per language or set 'locales' in .i18nrc.json.",
                messages_root.display()
            );
        }
        debug!(messages_root = %messages_root.display(), ?locales, "resolved locales");

        let file_name = resource_file_name(&args.file)?;
        let resources = ResourceSet::load(&messages_root, &locales, &file_name)?;

        Ok(Self {
            config,
            source: args.file.clone(),
            resources,
        })
    }
}
