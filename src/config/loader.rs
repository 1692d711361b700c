use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::core::{DocsignalConfig, SignalConfig};
use crate::errors::SignalError;

/// Name of the configuration file searched for
pub const CONFIG_FILE_NAME: &str = ".docsignal.toml";

/// How many directories, starting with the current one, are searched
pub const MAX_SEARCH_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string.
///
/// Invalid signal settings are replaced with defaults rather than
/// rejected, so a typo in one value never disables extraction.
pub fn parse_and_validate_config(contents: &str) -> Result<DocsignalConfig, SignalError> {
    let mut config = toml::from_str::<DocsignalConfig>(contents)?;

    if let Err(e) = config.signals.validate() {
        log::warn!("Invalid signal settings: {}. Using defaults.", e);
        config.signals = SignalConfig::default();
    }

    Ok(config)
}

/// Load one config file, failing with path context
pub fn load_config_file(path: &Path) -> anyhow::Result<DocsignalConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_and_validate_config(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Candidate config paths, nearest directory first
pub fn candidate_paths(start: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    start
        .ancestors()
        .take(MAX_SEARCH_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// The config at `path`, or `None` when it is missing or unusable.
/// Only a missing file is silent.
pub(crate) fn load_candidate(path: &Path) -> Option<DocsignalConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("Skipping unreadable {}: {}", path.display(), e);
            return None;
        }
    };

    parse_and_validate_config(&contents)
        .inspect(|_| log::debug!("Loaded config from {}", path.display()))
        .inspect_err(|e| log::warn!("Ignoring {}: {}. Using defaults.", path.display(), e))
        .ok()
}

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: &Path) -> DocsignalConfig {
    candidate_paths(start)
        .find_map(|path| load_candidate(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No {} within {} directories of {}. Using default config.",
                CONFIG_FILE_NAME,
                MAX_SEARCH_DEPTH,
                start.display()
            );
            DocsignalConfig::default()
        })
}

pub fn load_config() -> DocsignalConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            DocsignalConfig::default()
        }
    }
}
