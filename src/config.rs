//! Tracker configuration.
//!
//! Resolution order, later sources winning:
//! 1. built-in defaults (`projects.json` in the working directory)
//! 2. a TOML file: `--config <path>`, else `review-tracker.toml` in the
//!    working directory, else `<config dir>/review-tracker/config.toml`
//! 3. `REVIEW_TRACKER_DATA_FILE` / `REVIEW_TRACKER_BROWSER`
//! 4. `--data-file` (applied by the caller through [`TrackerConfig::with_data_file`])

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::constants::{DEFAULT_DATA_FILE, LOCAL_CONFIG_FILE};

pub const DATA_FILE_ENV: &str = "REVIEW_TRACKER_DATA_FILE";
pub const BROWSER_ENV: &str = "REVIEW_TRACKER_BROWSER";

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub data_file: Option<String>,
    pub browser: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Backing JSON file for the project store.
    pub data_file: PathBuf,
    /// Command used to open links; the platform opener when unset.
    pub browser: Option<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            browser: None,
        }
    }
}

impl TrackerConfig {
    /// Resolve defaults, the config file, and the environment.
    ///
    /// An explicit `config_path` must exist. Discovered files are optional,
    /// but any file that is found has to parse.
    pub fn resolve(config_path: Option<&Path>) -> TrackerResult<Self> {
        let file = match config_path {
            Some(path) => Some(read_config_file(path)?),
            None => discover_config_file()
                .map(|path| read_config_file(&path))
                .transpose()?,
        };

        let mut config = Self::default();
        if let Some(file) = file {
            config.apply_file(file);
        }
        config.apply_env();
        Ok(config)
    }

    /// Override the data file, e.g. from a command-line flag.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(data_file) = non_empty(file.data_file) {
            self.data_file = PathBuf::from(expand_tilde(&data_file));
        }
        if let Some(browser) = non_empty(file.browser) {
            self.browser = Some(browser);
        }
    }

    fn apply_env(&mut self) {
        if let Some(data_file) = non_empty(env::var(DATA_FILE_ENV).ok()) {
            self.data_file = PathBuf::from(expand_tilde(&data_file));
        }
        if let Some(browser) = non_empty(env::var(BROWSER_ENV).ok()) {
            self.browser = Some(browser);
        }
    }
}

/// Parse a config file. Missing or malformed files are `Config` errors.
pub fn read_config_file(path: &Path) -> TrackerResult<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        TrackerError::config(format!("Failed to read {}: {e}", path.display()))
    })?;
    let file: ConfigFile = toml::from_str(&content).map_err(|e| {
        TrackerError::config(format!("Failed to parse {}: {e}", path.display()))
    })?;
    debug!(path = %path.display(), "loaded config file");
    Ok(file)
}

fn discover_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("review-tracker").join("config.toml"))
        .filter(|path| path.is_file())
}

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).display().to_string();
        }
    }
    path.to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
