//! Locating, reading and layering `config.toml`.

use crate::layout::layout_params::{DEFAULT_GROUP_PADDING, DEFAULT_TILE_WIDTH};
use crate::layout::DEFAULT_CACHE_CAPACITY;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "RUMMI_BOARD_CONFIG";

/// Environment variable overriding the screen width.
pub const WIDTH_ENV_VAR: &str = "RUMMI_BOARD_WIDTH";

/// Screen width used when nothing else is configured.
pub const DEFAULT_SCREEN_WIDTH: u16 = 80;

const APP_DIR: &str = "rummi-board";

/// A config file that exists but could not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file is present but unreadable (permissions, a directory, ...).
    #[error("Cannot read config {path}: {reason}")]
    ReadError {
        /// Offending file.
        path: PathBuf,
        /// I/O error text.
        reason: String,
    },

    /// Malformed TOML, a wrongly typed value, or an unknown key.
    #[error("Bad config {path}: {reason}")]
    ParseError {
        /// Offending file.
        path: PathBuf,
        /// Deserializer message.
        reason: String,
    },
}

/// On-disk shape of `config.toml`.
///
/// Every key may be omitted. Unknown keys are rejected so typos surface as
/// errors instead of silently falling back to defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Screen width in columns.
    #[serde(default)]
    pub screen_width: Option<u16>,

    /// Columns per tile cell.
    #[serde(default)]
    pub tile_width: Option<u16>,

    /// Border columns per group.
    #[serde(default)]
    pub group_padding: Option<u16>,

    /// Entries kept by each layout/navigation cache.
    #[serde(default)]
    pub cache_capacity: Option<usize>,

    /// Where tracing output goes.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Settings with every layer applied and every gap filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Screen width in columns.
    pub screen_width: u16,
    /// Columns per tile cell.
    pub tile_width: u16,
    /// Border columns per group.
    pub group_padding: u16,
    /// Entries kept by each cache.
    pub cache_capacity: usize,
    /// Where tracing output goes.
    pub log_file_path: PathBuf,
    /// Override values that were rejected while resolving.
    ///
    /// Resolution runs before the subscriber exists, so callers log these
    /// after [`crate::logging::init`].
    pub warnings: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            tile_width: DEFAULT_TILE_WIDTH,
            group_padding: DEFAULT_GROUP_PADDING,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            log_file_path: default_log_path(),
            warnings: Vec::new(),
        }
    }
}

/// `<state_dir>/rummi-board/rummi-board.log`, or `rummi-board.log` in the
/// working directory on platforms without a state directory.
pub fn default_log_path() -> PathBuf {
    let file = format!("{APP_DIR}.log");
    match dirs::state_dir() {
        Some(dir) => dir.join(APP_DIR).join(file),
        None => PathBuf::from(file),
    }
}

/// `<config_dir>/rummi-board/config.toml`, if the platform has a config
/// directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Read and parse one config file.
///
/// A missing file yields `Ok(None)`.
///
/// # Errors
///
/// [`ConfigError::ReadError`] for any other I/O failure and
/// [`ConfigError::ParseError`] when the contents do not deserialize.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.as_ref();

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };

    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Pick the config file to load and load it.
///
/// The first of these that is set wins, and only that one is read:
/// 1. `config_path` (the `--config` flag)
/// 2. the `RUMMI_BOARD_CONFIG` environment variable
/// 3. [`default_config_path`]
///
/// # Errors
///
/// Fails only when the chosen file exists and is unusable.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    let chosen = config_path
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .or_else(default_config_path);

    match chosen {
        Some(path) => load_config_file(path),
        None => Ok(None),
    }
}

/// Fill the gaps in a (possibly absent) config file with defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let file = config_file.unwrap_or_default();

    ResolvedConfig {
        screen_width: file.screen_width.unwrap_or(defaults.screen_width),
        tile_width: file.tile_width.unwrap_or(defaults.tile_width),
        group_padding: file.group_padding.unwrap_or(defaults.group_padding),
        cache_capacity: file.cache_capacity.unwrap_or(defaults.cache_capacity),
        log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
        warnings: Vec::new(),
    }
}

/// Layer `RUMMI_BOARD_WIDTH` over the file settings.
///
/// An unparsable width is ignored and recorded in
/// [`ResolvedConfig::warnings`].
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(WIDTH_ENV_VAR) {
        match raw.trim().parse::<u16>() {
            Ok(width) => config.screen_width = width,
            Err(e) => config
                .warnings
                .push(format!("ignoring invalid {WIDTH_ENV_VAR}={raw:?}: {e}")),
        }
    }

    config
}

/// Layer command-line flags last, over everything else.
pub fn apply_cli_overrides(mut config: ResolvedConfig, width_override: Option<u16>) -> ResolvedConfig {
    if let Some(width) = width_override {
        config.screen_width = width;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
