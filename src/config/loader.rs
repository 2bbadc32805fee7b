//! Settings resolution: built-in defaults, then the TOML file, then the
//! environment, then command-line flags.

use crate::fetch::ResponseOrdering;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Catalog endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.elderscrollslegends.io/v1/cards";

/// Cards requested per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ESLCARDS_CONFIG";

/// Environment variable overriding the catalog endpoint.
pub const BASE_URL_ENV_VAR: &str = "ESLCARDS_BASE_URL";

/// Why a config file could not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The given path could not be turned into a file location.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// The file exists but could not be read.
    #[error("Cannot read config file {path}: {reason}")]
    ReadError {
        /// File that was being read.
        path: PathBuf,
        /// I/O error text.
        reason: String,
    },

    /// The file is not valid TOML or names a setting that does not exist.
    #[error("Bad config file {path}: {reason}")]
    ParseError {
        /// File that was parsed.
        path: PathBuf,
        /// Parser message, including line and column.
        reason: String,
    },
}

/// Contents of `config.toml`. Every key may be left out.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Catalog endpoint.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Cards requested per page.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Per-request timeout in seconds. Absent means no timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// How replies within one search are applied: "sequenced" or "arrival".
    #[serde(default)]
    pub response_ordering: Option<ResponseOrdering>,

    /// Show the last fetch error in the status bar.
    #[serde(default)]
    pub show_fetch_errors: Option<bool>,

    /// Where tracing output goes.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Settings the application runs with, every value filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Catalog endpoint.
    pub base_url: String,
    /// Cards requested per page.
    pub page_size: u32,
    /// Per-request timeout, if any.
    pub request_timeout: Option<Duration>,
    /// Reply ordering within a search generation.
    pub response_ordering: ResponseOrdering,
    /// Show the last fetch error in the status bar.
    pub show_fetch_errors: bool,
    /// Where tracing output goes.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: None,
            response_ordering: ResponseOrdering::default(),
            show_fetch_errors: false,
            log_file_path: default_log_path(),
        }
    }
}

/// `eslcards.log` under the platform state directory
/// (`~/.local/state/eslcards/` on Linux), or in the working directory when
/// the platform has none.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .map(|dir| dir.join("eslcards").join("eslcards.log"))
        .unwrap_or_else(|| PathBuf::from("eslcards.log"))
}

/// Read one config file. A file that does not exist yields `Ok(None)`.
///
/// # Errors
///
/// [`ConfigError::ReadError`] or [`ConfigError::ParseError`] when the file
/// is present but unusable.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|err| ConfigError::ReadError {
        reason: err.to_string(),
        path: path.clone(),
    })?;

    toml::from_str::<ConfigFile>(&contents)
        .map(Some)
        .map_err(|err| ConfigError::ParseError {
            reason: err.to_string(),
            path,
        })
}

/// `eslcards/config.toml` under the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("eslcards").join("config.toml"))
}

/// Pick the config file and read it.
///
/// `--config` wins over `ESLCARDS_CONFIG`, which wins over
/// [`default_config_path`]. Only the chosen file is read.
///
/// # Errors
///
/// Same as [`load_config_file`].
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

/// Fill every key the file leaves out from the defaults. A page size of
/// zero counts as left out.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let config = match config_file {
        Some(config) => config,
        None => return defaults,
    };

    ResolvedConfig {
        base_url: config.base_url.unwrap_or(defaults.base_url),
        page_size: config
            .page_size
            .filter(|&size| size > 0)
            .unwrap_or(defaults.page_size),
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .or(defaults.request_timeout),
        response_ordering: config
            .response_ordering
            .unwrap_or(defaults.response_ordering),
        show_fetch_errors: config
            .show_fetch_errors
            .unwrap_or(defaults.show_fetch_errors),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// `ESLCARDS_BASE_URL`, when set and non-empty, replaces the endpoint.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    match std::env::var(BASE_URL_ENV_VAR) {
        Ok(base_url) if !base_url.is_empty() => config.base_url = base_url,
        _ => {}
    }
    config
}

/// Flags given on the command line replace whatever was resolved so far.
/// `None` means the flag was not passed.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    base_url_override: Option<String>,
    page_size_override: Option<u32>,
) -> ResolvedConfig {
    if let Some(base_url) = base_url_override {
        config.base_url = base_url;
    }

    if let Some(page_size) = page_size_override.filter(|&size| size > 0) {
        config.page_size = page_size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
