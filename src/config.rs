use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::display::formatter::UnknownVersionPolicy;
use crate::logging::LOG_FILE_NAME;
use crate::version::catalog::VersionCatalog;
use crate::version::error::CatalogError;

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "VERSION_LABELS_LOG";

/// Log level used when neither the config nor the environment sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Every known game version, in canonical order
    pub catalog: VersionCatalog,
    pub unknown_versions: UnknownVersionPolicy,
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    pub level: String,
    /// Emit JSON lines instead of plain text
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at the default path
    Defaults(PathBuf),
}

impl ConfigSource {
    /// Log which config is in use. Config is read before the subscriber
    /// exists, so callers report it once logging is installed.
    pub fn report(&self, config: &Config) {
        info!(
            "Using config {} ({} catalog entries, unknown versions: {:?})",
            self,
            config.catalog.len(),
            config.unknown_versions
        );
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "from {:?}", path),
            ConfigSource::Defaults(path) => write!(f, "defaults (no file at {:?})", path),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config at `explicit_path`, or the default config path.
    ///
    /// A missing file at the default path falls back to defaults; a missing
    /// explicit path is an error.
    pub fn load(explicit_path: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_from(explicit_path, config_path())
    }

    fn load_from(
        explicit_path: Option<&Path>,
        default_path: PathBuf,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit_path {
            let config = Self::from_file(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        if !default_path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults(default_path)));
        }

        let config = Self::from_file(&default_path)?;
        Ok((config, ConfigSource::File(default_path)))
    }

    /// Replace the catalog, validating it
    pub fn with_catalog<I, S>(mut self, entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog = VersionCatalog::new(entries)?;
        Ok(self)
    }
}

/// Returns the path to the config directory for version-labels.
/// Uses $XDG_CONFIG_HOME/version-labels if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/version-labels,
/// or ./version-labels if neither is available.
pub fn config_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the data directory for version-labels.
/// Uses $XDG_DATA_HOME/version-labels if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-labels,
/// or ./version-labels if neither is available.
pub fn data_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn dir_with_env(xdg_dir: Option<String>, home_dir: Option<PathBuf>, home_subdir: &str) -> PathBuf {
    let base = xdg_dir
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_subdir)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join("version-labels")
}
