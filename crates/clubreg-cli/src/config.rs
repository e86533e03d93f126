//! CLI configuration
//!
//! Settings come from, in decreasing precedence: command-line flags, the
//! `CLUBREG_*` environment variables (both handled by clap), the TOML config
//! file, and built-in defaults.
//!
//! ```toml
//! [storage]
//! backend = "sqlite"
//! path = ".clubreg/store.db"
//!
//! [logging]
//! format = "pretty"
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use clubreg_core::errors::{ExError, ExErrorKind};
use serde::Deserialize;

/// Config file read when `--config` is not given; absent is fine
pub const DEFAULT_CONFIG_PATH: &str = ".clubreg/config.toml";

const DEFAULT_DB_PATH: &str = ".clubreg/store.db";
const DEFAULT_FILES_DIR: &str = ".clubreg/store";

type Result<T> = std::result::Result<T, ExError>;

/// Key-value backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// SQLite database file
    #[default]
    Sqlite,
    /// One JSON file per key in a directory
    Files,
    /// Nothing persisted past the current invocation
    Memory,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: Backend,
    /// Database file, or directory for the files backend
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Contents of the TOML config file
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FileConfig {
    /// Parse and validate TOML config content
    ///
    /// # Errors
    ///
    /// `Config` when the TOML is malformed or a value is invalid.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
        if let Some(path) = &config.storage.path {
            validate_path(path)?;
        }
        Ok(config)
    }

    /// Load `explicit`, or the default config file when it exists
    ///
    /// # Errors
    ///
    /// `Config` when an explicitly named file cannot be read or either file
    /// fails to parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            config_error(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse_toml(&content).map_err(|e| e.with_entity_id(path.display().to_string()))
    }
}

/// Values given on the command line or through the environment
#[derive(Debug, Default)]
pub struct Overrides {
    pub db: Option<PathBuf>,
    pub backend: Option<Backend>,
    pub log_format: Option<LogFormat>,
}

/// Effective settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend: Backend,
    pub path: PathBuf,
    pub log_format: LogFormat,
}

impl Settings {
    /// Layer `overrides` over `file`, filling in defaults
    ///
    /// # Errors
    ///
    /// `Config` when the resulting storage path is empty.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self> {
        let backend = overrides.backend.unwrap_or(file.storage.backend);
        let path = overrides
            .db
            .or(file.storage.path)
            .unwrap_or_else(|| default_path(backend));
        validate_path(&path)?;

        Ok(Self {
            backend,
            path,
            log_format: overrides.log_format.unwrap_or(file.logging.format),
        })
    }
}

fn default_path(backend: Backend) -> PathBuf {
    match backend {
        Backend::Files => PathBuf::from(DEFAULT_FILES_DIR),
        Backend::Sqlite | Backend::Memory => PathBuf::from(DEFAULT_DB_PATH),
    }
}

fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(config_error("storage path cannot be empty"));
    }
    Ok(())
}

fn config_error(message: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("load_config")
        .with_message(message)
}
