//! Application settings loaded from `config.yaml`.
//!
//! Settings are validated once at startup and read-only afterwards; nothing
//! in the pipeline mutates them. The batch outcome (including identifiers
//! that could not be fetched) is carried by the driver's run summary, not
//! by configuration state.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default config file, next to the working directory. Override with the
/// `MOBFORGE_CONFIG` environment variable.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(PathBuf),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Divine-Pride API access settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DivinePrideSettings {
    #[serde(default)]
    pub api_base_url: String,
    #[serde(default = "default_monster_api_prefix")]
    pub monster_api_prefix: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_server")]
    pub server: String,
}

fn default_monster_api_prefix() -> String {
    "Monster".to_string()
}

fn default_server() -> String {
    "Renewal".to_string()
}

/// The three output artifacts of a batch run.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputPaths {
    #[serde(default)]
    pub mob_db: PathBuf,
    #[serde(default)]
    pub spawns: PathBuf,
    #[serde(default)]
    pub skills: PathBuf,
}

/// All configuration consumed by the converter.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Item catalog files, searched in order on drop resolution.
    #[serde(default)]
    pub item_db_paths: Vec<PathBuf>,
    pub output: OutputPaths,
    pub divine_pride: DivinePrideSettings,
    #[serde(default = "default_mvp_damage_taken")]
    pub mvp_damage_taken: i64,
    #[serde(default)]
    pub debug: bool,
}

fn default_mvp_damage_taken() -> i64 {
    10
}

impl Settings {
    /// Loads and validates settings from the given file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let raw = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads from `MOBFORGE_CONFIG`, falling back to [`DEFAULT_CONFIG_PATH`].
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let path =
            std::env::var("MOBFORGE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.output.mob_db.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output.mob_db is required".into()));
        }
        if self.output.spawns.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output.spawns is required".into()));
        }
        if self.output.skills.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output.skills is required".into()));
        }
        if self.divine_pride.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "divine_pride.api_base_url is required".into(),
            ));
        }
        if self.divine_pride.monster_api_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "divine_pride.monster_api_prefix is required".into(),
            ));
        }

        if self.divine_pride.api_key.as_deref().is_none_or(str::is_empty) {
            tracing::warn!("no divine_pride.api_key configured, requests may be throttled");
        }

        Ok(())
    }
}
