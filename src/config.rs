use std::env;
use std::path::PathBuf;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::encodings::Encoding;
use crate::errors::ConfigError;

pub const DEFAULT_ENV_VAR: &str = "SENSOR_SPEC_CONFIG";

fn default_store_dir() -> PathBuf {
    PathBuf::from("remembered_sensors")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
    #[serde(default)]
    pub encoding: Encoding,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            encoding: Encoding::default(),
        }
    }
}

static STORE_CONFIG: OnceCell<StoreConfig> = OnceCell::new();

pub fn load_config_from_default_env() -> Result<StoreConfig, ConfigError> {
    load_config_from_env(DEFAULT_ENV_VAR)
}

pub fn load_config_from_env(var: &str) -> Result<StoreConfig, ConfigError> {
    let raw = env::var(var)?;
    load_config_from_json(raw)
}

pub fn load_config_from_json<T: AsRef<str>>(json_data: T) -> Result<StoreConfig, ConfigError> {
    let config: StoreConfig = serde_json::from_str(json_data.as_ref())?;
    Ok(config)
}

/// Like [`load_config_from_env`], but an unset variable yields [`StoreConfig::default`].
pub fn load_config_from_env_or_default(var: &str) -> Result<StoreConfig, ConfigError> {
    match load_config_from_env(var) {
        Err(ConfigError::EnvVarError(env::VarError::NotPresent)) => Ok(StoreConfig::default()),
        other => other,
    }
}

/// Process-wide config, read from [`DEFAULT_ENV_VAR`] on first use.
pub fn get_config() -> Result<&'static StoreConfig, ConfigError> {
    STORE_CONFIG.get_or_try_init(|| load_config_from_env_or_default(DEFAULT_ENV_VAR))
}
