//! 应用配置
//!
//! Layered with the `config` crate, lowest precedence first: built-in
//! defaults, `~/.gigbook/config.toml` (optional), `GIGBOOK_*` environment
//! variables, command line flags.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::common::constants::files::ENV_PREFIX;
use crate::common::constants::limits::DEFAULT_SEARCH_MAX_COUNT;
use crate::common::constants::location::{DEFAULT_CITY, DEFAULT_STATE};
use crate::error::ConfigError;
use crate::utils::ConfigPaths;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// City the upcoming events screen starts with
    pub default_city: String,
    pub default_state: String,
    /// Saved events (JSON)
    pub data_file: PathBuf,
    /// Upcoming events feed (JSON)
    pub feed_file: PathBuf,
    pub log_file: PathBuf,
    /// Falls back to `RUST_LOG` when unset
    #[serde(default)]
    pub log_level: Option<String>,
    pub search_max_count: usize,
}

/// Values given on the command line; `None` leaves the lower layers alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub data_file: Option<PathBuf>,
    pub feed_file: Option<PathBuf>,
    pub city: Option<String>,
    pub state: Option<String>,
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl AppConfig {
    /// Load from every layer, reading the real process environment
    pub fn load(paths: &ConfigPaths, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Self::load_with_env(paths, overrides, Environment::with_prefix(ENV_PREFIX))
    }

    pub fn load_with_env(
        paths: &ConfigPaths,
        overrides: &ConfigOverrides,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let config_file = overrides
            .config_file
            .clone()
            .unwrap_or_else(|| paths.config_file.clone());
        // an explicitly named file has to exist
        let required = overrides.config_file.is_some();

        let settings = Config::builder()
            .set_default("default_city", DEFAULT_CITY)?
            .set_default("default_state", DEFAULT_STATE)?
            .set_default("data_file", path_value(&paths.data_file))?
            .set_default("feed_file", path_value(&paths.feed_file))?
            .set_default("log_file", path_value(&paths.log_file))?
            .set_default("search_max_count", DEFAULT_SEARCH_MAX_COUNT as i64)?
            .add_source(File::from(config_file.as_path()).required(required))
            .add_source(env)
            .set_override_option("log_level", overrides.log_level.clone())?
            .set_override_option("log_file", overrides.log_file.as_deref().map(path_value))?
            .set_override_option("data_file", overrides.data_file.as_deref().map(path_value))?
            .set_override_option("feed_file", overrides.feed_file.as_deref().map(path_value))?
            .set_override_option("default_city", overrides.city.clone())?
            .set_override_option("default_state", overrides.state.clone())?
            .build()?;

        let mut config: AppConfig = settings.try_deserialize()?;
        config.default_state = config.default_state.to_uppercase();
        Ok(config)
    }
}
