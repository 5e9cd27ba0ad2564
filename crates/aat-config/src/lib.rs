//! # aat-config
//!
//! Layered configuration loading for the `aat` client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AAT_*` prefix, `__` as separator)
//! 2. Project-level `.aat/config.toml`
//! 3. User-level `~/.config/aat/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AAT_API__BASE_URL` -> `api.base_url`,
//! `AAT_DEFAULTS__MAX_ITEMS` -> `defaults.max_items`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use aat_config::AatConfig;
//!
//! let config = AatConfig::load_with_dotenv().expect("config");
//! println!("API root: {}", config.api.base_url);
//! ```

mod api;
mod defaults;
mod error;

pub use api::ApiConfig;
pub use defaults::DefaultsConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AatConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl AatConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory (if any) before [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".aat/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("AAT_").split("__"))
    }

    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.defaults.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("aat").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AatConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.defaults.max_items, 100);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: AatConfig = AatConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "http://localhost:8000/api");
            assert_eq!(config.defaults.platform, aat_core::Platform::Reddit);
            Ok(())
        });
    }
}
