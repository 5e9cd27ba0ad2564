//! Per-call defaults applied when the caller leaves a parameter out.

use aat_core::Platform;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default scrape item cap.
const fn default_max_items() -> u32 {
    100
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Platform queried by analysis calls that do not name one.
    #[serde(default)]
    pub platform: Platform,

    /// Item cap for scrape jobs started without one.
    #[serde(default = "default_max_items")]
    pub max_items: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            max_items: default_max_items(),
        }
    }
}

impl DefaultsConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `max_items` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_items == 0 {
            return Err(ConfigError::InvalidValue {
                field: "defaults.max_items".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DefaultsConfig::default();
        assert_eq!(config.platform, Platform::Reddit);
        assert_eq!(config.max_items, 100);
    }

    #[test]
    fn zero_max_items_is_invalid() {
        let config = DefaultsConfig {
            max_items: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
