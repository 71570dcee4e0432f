//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Values are validated after parsing: `direction` must name a
//! [`Direction`](crate::core::types::Direction).

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::Direction;

/// User configuration.
///
/// # Example
///
/// ```toml
/// verify = true
/// json = false
/// direction = "positive"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Verify tissue invariants after the demo mutates it
    pub verify: Option<bool>,

    /// Emit JSON instead of text by default
    pub json: Option<bool>,

    /// Direction ranks are printed in
    pub direction: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(direction) = &self.direction {
            direction
                .parse::<Direction>()
                .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GlobalConfig::default();
        assert!(config.verify.is_none());
        assert!(config.json.is_none());
        assert!(config.direction.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn valid_direction() {
        let config = GlobalConfig {
            direction: Some("negative".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_direction() {
        let config = GlobalConfig {
            direction: Some("sideways".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn parse_toml() {
        let config: GlobalConfig = toml::from_str(
            r#"
            verify = false
            direction = "negative"
            "#,
        )
        .unwrap();
        assert_eq!(config.verify, Some(false));
        assert_eq!(config.direction.as_deref(), Some("negative"));
    }

    #[test]
    fn unknown_fields_rejected() {
        let parsed: Result<GlobalConfig, _> = toml::from_str("trunk = \"main\"");
        assert!(parsed.is_err());
    }
}
