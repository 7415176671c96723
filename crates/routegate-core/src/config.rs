//! Routing configuration.
//!
//! [`RoutingConfig`] is constructed once at application startup, validated,
//! and shared by reference across all guard invocations. It never changes
//! afterwards. Configuration arrives either from code or from a JSON file
//! via [`RoutingConfig::load_from_file`].

use crate::errors::{Result, RoutegateError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names of the per-route metadata keys the guard consults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataKeys {
    /// Key holding the flag identifier on a route.
    #[serde(default = "default_feature_flag_key")]
    pub feature_flag: String,
    /// Key holding a per-route redirect target.
    #[serde(default = "default_redirect_key")]
    pub redirect_to_if_disabled: String,
}

fn default_feature_flag_key() -> String {
    "featureFlag".to_string()
}

fn default_redirect_key() -> String {
    "redirectToIfDisabled".to_string()
}

impl Default for MetadataKeys {
    fn default() -> Self {
        Self {
            feature_flag: default_feature_flag_key(),
            redirect_to_if_disabled: default_redirect_key(),
        }
    }
}

/// Static, process-wide routing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Metadata key names consulted on each route.
    #[serde(default)]
    pub keys: MetadataKeys,
    /// Decision returned when a route declares no feature flag.
    #[serde(default = "default_valid_if_none")]
    pub valid_if_none: bool,
    /// Default redirect target for disabled flags, overridable per route.
    #[serde(default)]
    pub redirect_to_if_disabled: Option<String>,
}

fn default_valid_if_none() -> bool {
    true
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            keys: MetadataKeys::default(),
            valid_if_none: default_valid_if_none(),
            redirect_to_if_disabled: None,
        }
    }
}

impl RoutingConfig {
    /// Validate the configuration.
    ///
    /// Key names must be non-empty, and a configured default redirect must
    /// be a non-empty target.
    pub fn validate(&self) -> Result<()> {
        if self.keys.feature_flag.is_empty() {
            return Err(RoutegateError::invalid_config(
                "keys.feature_flag must not be empty",
            ));
        }
        if self.keys.redirect_to_if_disabled.is_empty() {
            return Err(RoutegateError::invalid_config(
                "keys.redirect_to_if_disabled must not be empty",
            ));
        }
        if let Some(target) = &self.redirect_to_if_disabled {
            if target.is_empty() {
                return Err(RoutegateError::invalid_config(
                    "redirect_to_if_disabled must not be an empty target",
                ));
            }
        }
        Ok(())
    }

    /// Build a validated configuration from a JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value)
            .map_err(|err| RoutegateError::invalid_config(format!("invalid JSON: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a validated configuration from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            RoutegateError::invalid_config(format!(
                "failed to read config file {}: {err}",
                path.display()
            ))
        })?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|err| RoutegateError::invalid_config(format!("invalid JSON: {err}")))?;
        Self::from_json_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn defaults_are_permissive() {
        let config = RoutingConfig::default();
        assert_eq!(config.keys.feature_flag, "featureFlag");
        assert_eq!(config.keys.redirect_to_if_disabled, "redirectToIfDisabled");
        assert!(config.valid_if_none);
        assert_eq!(config.redirect_to_if_disabled, None);
        assert_matches!(config.validate(), Ok(()));
    }

    #[test]
    fn from_json_value_fills_missing_fields_with_defaults() {
        let config = match RoutingConfig::from_json_value(json!({
            "keys": { "feature_flag": "flag" },
            "valid_if_none": false,
        })) {
            Ok(config) => config,
            Err(err) => panic!("config rejected: {err}"),
        };
        assert_eq!(config.keys.feature_flag, "flag");
        assert_eq!(config.keys.redirect_to_if_disabled, "redirectToIfDisabled");
        assert!(!config.valid_if_none);
    }

    #[test]
    fn validate_rejects_empty_key_names() {
        let mut config = RoutingConfig::default();
        config.keys.feature_flag = String::new();
        assert_matches!(
            config.validate(),
            Err(RoutegateError::InvalidConfig { .. })
        );
    }

    #[test]
    fn validate_rejects_empty_default_redirect() {
        let config = RoutingConfig {
            redirect_to_if_disabled: Some(String::new()),
            ..RoutingConfig::default()
        };
        assert_matches!(
            config.validate(),
            Err(RoutegateError::InvalidConfig { .. })
        );
    }

    #[test]
    fn load_from_file_reads_and_validates() {
        let dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(err) => panic!("tempdir failed: {err}"),
        };
        let path = dir.path().join("routing.json");
        let body = r#"{ "valid_if_none": false, "redirect_to_if_disabled": "/login" }"#;
        if let Err(err) = std::fs::write(&path, body) {
            panic!("write failed: {err}");
        }

        let config = match RoutingConfig::load_from_file(&path) {
            Ok(config) => config,
            Err(err) => panic!("load failed: {err}"),
        };
        assert!(!config.valid_if_none);
        assert_eq!(config.redirect_to_if_disabled.as_deref(), Some("/login"));

        assert_matches!(
            RoutingConfig::load_from_file(&dir.path().join("missing.json")),
            Err(RoutegateError::InvalidConfig { .. })
        );
    }
}
