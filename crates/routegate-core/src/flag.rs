//! Feature-flag identifiers.

use serde::{Deserialize, Serialize};

/// Typed identifier for a feature flag.
///
/// The set of recognized flag names is owned by the flag backend; this type
/// only guarantees the identifier is a non-empty string. Guard evaluation
/// validates membership against the backend before constructing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlag(String);

impl FeatureFlag {
    /// Create a new feature-flag identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FeatureFlag {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for FeatureFlag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
