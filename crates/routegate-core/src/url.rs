//! Canonical navigation targets.

use serde::{Deserialize, Serialize};

/// The host router's normalized representation of a navigation target.
///
/// Produced by the router's URL-parsing facility; opaque to guard logic.
/// Two canonical URLs compare equal exactly when the router normalized them
/// to the same target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalUrl(String);

impl CanonicalUrl {
    /// Create a canonical URL from the router's normalized form.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the underlying normalized string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CanonicalUrl {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for CanonicalUrl {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
