//! Unified error system for Routegate
//!
//! A single error type covers the whole crate surface: malformed route
//! configuration discovered at navigation time, flag-backend contract
//! violations, and configuration load/validation failures at startup.

use serde::{Deserialize, Serialize};

/// Unified error type for all Routegate operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RoutegateError {
    /// A route declared a feature-flag value that is not a recognized flag name
    #[error("route '{path}' declares invalid feature flag {value}")]
    InvalidFlag {
        /// Path of the offending route
        path: String,
        /// The declared value, rendered as JSON
        value: String,
    },

    /// The flag backend violated its evaluation contract
    #[error("flag '{flag}' evaluation broke its contract: {detail}")]
    EvaluationContract {
        /// Flag whose evaluation misbehaved
        flag: String,
        /// What the backend did wrong
        detail: String,
    },

    /// Routing configuration could not be parsed, loaded, or validated
    #[error("invalid routing configuration: {message}")]
    InvalidConfig {
        /// Error message describing the configuration problem
        message: String,
    },
}

impl RoutegateError {
    /// Create an invalid-flag error for a route path and the raw declared value.
    pub fn invalid_flag(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFlag {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Create an evaluation-contract error for a flag.
    pub fn evaluation_contract(flag: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::EvaluationContract {
            flag: flag.into(),
            detail: detail.into(),
        }
    }

    /// Create an invalid-configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Standard Result type for Routegate operations
pub type Result<T> = std::result::Result<T, RoutegateError>;
