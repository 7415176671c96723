//! Routegate Core - Routing Vocabulary
//!
//! This crate provides the foundational types shared by the Routegate guard
//! layer and its host-router integrations: routes with their metadata bags,
//! the static routing configuration, feature-flag and canonical-URL
//! identifiers, and the unified error type. It contains no guard logic.

#![forbid(unsafe_code)]

/// Static routing configuration and metadata key names
pub mod config;

/// Unified error handling
pub mod errors;

/// Feature-flag identifiers
pub mod flag;

/// Routes and metadata bags
pub mod route;

/// Canonical navigation targets
pub mod url;

pub use config::{MetadataKeys, RoutingConfig};
pub use errors::{Result, RoutegateError};
pub use flag::FeatureFlag;
pub use route::{is_truthy, Route};
pub use url::CanonicalUrl;
