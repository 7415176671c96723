//! Routegate Guards prelude.
//!
//! Curated re-exports for host-router integration without pulling in extra
//! modules.

pub use crate::guards::diagnostics::{BuildModeDiagnostics, GuardDiagnostics};
pub use crate::guards::evaluation::{DecisionOutcome, DecisionShape, FlagEvaluation};
pub use crate::guards::feature_flag::FeatureFlagGuard;
pub use crate::guards::types::{FlagService, NavigationDecision, RouterFacility};
pub use routegate_core::{
    CanonicalUrl, FeatureFlag, Result, Route, RoutegateError, RoutingConfig,
};
