//! Feature-Flag Route Guard
//!
//! Decides whether a navigation may activate a route, based on the feature
//! flag declared in the route's metadata. The host router invokes
//! [`FeatureFlagGuard::evaluate`] immediately before activation and acts on
//! the returned decision.
//!
//! # Decision sequence
//!
//! ```text
//! read flag metadata → validate flag name → evaluate flag → apply redirect
//! ```
//!
//! - No flag declared (absent or falsy metadata value): the configured
//!   fallback decision, returned synchronously. The flag backend is not
//!   consulted.
//! - Flag declared but unrecognized: [`RoutegateError::InvalidFlag`],
//!   raised before any backend evaluation.
//! - Flag declared and recognized: the backend's evaluation is mapped onto
//!   a [`NavigationDecision`], preserving its synchronicity class. A
//!   disabled flag denies, or redirects when a redirect target is
//!   configured (per-route metadata beats the configuration default).
//!
//! Every invocation computes its decision fresh: no caching, no retries, no
//! retained state.

use crate::guards::diagnostics::{BuildModeDiagnostics, GuardDiagnostics};
use crate::guards::evaluation::DecisionOutcome;
use crate::guards::types::{FlagService, NavigationDecision, RouterFacility};
use routegate_core::{FeatureFlag, Result, Route, RoutegateError, RoutingConfig};
use std::sync::Arc;
use tracing::debug;

/// Guard evaluating route feature flags ahead of navigation.
///
/// Holds only its diagnostics sink; configuration and collaborators arrive
/// as explicit arguments on every invocation, so independent navigation
/// attempts share nothing mutable.
#[derive(Clone)]
pub struct FeatureFlagGuard {
    diagnostics: Arc<dyn GuardDiagnostics>,
}

impl FeatureFlagGuard {
    /// Create a guard with the default build-mode diagnostics sink.
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(BuildModeDiagnostics))
    }

    /// Create a guard with an explicit diagnostics sink.
    pub fn with_diagnostics(diagnostics: Arc<dyn GuardDiagnostics>) -> Self {
        Self { diagnostics }
    }

    /// Evaluate whether navigation to `route` may proceed.
    ///
    /// Never blocks: a deferred or streaming flag evaluation is returned
    /// still suspended inside the [`DecisionOutcome`], with the decision
    /// substitution attached as its continuation.
    ///
    /// # Errors
    ///
    /// [`RoutegateError::InvalidFlag`] when the route declares a flag value
    /// the backend does not recognize. Raised synchronously, before any
    /// evaluation starts.
    pub fn evaluate(
        &self,
        route: &Route,
        config: &RoutingConfig,
        flags: &dyn FlagService,
        router: &dyn RouterFacility,
    ) -> Result<DecisionOutcome> {
        let Some(declared) = route.data_value(&config.keys.feature_flag) else {
            if !config.valid_if_none {
                self.diagnostics.flag_missing(&route.path);
            }
            return Ok(DecisionOutcome::ready(config.valid_if_none.into()));
        };

        let name = declared
            .as_str()
            .filter(|name| flags.recognizes(name))
            .ok_or_else(|| RoutegateError::invalid_flag(&route.path, declared.to_string()))?;
        let flag = FeatureFlag::new(name);

        debug!(path = %route.path, flag = %flag, "evaluating route feature flag");
        let evaluation = flags.is_enabled(&flag);

        let redirect_target = route
            .data_str(&config.keys.redirect_to_if_disabled)
            .or(config.redirect_to_if_disabled.as_deref());
        let when_disabled = match redirect_target {
            Some(target) => NavigationDecision::Redirect(router.parse_url(target)),
            None => NavigationDecision::Deny,
        };

        Ok(DecisionOutcome::from_evaluation(
            &flag,
            evaluation,
            when_disabled,
        ))
    }
}

impl Default for FeatureFlagGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FeatureFlagGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureFlagGuard").finish_non_exhaustive()
    }
}
