//! Guard decision vocabulary and collaborator contracts.
//!
//! The guard consumes two collaborators it does not own: the flag backend
//! (which knows the recognized flag set and evaluates flags) and the host
//! router's URL-parsing facility. Both are narrow traits so hosts plug in
//! whatever they already run.

use crate::guards::evaluation::FlagEvaluation;
use routegate_core::{CanonicalUrl, FeatureFlag};
use serde::{Deserialize, Serialize};

/// Decision produced for a single navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationDecision {
    /// Navigation proceeds to the requested route.
    Allow,
    /// Navigation is blocked with no alternative target.
    Deny,
    /// Navigation is diverted to the given canonical target.
    Redirect(CanonicalUrl),
}

impl NavigationDecision {
    /// Create an allow decision.
    pub fn allow() -> Self {
        Self::Allow
    }

    /// Create a deny decision.
    pub fn deny() -> Self {
        Self::Deny
    }

    /// Create a redirect decision.
    pub fn redirect(target: CanonicalUrl) -> Self {
        Self::Redirect(target)
    }

    /// Returns `true` if the decision allows the requested navigation.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns `true` if the requested navigation does not proceed.
    pub fn is_denied(&self) -> bool {
        !self.is_allowed()
    }

    /// Returns the redirect target, if the decision diverts navigation.
    pub fn redirect_target(&self) -> Option<&CanonicalUrl> {
        match self {
            Self::Redirect(target) => Some(target),
            Self::Allow | Self::Deny => None,
        }
    }
}

impl From<bool> for NavigationDecision {
    fn from(allowed: bool) -> Self {
        if allowed {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}

/// Flag backend contract required by the guard.
///
/// The backend owns the recognized-flag set and chooses the synchronicity
/// class of each evaluation.
pub trait FlagService: Send + Sync {
    /// Returns `true` if `name` is a recognized flag identifier.
    fn recognizes(&self, name: &str) -> bool;

    /// Evaluate whether a recognized flag is enabled.
    fn is_enabled(&self, flag: &FeatureFlag) -> FlagEvaluation;
}

/// Host-router URL parsing contract required by the guard.
pub trait RouterFacility: Send + Sync {
    /// Normalize a redirect target into the router's canonical representation.
    ///
    /// Synchronous and deterministic for a given router configuration.
    fn parse_url(&self, target: &str) -> CanonicalUrl;
}
