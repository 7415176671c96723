//! Advisory guard diagnostics.
//!
//! The only diagnostic the guard emits is advisory: a route that declares no
//! feature flag while the configured fallback decision is to deny. The sink
//! is injectable so tests assert on emissions directly instead of depending
//! on build-mode globals.

// Allow expect on Mutex::lock - lock poisoning from panics is unrecoverable,
// so expect() is the appropriate handling pattern.
#![allow(clippy::expect_used)]

use std::sync::Mutex;
use tracing::warn;

/// Sink for advisory guard diagnostics.
pub trait GuardDiagnostics: Send + Sync {
    /// A route declared no feature flag while the fallback decision denies.
    ///
    /// Advisory only; must never influence the returned decision.
    fn flag_missing(&self, path: &str);
}

/// Default sink: warns through `tracing`, development builds only.
///
/// Release builds compile the emission out entirely; the decision path is
/// identical in both build modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildModeDiagnostics;

impl GuardDiagnostics for BuildModeDiagnostics {
    fn flag_missing(&self, path: &str) {
        if cfg!(debug_assertions) {
            warn!(
                path = %path,
                "route declares no feature flag and falls back to a deny decision"
            );
        }
    }
}

/// Test sink that records every emission.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    missing: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths reported as missing a feature flag, in emission order.
    pub fn missing_paths(&self) -> Vec<String> {
        self.missing.lock().expect("diagnostics lock poisoned").clone()
    }
}

impl GuardDiagnostics for RecordingDiagnostics {
    fn flag_missing(&self, path: &str) {
        self.missing
            .lock()
            .expect("diagnostics lock poisoned")
            .push(path.to_string());
    }
}
