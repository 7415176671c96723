//! Guard components: decision vocabulary, flag evaluation shapes, the
//! feature-flag guard itself, and its diagnostics seam.

pub mod diagnostics;
pub mod evaluation;
pub mod feature_flag;
pub mod types;

pub use diagnostics::{BuildModeDiagnostics, GuardDiagnostics, RecordingDiagnostics};
pub use evaluation::{DecisionOutcome, DecisionShape, FlagEvaluation};
pub use feature_flag::FeatureFlagGuard;
pub use types::{FlagService, NavigationDecision, RouterFacility};
