//! Flag evaluation results and shape-preserving decision outcomes.
//!
//! A flag backend may answer synchronously, with a single-resolution
//! deferred value, or with a stream expected to emit exactly one value and
//! complete. [`FlagEvaluation`] models those three shapes as an explicit
//! tagged union, so transforming an evaluation into a navigation decision is
//! an exhaustive `match` per variant rather than runtime type inspection.
//!
//! The guard never awaits: it attaches at most one continuation to a
//! deferred or streaming evaluation and hands the still-suspended
//! computation back to the host router inside a [`DecisionOutcome`].

use crate::guards::types::NavigationDecision;
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{BoxStream, StreamExt};
use futures::{Future, Stream};
use routegate_core::{FeatureFlag, Result, RoutegateError};

/// Result of evaluating a feature flag, tagged by synchronicity class.
pub enum FlagEvaluation {
    /// The backend answered synchronously.
    Ready(bool),
    /// The backend answers once, later.
    Deferred(BoxFuture<'static, bool>),
    /// The backend answers on a stream that emits once and completes.
    Stream(BoxStream<'static, bool>),
}

impl FlagEvaluation {
    /// Create a synchronous evaluation.
    pub fn ready(enabled: bool) -> Self {
        Self::Ready(enabled)
    }

    /// Create a deferred evaluation from a future.
    pub fn deferred<F>(result: F) -> Self
    where
        F: Future<Output = bool> + Send + 'static,
    {
        Self::Deferred(result.boxed())
    }

    /// Create a streaming evaluation.
    pub fn stream<S>(results: S) -> Self
    where
        S: Stream<Item = bool> + Send + 'static,
    {
        Self::Stream(results.boxed())
    }
}

impl std::fmt::Debug for FlagEvaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(enabled) => f.debug_tuple("Ready").field(enabled).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// A navigation decision in the synchronicity class of the evaluation it
/// was derived from.
pub enum DecisionShape {
    /// Decision available immediately.
    Ready(NavigationDecision),
    /// Decision resolves once the deferred evaluation does.
    Deferred(BoxFuture<'static, NavigationDecision>),
    /// Decision arrives on the evaluation stream's single emission.
    Stream(BoxStream<'static, NavigationDecision>),
}

impl std::fmt::Debug for DecisionShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(decision) => f.debug_tuple("Ready").field(decision).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Outcome of one guard invocation.
///
/// Carries the decision in its original synchronicity class plus the flag
/// that produced it (absent when the route declared no flag). Dropping an
/// outcome abandons any attached continuation; nothing is signalled to the
/// flag backend.
#[derive(Debug)]
pub struct DecisionOutcome {
    flag: Option<FeatureFlag>,
    shape: DecisionShape,
}

fn decide(enabled: bool, when_disabled: NavigationDecision) -> NavigationDecision {
    if enabled {
        NavigationDecision::Allow
    } else {
        when_disabled
    }
}

impl DecisionOutcome {
    /// An immediate outcome for a route that declared no feature flag.
    pub(crate) fn ready(decision: NavigationDecision) -> Self {
        Self {
            flag: None,
            shape: DecisionShape::Ready(decision),
        }
    }

    /// Derive an outcome from a flag evaluation.
    ///
    /// An enabled flag always yields [`NavigationDecision::Allow`]; a
    /// disabled flag yields `when_disabled`. The evaluation's synchronicity
    /// class is preserved, with the substitution attached as a single
    /// non-blocking continuation.
    pub(crate) fn from_evaluation(
        flag: &FeatureFlag,
        evaluation: FlagEvaluation,
        when_disabled: NavigationDecision,
    ) -> Self {
        let shape = match evaluation {
            FlagEvaluation::Ready(enabled) => {
                DecisionShape::Ready(decide(enabled, when_disabled))
            }
            FlagEvaluation::Deferred(result) => DecisionShape::Deferred(
                result
                    .map(move |enabled| decide(enabled, when_disabled))
                    .boxed(),
            ),
            FlagEvaluation::Stream(results) => DecisionShape::Stream(
                results
                    .map(move |enabled| decide(enabled, when_disabled.clone()))
                    .boxed(),
            ),
        };
        Self {
            flag: Some(flag.clone()),
            shape,
        }
    }

    /// The flag this outcome was derived from, if the route declared one.
    pub fn flag(&self) -> Option<&FeatureFlag> {
        self.flag.as_ref()
    }

    /// Returns `true` if the decision is available without awaiting.
    pub fn is_ready(&self) -> bool {
        matches!(self.shape, DecisionShape::Ready(_))
    }

    /// Returns `true` if the decision resolves from a deferred evaluation.
    pub fn is_deferred(&self) -> bool {
        matches!(self.shape, DecisionShape::Deferred(_))
    }

    /// Returns `true` if the decision arrives on an evaluation stream.
    pub fn is_stream(&self) -> bool {
        matches!(self.shape, DecisionShape::Stream(_))
    }

    /// The immediate decision, if this outcome is ready.
    pub fn as_ready(&self) -> Option<&NavigationDecision> {
        match &self.shape {
            DecisionShape::Ready(decision) => Some(decision),
            DecisionShape::Deferred(_) | DecisionShape::Stream(_) => None,
        }
    }

    /// Unwrap into the underlying shape for host-router integration.
    pub fn into_shape(self) -> DecisionShape {
        self.shape
    }

    /// Await the decision, whichever class it is in.
    ///
    /// For a streaming outcome this takes the single expected emission. A
    /// stream that completes without emitting is the flag backend breaking
    /// its contract and surfaces as
    /// [`RoutegateError::EvaluationContract`].
    pub async fn resolve(self) -> Result<NavigationDecision> {
        let flag = self.flag;
        match self.shape {
            DecisionShape::Ready(decision) => Ok(decision),
            DecisionShape::Deferred(result) => Ok(result.await),
            DecisionShape::Stream(mut decisions) => match decisions.next().await {
                Some(decision) => Ok(decision),
                None => Err(RoutegateError::evaluation_contract(
                    flag.as_ref().map(FeatureFlag::as_str).unwrap_or("<none>"),
                    "evaluation stream completed without emitting",
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use futures::stream;
    use routegate_core::CanonicalUrl;

    fn flag() -> FeatureFlag {
        FeatureFlag::new("beta")
    }

    #[test]
    fn ready_evaluation_stays_ready() {
        let outcome = DecisionOutcome::from_evaluation(
            &flag(),
            FlagEvaluation::ready(true),
            NavigationDecision::Deny,
        );
        assert!(outcome.is_ready());
        assert_eq!(outcome.as_ready(), Some(&NavigationDecision::Allow));
    }

    #[tokio::test]
    async fn deferred_evaluation_stays_deferred_and_substitutes() {
        let target = NavigationDecision::redirect(CanonicalUrl::new("/upgrade"));
        let outcome = DecisionOutcome::from_evaluation(
            &flag(),
            FlagEvaluation::deferred(async { false }),
            target.clone(),
        );
        assert!(outcome.is_deferred());
        assert!(outcome.as_ready().is_none());
        assert_eq!(
            outcome.resolve().await,
            Ok(target)
        );
    }

    #[tokio::test]
    async fn stream_evaluation_stays_stream_and_substitutes() {
        let outcome = DecisionOutcome::from_evaluation(
            &flag(),
            FlagEvaluation::stream(stream::iter([true])),
            NavigationDecision::Deny,
        );
        assert!(outcome.is_stream());
        assert_eq!(outcome.resolve().await, Ok(NavigationDecision::Allow));
    }

    #[tokio::test]
    async fn enabled_flag_ignores_redirect_target() {
        let target = NavigationDecision::redirect(CanonicalUrl::new("/upgrade"));
        let outcome = DecisionOutcome::from_evaluation(
            &flag(),
            FlagEvaluation::deferred(async { true }),
            target,
        );
        assert_eq!(outcome.resolve().await, Ok(NavigationDecision::Allow));
    }

    #[tokio::test]
    async fn empty_evaluation_stream_breaks_the_contract() {
        let outcome = DecisionOutcome::from_evaluation(
            &flag(),
            FlagEvaluation::stream(stream::empty()),
            NavigationDecision::Deny,
        );
        let err = match outcome.resolve().await {
            Ok(decision) => panic!("expected contract error, got {decision:?}"),
            Err(err) => err,
        };
        assert_matches!(err, RoutegateError::EvaluationContract { ref flag, .. } if flag == "beta");
    }

    #[test]
    fn outcome_records_its_flag() {
        let outcome = DecisionOutcome::from_evaluation(
            &flag(),
            FlagEvaluation::ready(true),
            NavigationDecision::Deny,
        );
        assert_eq!(outcome.flag().map(FeatureFlag::as_str), Some("beta"));
        assert_eq!(DecisionOutcome::ready(NavigationDecision::Allow).flag(), None);
    }
}
