//! Classifier port — the text-classification oracle boundary.

use std::future::Future;

use casita_domain::classification::Ranking;

/// Failure of a classifier backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    /// The backend could not be reached or failed mid-request.
    #[error("classifier backend unavailable: {0}")]
    Network(String),
    /// The backend answered but violated the ranking contract.
    #[error("classifier response violated the ranking contract: {0}")]
    Contract(String),
}

/// The zero-shot classification capability:
/// `rank(text, candidate labels) -> ranked labels`.
///
/// Implementations must return one score per candidate label, each in
/// `[0, 1]`; descending order is enforced by [`Ranking`] itself. Anything
/// honouring this contract is substitutable — a remote model or a
/// deterministic local scorer.
pub trait Classifier: Send + Sync {
    /// Rank `candidates` against `utterance`, most confident first.
    fn rank(
        &self,
        utterance: &str,
        candidates: &[&str],
    ) -> impl Future<Output = Result<Ranking, ClassifierError>> + Send;
}
