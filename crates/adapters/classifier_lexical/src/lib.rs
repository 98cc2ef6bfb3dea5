//! # casita-adapter-classifier-lexical
//!
//! Deterministic, dependency-free classifier backend.
//!
//! Scores each candidate label by the fraction of its tokens that appear in
//! the utterance, which is enough to drive the demo catalog without a model:
//! the label whose words the user actually said wins. Used as the default
//! backend and by the end-to-end tests.
//!
//! ## Dependency rule
//!
//! Depends on `casita-app` (port traits) and `casita-domain` only.

use std::future::Future;

use casita_app::ports::{Classifier, ClassifierError};
use casita_domain::classification::{Ranking, Scored};

/// Classifier that ranks labels by lexical token overlap with the utterance.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalClassifier;

impl LexicalClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Fraction of the label's tokens found in the utterance, in `[0, 1]`.
    #[allow(clippy::cast_precision_loss)]
    fn score(utterance_tokens: &[String], label: &str) -> f32 {
        let label_tokens = tokenize(label);
        if label_tokens.is_empty() {
            return 0.0;
        }
        let matched = label_tokens
            .iter()
            .filter(|token| utterance_tokens.contains(token))
            .count();
        matched as f32 / label_tokens.len() as f32
    }
}

impl Classifier for LexicalClassifier {
    fn rank(
        &self,
        utterance: &str,
        candidates: &[&str],
    ) -> impl Future<Output = Result<Ranking, ClassifierError>> + Send {
        let utterance_tokens = tokenize(utterance);
        let entries: Vec<Scored> = candidates
            .iter()
            .map(|label| Scored::new(*label, Self::score(&utterance_tokens, label)))
            .collect();

        tracing::trace!(candidates = entries.len(), "scored candidate labels");

        let result =
            Ranking::new(entries).map_err(|err| ClassifierError::Contract(err.to_string()));
        async move { result }
    }
}

/// Lowercase alphanumeric tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
