//! Controller — the utterance-to-response pipeline.
//!
//! Candidates from the catalog → timed oracle call → resolution → dispatch.
//! Every failure along the way is rendered as response text; the caller
//! never sees an error value.

use casita_domain::catalog::Catalog;
use casita_domain::command::Command;
use casita_domain::error::Rejection;
use casita_domain::policy::Policy;

use crate::dispatcher::Dispatcher;
use crate::ports::Classifier;
use crate::resolver::IntentResolver;

/// Smart-home controller, generic over the classifier backend.
pub struct Controller<C> {
    classifier: C,
    resolver: IntentResolver,
    dispatcher: Dispatcher,
    policy: Policy,
}

impl<C: Classifier> Controller<C> {
    #[must_use]
    pub fn new(classifier: C, policy: Policy) -> Self {
        Self {
            classifier,
            resolver: IntentResolver::new(Catalog::new(), &policy),
            dispatcher: Dispatcher::new(&policy),
            policy,
        }
    }

    /// Process one utterance end to end. Never fails at the text level.
    #[tracing::instrument(skip(self, utterance))]
    pub async fn process(&mut self, utterance: &str) -> String {
        match self.resolve(utterance).await {
            Ok(command) => self.dispatcher.route(&command),
            Err(rejection) => rejection.to_string(),
        }
    }

    /// Classify with a bounded wait, then resolve.
    async fn resolve(&self, utterance: &str) -> Result<Command, Rejection> {
        let candidates = self.resolver.candidate_labels();
        let outcome = tokio::time::timeout(
            self.policy.oracle_timeout,
            self.classifier.rank(utterance, &candidates),
        )
        .await;

        let ranking = match outcome {
            Ok(Ok(ranking)) => ranking,
            Ok(Err(err)) => {
                tracing::error!(error = %err, "classifier backend failed");
                return Err(Rejection::OracleFailure);
            }
            Err(_elapsed) => {
                tracing::error!(
                    timeout = ?self.policy.oracle_timeout,
                    "classifier did not answer in time"
                );
                return Err(Rejection::OracleFailure);
            }
        };

        self.resolver.resolve(utterance, &ranking)
    }

    /// Read access to the dispatcher, for status surfaces and tests.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
