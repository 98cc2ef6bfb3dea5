//! Intent resolver — turns ranked labels plus raw text into commands.
//!
//! The resolver is pure: it inspects the classification result and the
//! original utterance, and either produces a [`Command`] or a typed
//! [`Rejection`]. It never touches device state.

use std::sync::LazyLock;

use regex::Regex;

use casita_domain::catalog::{Catalog, ParamRule};
use casita_domain::classification::Ranking;
use casita_domain::command::{Action, ActionKind, Command, Target};
use casita_domain::error::Rejection;
use casita_domain::policy::Policy;

/// An integer or decimal, optionally followed by a degree/Celsius marker or
/// the word "degrees".
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:\u{b0}\s*C|degrees)?").expect("valid number pattern")
});

/// A number following the word "by", same numeric shape as [`NUMBER_RE`].
static AMOUNT_AFTER_BY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"by\s+(\d+(?:\.\d+)?)(?:\s*(?:\u{b0}\s*C|degrees))?").expect("valid amount pattern")
});

/// Resolves classifier output into executable commands.
#[derive(Debug, Clone)]
pub struct IntentResolver {
    catalog: Catalog,
    confidence_threshold: f32,
}

impl IntentResolver {
    #[must_use]
    pub fn new(catalog: Catalog, policy: &Policy) -> Self {
        Self {
            catalog,
            confidence_threshold: policy.confidence_threshold,
        }
    }

    /// Candidate labels for the oracle, in fixed stable order.
    #[must_use]
    pub fn candidate_labels(&self) -> Vec<&'static str> {
        self.catalog.all_labels()
    }

    /// Resolve an utterance against a classification result.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::LowConfidence`] below the confidence threshold,
    /// [`Rejection::MissingParameter`] when a required number is absent from
    /// the utterance, and [`Rejection::InternalMapping`] when the top label
    /// cannot be mapped through the catalog (unreachable for a well-formed
    /// catalog).
    pub fn resolve(&self, utterance: &str, ranking: &Ranking) -> Result<Command, Rejection> {
        let top = ranking.top();
        tracing::debug!(label = %top.label, score = top.score, "classified utterance");

        if top.score < self.confidence_threshold {
            return Err(Rejection::LowConfidence { score: top.score });
        }

        if self.catalog.is_aggregate(&top.label) {
            return Ok(Command {
                target: Target::All,
                action: Action::Status,
            });
        }

        let spec = self
            .catalog
            .spec_of(&top.label)
            .ok_or_else(|| Rejection::InternalMapping {
                label: top.label.clone(),
            })?;

        let action = match (spec.kind, spec.params) {
            (ActionKind::TurnOn, ParamRule::None) => Action::TurnOn,
            (ActionKind::TurnOff, ParamRule::None) => Action::TurnOff,
            (ActionKind::Status, ParamRule::None) => Action::Status,
            (ActionKind::SetSpeed, ParamRule::FixedSpeed(level)) => Action::SetSpeed {
                level: level.to_string(),
            },
            (ActionKind::SetTemperature, ParamRule::TemperatureFromUtterance) => {
                let celsius = extract_number(utterance).ok_or(Rejection::MissingParameter {
                    name: "temperature value",
                })?;
                Action::SetTemperature { celsius }
            }
            (ActionKind::IncreaseTemperature, ParamRule::AmountAfterBy) => {
                Action::IncreaseTemperature {
                    amount: extract_amount_after_by(utterance),
                }
            }
            (ActionKind::DecreaseTemperature, ParamRule::AmountAfterBy) => {
                Action::DecreaseTemperature {
                    amount: extract_amount_after_by(utterance),
                }
            }
            // A kind/rule combination outside the table's shape.
            _ => {
                return Err(Rejection::InternalMapping {
                    label: top.label.clone(),
                });
            }
        };

        Ok(Command {
            target: Target::Device(spec.device),
            action,
        })
    }
}

/// First number in the text, if any.
fn extract_number(text: &str) -> Option<f64> {
    NUMBER_RE.captures(text).and_then(|c| c[1].parse().ok())
}

/// Number following the word "by", if any.
fn extract_amount_after_by(text: &str) -> Option<f64> {
    AMOUNT_AFTER_BY_RE
        .captures(text)
        .and_then(|c| c[1].parse().ok())
}
