//! Error taxonomy — typed rejections and device errors.
//!
//! Every variant's `Display` text is the user-facing message: errors are
//! recovered at the boundary nearest their origin and rendered as response
//! text, never propagated raw to the caller.

use crate::command::{ActionKind, DeviceKind};

/// Why an utterance could not be resolved into a command.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    /// The top-ranked label scored below the confidence threshold.
    #[error("Could not confidently understand the command (score: {score:.2}). Please rephrase.")]
    LowConfidence { score: f32 },

    /// A label matched but a required parameter was absent from the text.
    #[error("Please specify the {name} (e.g. 'set the temperature to 22').")]
    MissingParameter { name: &'static str },

    /// A ranked label could not be mapped back through the catalog.
    /// Unreachable for a well-formed catalog.
    #[error("Internal error processing action: {label}")]
    InternalMapping { label: String },

    /// The classification oracle failed or did not answer in time.
    #[error("The command service is unavailable right now. Please try again.")]
    OracleFailure,
}

/// Failure raised by a device while applying an action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// The action is not part of this device's state machine.
    /// Unreachable through the catalog, kept as a guard.
    #[error("action '{action}' is not supported by the {device}")]
    UnsupportedAction {
        device: DeviceKind,
        action: ActionKind,
    },
}
