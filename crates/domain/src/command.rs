//! Commands — the resolved, structured, parameter-complete action requests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of controllable device kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Fan,
    Thermostat,
}

impl DeviceKind {
    /// All device kinds, in fixed registration order.
    ///
    /// This order drives the aggregate status report and must stay stable.
    pub const ALL: [Self; 3] = [Self::Light, Self::Fan, Self::Thermostat];
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Fan => f.write_str("fan"),
            Self::Thermostat => f.write_str("thermostat"),
        }
    }
}

/// Where a command is directed.
///
/// [`All`](Self::All) exists only for the aggregate status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Device(DeviceKind),
    All,
}

/// Catalog-level action tag, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    TurnOn,
    TurnOff,
    SetSpeed,
    SetTemperature,
    IncreaseTemperature,
    DecreaseTemperature,
    Status,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnOn => f.write_str("turn_on"),
            Self::TurnOff => f.write_str("turn_off"),
            Self::SetSpeed => f.write_str("set_speed"),
            Self::SetTemperature => f.write_str("set_temperature"),
            Self::IncreaseTemperature => f.write_str("increase_temperature"),
            Self::DecreaseTemperature => f.write_str("decrease_temperature"),
            Self::Status => f.write_str("status"),
        }
    }
}

/// A fully resolved action with its parameters in the variant payload.
///
/// Carrying parameters inside the variant guarantees that a command never
/// holds parameters that are irrelevant to its action.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    TurnOn,
    TurnOff,
    /// The raw requested level; validated by the fan itself.
    SetSpeed { level: String },
    SetTemperature { celsius: f64 },
    /// `None` means "no amount given" — the thermostat applies its
    /// configured step.
    IncreaseTemperature { amount: Option<f64> },
    DecreaseTemperature { amount: Option<f64> },
    Status,
}

impl Action {
    /// The parameter-free tag of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::TurnOn => ActionKind::TurnOn,
            Self::TurnOff => ActionKind::TurnOff,
            Self::SetSpeed { .. } => ActionKind::SetSpeed,
            Self::SetTemperature { .. } => ActionKind::SetTemperature,
            Self::IncreaseTemperature { .. } => ActionKind::IncreaseTemperature,
            Self::DecreaseTemperature { .. } => ActionKind::DecreaseTemperature,
            Self::Status => ActionKind::Status,
        }
    }
}

/// The resolved command handed to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub target: Target,
    pub action: Action,
}
