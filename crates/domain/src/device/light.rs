//! Simulated light — the simplest two-state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::{Action, DeviceKind};
use crate::error::DeviceError;

/// Power state of an on/off device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Power {
    On,
    #[default]
    Off,
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("ON"),
            Self::Off => f.write_str("OFF"),
        }
    }
}

/// A simulated smart light that can be turned on and off.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    name: String,
    power: Power,
}

impl Light {
    /// Create a light in the `OFF` state.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            power: Power::Off,
        }
    }

    #[must_use]
    pub fn power(&self) -> Power {
        self.power
    }

    /// Turn the light on. Idempotent.
    pub fn turn_on(&mut self) -> String {
        self.power = Power::On;
        format!("The {} is now {}.", self.name, self.power)
    }

    /// Turn the light off. Idempotent.
    pub fn turn_off(&mut self) -> String {
        self.power = Power::Off;
        format!("The {} is now {}.", self.name, self.power)
    }

    /// One status line describing the current state.
    #[must_use]
    pub fn status(&self) -> String {
        format!("{}: {}", self.name, self.power)
    }

    /// Apply a resolved action, returning the post-transition response text.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnsupportedAction`] for actions outside the
    /// light's state machine.
    pub fn apply(&mut self, action: &Action) -> Result<String, DeviceError> {
        match action {
            Action::TurnOn => Ok(self.turn_on()),
            Action::TurnOff => Ok(self.turn_off()),
            Action::Status => Ok(self.status()),
            other => Err(DeviceError::UnsupportedAction {
                device: DeviceKind::Light,
                action: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off() {
        let light = Light::new("Lamp");
        assert_eq!(light.power(), Power::Off);
    }

    #[test]
    fn should_turn_on_and_describe_the_new_state() {
        let mut light = Light::new("Lamp");
        let response = light.turn_on();
        assert_eq!(light.power(), Power::On);
        assert_eq!(response, "The Lamp is now ON.");
    }

    #[test]
    fn should_stay_on_when_turned_on_twice() {
        let mut light = Light::new("Lamp");
        light.turn_on();
        let response = light.turn_on();
        assert_eq!(light.power(), Power::On);
        assert_eq!(response, "The Lamp is now ON.");
    }

    #[test]
    fn should_turn_off_after_being_on() {
        let mut light = Light::new("Lamp");
        light.turn_on();
        let response = light.turn_off();
        assert_eq!(light.power(), Power::Off);
        assert_eq!(response, "The Lamp is now OFF.");
    }

    #[test]
    fn should_report_status_without_changing_state() {
        let light = Light::new("Lamp");
        assert_eq!(light.status(), "Lamp: OFF");
        assert_eq!(light.power(), Power::Off);
    }

    #[test]
    fn should_reject_speed_action_as_unsupported() {
        let mut light = Light::new("Lamp");
        let result = light.apply(&Action::SetSpeed {
            level: "HIGH".to_string(),
        });
        assert!(matches!(
            result,
            Err(DeviceError::UnsupportedAction {
                device: DeviceKind::Light,
                ..
            })
        ));
        assert_eq!(light.power(), Power::Off);
    }
}
