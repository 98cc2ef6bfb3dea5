//! Simulated fan — on/off with a three-level speed setting.
//!
//! Power is derived from the speed: the fan is on exactly when its speed is
//! not `Off`, so the two can never disagree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::{Action, DeviceKind};
use crate::error::DeviceError;

/// Fan speed setting. `Off` is reachable only through `turn_off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FanSpeed {
    #[default]
    Off,
    Low,
    Medium,
    High,
}

impl FanSpeed {
    /// Speeds accepted by `set_speed`, in ascending order. `Off` is
    /// deliberately excluded — turning off goes through `turn_off`.
    pub const SELECTABLE: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Parse a user-supplied level, case-insensitively. `Off` is not
    /// accepted here.
    #[must_use]
    pub fn from_level(level: &str) -> Option<Self> {
        match level.to_ascii_uppercase().as_str() {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("OFF"),
            Self::Low => f.write_str("LOW"),
            Self::Medium => f.write_str("MEDIUM"),
            Self::High => f.write_str("HIGH"),
        }
    }
}

/// A simulated smart fan.
#[derive(Debug, Clone, PartialEq)]
pub struct Fan {
    name: String,
    speed: FanSpeed,
}

impl Fan {
    /// Create a fan in the off state.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            speed: FanSpeed::Off,
        }
    }

    #[must_use]
    pub fn speed(&self) -> FanSpeed {
        self.speed
    }

    /// Whether the fan is powered on (derived from the speed).
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.speed != FanSpeed::Off
    }

    /// Turn the fan on at `LOW`. When the fan is already on, the current
    /// speed is retained rather than reset.
    pub fn turn_on(&mut self) -> String {
        if self.speed == FanSpeed::Off {
            self.speed = FanSpeed::Low;
        }
        format!("The {} is now ON at {} speed.", self.name, self.speed)
    }

    /// Turn the fan off, whatever the current speed.
    pub fn turn_off(&mut self) -> String {
        self.speed = FanSpeed::Off;
        format!("The {} is now OFF.", self.name)
    }

    /// Set the fan speed. A valid level also powers the fan on; an invalid
    /// level leaves the state unchanged and enumerates the valid options.
    pub fn set_speed(&mut self, level: &str) -> String {
        match FanSpeed::from_level(level) {
            Some(speed) => {
                self.speed = speed;
                format!("The {} speed is set to {}.", self.name, self.speed)
            }
            None => {
                let options = FanSpeed::SELECTABLE.map(|s| s.to_string()).join(", ");
                format!("Invalid speed level. Choose from: {options}")
            }
        }
    }

    /// One status line describing the current state.
    #[must_use]
    pub fn status(&self) -> String {
        if self.is_on() {
            format!("{}: ON (Speed: {})", self.name, self.speed)
        } else {
            format!("{}: OFF", self.name)
        }
    }

    /// Apply a resolved action, returning the post-transition response text.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnsupportedAction`] for actions outside the
    /// fan's state machine.
    pub fn apply(&mut self, action: &Action) -> Result<String, DeviceError> {
        match action {
            Action::TurnOn => Ok(self.turn_on()),
            Action::TurnOff => Ok(self.turn_off()),
            Action::SetSpeed { level } => Ok(self.set_speed(level)),
            Action::Status => Ok(self.status()),
            other => Err(DeviceError::UnsupportedAction {
                device: DeviceKind::Fan,
                action: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off_with_no_speed() {
        let fan = Fan::new("Fan");
        assert!(!fan.is_on());
        assert_eq!(fan.speed(), FanSpeed::Off);
    }

    #[test]
    fn should_turn_on_at_low_speed_from_off() {
        let mut fan = Fan::new("Fan");
        let response = fan.turn_on();
        assert_eq!(fan.speed(), FanSpeed::Low);
        assert_eq!(response, "The Fan is now ON at LOW speed.");
    }

    #[test]
    fn should_retain_speed_when_turned_on_while_already_on() {
        let mut fan = Fan::new("Fan");
        fan.set_speed("high");
        let response = fan.turn_on();
        assert_eq!(fan.speed(), FanSpeed::High);
        assert_eq!(response, "The Fan is now ON at HIGH speed.");
    }

    #[test]
    fn should_turn_off_from_any_speed() {
        let mut fan = Fan::new("Fan");
        fan.set_speed("medium");
        let response = fan.turn_off();
        assert!(!fan.is_on());
        assert_eq!(response, "The Fan is now OFF.");
    }

    #[test]
    fn should_set_speed_case_insensitively_and_power_on() {
        let mut fan = Fan::new("Fan");
        let response = fan.set_speed("MeDiUm");
        assert!(fan.is_on());
        assert_eq!(fan.speed(), FanSpeed::Medium);
        assert_eq!(response, "The Fan speed is set to MEDIUM.");
    }

    #[test]
    fn should_reject_invalid_speed_and_keep_state() {
        let mut fan = Fan::new("Fan");
        fan.set_speed("high");
        let response = fan.set_speed("loud");
        assert_eq!(fan.speed(), FanSpeed::High);
        assert_eq!(response, "Invalid speed level. Choose from: LOW, MEDIUM, HIGH");
    }

    #[test]
    fn should_not_accept_off_as_a_speed_level() {
        let mut fan = Fan::new("Fan");
        fan.set_speed("low");
        let response = fan.set_speed("off");
        assert_eq!(fan.speed(), FanSpeed::Low);
        assert!(response.starts_with("Invalid speed level"));
    }

    #[test]
    fn should_include_speed_in_status_only_when_on() {
        let mut fan = Fan::new("Fan");
        assert_eq!(fan.status(), "Fan: OFF");
        fan.set_speed("high");
        assert_eq!(fan.status(), "Fan: ON (Speed: HIGH)");
    }

    #[test]
    fn should_reject_temperature_action_as_unsupported() {
        let mut fan = Fan::new("Fan");
        let result = fan.apply(&Action::SetTemperature { celsius: 21.0 });
        assert!(matches!(
            result,
            Err(DeviceError::UnsupportedAction {
                device: DeviceKind::Fan,
                ..
            })
        ));
    }
}
