//! Simulated devices — light, fan, thermostat.
//!
//! One file per device; [`Device`] wraps the concrete types behind a single
//! capability interface, dispatched by tagged match.

mod fan;
mod light;
mod thermostat;

pub use fan::{Fan, FanSpeed};
pub use light::{Light, Power};
pub use thermostat::Thermostat;

use crate::command::{Action, DeviceKind};
use crate::error::DeviceError;

/// Closed set of device variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Device {
    Light(Light),
    Fan(Fan),
    Thermostat(Thermostat),
}

impl Device {
    /// Which kind this device is.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(_) => DeviceKind::Light,
            Self::Fan(_) => DeviceKind::Fan,
            Self::Thermostat(_) => DeviceKind::Thermostat,
        }
    }

    /// Apply a resolved action, returning the post-transition response text.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnsupportedAction`] when the action is not
    /// part of this device's state machine.
    pub fn apply(&mut self, action: &Action) -> Result<String, DeviceError> {
        match self {
            Self::Light(d) => d.apply(action),
            Self::Fan(d) => d.apply(action),
            Self::Thermostat(d) => d.apply(action),
        }
    }

    /// One status line describing the current state.
    #[must_use]
    pub fn status(&self) -> String {
        match self {
            Self::Light(d) => d.status(),
            Self::Fan(d) => d.status(),
            Self::Thermostat(d) => d.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_kind_for_each_variant() {
        assert_eq!(Device::Light(Light::new("L")).kind(), DeviceKind::Light);
        assert_eq!(Device::Fan(Fan::new("F")).kind(), DeviceKind::Fan);
        assert_eq!(
            Device::Thermostat(Thermostat::new("T", 22.0, 1.0)).kind(),
            DeviceKind::Thermostat
        );
    }

    #[test]
    fn should_dispatch_apply_to_the_wrapped_device() {
        let mut device = Device::Fan(Fan::new("Fan"));
        let response = device.apply(&Action::TurnOn).unwrap();
        assert_eq!(response, "The Fan is now ON at LOW speed.");
    }

    #[test]
    fn should_dispatch_status_to_the_wrapped_device() {
        let device = Device::Light(Light::new("Lamp"));
        assert_eq!(device.status(), "Lamp: OFF");
    }

    #[test]
    fn should_surface_unsupported_action_errors() {
        let mut device = Device::Light(Light::new("Lamp"));
        let result = device.apply(&Action::SetTemperature { celsius: 20.0 });
        assert!(result.is_err());
    }
}
