//! Simulated thermostat — a continuous temperature bounded to a safe range.
//!
//! The reading is clamped into `[MIN_C, MAX_C]` at every write, including
//! construction, so the bounds invariant holds at all times.

use crate::command::{Action, DeviceKind};
use crate::error::DeviceError;

/// A simulated smart thermostat.
#[derive(Debug, Clone, PartialEq)]
pub struct Thermostat {
    name: String,
    celsius: f64,
    step_c: f64,
}

impl Thermostat {
    /// Lowest settable temperature, in °C.
    pub const MIN_C: f64 = 18.0;
    /// Highest settable temperature, in °C.
    pub const MAX_C: f64 = 30.0;

    /// Create a thermostat. The initial reading is clamped into range;
    /// `step_c` is the adjustment applied when no amount is given.
    pub fn new(name: impl Into<String>, initial_c: f64, step_c: f64) -> Self {
        Self {
            name: name.into(),
            celsius: initial_c.clamp(Self::MIN_C, Self::MAX_C),
            step_c,
        }
    }

    #[must_use]
    pub fn celsius(&self) -> f64 {
        self.celsius
    }

    /// Set the temperature, clamping into the valid range. The response
    /// names the bound when clamping occurred and the exact value otherwise.
    pub fn set_temperature(&mut self, celsius: f64) -> String {
        if !celsius.is_finite() {
            return "Please provide a valid temperature value.".to_string();
        }
        if celsius < Self::MIN_C {
            self.celsius = Self::MIN_C;
            format!("Temperature set to minimum: {}\u{b0}C", Self::MIN_C)
        } else if celsius > Self::MAX_C {
            self.celsius = Self::MAX_C;
            format!("Temperature set to maximum: {}\u{b0}C", Self::MAX_C)
        } else {
            self.celsius = celsius;
            format!("The {} is set to {}\u{b0}C.", self.name, self.celsius)
        }
    }

    /// Raise the temperature by `amount`, or by the configured step when no
    /// amount is given. Clamping is inherited from `set_temperature`.
    pub fn increase(&mut self, amount: Option<f64>) -> String {
        let step = amount.unwrap_or(self.step_c);
        self.set_temperature(self.celsius + step)
    }

    /// Lower the temperature by `amount`, or by the configured step when no
    /// amount is given. Clamping is inherited from `set_temperature`.
    pub fn decrease(&mut self, amount: Option<f64>) -> String {
        let step = amount.unwrap_or(self.step_c);
        self.set_temperature(self.celsius - step)
    }

    /// One status line describing the current state.
    #[must_use]
    pub fn status(&self) -> String {
        format!("{}: {}\u{b0}C", self.name, self.celsius)
    }

    /// Apply a resolved action, returning the post-transition response text.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnsupportedAction`] for actions outside the
    /// thermostat's state machine.
    pub fn apply(&mut self, action: &Action) -> Result<String, DeviceError> {
        match action {
            Action::SetTemperature { celsius } => Ok(self.set_temperature(*celsius)),
            Action::IncreaseTemperature { amount } => Ok(self.increase(*amount)),
            Action::DecreaseTemperature { amount } => Ok(self.decrease(*amount)),
            Action::Status => Ok(self.status()),
            other => Err(DeviceError::UnsupportedAction {
                device: DeviceKind::Thermostat,
                action: other.kind(),
            }),
        }
    }
}
