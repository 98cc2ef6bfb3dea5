//! Dispatcher — routes commands to devices and normalises outcomes to text.
//!
//! Owns the single instance of each device kind. This is the one place
//! where internal failures become user-facing text: whatever happens during
//! execution, the caller gets a response string.

use casita_domain::command::{Command, DeviceKind, Target};
use casita_domain::device::{Device, Fan, Light, Thermostat};
use casita_domain::policy::Policy;

/// Fixed header line of the aggregate status report.
const STATUS_HEADER: &str = "Current Status:";

/// Routes resolved commands to the device registry.
#[derive(Debug)]
pub struct Dispatcher {
    light: Device,
    fan: Device,
    thermostat: Device,
}

impl Dispatcher {
    /// Build the registry from policy: one device per kind, default state
    /// (light and fan off, thermostat at the configured temperature).
    #[must_use]
    pub fn new(policy: &Policy) -> Self {
        Self {
            light: Device::Light(Light::new(policy.light_name.clone())),
            fan: Device::Fan(Fan::new(policy.fan_name.clone())),
            thermostat: Device::Thermostat(Thermostat::new(
                policy.thermostat_name.clone(),
                policy.initial_temperature_c,
                policy.adjust_step_c,
            )),
        }
    }

    /// Route a command and normalise the outcome into response text.
    /// Always succeeds at the text level.
    pub fn route(&mut self, command: &Command) -> String {
        match command.target {
            // `All` is produced only with `Status`.
            Target::All => self.status_report(),
            Target::Device(kind) => {
                let device = self.device_mut(kind);
                match device.apply(&command.action) {
                    Ok(text) => text,
                    Err(err) => {
                        tracing::warn!(device = %kind, error = %err, "device rejected action");
                        format!("Error executing command: {err}")
                    }
                }
            }
        }
    }

    /// Read access to a device, for status surfaces and tests.
    #[must_use]
    pub fn device(&self, kind: DeviceKind) -> &Device {
        match kind {
            DeviceKind::Light => &self.light,
            DeviceKind::Fan => &self.fan,
            DeviceKind::Thermostat => &self.thermostat,
        }
    }

    fn device_mut(&mut self, kind: DeviceKind) -> &mut Device {
        match kind {
            DeviceKind::Light => &mut self.light,
            DeviceKind::Fan => &mut self.fan,
            DeviceKind::Thermostat => &mut self.thermostat,
        }
    }

    /// Header line followed by one status line per device, in fixed
    /// registration order.
    fn status_report(&self) -> String {
        let mut report = String::from(STATUS_HEADER);
        for kind in DeviceKind::ALL {
            report.push('\n');
            report.push_str(&self.device(kind).status());
        }
        report
    }
}
