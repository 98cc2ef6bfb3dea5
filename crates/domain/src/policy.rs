//! Policy — immutable tuning values injected at construction time.
//!
//! Everything here used to be a process-wide constant in earlier iterations
//! of the system; it is now an explicit value passed into the resolver and
//! dispatcher when they are built.

use std::time::Duration;

/// Immutable tuning values for resolution and device behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    /// Minimum top-label confidence accepted by the resolver.
    pub confidence_threshold: f32,
    /// Temperature step applied when an adjustment carries no amount.
    pub adjust_step_c: f64,
    /// Thermostat reading at startup, clamped into the valid range.
    pub initial_temperature_c: f64,
    /// How long the controller waits for the classification oracle.
    pub oracle_timeout: Duration,
    /// Display name of the light.
    pub light_name: String,
    /// Display name of the fan.
    pub fan_name: String,
    /// Display name of the thermostat.
    pub thermostat_name: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.6,
            adjust_step_c: 1.0,
            initial_temperature_c: 22.0,
            oracle_timeout: Duration::from_secs(30),
            light_name: "Living Room Light".to_string(),
            fan_name: "Living Room Fan".to_string(),
            thermostat_name: "Living Room Thermostat".to_string(),
        }
    }
}
