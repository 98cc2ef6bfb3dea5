//! Label catalog — the declarative table behind command resolution.
//!
//! Each canonical label carries the device it belongs to, its action kind,
//! and the rule for obtaining its parameters. Resolution never inspects the
//! label text itself; everything needed to act on a label is data in its
//! entry.

use std::collections::HashSet;

use crate::command::{ActionKind, DeviceKind};

/// How a label's parameters are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamRule {
    /// The action takes no parameters.
    None,
    /// The speed level is fixed by the label itself.
    FixedSpeed(&'static str),
    /// A temperature value must be present in the raw utterance.
    TemperatureFromUtterance,
    /// An amount may optionally follow the word "by" in the raw utterance.
    AmountAfterBy,
}

/// One catalog entry: a canonical label and everything needed to act on it.
#[derive(Debug, Clone, Copy)]
pub struct LabelSpec {
    pub label: &'static str,
    pub device: DeviceKind,
    pub kind: ActionKind,
    pub params: ParamRule,
}

const fn entry(
    label: &'static str,
    device: DeviceKind,
    kind: ActionKind,
    params: ParamRule,
) -> LabelSpec {
    LabelSpec {
        label,
        device,
        kind,
        params,
    }
}

/// Device-agnostic label for the aggregate status query.
pub const AGGREGATE_LABEL: &str = "get status of all devices";

const LABELS: &[LabelSpec] = &[
    entry(
        "turn on light",
        DeviceKind::Light,
        ActionKind::TurnOn,
        ParamRule::None,
    ),
    entry(
        "turn off light",
        DeviceKind::Light,
        ActionKind::TurnOff,
        ParamRule::None,
    ),
    entry(
        "get light status",
        DeviceKind::Light,
        ActionKind::Status,
        ParamRule::None,
    ),
    entry(
        "turn on fan",
        DeviceKind::Fan,
        ActionKind::TurnOn,
        ParamRule::None,
    ),
    entry(
        "turn off fan",
        DeviceKind::Fan,
        ActionKind::TurnOff,
        ParamRule::None,
    ),
    entry(
        "set fan speed low",
        DeviceKind::Fan,
        ActionKind::SetSpeed,
        ParamRule::FixedSpeed("LOW"),
    ),
    entry(
        "set fan speed medium",
        DeviceKind::Fan,
        ActionKind::SetSpeed,
        ParamRule::FixedSpeed("MEDIUM"),
    ),
    entry(
        "set fan speed high",
        DeviceKind::Fan,
        ActionKind::SetSpeed,
        ParamRule::FixedSpeed("HIGH"),
    ),
    entry(
        "get fan status",
        DeviceKind::Fan,
        ActionKind::Status,
        ParamRule::None,
    ),
    entry(
        "set thermostat temperature",
        DeviceKind::Thermostat,
        ActionKind::SetTemperature,
        ParamRule::TemperatureFromUtterance,
    ),
    entry(
        "increase thermostat temperature",
        DeviceKind::Thermostat,
        ActionKind::IncreaseTemperature,
        ParamRule::AmountAfterBy,
    ),
    entry(
        "decrease thermostat temperature",
        DeviceKind::Thermostat,
        ActionKind::DecreaseTemperature,
        ParamRule::AmountAfterBy,
    ),
    entry(
        "get thermostat status",
        DeviceKind::Thermostat,
        ActionKind::Status,
        ParamRule::None,
    ),
];

/// Static catalog of classification labels.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: &'static [LabelSpec],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Build the catalog, checking its data-integrity invariant.
    ///
    /// # Panics
    ///
    /// Panics when a label appears under two device kinds (or collides with
    /// the aggregate label). A duplicate is a defect in the table, not a
    /// runtime error path.
    #[must_use]
    pub fn new() -> Self {
        Self::with_entries(LABELS)
    }

    fn with_entries(entries: &'static [LabelSpec]) -> Self {
        let mut seen = HashSet::with_capacity(entries.len() + 1);
        seen.insert(AGGREGATE_LABEL);
        for spec in entries {
            assert!(
                seen.insert(spec.label),
                "duplicate catalog label: {}",
                spec.label
            );
        }
        Self { entries }
    }

    /// The full candidate set handed to the oracle, in fixed stable order:
    /// table order, aggregate label last.
    #[must_use]
    pub fn all_labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = self.entries.iter().map(|spec| spec.label).collect();
        labels.push(AGGREGATE_LABEL);
        labels
    }

    /// Whether `label` is the device-agnostic aggregate label.
    #[must_use]
    pub fn is_aggregate(&self, label: &str) -> bool {
        label == AGGREGATE_LABEL
    }

    /// Look up the entry for a non-aggregate label.
    #[must_use]
    pub fn spec_of(&self, label: &str) -> Option<&'static LabelSpec> {
        self.entries.iter().find(|spec| spec.label == label)
    }

    /// The device kind a non-aggregate label belongs to.
    #[must_use]
    pub fn device_of(&self, label: &str) -> Option<DeviceKind> {
        self.spec_of(label).map(|spec| spec.device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_place_aggregate_label_last() {
        let labels = Catalog::new().all_labels();
        assert_eq!(labels.last(), Some(&AGGREGATE_LABEL));
    }

    #[test]
    fn should_expose_one_candidate_per_entry_plus_aggregate() {
        let labels = Catalog::new().all_labels();
        assert_eq!(labels.len(), LABELS.len() + 1);
    }

    #[test]
    fn should_keep_candidate_order_stable() {
        let first = Catalog::new().all_labels();
        let second = Catalog::new().all_labels();
        assert_eq!(first, second);
        assert_eq!(first[0], "turn on light");
    }

    #[test]
    fn should_resolve_device_for_every_non_aggregate_label() {
        let catalog = Catalog::new();
        for spec in LABELS {
            assert_eq!(catalog.device_of(spec.label), Some(spec.device));
        }
    }

    #[test]
    fn should_not_resolve_unknown_label() {
        let catalog = Catalog::new();
        assert!(catalog.spec_of("open the pod bay doors").is_none());
    }

    #[test]
    fn should_recognise_aggregate_label() {
        let catalog = Catalog::new();
        assert!(catalog.is_aggregate(AGGREGATE_LABEL));
        assert!(!catalog.is_aggregate("turn on light"));
    }

    #[test]
    fn should_carry_fixed_speed_levels_in_the_table() {
        let catalog = Catalog::new();
        let spec = catalog.spec_of("set fan speed medium").unwrap();
        assert_eq!(spec.kind, ActionKind::SetSpeed);
        assert_eq!(spec.params, ParamRule::FixedSpeed("MEDIUM"));
    }

    #[test]
    #[should_panic(expected = "duplicate catalog label")]
    fn should_panic_when_a_label_belongs_to_two_devices() {
        static DUPLICATED: &[LabelSpec] = &[
            entry(
                "turn on light",
                DeviceKind::Light,
                ActionKind::TurnOn,
                ParamRule::None,
            ),
            entry(
                "turn on light",
                DeviceKind::Fan,
                ActionKind::TurnOn,
                ParamRule::None,
            ),
        ];
        let _ = Catalog::with_entries(DUPLICATED);
    }
}
