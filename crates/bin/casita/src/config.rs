//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `casita.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use casita_domain::device::Thermostat;
use casita_domain::policy::Policy;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Classifier backend settings.
    pub classifier: ClassifierConfig,
    /// Resolution and device tuning values.
    pub policy: PolicyConfig,
    /// Device display names.
    pub devices: DevicesConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Which classifier backend to wire in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Deterministic offline token-overlap scorer.
    #[default]
    Lexical,
    /// Remote zero-shot classification model.
    Http,
}

/// A backend name that is neither `lexical` nor `http`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown classifier backend: {0}")]
pub struct UnknownBackend(String);

impl FromStr for Backend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lexical" => Ok(Self::Lexical),
            "http" => Ok(Self::Http),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}

/// Classifier backend configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Backend selection.
    pub backend: Backend,
    /// API base endpoint (HTTP backend only).
    pub endpoint: String,
    /// Model identifier (HTTP backend only).
    pub model: String,
    /// Optional bearer token (HTTP backend only).
    pub api_token: Option<String>,
    /// Oracle wait bound, in seconds.
    pub timeout_secs: u64,
}

/// Resolution and device tuning values.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Minimum top-label confidence accepted by the resolver.
    pub confidence_threshold: f32,
    /// Temperature step applied when an adjustment carries no amount.
    pub adjust_step_c: f64,
    /// Thermostat reading at startup.
    pub initial_temperature_c: f64,
}

/// Device display names.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DevicesConfig {
    pub light_name: String,
    pub fan_name: String,
    pub thermostat_name: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `casita.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("casita.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CASITA_CLASSIFIER") {
            if let Ok(backend) = val.parse() {
                self.classifier.backend = backend;
            }
        }
        if let Ok(val) = std::env::var("CASITA_CLASSIFIER_ENDPOINT") {
            self.classifier.endpoint = val;
        }
        if let Ok(val) = std::env::var("CASITA_CLASSIFIER_MODEL") {
            self.classifier.model = val;
        }
        if let Ok(val) = std::env::var("CASITA_API_TOKEN") {
            self.classifier.api_token = Some(val);
        }
        if let Ok(val) = std::env::var("CASITA_CLASSIFIER_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.classifier.timeout_secs = secs;
            }
        }
        if let Ok(val) = std::env::var("CASITA_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.policy.confidence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Validation(format!(
                "confidence_threshold must be within [0, 1], got {threshold}"
            )));
        }
        if self.classifier.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "classifier timeout must be non-zero".to_string(),
            ));
        }
        let step = self.policy.adjust_step_c;
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "adjust_step_c must be a positive number, got {step}"
            )));
        }
        let initial = self.policy.initial_temperature_c;
        if !(Thermostat::MIN_C..=Thermostat::MAX_C).contains(&initial) {
            return Err(ConfigError::Validation(format!(
                "initial_temperature_c must be within [{}, {}], got {initial}",
                Thermostat::MIN_C,
                Thermostat::MAX_C,
            )));
        }
        Ok(())
    }

    /// Assemble the immutable policy handed to the controller.
    #[must_use]
    pub fn policy(&self) -> Policy {
        Policy {
            confidence_threshold: self.policy.confidence_threshold,
            adjust_step_c: self.policy.adjust_step_c,
            initial_temperature_c: self.policy.initial_temperature_c,
            oracle_timeout: Duration::from_secs(self.classifier.timeout_secs),
            light_name: self.devices.light_name.clone(),
            fan_name: self.devices.fan_name.clone(),
            thermostat_name: self.devices.thermostat_name.clone(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            endpoint: "https://api-inference.huggingface.co".to_string(),
            model: "MoritzLaurer/mDeBERTa-v3-base-mnli-xnli".to_string(),
            api_token: None,
            timeout_secs: 30,
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.6,
            adjust_step_c: 1.0,
            initial_temperature_c: 22.0,
        }
    }
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            light_name: "Living Room Light".to_string(),
            fan_name: "Living Room Fan".to_string(),
            thermostat_name: "Living Room Thermostat".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "casita=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.classifier.backend, Backend::Lexical);
        assert_eq!(config.classifier.timeout_secs, 30);
        assert!((config.policy.confidence_threshold - 0.6).abs() < f32::EPSILON);
        assert_eq!(config.devices.light_name, "Living Room Light");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.classifier.backend, Backend::Lexical);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [classifier]
            backend = 'http'
            endpoint = 'http://localhost:8080'
            model = 'org/model'
            api_token = 'secret'
            timeout_secs = 5

            [policy]
            confidence_threshold = 0.75
            adjust_step_c = 0.5
            initial_temperature_c = 20.0

            [devices]
            light_name = 'Desk Light'
            fan_name = 'Desk Fan'
            thermostat_name = 'Hall Thermostat'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.classifier.backend, Backend::Http);
        assert_eq!(config.classifier.endpoint, "http://localhost:8080");
        assert_eq!(config.classifier.api_token.as_deref(), Some("secret"));
        assert_eq!(config.classifier.timeout_secs, 5);
        assert!((config.policy.confidence_threshold - 0.75).abs() < f32::EPSILON);
        assert_eq!(config.devices.fan_name, "Desk Fan");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [policy]
            confidence_threshold = 0.8
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!((config.policy.confidence_threshold - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.classifier.backend, Backend::Lexical);
        assert_eq!(config.devices.light_name, "Living Room Light");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.classifier.backend, Backend::Lexical);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_threshold_outside_unit_interval() {
        let mut config = Config::default();
        config.policy.confidence_threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_timeout() {
        let mut config = Config::default();
        config.classifier.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_non_positive_adjust_step() {
        let mut config = Config::default();
        config.policy.adjust_step_c = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_initial_temperature_outside_device_bounds() {
        let mut config = Config::default();
        config.policy.initial_temperature_c = 35.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_values() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_parse_backend_names_case_insensitively() {
        assert_eq!("HTTP".parse(), Ok(Backend::Http));
        assert_eq!("lexical".parse(), Ok(Backend::Lexical));
        assert!("neural".parse::<Backend>().is_err());
    }

    #[test]
    fn should_assemble_policy_from_sections() {
        let mut config = Config::default();
        config.policy.initial_temperature_c = 25.0;
        config.classifier.timeout_secs = 10;
        config.devices.fan_name = "Attic Fan".to_string();

        let policy = config.policy();
        assert!((policy.initial_temperature_c - 25.0).abs() < f64::EPSILON);
        assert_eq!(policy.oracle_timeout, Duration::from_secs(10));
        assert_eq!(policy.fan_name, "Attic Fan");
    }
}
