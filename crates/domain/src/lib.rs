//! # casita-domain
//!
//! Pure domain model for the casita smart-home assistant.
//!
//! ## Responsibilities
//! - Define the **label catalog** (canonical classification labels and the
//!   device/action each one stands for)
//! - Define **commands** (the resolved, structured action requests)
//! - Define **classification results** (ranked label/score pairs)
//! - Define the **device state machines** (light, fan, thermostat) and
//!   contain all transition and bounds logic
//! - Define the error and rejection taxonomy
//! - Define the **policy** value object (tuning values injected at startup)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod catalog;
pub mod classification;
pub mod command;
pub mod device;
pub mod error;
pub mod policy;
