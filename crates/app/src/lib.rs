//! # casita-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **classifier port** that oracle adapters implement
//! - Resolve ranked classifier output plus raw text into commands
//!   ([`resolver::IntentResolver`])
//! - Route commands to the simulated devices and normalise every outcome
//!   into response text ([`dispatcher::Dispatcher`])
//! - Glue the pipeline together behind one entry point
//!   ([`controller::Controller`])
//!
//! ## Dependency rule
//! Depends on `casita-domain` only (plus `tokio::time` for the oracle
//! timeout). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod controller;
pub mod dispatcher;
pub mod ports;
pub mod resolver;
