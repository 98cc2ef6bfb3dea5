//! # casita — smart-home assistant CLI
//!
//! Composition root that wires the classifier backend, resolver, and
//! devices together and runs the interactive loop.
//!
//! ## Responsibilities
//! - Load configuration (`casita.toml` + environment overrides)
//! - Initialise tracing from the configured filter
//! - Construct the classifier backend (failure here aborts startup — there
//!   is no degraded mode without a classifier)
//! - Construct the controller, injecting the backend via the port trait
//! - Run the line-oriented loop: forward each non-empty line, print the
//!   response, stop on an exit token
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use casita_adapter_classifier_http::{HttpClassifier, HttpClassifierConfig};
use casita_adapter_classifier_lexical::LexicalClassifier;
use casita_app::controller::Controller;
use casita_app::ports::Classifier;

use crate::config::{Backend, Config};

/// Case-insensitive tokens that end the session without invoking the
/// controller.
const EXIT_COMMANDS: [&str; 4] = ["exit", "quit", "bye", "goodbye"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let policy = config.policy();

    match config.classifier.backend {
        Backend::Lexical => {
            tracing::info!("using lexical classifier backend");
            run(Controller::new(LexicalClassifier::new(), policy)).await
        }
        Backend::Http => {
            let mut http_config = HttpClassifierConfig::new(config.classifier.model.clone())
                .with_endpoint(config.classifier.endpoint.clone())
                .with_timeout(policy.oracle_timeout);
            if let Some(token) = &config.classifier.api_token {
                http_config = http_config.with_api_token(token.clone());
            }
            tracing::info!(model = %config.classifier.model, "using HTTP classifier backend");
            let classifier = HttpClassifier::new(http_config)
                .map_err(|err| anyhow::anyhow!("classifier initialisation failed: {err}"))?;
            run(Controller::new(classifier, policy)).await
        }
    }
}

/// The interactive loop, generic over the wired backend.
async fn run<C: Classifier>(mut controller: Controller<C>) -> anyhow::Result<()> {
    print_welcome();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        if EXIT_COMMANDS.contains(&input.to_lowercase().as_str()) {
            println!("\nThank you for using the Smart Home Assistant. Goodbye!");
            return Ok(());
        }

        if !input.is_empty() {
            let response = controller.process(input).await;
            println!("\nResponse: {response}");
        }

        prompt()?;
    }

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("\n> Enter a command: ");
    std::io::stdout().flush()
}

fn print_welcome() {
    println!("\n{}", "=".repeat(60));
    println!("       SMART HOME ASSISTANT WITH AI COMMAND PROCESSING");
    println!("{}", "=".repeat(60));
    println!("\nAvailable devices:");
    println!("  - Light (can be turned ON/OFF)");
    println!("  - Fan (can be turned ON/OFF and set to LOW, MEDIUM, or HIGH speed)");
    println!("  - Thermostat (can be set between 18\u{b0}C and 30\u{b0}C)");
    println!("\nExample commands:");
    println!("  - 'Turn on the light'");
    println!("  - 'Set the fan speed to high'");
    println!("  - 'Set the temperature to 22 degrees'");
    println!("  - 'What is the status of all devices?'");
    println!("  - 'Exit' or 'Quit' to end the program");
    println!("\n{}", "-".repeat(60));
}
