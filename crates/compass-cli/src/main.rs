//! compass CLI
//!
//! Builds a navigation compass from user input and prints its canonical string.
//!
//! Usage:
//!   compass show [--outer L,S] [--middle L,S] [--inner L,S] [--groups CODES] [--json PATH] [--no-validate]
//!   compass parse <CANONICAL>
//!   compass rotate <CODE> [input flags as for show]

mod config;
mod error;

use compass_model::Compass;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CliConfig, Command, CompassInput};
use crate::error::Result;

const USAGE: &str = "\
compass - Canonicalize three-ring navigation compasses

Usage:
  compass show [INPUT]            Print the canonical string of a compass
  compass parse <CANONICAL>       Re-serialize a canonical string
  compass rotate <CODE> [INPUT]   Rotate one ring group once
  compass help | --version

Input:
  --outer L,S       Outer ring location and speed (units of 60 degrees)
  --middle L,S      Middle ring location and speed
  --inner L,S       Inner ring location and speed
  --groups CODES    Supported ring groups, e.g. om,i (codes: o m i om oi mi)
  --json PATH       Load a compass document; flags override its fields
  --no-validate     Skip validation of the input compass

Environment:
  RUST_LOG, COMPASS_LOG   Log filter (default: compass_cli=info,compass_model=info)";

fn init_tracing(fallback: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_checked(input: &CompassInput, validate: bool) -> Result<Compass> {
    let compass = input.load()?;
    if validate {
        compass.validate()?;
    }
    Ok(compass)
}

/// Execute a command and return what should be printed.
fn run(command: Command) -> Result<String> {
    match command {
        Command::Show { input, validate } => Ok(load_checked(&input, validate)?.to_string()),
        Command::Parse { text } => {
            let compass: Compass = text.parse()?;
            Ok(compass.to_string())
        }
        Command::Rotate {
            group,
            input,
            validate,
        } => {
            let compass = load_checked(&input, validate)?;
            let next = compass.rotate(group)?;
            tracing::info!(%group, from = %compass, to = %next, "rotated");
            Ok(next.to_string())
        }
        Command::Help => Ok(USAGE.to_string()),
        Command::Version => Ok(format!("compass {}", env!("CARGO_PKG_VERSION"))),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match CliConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_filter);

    match run(config.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
