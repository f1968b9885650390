//! Command-line configuration.

use std::path::{Path, PathBuf};

use compass_model::{Compass, Ring, RingGroup};

use crate::error::{CliError, Result};

/// Default log filter when neither `RUST_LOG` nor `COMPASS_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "compass_cli=info,compass_model=info";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the canonical string of a compass built from flags or JSON.
    Show { input: CompassInput, validate: bool },
    /// Re-serialize a canonical string.
    Parse { text: String },
    /// Rotate one group once and print the result.
    Rotate {
        group: RingGroup,
        input: CompassInput,
        validate: bool,
    },
    Help,
    Version,
}

/// Where the compass comes from. Flags override fields loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompassInput {
    pub json: Option<PathBuf>,
    pub outer: Option<Ring>,
    pub middle: Option<Ring>,
    pub inner: Option<Ring>,
    pub ring_groups: Option<Vec<RingGroup>>,
}

impl CompassInput {
    /// Build the compass, reading the JSON document first if one was given.
    pub fn load(&self) -> Result<Compass> {
        let mut compass = match &self.json {
            Some(path) => read_json(path)?,
            None => Compass::default(),
        };

        if let Some(ring) = self.outer {
            compass.outer_ring = ring;
        }
        if let Some(ring) = self.middle {
            compass.middle_ring = ring;
        }
        if let Some(ring) = self.inner {
            compass.inner_ring = ring;
        }
        if let Some(groups) = &self.ring_groups {
            compass.ring_groups = groups.clone();
        }

        tracing::debug!(?compass, "loaded compass");
        Ok(compass)
    }
}

fn read_json(path: &Path) -> Result<Compass> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parsed command line plus environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    /// Fallback filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl CliConfig {
    /// Parse arguments (without the program name) and read `COMPASS_LOG`.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let log_filter =
            std::env::var("COMPASS_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            command: parse_command(args)?,
            log_filter,
        })
    }
}

fn parse_command(args: &[String]) -> Result<Command> {
    let Some((name, rest)) = args.split_first() else {
        return Err(CliError::usage("missing command"));
    };

    match name.as_str() {
        "show" => {
            let (input, validate) = parse_input(rest)?;
            Ok(Command::Show { input, validate })
        }
        "parse" => match rest {
            [text] => Ok(Command::Parse { text: text.clone() }),
            _ => Err(CliError::usage("parse requires exactly one compass string")),
        },
        "rotate" => {
            let Some((code, rest)) = rest.split_first() else {
                return Err(CliError::usage("rotate requires a ring group code"));
            };
            let group = parse_group_code(code)?;
            let (input, validate) = parse_input(rest)?;
            Ok(Command::Rotate {
                group,
                input,
                validate,
            })
        }
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-V" | "--version" | "version" => Ok(Command::Version),
        other => Err(CliError::usage(format!("unknown command: {other}"))),
    }
}

/// Parse input flags; also returns whether validation stays enabled.
fn parse_input(args: &[String]) -> Result<(CompassInput, bool)> {
    let mut input = CompassInput::default();
    let mut validate = true;
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .ok_or_else(|| CliError::usage(format!("{flag} requires a value")))
        };

        match flag.as_str() {
            "--outer" => input.outer = Some(parse_ring(flag, value()?)?),
            "--middle" => input.middle = Some(parse_ring(flag, value()?)?),
            "--inner" => input.inner = Some(parse_ring(flag, value()?)?),
            "--groups" => input.ring_groups = Some(parse_groups(value()?)?),
            "--json" => input.json = Some(PathBuf::from(value()?)),
            "--no-validate" => validate = false,
            other => return Err(CliError::usage(format!("unknown flag: {other}"))),
        }
    }

    Ok((input, validate))
}

/// `LOCATION,SPEED`, e.g. `-1,2`.
fn parse_ring(flag: &str, value: &str) -> Result<Ring> {
    let invalid = || CliError::usage(format!("{flag} expects LOCATION,SPEED, got `{value}`"));

    let (location, speed) = value.split_once(',').ok_or_else(invalid)?;
    let location = location.trim().parse().map_err(|_| invalid())?;
    let speed = speed.trim().parse().map_err(|_| invalid())?;
    Ok(Ring::new(location, speed))
}

/// Comma-separated short codes; an empty value means no groups.
fn parse_groups(value: &str) -> Result<Vec<RingGroup>> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }
    value.split(',').map(|code| parse_group_code(code.trim())).collect()
}

fn parse_group_code(code: &str) -> Result<RingGroup> {
    RingGroup::from_short_name(code).ok_or_else(|| {
        CliError::usage(format!(
            "unknown ring group `{code}` (expected one of o, m, i, om, oi, mi)"
        ))
    })
}
