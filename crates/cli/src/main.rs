#![warn(clippy::pedantic)]

//! Command line interface for validating, formatting and correcting exercise names.
//!
//! ```bash
//! # Check names against the formatting rules
//! liftname validate "DB Curl" "Bench Press Barbell"
//!
//! # Suggest corrected names for a list of names
//! liftname suggest < names.txt
//!
//! # Show the components of a name as JSON
//! liftname --output json extract "Barbell Back Squat"
//! ```

mod logger;
mod output;
mod settings;

use std::{
    env,
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use liftname_domain as domain;
use log::{LevelFilter, debug};

use crate::{
    output::{Components, Correction, Validation},
    settings::{CONFIG_ENV, OutputFormat, Settings},
};

#[derive(Parser)]
#[command(
    name = "liftname",
    about = "Validate, format and correct exercise names",
    long_about = "Validate, format and correct free-form exercise names. Names are taken from the \
                  arguments or, if none are given, from stdin with one name per line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Settings file (defaults to $LIFTNAME_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overriding the settings file
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check names against the formatting rules
    Validate(Names),
    /// Clean up names without reordering them
    Format(Names),
    /// Show the equipment, muscle group and movement of names
    Extract(Names),
    /// Suggest corrected names
    Suggest(Names),
}

#[derive(Args)]
struct Names {
    /// Exercise names
    names: Vec<String>,
}

impl Names {
    fn resolve(self) -> anyhow::Result<Vec<String>> {
        if !self.names.is_empty() {
            return Ok(self.names);
        }

        io::stdin()
            .lock()
            .lines()
            .filter(|line| line.as_ref().map_or(true, |line| !line.trim().is_empty()))
            .collect::<Result<Vec<_>, _>>()
            .context("failed to read names from stdin")
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("liftname: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = load_settings(cli.config)?;
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        settings.log_level
    };

    logger::init(level).context("failed to initialize logger")?;

    let format = cli.output.unwrap_or(settings.output);

    debug!("using {format:?} output");

    let (text, success) = execute(cli.command, format)?;

    if !text.is_empty() {
        println!("{text}");
    }

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Renders the result of a command and reports whether all names passed.
fn execute(command: Command, format: OutputFormat) -> anyhow::Result<(String, bool)> {
    Ok(match command {
        Command::Validate(names) => {
            let records = names
                .resolve()?
                .iter()
                .map(|name| Validation::new(name, &domain::validate(name)))
                .collect::<Vec<_>>();
            let success = records.iter().all(|record| record.valid);
            (output::render(format, &records)?, success)
        }
        Command::Format(names) => (
            output::render(format, &corrections(names.resolve()?, domain::format_name))?,
            true,
        ),
        Command::Extract(names) => {
            let records = names
                .resolve()?
                .iter()
                .map(|name| Components::new(name, &domain::extract_components(name)))
                .collect::<Vec<_>>();
            (output::render(format, &records)?, true)
        }
        Command::Suggest(names) => (
            output::render(
                format,
                &corrections(names.resolve()?, domain::suggest_correction),
            )?,
            true,
        ),
    })
}

fn load_settings(config: Option<PathBuf>) -> anyhow::Result<Settings> {
    match config.or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from)) {
        Some(path) => Settings::load(&path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Ok(Settings::default()),
    }
}

fn corrections(names: Vec<String>, correct: fn(&str) -> String) -> Vec<Correction> {
    names
        .into_iter()
        .map(|name| {
            let result = correct(&name);
            Correction { name, result }
        })
        .collect()
}
