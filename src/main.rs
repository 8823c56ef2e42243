//! Payload checker.
//!
//! Reads a component or embed payload as JSON, rebuilds it through the
//! builders, and prints the normalized JSON when every check passes.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing::{debug, warn};

use interaction_builders::builders::{create_component, EmbedBuilder};
use interaction_builders::error::BuildError;

#[derive(Debug, Parser)]
#[clap(name = "interaction-builders", version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a payload and print it normalized
    Check {
        /// Kind of payload in the input
        #[clap(long, value_enum)]
        kind: PayloadKind,

        /// JSON file to read. Reads stdin when absent or `-`
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PayloadKind {
    /// An action row, button, or select menu
    Component,
    Embed,
}

#[derive(Debug, thiserror::Error)]
enum CheckError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("input is not JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Build(#[from] BuildError),
}

fn read_input(file: Option<&PathBuf>) -> Result<String, CheckError> {
    match file.filter(|path| path.as_os_str() != "-") {
        Some(path) => fs::read_to_string(path).map_err(|source| CheckError::Read {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|source| CheckError::Read {
                    path: "stdin".to_owned(),
                    source,
                })?;
            Ok(input)
        }
    }
}

fn check(kind: PayloadKind, raw: Value) -> Result<Value, CheckError> {
    debug!(?kind, "checking payload");

    match kind {
        PayloadKind::Component => Ok(create_component(raw)?.to_json()?),
        PayloadKind::Embed => {
            let embed = EmbedBuilder::try_from(raw)?;
            embed.validate()?;
            eprintln!("length: {}", embed.length());
            Ok(embed.to_json()?)
        }
    }
}

fn run(cli: Cli) -> Result<(), CheckError> {
    match cli.command {
        Command::Check { kind, file } => {
            let raw: Value = serde_json::from_str(&read_input(file.as_ref())?)?;
            let normalized = check(kind, raw)?;
            println!("{}", serde_json::to_string_pretty(&normalized)?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(error = %e, "payload check failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
