//! pairing: command-line front end for the provider pairing engine.
//!
//! Reads a JSON pairing request, runs it through [`PairingEngine`], and prints
//! the JSON result to stdout. Logs go to stderr.
//!
//! Usage:
//!   pairing <request.json>            # Top-K pairing list
//!   pairing --explain <request.json>  # Top-K with score breakdowns
//!   pairing --rank <request.json>     # Every eligible provider's score
//!   pairing -                         # Read the request from stdin
//!
//! Engine settings are read from `$PAIRING_CONFIG`, else `./pairing.toml`,
//! else built-in defaults.

mod config;
mod request;

use std::path::PathBuf;

use anyhow::Context;
use pairing_core::PairingEngine;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::request::{Mode, PairingRequest};

const USAGE: &str = "usage: pairing [--explain | --rank] <request.json | ->";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (mode, path) = parse_args(&args).context(USAGE)?;

    let config = CliConfig::load()?;

    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "configuration loaded");

    let engine = PairingEngine::new(config.engine)?;
    let pairing_request = PairingRequest::read(&path)
        .with_context(|| format!("failed to read request from {}", path.display()))?;

    info!(
        providers = pairing_request.providers.len(),
        list_size = engine.config().list_size,
        location_mode = ?engine.config().location_mode,
        ?mode,
        "processing pairing request"
    );

    let response = request::execute(&engine, &pairing_request, mode)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Split arguments into the output mode and the request path.
fn parse_args(args: &[String]) -> anyhow::Result<(Mode, PathBuf)> {
    let mut mode = Mode::List;
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--explain" => mode = Mode::Explain,
            "--rank" => mode = Mode::Rank,
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag: {flag}"),
            other => {
                if path.replace(PathBuf::from(other)).is_some() {
                    anyhow::bail!("expected a single request path");
                }
            }
        }
    }

    let path = path.ok_or_else(|| anyhow::anyhow!("missing request path"))?;
    Ok((mode, path))
}
