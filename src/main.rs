//! The `resolv-entrypoint` binary.
//!
//! Wiring only: logging init, environment resolution, conditional resolver
//! write, then the exec handoff. All diagnostics go to stderr so the
//! workload's stdout stays clean.

use std::convert::Infallible;
use std::ffi::OsString;
use std::process::ExitCode;

use resolv_entrypoint::{
    DNS_SERVER_VAR, ResolvConfig, ResolvFile, Result, SEARCH_DOMAIN_VAR, exec,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .ok();

    let argv: Vec<OsString> = std::env::args_os().skip(1).collect();
    match run(argv) {
        Ok(never) => match never {},
        Err(err) => {
            tracing::error!(error = %err, "Startup failed");
            ExitCode::FAILURE
        }
    }
}

/// Configures the resolver if the environment asks for it, then execs the
/// workload. Returns only on failure.
fn run(argv: Vec<OsString>) -> Result<Infallible> {
    match ResolvConfig::from_env() {
        Some(config) => ResolvFile::from_env().write(&config)?,
        None => tracing::warn!(
            "{DNS_SERVER_VAR} and/or {SEARCH_DOMAIN_VAR} unset or empty, \
             leaving resolver configuration untouched"
        ),
    }

    exec::hand_off(argv)
}
