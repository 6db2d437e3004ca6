//! Inilock: lock-protected, atomic mutation of shared INI configuration files.
//!
//! This is the main entry point for the `inilock` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! per-taxonomy exit codes.

mod cli;
mod commands;
pub mod convert;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod ini;
pub mod locks;
pub mod settings;
pub mod store;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return the exit code for the error's taxonomy bucket
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Initialize logging to stderr; stdout is reserved for command output.
///
/// Quiet by default — stale-lock reclaims surface as warnings; set
/// `RUST_LOG=inilock=debug` to watch lock contention and retries.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
