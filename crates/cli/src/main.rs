//! bridgectl - DeviceBridge Control CLI
//!
//! Command-line interface for inspecting the USB vendor ID registry the
//! device bridge builds at startup: the compiled-in vendor list plus the
//! user's override file.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::VendorCommands;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "bridgectl")]
#[command(about = "DeviceBridge Control CLI - Inspect the USB vendor ID registry")]
#[command(version)]
struct Cli {
    /// Output in JSON format for machine parsing
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Vendor ID registry commands
    #[command(subcommand)]
    Vendors(VendorCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("bridgectl={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let result = execute_command(&cli);

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = match e.downcast_ref::<CliError>() {
                Some(CliError::VendorNotRecognized(_)) => 2,
                Some(CliError::Registry(_)) => 3,
                Some(CliError::InvalidArgument(_)) | Some(CliError::JsonError(_)) => 4,
                _ => 1,
            };

            std::process::exit(exit_code);
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Vendors(cmd) => commands::vendors::execute(cmd, cli.json),
    }
}
