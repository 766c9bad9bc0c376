//! Command implementations for bridgectl CLI

pub mod vendors;

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum VendorCommands {
    /// List all recognized vendor IDs
    List {
        /// Mark each entry as built-in or override
        #[arg(short, long)]
        detailed: bool,
    },

    /// Check whether a vendor ID is recognized
    Check {
        /// Vendor ID, decimal or 0x-hex
        id: String,
    },

    /// Show the override file path for this host
    Path,

    /// Write the diagnostic registry dump
    Dump {
        /// Destination file (default: vids.ini next to the override file)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
