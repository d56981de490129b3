// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # h5series CLI
//!
//! Command-line front end for the container-to-series converter.
//!
//! ## Usage
//!
//! ```sh
//! # Convert a container file with defaults
//! h5series convert -i run7.json
//!
//! # Convert with a custom base time and packed output
//! h5series convert -i run7.json -b 0 --pack
//!
//! # Show what a container holds without converting
//! h5series inspect run7.json
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{ConvertCmd, InspectCmd};
use common::Result;

/// h5series - channel-major container to time-ordered series converter
#[derive(Parser, Clone)]
#[command(name = "h5series")]
#[command(about = "Convert hierarchical container files to time-ordered series output", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Convert a container file to time-ordered series output
    Convert(ConvertCmd),

    /// Inspect a container file (attributes, groups, dataset schemas)
    Inspect(InspectCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(cmd) => cmd.run(),
        Commands::Inspect(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
