// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quill - a starter for building a conversational agent.
//!
//! This is the binary entry point for the Quill starter.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod doctor;
mod serve;

/// Quill - a starter for building a conversational agent.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the gateway with the starter plugin.
    Serve,
    /// Print the resolved character profile as JSON.
    Character,
    /// Report which capability plugins the current configuration activates.
    Doctor,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match quill_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            quill_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Character) => serve::print_character(&config),
        Some(Commands::Doctor) => {
            doctor::run_doctor(&config);
            Ok(())
        }
        None => {
            println!("quill: use --help for available commands");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("quill: {err}");
        std::process::exit(1);
    }
}
