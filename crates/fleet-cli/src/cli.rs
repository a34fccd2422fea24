//! CLI definition using clap

use clap::{Parser, Subcommand};
use fleet_types::{CargoType, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleet-loader")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Load typed cargo into a truck fleet and report capacity")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in two-truck demo
    Demo,

    /// Apply a manifest's load plan and show the result
    Run {
        /// Path to fleet manifest (TOML). Uses configured default if omitted.
        manifest: Option<PathBuf>,
    },

    /// Show the fleet report of a manifest without loading anything
    Report {
        /// Path to fleet manifest (TOML). Uses configured default if omitted.
        manifest: Option<PathBuf>,
    },

    /// Apply a manifest's load plan, then load one more cargo item
    Load {
        /// Path to fleet manifest (TOML). Uses configured default if omitted.
        manifest: Option<PathBuf>,

        /// Target vehicle (1-based fleet index)
        #[arg(long)]
        vehicle: usize,

        /// Cargo description
        #[arg(long, short = 'd', default_value = "Cargo")]
        description: String,

        /// Cargo weight in kg
        #[arg(long, short = 'w', allow_negative_numbers = true)]
        weight: i64,

        /// Cargo type (e.g., "bulk:10", "fragile:1000", "perishable:5")
        #[arg(long = "type", short = 't')]
        cargo_type: CargoType,
    },

    /// Check whether a vehicle can carry its planned cargo over a distance
    Route {
        /// Path to fleet manifest (TOML). Uses configured default if omitted.
        manifest: Option<PathBuf>,

        /// Vehicle (1-based fleet index)
        #[arg(long)]
        vehicle: usize,

        /// One-way distance in km
        #[arg(long)]
        distance: u32,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default manifest path
        #[arg(long)]
        set_manifest: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
