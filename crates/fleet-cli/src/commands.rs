//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_load, output_report, output_route, output_run};
use fleet_app::app::{plan_route, run_demo, run_manifest, run_plan, StepResult};
use fleet_app::config::Config;
use fleet_domain::Cargo;
use fleet_infra::FleetManifest;
use fleet_types::{Error, OutputFormat, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config; commands still work without a config directory
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Using default configuration: {}", e);
        Config::default()
    });
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Demo => cmd_demo(output_format),

        Commands::Run { manifest } => cmd_run(&config, manifest, output_format),

        Commands::Report { manifest } => cmd_report(&config, manifest, output_format),

        Commands::Load {
            manifest,
            vehicle,
            description,
            weight,
            cargo_type,
        } => {
            // Validate the cargo before touching the manifest
            let cargo = Cargo::new(description, weight, cargo_type)?;
            cmd_load(&config, manifest, vehicle, cargo, output_format)
        }

        Commands::Route {
            manifest,
            vehicle,
            distance,
        } => cmd_route(&config, manifest, vehicle, distance, output_format),

        Commands::Config {
            show,
            set_output,
            set_manifest,
            reset,
        } => cmd_config(config, show, set_output, set_manifest, reset),
    }
}

fn open_manifest(config: &Config, explicit: Option<PathBuf>) -> Result<FleetManifest> {
    let path = config.resolve_manifest(explicit).ok_or(Error::NoManifest)?;
    debug!("Using manifest {}", path.display());
    FleetManifest::load_from_file(&path)
}

fn cmd_demo(output_format: OutputFormat) -> Result<()> {
    let run = run_demo()?;
    output_run(output_format, &run)
}

fn cmd_run(config: &Config, manifest: Option<PathBuf>, output_format: OutputFormat) -> Result<()> {
    let manifest = open_manifest(config, manifest)?;
    let run = run_manifest(&manifest)?;
    output_run(output_format, &run)
}

fn cmd_report(config: &Config, manifest: Option<PathBuf>, output_format: OutputFormat) -> Result<()> {
    let manifest = open_manifest(config, manifest)?;
    let fleet = manifest.build_fleet()?;
    output_report(output_format, &fleet.summary())
}

fn cmd_load(
    config: &Config,
    manifest: Option<PathBuf>,
    vehicle: usize,
    cargo: Cargo,
    output_format: OutputFormat,
) -> Result<()> {
    let manifest = open_manifest(config, manifest)?;
    let mut session = run_plan(&manifest)?;
    let result = session.load(vehicle, cargo)?;

    if let Some(step) = session.steps().last() {
        output_load(output_format, step, &session.fleet().summary())?;
    }

    // Non-zero exit status for a refused load
    match result {
        StepResult::Loaded(_) => Ok(()),
        StepResult::Rejected(e) => Err(e.into()),
    }
}

fn cmd_route(
    config: &Config,
    manifest: Option<PathBuf>,
    vehicle: usize,
    distance: u32,
    output_format: OutputFormat,
) -> Result<()> {
    let manifest = open_manifest(config, manifest)?;
    let plan = plan_route(&manifest, vehicle, distance)?;
    output_route(output_format, &plan)
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_manifest: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        if show {
            println!("{}", config);
        }
        return Ok(());
    }

    let mut changed = false;

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
        println!("Output format set to: {}", format);
    }

    if let Some(path) = set_manifest {
        println!("Default manifest set to: {}", path.display());
        config.default_manifest = Some(path);
        changed = true;
    }

    if changed {
        config.save()?;
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
