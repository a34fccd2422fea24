//! Fleet Service - loading use cases
//!
//! Builds a fleet from a manifest, applies its load plan in order and
//! records every step so callers can present the outcome.

use fleet_domain::service::check_route;
use fleet_domain::{Cargo, Carrier, Feasibility, Fleet, FleetReport, LoadOutcome, Unloaded};
use fleet_infra::FleetManifest;
use fleet_types::{Error, LoadError, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::constants::demo_manifest;

/// Outcome of one load attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepResult {
    Loaded(LoadOutcome),
    Rejected(LoadError),
}

impl StepResult {
    pub fn is_loaded(&self) -> bool {
        matches!(self, StepResult::Loaded(_))
    }
}

/// A recorded operation on a fleet member
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Load {
        vehicle: usize,
        cargo: Cargo,
        result: StepResult,
    },
    Unload {
        vehicle: usize,
        released: u64,
    },
}

/// Everything that happened during a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioRun {
    pub steps: Vec<Step>,
    /// Fleet state after the load plan, before any unloading
    pub loaded: FleetReport,
    /// Fleet state at the end of the run
    pub report: FleetReport,
}

/// Result of a route feasibility check for one vehicle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub vehicle: usize,
    pub name: String,
    /// Summed weight of the cargo planned for the vehicle
    pub cargo_weight: u64,
    pub feasibility: Feasibility,
}

/// A fleet plus the log of operations applied to it
#[derive(Debug)]
pub struct FleetSession {
    fleet: Fleet,
    steps: Vec<Step>,
}

impl FleetSession {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet,
            steps: Vec::new(),
        }
    }

    pub fn from_manifest(manifest: &FleetManifest) -> Result<Self> {
        Ok(Self::new(manifest.build_fleet()?))
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Try to load `cargo` into vehicle `vehicle` (1-based)
    ///
    /// A rejection is a normal outcome and is recorded; only an unknown
    /// vehicle index is an error.
    pub fn load(&mut self, vehicle: usize, cargo: Cargo) -> Result<StepResult> {
        let carrier = self
            .fleet
            .vehicle_mut(vehicle)
            .ok_or(Error::UnknownVehicle(vehicle))?;

        let result = match carrier.load_cargo(&cargo) {
            Ok(outcome) => {
                info!(
                    "#{} {}: loaded '{}' +{} kg",
                    vehicle,
                    carrier.vehicle().name(),
                    cargo.description(),
                    outcome.added
                );
                StepResult::Loaded(outcome)
            }
            Err(e) => {
                warn!(
                    "#{} {}: '{}' rejected: {}",
                    vehicle,
                    carrier.vehicle().name(),
                    cargo.description(),
                    e
                );
                StepResult::Rejected(e)
            }
        };

        self.steps.push(Step::Load {
            vehicle,
            cargo,
            result: result.clone(),
        });
        Ok(result)
    }

    /// Unload vehicle `vehicle` (1-based)
    pub fn unload(&mut self, vehicle: usize) -> Result<Unloaded> {
        let carrier = self
            .fleet
            .vehicle_mut(vehicle)
            .ok_or(Error::UnknownVehicle(vehicle))?;

        let unloaded = carrier.unload_cargo();
        info!(
            "#{} {}: unloaded {} kg",
            vehicle,
            carrier.vehicle().name(),
            unloaded.released
        );

        self.steps.push(Step::Unload {
            vehicle,
            released: unloaded.released,
        });
        Ok(unloaded)
    }

    /// Close the session; `loaded` is the snapshot taken before unloading
    pub fn finish(self, loaded: FleetReport) -> ScenarioRun {
        ScenarioRun {
            report: self.fleet.summary(),
            steps: self.steps,
            loaded,
        }
    }
}

/// Build the manifest's fleet and apply its loads, without unloading
pub fn run_plan(manifest: &FleetManifest) -> Result<FleetSession> {
    let mut session = FleetSession::from_manifest(manifest)?;
    for entry in &manifest.loads {
        session.load(entry.vehicle, entry.to_cargo()?)?;
    }
    Ok(session)
}

/// Apply the full manifest: loads first, then the listed unloads
pub fn run_manifest(manifest: &FleetManifest) -> Result<ScenarioRun> {
    let mut session = run_plan(manifest)?;
    let loaded = session.fleet().summary();

    for &vehicle in &manifest.unload {
        session.unload(vehicle)?;
    }

    Ok(session.finish(loaded))
}

/// Run the built-in two-truck demo
pub fn run_demo() -> Result<ScenarioRun> {
    run_manifest(&demo_manifest()?)
}

/// Check whether `vehicle` can carry its planned cargo over `distance_km`
pub fn plan_route(manifest: &FleetManifest, vehicle: usize, distance_km: u32) -> Result<RoutePlan> {
    let fleet = manifest.build_fleet()?;
    let carrier = fleet.vehicle(vehicle).ok_or(Error::UnknownVehicle(vehicle))?;
    let cargo = manifest.cargo_for(vehicle)?;

    let feasibility = check_route(carrier.vehicle(), &cargo, distance_km)?;
    Ok(RoutePlan {
        vehicle,
        name: carrier.vehicle().name(),
        cargo_weight: cargo
            .iter()
            .fold(0, |total, c| total.saturating_add(c.weight())),
        feasibility,
    })
}
