//! Use cases

pub mod fleet_service;

pub use fleet_service::{
    plan_route, run_demo, run_manifest, run_plan, FleetSession, RoutePlan, ScenarioRun, Step,
    StepResult,
};
