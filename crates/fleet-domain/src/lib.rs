//! Fleet domain: cargo, vehicles, trucks and the rules for loading them

pub mod model;
pub mod service;

pub use model::*;
pub use service::{Carrier, Feasibility, Fleet, FleetReport, LoadOutcome, Unloaded, VehicleSummary};
