//! Domain services
//!
//! Loading rules, route feasibility and fleet aggregation.

pub mod feasibility;
pub mod fleet;
pub mod loading;

pub use feasibility::{can_go, check_route, Feasibility};
pub use fleet::{Fleet, FleetReport, VehicleSummary};
pub use loading::{place_in_truck, place_in_vehicle, Carrier, LoadOutcome, Unloaded};
