//! Infrastructure layer for the fleet loader

pub mod manifest;

pub use manifest::{FleetManifest, FuelEntry, LoadEntry, VehicleEntry, VehicleKind};
