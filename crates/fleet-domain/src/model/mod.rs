//! Domain model types

pub mod cargo;
pub mod truck;
pub mod vehicle;

pub use cargo::{Cargo, TypeFilter};
pub use fleet_types::CargoType;
pub use truck::Truck;
pub use vehicle::{FuelProfile, Vehicle};
