//! Fleet manifest loader (TOML)
//!
//! A manifest declares the vehicles of a fleet and an ordered plan of
//! cargo loads:
//!
//! ```toml
//! [[vehicles]]
//! kind = "truck"
//! make = "Mercedes"
//! model = "Actros"
//! year = 2019
//! capacity = 20000
//! current_load = 12000
//! types = [{ kind = "bulk", max_wet_air = 10 }]
//! trailer_capacity = 5000
//!
//! [[loads]]
//! vehicle = 1
//! description = "Bulk"
//! weight = 8000
//! type = { kind = "bulk", max_wet_air = 10 }
//! ```

use std::fs;
use std::path::Path;

use fleet_domain::{Cargo, Carrier, Fleet, FuelProfile, Truck, TypeFilter, Vehicle};
use fleet_types::{CargoType, Error, Result};
use serde::Deserialize;
use tracing::debug;

/// Vehicle variant in a manifest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    #[default]
    Vehicle,
    Truck,
}

/// Fuel data for route checks; the tank starts full
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FuelEntry {
    pub tank_capacity: f64,
    /// Litres per 100 km
    pub fuel_consumption: f64,
}

/// A vehicle declaration
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleEntry {
    #[serde(default)]
    pub kind: VehicleKind,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub capacity: u64,
    #[serde(default)]
    pub current_load: u64,
    /// Omitted means any type is accepted
    #[serde(default)]
    pub types: Option<Vec<CargoType>>,
    /// Defaults to true when a trailer capacity is given
    #[serde(default)]
    pub trailer_attached: Option<bool>,
    #[serde(default)]
    pub trailer_capacity: Option<u64>,
    #[serde(default)]
    pub trailer_types: Option<Vec<CargoType>>,
    #[serde(default)]
    pub fuel: Option<FuelEntry>,
}

/// A planned cargo load
#[derive(Debug, Clone, Deserialize)]
pub struct LoadEntry {
    /// 1-based fleet index
    pub vehicle: usize,
    pub description: String,
    /// Validated when the cargo is built
    pub weight: i64,
    #[serde(rename = "type")]
    pub cargo_type: CargoType,
}

/// Parsed manifest file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FleetManifest {
    #[serde(default)]
    pub vehicles: Vec<VehicleEntry>,
    #[serde(default)]
    pub loads: Vec<LoadEntry>,
    /// Vehicles (1-based) to unload after every load has been applied
    #[serde(default)]
    pub unload: Vec<usize>,
}

impl VehicleEntry {
    fn has_trailer_fields(&self) -> bool {
        self.trailer_attached.is_some()
            || self.trailer_capacity.is_some()
            || self.trailer_types.is_some()
    }

    /// Build the fleet member described by this entry
    pub fn to_carrier(&self) -> Result<Box<dyn Carrier>> {
        let mut vehicle = Vehicle::new(&self.make, &self.model, self.year, self.capacity)
            .with_type_filter(TypeFilter::from(self.types.clone()))
            .with_current_load(self.current_load);
        if let Some(fuel) = self.fuel {
            vehicle = vehicle.with_fuel(FuelProfile::full(fuel.tank_capacity, fuel.fuel_consumption));
        }

        match self.kind {
            VehicleKind::Vehicle => {
                if self.has_trailer_fields() {
                    return Err(Error::Manifest(format!(
                        "{} {}: trailer fields require kind = \"truck\"",
                        self.make, self.model
                    )));
                }
                Ok(Box::new(vehicle))
            }
            VehicleKind::Truck => {
                let attached = self
                    .trailer_attached
                    .unwrap_or(self.trailer_capacity.is_some());
                let truck = Truck::new(vehicle)
                    .with_trailer_capacity(self.trailer_capacity)
                    .with_trailer_attached(attached)
                    .with_trailer_type_filter(TypeFilter::from(self.trailer_types.clone()));
                Ok(Box::new(truck))
            }
        }
    }
}

impl LoadEntry {
    pub fn to_cargo(&self) -> Result<Cargo> {
        Ok(Cargo::new(&self.description, self.weight, self.cargo_type)?)
    }
}

impl FleetManifest {
    /// Load a manifest from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Manifest(format!("Failed to read manifest {}: {}", path.display(), e))
        })?;

        Self::load_from_str(&content)
    }

    /// Load a manifest from a TOML string
    ///
    /// Load targets are checked against the declared vehicles.
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let manifest: FleetManifest = toml::from_str(toml_content)
            .map_err(|e| Error::Manifest(format!("Failed to parse manifest TOML: {}", e)))?;

        let count = manifest.vehicles.len();
        let targets = manifest.loads.iter().map(|l| l.vehicle);
        if let Some(bad) = targets
            .chain(manifest.unload.iter().copied())
            .find(|&i| i == 0 || i > count)
        {
            return Err(Error::UnknownVehicle(bad));
        }

        debug!(
            "Manifest: {} vehicles, {} loads",
            manifest.vehicles.len(),
            manifest.loads.len()
        );
        Ok(manifest)
    }

    /// Build a fleet in declaration order
    pub fn build_fleet(&self) -> Result<Fleet> {
        let mut fleet = Fleet::new();
        for entry in &self.vehicles {
            fleet.add_boxed(entry.to_carrier()?);
        }
        Ok(fleet)
    }

    /// Cargo planned for one vehicle, in plan order
    pub fn cargo_for(&self, vehicle: usize) -> Result<Vec<Cargo>> {
        self.loads
            .iter()
            .filter(|l| l.vehicle == vehicle)
            .map(LoadEntry::to_cargo)
            .collect()
    }
}
