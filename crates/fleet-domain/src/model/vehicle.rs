//! Base vehicle model

use fleet_types::CargoType;

use super::cargo::TypeFilter;

/// Fuel data used by the route feasibility check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelProfile {
    /// Tank size in litres
    pub tank_capacity: f64,
    /// Consumption in litres per 100 km
    pub fuel_consumption: f64,
    /// Current fuel in litres
    pub fuel_level: f64,
}

impl FuelProfile {
    /// Profile with a full tank
    pub fn full(tank_capacity: f64, fuel_consumption: f64) -> Self {
        Self {
            tank_capacity,
            fuel_consumption,
            fuel_level: tank_capacity,
        }
    }
}

/// A vehicle with a single loading region (the main bed)
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    make: String,
    model: String,
    /// Model year
    pub year: i32,
    /// Maximum total weight in kg
    capacity: u64,
    /// Cargo types the main bed accepts
    pub types: TypeFilter,
    /// Currently loaded weight in kg
    current_load: u64,
    pub fuel: Option<FuelProfile>,
}

impl Vehicle {
    /// Create an empty vehicle that accepts any cargo type
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32, capacity: u64) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            capacity,
            types: TypeFilter::Unrestricted,
            current_load: 0,
            fuel: None,
        }
    }

    pub fn with_types(mut self, types: Vec<CargoType>) -> Self {
        self.types = TypeFilter::RestrictedTo(types);
        self
    }

    pub fn with_type_filter(mut self, types: TypeFilter) -> Self {
        self.types = types;
        self
    }

    /// Start from an already loaded state
    pub fn with_current_load(mut self, current_load: u64) -> Self {
        self.current_load = current_load;
        self
    }

    pub fn with_fuel(mut self, fuel: FuelProfile) -> Self {
        self.fuel = Some(fuel);
        self
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn current_load(&self) -> u64 {
        self.current_load
    }

    /// Remaining space in the main bed
    pub fn headroom(&self) -> u64 {
        self.capacity.saturating_sub(self.current_load)
    }

    /// `make model` for display
    pub fn name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    pub(crate) fn add_load(&mut self, weight: u64) {
        self.current_load += weight;
    }

    /// Empty the vehicle, returning the weight that was on board
    pub(crate) fn clear_load(&mut self) -> u64 {
        std::mem::take(&mut self.current_load)
    }
}
