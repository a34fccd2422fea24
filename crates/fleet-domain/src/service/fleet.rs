//! Fleet aggregation and reporting

use serde::Serialize;

use super::loading::Carrier;

/// One line of a fleet report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleSummary {
    /// 1-based position in the fleet
    pub index: usize,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Main bed capacity in kg
    pub capacity: u64,
    pub current_load: u64,
}

/// Per-vehicle summaries plus fleet totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetReport {
    pub vehicles: Vec<VehicleSummary>,
    pub total_capacity: u64,
    pub total_current_load: u64,
}

/// Ordered collection of vehicles
///
/// Insertion order is kept and used for report numbering. The same vehicle
/// data may appear more than once.
#[derive(Debug, Default)]
pub struct Fleet {
    vehicles: Vec<Box<dyn Carrier>>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vehicle<C: Carrier + 'static>(&mut self, vehicle: C) {
        self.vehicles.push(Box::new(vehicle));
    }

    pub fn add_boxed(&mut self, vehicle: Box<dyn Carrier>) {
        self.vehicles.push(vehicle);
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Vehicle by 1-based index
    pub fn vehicle(&self, index: usize) -> Option<&dyn Carrier> {
        index
            .checked_sub(1)
            .and_then(|i| self.vehicles.get(i))
            .map(|v| v.as_ref())
    }

    /// Mutable vehicle by 1-based index
    pub fn vehicle_mut(&mut self, index: usize) -> Option<&mut Box<dyn Carrier>> {
        index.checked_sub(1).and_then(|i| self.vehicles.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Carrier> {
        self.vehicles.iter().map(|v| v.as_ref())
    }

    /// Sum of main bed capacities, saturating at `u64::MAX`
    ///
    /// Trailer capacity is not included.
    pub fn total_capacity(&self) -> u64 {
        self.iter()
            .fold(0, |total, v| total.saturating_add(v.vehicle().capacity()))
    }

    /// Sum of current loads, saturating at `u64::MAX`
    pub fn total_current_load(&self) -> u64 {
        self.iter()
            .fold(0, |total, v| total.saturating_add(v.vehicle().current_load()))
    }

    /// Per-vehicle summaries in insertion order, numbered from 1
    pub fn report(&self) -> Vec<VehicleSummary> {
        self.iter()
            .enumerate()
            .map(|(i, carrier)| {
                let vehicle = carrier.vehicle();
                VehicleSummary {
                    index: i + 1,
                    make: vehicle.make().to_string(),
                    model: vehicle.model().to_string(),
                    year: vehicle.year,
                    capacity: vehicle.capacity(),
                    current_load: vehicle.current_load(),
                }
            })
            .collect()
    }

    pub fn summary(&self) -> FleetReport {
        FleetReport {
            vehicles: self.report(),
            total_capacity: self.total_capacity(),
            total_current_load: self.total_current_load(),
        }
    }
}

impl From<Vec<Box<dyn Carrier>>> for Fleet {
    fn from(vehicles: Vec<Box<dyn Carrier>>) -> Self {
        Self { vehicles }
    }
}
