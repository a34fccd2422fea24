//! Truck model: a vehicle with an optional trailer

use fleet_types::CargoType;

use super::cargo::TypeFilter;
use super::vehicle::Vehicle;

/// A vehicle that can pull a trailer
///
/// The trailer adds its own capacity and its own type filter. The
/// `trailer_attached` flag is informational and does not gate the trailer
/// capacity during loading.
#[derive(Debug, Clone, PartialEq)]
pub struct Truck {
    vehicle: Vehicle,
    pub trailer_attached: bool,
    trailer_capacity: Option<u64>,
    pub trailer_types: TypeFilter,
}

impl Truck {
    /// Wrap a vehicle as a truck without a trailer
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            trailer_attached: false,
            trailer_capacity: None,
            trailer_types: TypeFilter::Unrestricted,
        }
    }

    /// Attach a trailer with the given capacity in kg
    pub fn with_trailer(mut self, capacity: u64) -> Self {
        self.trailer_capacity = Some(capacity);
        self.trailer_attached = true;
        self
    }

    pub fn with_trailer_capacity(mut self, capacity: Option<u64>) -> Self {
        self.trailer_capacity = capacity;
        self
    }

    pub fn with_trailer_attached(mut self, attached: bool) -> Self {
        self.trailer_attached = attached;
        self
    }

    pub fn with_trailer_types(mut self, types: Vec<CargoType>) -> Self {
        self.trailer_types = TypeFilter::RestrictedTo(types);
        self
    }

    pub fn with_trailer_type_filter(mut self, types: TypeFilter) -> Self {
        self.trailer_types = types;
        self
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub(crate) fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    pub fn trailer_capacity(&self) -> Option<u64> {
        self.trailer_capacity
    }

    /// Main bed plus trailer capacity, saturating at `u64::MAX`
    pub fn total_capacity(&self) -> u64 {
        self.vehicle
            .capacity()
            .saturating_add(self.trailer_capacity.unwrap_or(0))
    }
}
