//! Cargo loading rules
//!
//! The placement functions decide where a cargo item goes without touching
//! the vehicle. [`Carrier`] implementations apply the decision. Weight is
//! indivisible: an item is either loaded completely or not at all.

use std::fmt;

use fleet_types::{LoadError, Section};
use serde::Serialize;
use tracing::debug;

use crate::model::{Cargo, Truck, Vehicle};

/// Result of a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadOutcome {
    /// Weight added in kg
    pub added: u64,
    /// Region the cargo was placed in
    pub section: Section,
    /// Load on the vehicle after the operation
    pub current_load: u64,
}

/// Result of unloading a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Unloaded {
    /// Weight that was on board before unloading
    pub released: u64,
}

/// Anything a fleet can hold and load cargo into
pub trait Carrier: fmt::Debug {
    /// Base vehicle data (make, model, capacity, load)
    fn vehicle(&self) -> &Vehicle;

    /// Short kind name for reports
    fn kind(&self) -> &'static str;

    /// Load a cargo item, leaving the carrier unchanged on rejection
    fn load_cargo(&mut self, cargo: &Cargo) -> Result<LoadOutcome, LoadError>;

    /// Remove all cargo. Never fails.
    fn unload_cargo(&mut self) -> Unloaded;
}

/// Decide placement for a single-region vehicle
///
/// Capacity is checked before the type filter.
pub fn place_in_vehicle(vehicle: &Vehicle, cargo: &Cargo) -> Result<Section, LoadError> {
    let requested = cargo.weight();

    let fits = requested
        .checked_add(vehicle.current_load())
        .is_some_and(|load_after| load_after <= vehicle.capacity());
    if !fits {
        return Err(LoadError::CapacityExceeded {
            requested,
            available: vehicle.headroom(),
        });
    }

    if !vehicle.types.admits(cargo.cargo_type()) {
        return Err(LoadError::UnsupportedType {
            cargo_type: *cargo.cargo_type(),
            section: Section::MainBed,
        });
    }

    Ok(Section::MainBed)
}

/// Decide placement for a truck with an optional trailer
///
/// 1. The item must fit into main bed plus trailer.
/// 2. If it fits into the main bed alone, the main bed filter decides.
/// 3. If the trailer has both a capacity and a type restriction and the
///    overflow fits into it, the trailer filter decides.
/// 4. Otherwise the item spans both regions and both filters must admit it.
pub fn place_in_truck(truck: &Truck, cargo: &Cargo) -> Result<Section, LoadError> {
    let vehicle = truck.vehicle();
    let requested = cargo.weight();
    let cargo_type = cargo.cargo_type();
    let total_capacity = truck.total_capacity();
    let capacity_exceeded = || LoadError::CapacityExceeded {
        requested,
        available: total_capacity.saturating_sub(vehicle.current_load()),
    };

    let load_after = match requested.checked_add(vehicle.current_load()) {
        Some(load_after) if load_after <= total_capacity => load_after,
        _ => return Err(capacity_exceeded()),
    };

    let unsupported = |section| LoadError::UnsupportedType {
        cargo_type: *cargo_type,
        section,
    };

    if load_after <= vehicle.capacity() {
        return if vehicle.types.admits(cargo_type) {
            Ok(Section::MainBed)
        } else {
            Err(unsupported(Section::MainBed))
        };
    }

    let overflow = load_after - vehicle.capacity();
    if let Some(trailer_capacity) = truck.trailer_capacity() {
        if truck.trailer_types.is_restricted() && overflow <= trailer_capacity {
            return if truck.trailer_types.admits(cargo_type) {
                Ok(Section::Trailer)
            } else {
                Err(unsupported(Section::Trailer))
            };
        }
    }

    // A restricted trailer always took the branch above, since step 1 bounds
    // the overflow by the trailer capacity. Only the main bed can refuse here.
    if !vehicle.types.admits(cargo_type) {
        return Err(unsupported(Section::MainBed));
    }
    Ok(Section::Both)
}

impl Carrier for Vehicle {
    fn vehicle(&self) -> &Vehicle {
        self
    }

    fn kind(&self) -> &'static str {
        "vehicle"
    }

    fn load_cargo(&mut self, cargo: &Cargo) -> Result<LoadOutcome, LoadError> {
        let section = match place_in_vehicle(self, cargo) {
            Ok(section) => section,
            Err(e) => {
                debug!("{}: rejected '{}': {}", self.name(), cargo.description(), e);
                return Err(e);
            }
        };

        self.add_load(cargo.weight());
        debug!(
            "{}: loaded '{}' +{} kg into {}",
            self.name(),
            cargo.description(),
            cargo.weight(),
            section
        );

        Ok(LoadOutcome {
            added: cargo.weight(),
            section,
            current_load: self.current_load(),
        })
    }

    fn unload_cargo(&mut self) -> Unloaded {
        let released = self.clear_load();
        debug!("{}: unloaded {} kg", self.name(), released);
        Unloaded { released }
    }
}

impl Carrier for Truck {
    fn vehicle(&self) -> &Vehicle {
        Truck::vehicle(self)
    }

    fn kind(&self) -> &'static str {
        "truck"
    }

    fn load_cargo(&mut self, cargo: &Cargo) -> Result<LoadOutcome, LoadError> {
        let section = match place_in_truck(self, cargo) {
            Ok(section) => section,
            Err(e) => {
                debug!("{}: rejected '{}': {}", self.vehicle().name(), cargo.description(), e);
                return Err(e);
            }
        };

        let vehicle = self.vehicle_mut();
        vehicle.add_load(cargo.weight());
        debug!(
            "{}: loaded '{}' +{} kg into {}",
            vehicle.name(),
            cargo.description(),
            cargo.weight(),
            section
        );

        Ok(LoadOutcome {
            added: cargo.weight(),
            section,
            current_load: vehicle.current_load(),
        })
    }

    fn unload_cargo(&mut self) -> Unloaded {
        self.vehicle_mut().unload_cargo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CargoType;

    const BULK: CargoType = CargoType::Bulk { max_wet_air: 10 };
    const FRAGILE: CargoType = CargoType::Fragile { max_load: 1000 };
    const PERISHABLE: CargoType = CargoType::Perishable { max_temperature: 5.0 };

    fn cargo(weight: i64, cargo_type: CargoType) -> Cargo {
        Cargo::new("test", weight, cargo_type).unwrap()
    }

    fn actros() -> Truck {
        Truck::new(
            Vehicle::new("Mercedes", "Actros", 2019, 20000)
                .with_types(vec![BULK])
                .with_current_load(12000),
        )
        .with_trailer(5000)
    }

    #[test]
    fn test_vehicle_loads_within_capacity() {
        let mut vehicle = Vehicle::new("MAN", "TGX", 2018, 10000);
        let outcome = vehicle.load_cargo(&cargo(4000, FRAGILE)).unwrap();
        assert_eq!(outcome.added, 4000);
        assert_eq!(outcome.section, Section::MainBed);
        assert_eq!(outcome.current_load, 4000);

        // exactly full is allowed
        vehicle.load_cargo(&cargo(6000, BULK)).unwrap();
        assert_eq!(vehicle.current_load(), 10000);
    }

    #[test]
    fn test_vehicle_rejects_over_capacity() {
        let mut vehicle = Vehicle::new("MAN", "TGX", 2018, 10000).with_current_load(9000);
        let err = vehicle.load_cargo(&cargo(1001, BULK)).unwrap_err();
        assert_eq!(
            err,
            LoadError::CapacityExceeded {
                requested: 1001,
                available: 1000
            }
        );
        assert_eq!(vehicle.current_load(), 9000);
    }

    #[test]
    fn test_same_cargo_counts_twice() {
        let mut vehicle = Vehicle::new("MAN", "TGX", 2018, 10000);
        let item = cargo(3000, BULK);
        vehicle.load_cargo(&item).unwrap();
        vehicle.load_cargo(&item).unwrap();
        assert_eq!(vehicle.current_load(), 6000);
    }

    #[test]
    fn test_vehicle_type_filter() {
        let mut vehicle = Vehicle::new("MAN", "TGX", 2018, 10000).with_types(vec![BULK]);
        let err = vehicle.load_cargo(&cargo(10, PERISHABLE)).unwrap_err();
        assert_eq!(
            err,
            LoadError::UnsupportedType {
                cargo_type: PERISHABLE,
                section: Section::MainBed
            }
        );

        // same category, different parameter
        let err = vehicle
            .load_cargo(&cargo(10, CargoType::Bulk { max_wet_air: 50 }))
            .unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedType { .. }));
        assert_eq!(vehicle.current_load(), 0);
    }

    #[test]
    fn test_capacity_checked_before_type() {
        let mut vehicle = Vehicle::new("MAN", "TGX", 2018, 100).with_types(vec![BULK]);
        let err = vehicle.load_cargo(&cargo(500, FRAGILE)).unwrap_err();
        assert!(matches!(err, LoadError::CapacityExceeded { .. }));
    }

    #[test]
    fn test_unload_always_resets() {
        let mut vehicle = Vehicle::new("MAN", "TGX", 2018, 10000).with_current_load(7000);
        assert_eq!(vehicle.unload_cargo(), Unloaded { released: 7000 });
        assert_eq!(vehicle.current_load(), 0);
        assert_eq!(vehicle.unload_cargo(), Unloaded { released: 0 });

        let mut truck = actros();
        assert_eq!(truck.unload_cargo(), Unloaded { released: 12000 });
        assert_eq!(truck.vehicle().current_load(), 0);
    }

    #[test]
    fn test_truck_main_bed_then_rejects_spanning_fragile() {
        let mut truck = actros();

        let outcome = truck.load_cargo(&cargo(8000, BULK)).unwrap();
        assert_eq!(outcome.section, Section::MainBed);
        assert_eq!(truck.vehicle().current_load(), 20000);

        let err = truck.load_cargo(&cargo(5000, FRAGILE)).unwrap_err();
        assert_eq!(
            err,
            LoadError::UnsupportedType {
                cargo_type: FRAGILE,
                section: Section::MainBed
            }
        );
        assert_eq!(truck.vehicle().current_load(), 20000);
    }

    #[test]
    fn test_truck_rejects_beyond_total_capacity() {
        let mut truck = actros();
        let err = truck.load_cargo(&cargo(13001, BULK)).unwrap_err();
        assert_eq!(
            err,
            LoadError::CapacityExceeded {
                requested: 13001,
                available: 13000
            }
        );
    }

    #[test]
    fn test_truck_without_trailer_behaves_like_vehicle() {
        let mut truck = Truck::new(
            Vehicle::new("Scania", "R450", 2020, 18000)
                .with_types(vec![PERISHABLE])
                .with_current_load(12000),
        );
        assert!(matches!(
            truck.load_cargo(&cargo(6001, PERISHABLE)),
            Err(LoadError::CapacityExceeded { .. })
        ));
        assert!(matches!(
            truck.load_cargo(&cargo(100, BULK)),
            Err(LoadError::UnsupportedType { .. })
        ));
        assert_eq!(truck.load_cargo(&cargo(6000, PERISHABLE)).unwrap().current_load, 18000);
    }

    #[test]
    fn test_truck_restricted_trailer_decides_alone() {
        // main bed only takes bulk, trailer only takes fragile
        let mut truck = actros().with_trailer_types(vec![FRAGILE]);

        let outcome = truck.load_cargo(&cargo(9000, FRAGILE)).unwrap();
        assert_eq!(outcome.section, Section::Trailer);
        assert_eq!(outcome.current_load, 21000);

        let mut truck = actros().with_trailer_types(vec![FRAGILE]);
        let err = truck.load_cargo(&cargo(9000, BULK)).unwrap_err();
        assert_eq!(
            err,
            LoadError::UnsupportedType {
                cargo_type: BULK,
                section: Section::Trailer
            }
        );
        assert_eq!(truck.vehicle().current_load(), 12000);
    }

    #[test]
    fn test_truck_unrestricted_trailer_spans_both() {
        let mut truck = actros();
        let outcome = truck.load_cargo(&cargo(10000, BULK)).unwrap();
        assert_eq!(outcome.section, Section::Both);
        assert_eq!(outcome.current_load, 22000);
    }

    #[test]
    fn test_detached_trailer_capacity_still_usable() {
        // trailer_attached is carried through but not consulted
        let mut truck = actros().with_trailer_attached(false);
        assert!(!truck.trailer_attached);
        let outcome = truck.load_cargo(&cargo(10000, BULK)).unwrap();
        assert_eq!(outcome.current_load, 22000);
    }

    #[test]
    fn test_vehicle_rejects_load_past_u64_max() {
        let mut vehicle = Vehicle::new("MAN", "TGX", 2018, u64::MAX).with_current_load(u64::MAX - 1);
        let err = vehicle.load_cargo(&cargo(2, BULK)).unwrap_err();
        assert_eq!(
            err,
            LoadError::CapacityExceeded {
                requested: 2,
                available: 1
            }
        );
        assert_eq!(vehicle.current_load(), u64::MAX - 1);

        vehicle.load_cargo(&cargo(1, BULK)).unwrap();
        assert_eq!(vehicle.current_load(), u64::MAX);
    }

    #[test]
    fn test_truck_rejects_load_past_u64_max() {
        let mut truck = Truck::new(
            Vehicle::new("Mercedes", "Actros", 2019, u64::MAX).with_current_load(u64::MAX - 1),
        )
        .with_trailer(5000);
        assert_eq!(truck.total_capacity(), u64::MAX);

        let err = truck.load_cargo(&cargo(2, BULK)).unwrap_err();
        assert!(matches!(err, LoadError::CapacityExceeded { requested: 2, .. }));
        assert_eq!(truck.vehicle().current_load(), u64::MAX - 1);
    }

    #[test]
    fn test_carrier_kind() {
        let truck: Box<dyn Carrier> = Box::new(actros());
        let vehicle: Box<dyn Carrier> = Box::new(Vehicle::new("MAN", "TGX", 2018, 1));
        assert_eq!(truck.kind(), "truck");
        assert_eq!(vehicle.kind(), "vehicle");
    }
}
