//! Route feasibility check
//!
//! Advisory only: nothing on the vehicle is changed.

use fleet_types::RouteError;
use serde::Serialize;
use tracing::debug;

use crate::model::{Cargo, Vehicle};

/// Verdict of a route check
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Feasibility {
    /// Vehicle can make the round trip
    Feasible { distance_km: u32, fuel_needed: f64 },
    /// Cargo weighs more than the vehicle's capacity
    Overloaded { total_weight: u64, capacity: u64 },
    /// Round trip needs more than half a tank
    InsufficientFuel { fuel_needed: f64, reserve_limit: f64 },
}

impl Feasibility {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Feasibility::Feasible { .. })
    }
}

/// Check whether `vehicle` can carry `cargo` over `distance_km` and back
///
/// Fuel needed for the round trip must not exceed half of the tank.
pub fn check_route(
    vehicle: &Vehicle,
    cargo: &[Cargo],
    distance_km: u32,
) -> Result<Feasibility, RouteError> {
    let fuel = vehicle.fuel.ok_or(RouteError::NoFuelProfile)?;

    // a sum past u64::MAX is over any capacity
    let within = cargo
        .iter()
        .try_fold(0u64, |total, c| total.checked_add(c.weight()))
        .filter(|&total| total <= vehicle.capacity());
    if within.is_none() {
        let total_weight = cargo
            .iter()
            .fold(0u64, |total, c| total.saturating_add(c.weight()));
        debug!("{}: overloaded ({} kg)", vehicle.name(), total_weight);
        return Ok(Feasibility::Overloaded {
            total_weight,
            capacity: vehicle.capacity(),
        });
    }

    let round_trip_km = f64::from(distance_km) * 2.0;
    let fuel_needed = (fuel.fuel_consumption / 100.0) * round_trip_km;
    let reserve_limit = fuel.tank_capacity / 2.0;
    if fuel_needed > reserve_limit {
        debug!("{}: not enough fuel ({:.1} l needed)", vehicle.name(), fuel_needed);
        return Ok(Feasibility::InsufficientFuel {
            fuel_needed,
            reserve_limit,
        });
    }

    Ok(Feasibility::Feasible {
        distance_km,
        fuel_needed,
    })
}

/// Boolean form of [`check_route`]; a vehicle without fuel data cannot go
pub fn can_go(vehicle: &Vehicle, cargo: &[Cargo], distance_km: u32) -> bool {
    check_route(vehicle, cargo, distance_km)
        .map(|f| f.is_feasible())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CargoType, FuelProfile};

    fn truck() -> Vehicle {
        // 30 l/100km, 400 l tank => 200 l reserve limit
        Vehicle::new("Mercedes", "Actros", 2019, 20000).with_fuel(FuelProfile::full(400.0, 30.0))
    }

    fn bulk(weight: i64) -> Cargo {
        Cargo::new("Bulk", weight, CargoType::Bulk { max_wet_air: 10 }).unwrap()
    }

    #[test]
    fn test_feasible_route() {
        let result = check_route(&truck(), &[bulk(8000), bulk(5000)], 300).unwrap();
        match result {
            Feasibility::Feasible {
                distance_km,
                fuel_needed,
            } => {
                assert_eq!(distance_km, 300);
                assert!((fuel_needed - 180.0).abs() < 1e-9);
            }
            other => panic!("expected feasible, got {:?}", other),
        }
        assert!(can_go(&truck(), &[bulk(8000)], 300));
    }

    #[test]
    fn test_boundary_exactly_half_tank() {
        // 333 km each way needs 199.8 l, 334 km needs 200.4 l
        assert!(can_go(&truck(), &[], 333));
        assert!(!can_go(&truck(), &[], 334));
    }

    #[test]
    fn test_overloaded() {
        let result = check_route(&truck(), &[bulk(15000), bulk(5001)], 10).unwrap();
        assert_eq!(
            result,
            Feasibility::Overloaded {
                total_weight: 20001,
                capacity: 20000
            }
        );
    }

    #[test]
    fn test_overloaded_when_sum_overflows() {
        let huge = Vehicle::new("Volvo", "FH16", 2021, u64::MAX).with_fuel(FuelProfile::full(400.0, 30.0));
        let result = check_route(&huge, &[bulk(i64::MAX), bulk(i64::MAX), bulk(i64::MAX)], 10).unwrap();
        assert_eq!(
            result,
            Feasibility::Overloaded {
                total_weight: u64::MAX,
                capacity: u64::MAX
            }
        );
    }

    #[test]
    fn test_insufficient_fuel() {
        let result = check_route(&truck(), &[bulk(1000)], 1000).unwrap();
        assert!(matches!(result, Feasibility::InsufficientFuel { .. }));
        assert!(!result.is_feasible());
    }

    #[test]
    fn test_current_load_is_ignored() {
        let loaded = truck().with_current_load(20000);
        assert!(can_go(&loaded, &[bulk(20000)], 10));
    }

    #[test]
    fn test_no_fuel_profile() {
        let vehicle = Vehicle::new("MAN", "TGX", 2018, 10000);
        assert_eq!(
            check_route(&vehicle, &[], 10),
            Err(RouteError::NoFuelProfile)
        );
        assert!(!can_go(&vehicle, &[], 10));
    }
}
