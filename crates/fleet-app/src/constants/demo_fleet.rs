//! Demo fleet: two trucks, a bulk and a fragile load, then an unload

use fleet_infra::FleetManifest;
use fleet_types::Result;

/// Mercedes Actros with a 5 t trailer and a Scania R450 without one.
/// The fragile item does not fit the Actros' main bed filter.
pub const DEMO_MANIFEST: &str = r#"
unload = [1]

[[vehicles]]
kind = "truck"
make = "Mercedes"
model = "Actros"
year = 2019
capacity = 20000
current_load = 12000
types = [{ kind = "bulk", max_wet_air = 10 }]
trailer_attached = true
trailer_capacity = 5000

[[vehicles]]
kind = "truck"
make = "Scania"
model = "R450"
year = 2020
capacity = 18000
current_load = 12000
types = [{ kind = "perishable", max_temperature = 5.0 }]
trailer_attached = false

[[loads]]
vehicle = 1
description = "Bulk"
weight = 8000
type = { kind = "bulk", max_wet_air = 10 }

[[loads]]
vehicle = 1
description = "Fragile"
weight = 5000
type = { kind = "fragile", max_load = 1000 }
"#;

pub fn demo_manifest() -> Result<FleetManifest> {
    FleetManifest::load_from_str(DEMO_MANIFEST)
}
