//! Cargo items and cargo type filters

use fleet_types::{CargoError, CargoType};
use serde::Serialize;

/// A single cargo item
///
/// Weight is validated at construction and the item is never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cargo {
    description: String,
    weight: u64,
    #[serde(rename = "type")]
    cargo_type: CargoType,
}

impl Cargo {
    /// Create a cargo item, rejecting negative weights
    pub fn new(
        description: impl Into<String>,
        weight: i64,
        cargo_type: CargoType,
    ) -> Result<Self, CargoError> {
        let weight = u64::try_from(weight).map_err(|_| CargoError::InvalidWeight(weight))?;
        Ok(Self {
            description: description.into(),
            weight,
            cargo_type,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Weight in kg
    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn cargo_type(&self) -> &CargoType {
        &self.cargo_type
    }
}

/// Which cargo types a loading region accepts
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TypeFilter {
    /// Any cargo type is accepted
    #[default]
    Unrestricted,
    /// Only types structurally equal to one of these
    RestrictedTo(Vec<CargoType>),
}

impl TypeFilter {
    pub fn admits(&self, cargo_type: &CargoType) -> bool {
        match self {
            TypeFilter::Unrestricted => true,
            TypeFilter::RestrictedTo(types) => types.contains(cargo_type),
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, TypeFilter::RestrictedTo(_))
    }
}

impl From<Option<Vec<CargoType>>> for TypeFilter {
    fn from(types: Option<Vec<CargoType>>) -> Self {
        match types {
            Some(types) => TypeFilter::RestrictedTo(types),
            None => TypeFilter::Unrestricted,
        }
    }
}

impl From<Vec<CargoType>> for TypeFilter {
    fn from(types: Vec<CargoType>) -> Self {
        TypeFilter::RestrictedTo(types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_weight_rejected() {
        let result = Cargo::new("Broken", -1, CargoType::Bulk { max_wet_air: 10 });
        assert_eq!(result, Err(CargoError::InvalidWeight(-1)));
    }

    #[test]
    fn test_zero_and_positive_weight_accepted() {
        for weight in [0, 1, 5000, i64::MAX] {
            let cargo = Cargo::new("Ok", weight, CargoType::Fragile { max_load: 1000 }).unwrap();
            assert_eq!(cargo.weight(), weight as u64);
        }
    }

    #[test]
    fn test_serialized_form() {
        let cargo = Cargo::new("Bulk", 8000, CargoType::Bulk { max_wet_air: 10 }).unwrap();
        let json = serde_json::to_value(&cargo).unwrap();
        assert_eq!(json["description"], "Bulk");
        assert_eq!(json["weight"], 8000);
        assert_eq!(json["type"]["kind"], "bulk");
    }

    #[test]
    fn test_type_filter() {
        let bulk = CargoType::Bulk { max_wet_air: 10 };
        assert!(TypeFilter::Unrestricted.admits(&bulk));
        assert!(!TypeFilter::Unrestricted.is_restricted());

        let filter = TypeFilter::from(vec![CargoType::Bulk { max_wet_air: 50 }]);
        assert!(filter.is_restricted());
        assert!(!filter.admits(&bulk));
        assert!(filter.admits(&CargoType::Bulk { max_wet_air: 50 }));

        assert_eq!(TypeFilter::from(None), TypeFilter::Unrestricted);
    }
}
