//! Cargo categories and vehicle sections

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CargoError;

/// Cargo category with its handling parameter
///
/// Equality is structural: same category and same parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CargoType {
    /// Maximum load that may be stacked on top (kg)
    Fragile { max_load: i64 },
    /// Maximum storage temperature (°C)
    Perishable { max_temperature: f64 },
    /// Maximum wet air content
    Bulk { max_wet_air: i64 },
}

impl fmt::Display for CargoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CargoType::Fragile { max_load } => write!(f, "fragile:{}", max_load),
            CargoType::Perishable { max_temperature } => {
                write!(f, "perishable:{}", max_temperature)
            }
            CargoType::Bulk { max_wet_air } => write!(f, "bulk:{}", max_wet_air),
        }
    }
}

impl FromStr for CargoType {
    type Err = CargoError;

    /// Parse `<kind>:<parameter>`, e.g. `bulk:10` or `perishable:4.5`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CargoError::UnknownType(s.to_string());
        let (kind, param) = s.trim().split_once(':').ok_or_else(unknown)?;
        let param = param.trim();

        match kind.trim().to_lowercase().as_str() {
            "fragile" => Ok(CargoType::Fragile {
                max_load: param.parse().map_err(|_| unknown())?,
            }),
            "perishable" => Ok(CargoType::Perishable {
                max_temperature: param.parse().map_err(|_| unknown())?,
            }),
            "bulk" => Ok(CargoType::Bulk {
                max_wet_air: param.parse().map_err(|_| unknown())?,
            }),
            _ => Err(unknown()),
        }
    }
}

/// Loading region of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// The vehicle's own bed
    MainBed,
    /// The attached trailer
    Trailer,
    /// Cargo spilling from the main bed into the trailer
    Both,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::MainBed => "main bed",
            Section::Trailer => "trailer",
            Section::Both => "main bed and trailer",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(CargoType::Bulk { max_wet_air: 10 }, CargoType::Bulk { max_wet_air: 10 });
        assert_ne!(CargoType::Bulk { max_wet_air: 10 }, CargoType::Bulk { max_wet_air: 50 });
        assert_ne!(
            CargoType::Fragile { max_load: 10 },
            CargoType::Bulk { max_wet_air: 10 }
        );
    }

    #[test]
    fn test_parse_cargo_type() {
        assert_eq!(
            "fragile:1000".parse::<CargoType>().unwrap(),
            CargoType::Fragile { max_load: 1000 }
        );
        assert_eq!(
            "Perishable: 4.5".parse::<CargoType>().unwrap(),
            CargoType::Perishable { max_temperature: 4.5 }
        );
        assert_eq!(
            "bulk:10".parse::<CargoType>().unwrap(),
            CargoType::Bulk { max_wet_air: 10 }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "bulk".parse::<CargoType>(),
            Err(CargoError::UnknownType(_))
        ));
        assert!(matches!(
            "liquid:3".parse::<CargoType>(),
            Err(CargoError::UnknownType(_))
        ));
        assert!(matches!(
            "fragile:heavy".parse::<CargoType>(),
            Err(CargoError::UnknownType(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(CargoType::Perishable { max_temperature: 5.0 }.to_string(), "perishable:5");
        assert_eq!(CargoType::Bulk { max_wet_air: 10 }.to_string(), "bulk:10");
        assert_eq!(Section::Both.to_string(), "main bed and trailer");
    }

    #[test]
    fn test_serde_tagged_form() {
        let json = serde_json::to_string(&CargoType::Bulk { max_wet_air: 10 }).unwrap();
        assert_eq!(json, r#"{"kind":"bulk","max_wet_air":10}"#);
        let back: CargoType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CargoType::Bulk { max_wet_air: 10 });
    }
}
