//! Error types for the fleet loader

use serde::Serialize;
use thiserror::Error;

use crate::types::{CargoType, Section};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Errors raised while constructing cargo
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CargoError {
    #[error("Invalid cargo weight: {0} kg (must not be negative)")]
    InvalidWeight(i64),

    #[error("Unknown cargo type '{0}' (expected fragile:<max_load>, perishable:<max_temperature> or bulk:<max_wet_air>)")]
    UnknownType(String),
}

/// Reasons a vehicle refuses a cargo item
///
/// A rejected load never changes the vehicle.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum LoadError {
    #[error("Capacity is not enough: {requested} kg requested, {available} kg available")]
    CapacityExceeded { requested: u64, available: u64 },

    #[error("Cargo type {cargo_type} is not accepted in the {section}")]
    UnsupportedType {
        cargo_type: CargoType,
        section: Section,
    },
}

/// Route feasibility errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Vehicle has no fuel profile")]
    NoFuelProfile,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cargo error: {0}")]
    Cargo(#[from] CargoError),

    #[error("Load rejected: {0}")]
    Load(#[from] LoadError),

    #[error("Route check failed: {0}")]
    Route(#[from] RouteError),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("No vehicle #{0} in fleet")]
    UnknownVehicle(usize),

    #[error("No manifest given and no default manifest configured")]
    NoManifest,
}

pub type Result<T> = std::result::Result<T, Error>;
