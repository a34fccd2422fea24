//! Built-in fleet data

pub mod demo_fleet;

pub use demo_fleet::{demo_manifest, DEMO_MANIFEST};
