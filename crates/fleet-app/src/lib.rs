//! Application service layer - use cases and config

pub mod app;
pub mod config;
pub mod constants;
