//! Command implementations

pub mod config;
pub mod doctor;
pub mod update;
pub mod version;
