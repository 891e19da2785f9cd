//! Domain - Core Data Structures
//!
//! Fixture-backed data types plus their display mappings (labels, icon
//! paths, accent colors).

pub mod device;
pub mod incident;
pub mod metrics;
pub mod room;
