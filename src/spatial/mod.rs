//! Spatial - Floor-Plan Geometry
//!
//! The sole translator between unit-square fixture coordinates and
//! canvas pixel coordinates.

pub mod coordinates;
