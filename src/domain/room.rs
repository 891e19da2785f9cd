//! Room - Floor-Plan Room Fixtures

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in the unit square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct UnitRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A room on the floor plan
///
/// Bounds share the unit square with device positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub bounds: UnitRect,
}
