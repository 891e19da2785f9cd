//! DirectoryState - Loaded Device and Room Fixtures
//!
//! Immutable after startup; views read devices and rooms from here.

use crate::domain::device::Device;
use crate::domain::incident::Incident;
use crate::domain::room::Room;
use crate::fixtures::Fixtures;

/// The loaded fixture directory
#[derive(Debug, Default)]
pub struct DirectoryState {
    pub devices: Vec<Device>,
    pub rooms: Vec<Room>,
    pub incidents: Vec<Incident>,
}

impl DirectoryState {
    pub fn from_fixtures(fixtures: &Fixtures) -> Self {
        Self {
            devices: fixtures.devices.clone(),
            rooms: fixtures.rooms.clone(),
            incidents: fixtures.incidents.clone(),
        }
    }

    /// Look up a device by id
    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }
}
