//! SelectionState - Single-Slot Device Selection

use crate::domain::device::Device;

/// At most one device is selected at a time
///
/// `toggle` is the only entry point used by click handlers: clicking the
/// selected device again deselects it.
#[derive(Debug, Default)]
pub struct SelectionState {
    selected: Option<Device>,
}

impl SelectionState {
    /// The currently selected device, if any
    pub fn selected(&self) -> Option<&Device> {
        self.selected.as_ref()
    }

    /// Set the selection unconditionally
    pub fn select(&mut self, device: Device) {
        self.selected = Some(device);
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Toggle: same device clears, different device replaces
    pub fn toggle(&mut self, device: Device) {
        match &self.selected {
            Some(current) if current.id == device.id => self.selected = None,
            _ => self.selected = Some(device),
        }
    }

    /// Whether the given device id is the current selection
    pub fn is_selected(&self, device_id: &str) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|d| d.id == device_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::{
        CoreVital, DeviceKind, DeviceStatus, PowerDraw, Protocol, VitalsHistory,
    };
    use chrono::Utc;

    fn device(id: &str) -> Device {
        Device {
            id: id.to_string(),
            name: id.to_string(),
            kind: DeviceKind::Light,
            room: "Living Room".to_string(),
            x: 0.5,
            y: 0.5,
            status: DeviceStatus::Active,
            core_vital: CoreVital::default(),
            battery: None,
            power: PowerDraw::default(),
            protocol: Protocol::Wifi,
            last_activity: Utc::now(),
            vitals: VitalsHistory::default(),
        }
    }

    #[test]
    fn test_toggle_twice_returns_to_empty() {
        let mut state = SelectionState::default();
        state.toggle(device("d1"));
        assert!(state.is_selected("d1"));
        state.toggle(device("d1"));
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_toggle_different_device_replaces() {
        let mut state = SelectionState::default();
        state.toggle(device("d1"));
        state.toggle(device("d2"));
        assert!(state.is_selected("d2"));
        assert!(!state.is_selected("d1"));
    }

    #[test]
    fn test_select_and_clear() {
        let mut state = SelectionState::default();
        state.select(device("d1"));
        assert!(state.is_selected("d1"));
        state.clear();
        assert!(state.selected().is_none());
        assert!(!state.is_selected("d1"));
    }
}
