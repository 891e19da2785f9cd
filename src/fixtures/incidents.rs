//! Incident fixtures for the overview panel

use crate::domain::incident::{Incident, Severity};

/// Recent incidents, newest first
pub fn recent_incidents() -> Vec<Incident> {
    let entries = [
        (
            "inc-001",
            Severity::Critical,
            "Front Door Camera",
            "Entrance",
            "Camera offline - network connectivity lost",
            "2 minutes ago",
            "connectivity",
        ),
        (
            "inc-002",
            Severity::High,
            "Bedroom Thermostat",
            "Bedroom",
            "Temperature sensor reading anomaly detected",
            "15 minutes ago",
            "sensor",
        ),
        (
            "inc-003",
            Severity::Medium,
            "Robot Vacuum",
            "Living Room",
            "Low battery warning - 12% remaining",
            "1 hour ago",
            "battery",
        ),
        (
            "inc-004",
            Severity::Low,
            "Kitchen Speaker",
            "Kitchen",
            "Firmware update available",
            "2 hours ago",
            "update",
        ),
        (
            "inc-005",
            Severity::High,
            "Main Energy Monitor",
            "Utility",
            "Power consumption spike detected (+45%)",
            "3 hours ago",
            "power",
        ),
        (
            "inc-006",
            Severity::Medium,
            "Living Room Light",
            "Living Room",
            "Delayed response to commands",
            "4 hours ago",
            "performance",
        ),
        (
            "inc-007",
            Severity::Critical,
            "Front Door Lock",
            "Entrance",
            "Failed to lock - mechanical issue suspected",
            "5 hours ago",
            "security",
        ),
        (
            "inc-008",
            Severity::Low,
            "Kitchen Camera",
            "Kitchen",
            "Storage usage above 80%",
            "6 hours ago",
            "storage",
        ),
    ];

    entries
        .into_iter()
        .map(
            |(id, severity, device_name, room, description, age, category)| Incident {
                id: id.to_string(),
                severity,
                device_name: device_name.to_string(),
                room: room.to_string(),
                description: description.to_string(),
                age: age.to_string(),
                category: category.to_string(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incidents_cover_every_severity() {
        let incidents = recent_incidents();
        for severity in Severity::all() {
            assert!(incidents.iter().any(|i| i.severity == *severity));
        }
    }
}
