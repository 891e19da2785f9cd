//! Device - Smart-Home Device Fixtures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::LOW_BATTERY_THRESHOLD;

/// Closed set of supported device kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceKind {
    Light,
    Thermostat,
    Camera,
    Speaker,
    Lock,
    Plug,
    Vacuum,
    EnergyMonitor,
    Hub,
}

impl DeviceKind {
    /// Icon asset path for the kind
    pub fn icon_path(&self) -> &'static str {
        match self {
            DeviceKind::Light => "icons/lightbulb.svg",
            DeviceKind::Thermostat => "icons/thermometer.svg",
            DeviceKind::Camera => "icons/camera.svg",
            DeviceKind::Speaker => "icons/volume.svg",
            DeviceKind::Lock => "icons/lock.svg",
            DeviceKind::Plug => "icons/plug.svg",
            DeviceKind::Vacuum => "icons/bot.svg",
            DeviceKind::EnergyMonitor => "icons/zap.svg",
            DeviceKind::Hub => "icons/router.svg",
        }
    }

    /// Accent color for the kind's icon
    pub fn icon_color(&self) -> gpui::Rgba {
        match self {
            DeviceKind::Light => gpui::rgb(0xf59e0b),
            DeviceKind::Thermostat => gpui::rgb(0xf97316),
            DeviceKind::Camera => gpui::rgb(0xef4444),
            DeviceKind::Speaker => gpui::rgb(0x06b6d4),
            DeviceKind::Lock => gpui::rgb(0x16a34a),
            DeviceKind::Plug => gpui::rgb(0x10b981),
            DeviceKind::Vacuum => gpui::rgb(0x8b5cf6),
            DeviceKind::EnergyMonitor => gpui::rgb(0xeab308),
            DeviceKind::Hub => gpui::rgb(0x3b82f6),
        }
    }

    /// Human-readable kind label
    pub fn label(&self) -> &'static str {
        match self {
            DeviceKind::Light => "Light",
            DeviceKind::Thermostat => "Thermostat",
            DeviceKind::Camera => "Camera",
            DeviceKind::Speaker => "Speaker",
            DeviceKind::Lock => "Lock",
            DeviceKind::Plug => "Smart Plug",
            DeviceKind::Vacuum => "Vacuum",
            DeviceKind::EnergyMonitor => "Energy Monitor",
            DeviceKind::Hub => "Hub",
        }
    }
}

/// Device on/off state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    #[default]
    Active,
    Inactive,
}

impl DeviceStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, DeviceStatus::Active)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeviceStatus::Active => "Active",
            DeviceStatus::Inactive => "Inactive",
        }
    }
}

/// How the device talks to the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Wifi,
    Zigbee,
    Ethernet,
}

impl Protocol {
    pub fn label(&self) -> &'static str {
        match self {
            Protocol::Wifi => "Wi-Fi",
            Protocol::Zigbee => "Zigbee",
            Protocol::Ethernet => "Ethernet",
        }
    }

    pub fn icon_path(&self) -> &'static str {
        match self {
            Protocol::Wifi => "icons/wifi.svg",
            Protocol::Zigbee => "icons/activity.svg",
            Protocol::Ethernet => "icons/zap.svg",
        }
    }
}

/// The one headline reading a device exposes
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CoreVital {
    /// Short label like "Brightness" or "Target Temp"
    pub label: String,
    /// Display value like "Warm White 80%"
    pub value: String,
    /// Numeric backing value
    pub raw_value: f64,
}

/// Battery info for battery-powered devices
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    /// Charge level 0-100
    pub level: u8,
    pub is_charging: bool,
    pub last_charged: DateTime<Utc>,
}

impl Battery {
    /// Low enough that the battery reading overrides the core vital
    pub fn is_low(&self) -> bool {
        self.level < LOW_BATTERY_THRESHOLD
    }
}

/// Trend direction for a numeric series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    pub fn icon_path(&self) -> &'static str {
        match self {
            Trend::Up => "icons/trending-up.svg",
            Trend::Down => "icons/trending-down.svg",
            Trend::Stable => "icons/minus.svg",
        }
    }
}

/// Power consumption figures for a device
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PowerDraw {
    /// Instantaneous draw in watts
    pub current: f64,
    /// Daily consumption in watt-hours
    pub daily: f64,
    /// Monthly consumption in watt-hours
    pub monthly: f64,
    pub trend: Trend,
}

/// A single timestamped vital sample
#[derive(Debug, Clone, PartialEq)]
pub struct VitalSample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Generated vitals histories attached to a device after fixture load
#[derive(Debug, Clone, Default)]
pub struct VitalsHistory {
    /// History of the device's core vital (brightness, volume, ...)
    pub primary: Vec<VitalSample>,
    /// Power consumption history
    pub power: Vec<VitalSample>,
    /// Battery drain history, for battery-powered devices
    pub battery: Vec<VitalSample>,
}

/// A smart-home device fixture
///
/// Immutable at runtime; positions are unit-square coordinates relative
/// to the floor plan and are translated to pixels by the coordinate mapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub name: String,
    pub kind: DeviceKind,
    /// Room display name
    pub room: String,
    /// Normalized position within the floor plan, x in [0, 1]
    pub x: f64,
    /// Normalized position within the floor plan, y in [0, 1]
    pub y: f64,
    pub status: DeviceStatus,
    pub core_vital: CoreVital,
    #[serde(default)]
    pub battery: Option<Battery>,
    #[serde(default)]
    pub power: PowerDraw,
    pub protocol: Protocol,
    pub last_activity: DateTime<Utc>,
    /// Filled in by the fixture loader, not part of the JSON
    #[serde(skip, default)]
    pub vitals: VitalsHistory,
}

impl Device {
    /// The vital string shown on hover and in lists; a low battery
    /// overrides the core vital
    pub fn display_vital(&self) -> String {
        match &self.battery {
            Some(battery) if battery.is_low() => format!("Battery {}%", battery.level),
            _ => self.core_vital.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device_with_battery(level: u8) -> Device {
        Device {
            id: "test-device".to_string(),
            name: "Test Device".to_string(),
            kind: DeviceKind::Speaker,
            room: "Kitchen".to_string(),
            x: 0.5,
            y: 0.5,
            status: DeviceStatus::Active,
            core_vital: CoreVital {
                label: "Volume".to_string(),
                value: "65%".to_string(),
                raw_value: 65.0,
            },
            battery: Some(Battery {
                level,
                is_charging: false,
                last_charged: Utc::now(),
            }),
            power: PowerDraw::default(),
            protocol: Protocol::Wifi,
            last_activity: Utc::now(),
            vitals: VitalsHistory::default(),
        }
    }

    #[test]
    fn test_low_battery_overrides_vital() {
        let device = device_with_battery(15);
        assert_eq!(device.display_vital(), "Battery 15%");
    }

    #[test]
    fn test_healthy_battery_keeps_core_vital() {
        let device = device_with_battery(80);
        assert_eq!(device.display_vital(), "65%");
    }

    #[test]
    fn test_missing_battery_keeps_core_vital() {
        let mut device = device_with_battery(50);
        device.battery = None;
        assert_eq!(device.display_vital(), "65%");
    }

    #[test]
    fn test_kind_deserializes_kebab_case() {
        let kind: DeviceKind =
            serde_json::from_str("\"energy-monitor\"").expect("valid kind");
        assert_eq!(kind, DeviceKind::EnergyMonitor);
    }
}
