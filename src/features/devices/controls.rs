//! Device Controls
//!
//! Kind-specific control state for the detail panel. Mutations are local
//! UI state only; the fixture device itself never changes. Light,
//! thermostat, camera, and energy-monitor kinds get dedicated sections,
//! every other kind gets the generic power toggle.

use crate::domain::device::{Device, DeviceKind};

pub const BRIGHTNESS_STEP: u8 = 10;
pub const COLOR_TEMP_MIN: u16 = 2200;
pub const COLOR_TEMP_MAX: u16 = 6500;
pub const COLOR_TEMP_STEP: u16 = 300;

pub const TARGET_TEMP_MIN: i16 = 50;
pub const TARGET_TEMP_MAX: i16 = 90;

pub const THRESHOLD_STEP: u32 = 250;
pub const HIGH_THRESHOLD_MIN: u32 = 1000;
pub const HIGH_THRESHOLD_MAX: u32 = 5000;
pub const CRITICAL_THRESHOLD_MIN: u32 = 2000;
pub const CRITICAL_THRESHOLD_MAX: u32 = 8000;

/// Electricity rate used for the energy cost captions, $ per kWh
pub const ENERGY_RATE: f64 = 0.16;

/// Control state for the selected device, keyed by its kind
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceControls {
    Light(LightControls),
    Thermostat(ThermostatControls),
    Camera(CameraControls),
    Energy(EnergyControls),
    Generic(GenericControls),
}

impl DeviceControls {
    /// Seed the control state from a device fixture
    pub fn for_device(device: &Device) -> Self {
        match device.kind {
            DeviceKind::Light => DeviceControls::Light(LightControls::for_device(device)),
            DeviceKind::Thermostat => {
                DeviceControls::Thermostat(ThermostatControls::for_device(device))
            }
            DeviceKind::Camera => DeviceControls::Camera(CameraControls::for_device(device)),
            DeviceKind::EnergyMonitor => {
                DeviceControls::Energy(EnergyControls::for_device(device))
            }
            _ => DeviceControls::Generic(GenericControls::for_device(device)),
        }
    }
}

/// Light: power, brightness, and color temperature
#[derive(Debug, Clone, PartialEq)]
pub struct LightControls {
    pub is_on: bool,
    /// Brightness percentage, 1-100
    pub brightness: u8,
    /// Color temperature in kelvin
    pub color_temp: u16,
}

impl LightControls {
    fn for_device(device: &Device) -> Self {
        let raw = device.core_vital.raw_value;
        Self {
            is_on: device.status.is_active(),
            brightness: if (1.0..=100.0).contains(&raw) {
                raw as u8
            } else {
                60
            },
            color_temp: 2700,
        }
    }

    pub fn toggle(&mut self) {
        self.is_on = !self.is_on;
    }

    pub fn step_brightness(&mut self, up: bool) {
        self.brightness = if up {
            (self.brightness.saturating_add(BRIGHTNESS_STEP)).min(100)
        } else {
            (self.brightness.saturating_sub(BRIGHTNESS_STEP)).max(1)
        };
    }

    pub fn step_color_temp(&mut self, up: bool) {
        self.color_temp = if up {
            (self.color_temp.saturating_add(COLOR_TEMP_STEP)).min(COLOR_TEMP_MAX)
        } else {
            (self.color_temp.saturating_sub(COLOR_TEMP_STEP)).max(COLOR_TEMP_MIN)
        };
    }

    /// Color name for the current temperature
    pub fn color_name(&self) -> &'static str {
        match self.color_temp {
            t if t <= 2700 => "Warm White",
            t if t <= 4000 => "Soft White",
            t if t <= 5000 => "Cool White",
            _ => "Daylight",
        }
    }
}

/// Thermostat operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermostatMode {
    Heat,
    Cool,
    Auto,
    Off,
}

impl ThermostatMode {
    pub fn all() -> &'static [ThermostatMode] {
        &[
            ThermostatMode::Heat,
            ThermostatMode::Cool,
            ThermostatMode::Auto,
            ThermostatMode::Off,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThermostatMode::Heat => "Heat",
            ThermostatMode::Cool => "Cool",
            ThermostatMode::Auto => "Auto",
            ThermostatMode::Off => "Off",
        }
    }
}

/// Thermostat fan mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanMode {
    Auto,
    On,
}

impl FanMode {
    pub fn all() -> &'static [FanMode] {
        &[FanMode::Auto, FanMode::On]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FanMode::Auto => "Auto",
            FanMode::On => "On",
        }
    }
}

/// Thermostat: power, target temperature, mode, fan
#[derive(Debug, Clone, PartialEq)]
pub struct ThermostatControls {
    pub is_on: bool,
    /// Target temperature in °F, clamped to the supported range
    pub target_temp: i16,
    pub mode: ThermostatMode,
    pub fan: FanMode,
}

impl ThermostatControls {
    fn for_device(device: &Device) -> Self {
        Self {
            is_on: device.status.is_active(),
            target_temp: (device.core_vital.raw_value as i16)
                .clamp(TARGET_TEMP_MIN, TARGET_TEMP_MAX),
            mode: ThermostatMode::Auto,
            fan: FanMode::Auto,
        }
    }

    pub fn toggle(&mut self) {
        self.is_on = !self.is_on;
    }

    pub fn step_target(&mut self, up: bool) {
        let delta = if up { 1 } else { -1 };
        self.target_temp = (self.target_temp + delta).clamp(TARGET_TEMP_MIN, TARGET_TEMP_MAX);
    }

    pub fn set_mode(&mut self, mode: ThermostatMode) {
        self.mode = mode;
    }

    pub fn set_fan(&mut self, fan: FanMode) {
        self.fan = fan;
    }
}

/// Camera video quality setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoQuality {
    Hd720,
    Hd1080,
    Uhd4k,
}

impl VideoQuality {
    pub fn all() -> &'static [VideoQuality] {
        &[VideoQuality::Hd720, VideoQuality::Hd1080, VideoQuality::Uhd4k]
    }

    pub fn label(&self) -> &'static str {
        match self {
            VideoQuality::Hd720 => "720p",
            VideoQuality::Hd1080 => "1080p",
            VideoQuality::Uhd4k => "4K",
        }
    }
}

/// Camera: recording, motion detection, night vision, quality
#[derive(Debug, Clone, PartialEq)]
pub struct CameraControls {
    pub recording: bool,
    pub motion_detection: bool,
    pub night_vision: bool,
    pub quality: VideoQuality,
}

impl CameraControls {
    fn for_device(device: &Device) -> Self {
        Self {
            recording: device.status.is_active(),
            motion_detection: true,
            night_vision: false,
            quality: VideoQuality::Hd1080,
        }
    }

    pub fn toggle_recording(&mut self) {
        self.recording = !self.recording;
    }

    pub fn toggle_motion_detection(&mut self) {
        self.motion_detection = !self.motion_detection;
    }

    pub fn toggle_night_vision(&mut self) {
        self.night_vision = !self.night_vision;
    }

    pub fn set_quality(&mut self, quality: VideoQuality) {
        self.quality = quality;
    }
}

/// Usage bucket relative to the alert thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageStatus {
    Normal,
    High,
    Critical,
}

impl UsageStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UsageStatus::Normal => "Normal",
            UsageStatus::High => "High",
            UsageStatus::Critical => "Critical",
        }
    }
}

/// Energy monitor: monitoring and alert thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyControls {
    pub monitoring: bool,
    pub alerts_enabled: bool,
    /// High-usage alert threshold in watts
    pub high_threshold: u32,
    /// Critical-usage alert threshold in watts
    pub critical_threshold: u32,
}

impl EnergyControls {
    fn for_device(device: &Device) -> Self {
        Self {
            monitoring: device.status.is_active(),
            alerts_enabled: true,
            high_threshold: 2500,
            critical_threshold: 4000,
        }
    }

    pub fn toggle_monitoring(&mut self) {
        self.monitoring = !self.monitoring;
    }

    pub fn toggle_alerts(&mut self) {
        self.alerts_enabled = !self.alerts_enabled;
    }

    pub fn step_high_threshold(&mut self, up: bool) {
        let next = if up {
            self.high_threshold.saturating_add(THRESHOLD_STEP)
        } else {
            self.high_threshold.saturating_sub(THRESHOLD_STEP)
        };
        self.high_threshold = next.clamp(HIGH_THRESHOLD_MIN, HIGH_THRESHOLD_MAX);
    }

    pub fn step_critical_threshold(&mut self, up: bool) {
        let next = if up {
            self.critical_threshold.saturating_add(THRESHOLD_STEP)
        } else {
            self.critical_threshold.saturating_sub(THRESHOLD_STEP)
        };
        self.critical_threshold = next.clamp(CRITICAL_THRESHOLD_MIN, CRITICAL_THRESHOLD_MAX);
    }

    /// Classify a whole-home usage reading against the thresholds
    pub fn usage_status(&self, usage_watts: f64) -> UsageStatus {
        if usage_watts >= f64::from(self.critical_threshold) {
            UsageStatus::Critical
        } else if usage_watts >= f64::from(self.high_threshold) {
            UsageStatus::High
        } else {
            UsageStatus::Normal
        }
    }
}

/// Fallback controls for kinds without a dedicated section
#[derive(Debug, Clone, PartialEq)]
pub struct GenericControls {
    pub is_on: bool,
}

impl GenericControls {
    fn for_device(device: &Device) -> Self {
        Self {
            is_on: device.status.is_active(),
        }
    }

    pub fn toggle(&mut self) {
        self.is_on = !self.is_on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::{
        CoreVital, DeviceStatus, PowerDraw, Protocol, VitalsHistory,
    };
    use chrono::Utc;

    fn device(kind: DeviceKind, status: DeviceStatus, raw_value: f64) -> Device {
        Device {
            id: "test-device".to_string(),
            name: "Test Device".to_string(),
            kind,
            room: "Living Room".to_string(),
            x: 0.5,
            y: 0.5,
            status,
            core_vital: CoreVital {
                label: "Vital".to_string(),
                value: raw_value.to_string(),
                raw_value,
            },
            battery: None,
            power: PowerDraw::default(),
            protocol: Protocol::Wifi,
            last_activity: Utc::now(),
            vitals: VitalsHistory::default(),
        }
    }

    #[test]
    fn test_controls_variant_follows_kind() {
        let cases = [
            (DeviceKind::Light, "light"),
            (DeviceKind::Thermostat, "thermostat"),
            (DeviceKind::Camera, "camera"),
            (DeviceKind::EnergyMonitor, "energy"),
            (DeviceKind::Speaker, "generic"),
            (DeviceKind::Lock, "generic"),
            (DeviceKind::Plug, "generic"),
            (DeviceKind::Vacuum, "generic"),
            (DeviceKind::Hub, "generic"),
        ];
        for (kind, expected) in cases {
            let controls = DeviceControls::for_device(&device(kind, DeviceStatus::Active, 50.0));
            let actual = match controls {
                DeviceControls::Light(_) => "light",
                DeviceControls::Thermostat(_) => "thermostat",
                DeviceControls::Camera(_) => "camera",
                DeviceControls::Energy(_) => "energy",
                DeviceControls::Generic(_) => "generic",
            };
            assert_eq!(actual, expected, "{kind:?}");
        }
    }

    #[test]
    fn test_brightness_steps_clamp() {
        let mut light = LightControls {
            is_on: true,
            brightness: 95,
            color_temp: 2700,
        };
        light.step_brightness(true);
        assert_eq!(light.brightness, 100);

        light.brightness = 5;
        light.step_brightness(false);
        assert_eq!(light.brightness, 1);
    }

    #[test]
    fn test_color_temp_names() {
        let mut light = LightControls {
            is_on: true,
            brightness: 80,
            color_temp: 2700,
        };
        assert_eq!(light.color_name(), "Warm White");

        light.color_temp = 4000;
        assert_eq!(light.color_name(), "Soft White");
        light.color_temp = 5000;
        assert_eq!(light.color_name(), "Cool White");
        light.color_temp = 6500;
        assert_eq!(light.color_name(), "Daylight");
    }

    #[test]
    fn test_color_temp_steps_stay_in_range() {
        let mut light = LightControls {
            is_on: true,
            brightness: 80,
            color_temp: COLOR_TEMP_MAX - 100,
        };
        light.step_color_temp(true);
        assert_eq!(light.color_temp, COLOR_TEMP_MAX);

        light.color_temp = COLOR_TEMP_MIN + 100;
        light.step_color_temp(false);
        assert_eq!(light.color_temp, COLOR_TEMP_MIN);
    }

    #[test]
    fn test_target_temp_clamps_at_range_ends() {
        let mut thermostat = ThermostatControls::for_device(&device(
            DeviceKind::Thermostat,
            DeviceStatus::Active,
            f64::from(TARGET_TEMP_MAX),
        ));
        thermostat.step_target(true);
        assert_eq!(thermostat.target_temp, TARGET_TEMP_MAX);

        thermostat.target_temp = TARGET_TEMP_MIN;
        thermostat.step_target(false);
        assert_eq!(thermostat.target_temp, TARGET_TEMP_MIN);
    }

    #[test]
    fn test_thermostat_seeds_from_vital() {
        let thermostat =
            ThermostatControls::for_device(&device(DeviceKind::Thermostat, DeviceStatus::Active, 72.0));
        assert!(thermostat.is_on);
        assert_eq!(thermostat.target_temp, 72);
        assert_eq!(thermostat.mode, ThermostatMode::Auto);
    }

    #[test]
    fn test_camera_toggles_are_independent() {
        let mut camera =
            CameraControls::for_device(&device(DeviceKind::Camera, DeviceStatus::Active, 94.0));
        assert!(camera.recording);
        assert!(camera.motion_detection);

        camera.toggle_night_vision();
        assert!(camera.night_vision);
        assert!(camera.recording);

        camera.toggle_recording();
        assert!(!camera.recording);
        assert!(camera.motion_detection);

        camera.set_quality(VideoQuality::Uhd4k);
        assert_eq!(camera.quality, VideoQuality::Uhd4k);
    }

    #[test]
    fn test_usage_status_buckets() {
        let energy = EnergyControls {
            monitoring: true,
            alerts_enabled: true,
            high_threshold: 2500,
            critical_threshold: 4000,
        };
        assert_eq!(energy.usage_status(1200.0), UsageStatus::Normal);
        assert_eq!(energy.usage_status(2500.0), UsageStatus::High);
        assert_eq!(energy.usage_status(4500.0), UsageStatus::Critical);
    }

    #[test]
    fn test_thresholds_step_and_clamp() {
        let mut energy =
            EnergyControls::for_device(&device(DeviceKind::EnergyMonitor, DeviceStatus::Active, 1250.0));
        energy.high_threshold = HIGH_THRESHOLD_MAX;
        energy.step_high_threshold(true);
        assert_eq!(energy.high_threshold, HIGH_THRESHOLD_MAX);

        energy.critical_threshold = CRITICAL_THRESHOLD_MIN;
        energy.step_critical_threshold(false);
        assert_eq!(energy.critical_threshold, CRITICAL_THRESHOLD_MIN);

        energy.step_critical_threshold(true);
        assert_eq!(energy.critical_threshold, CRITICAL_THRESHOLD_MIN + THRESHOLD_STEP);
    }

    #[test]
    fn test_generic_toggle_is_local_only() {
        let fixture = device(DeviceKind::Speaker, DeviceStatus::Active, 65.0);
        let mut controls = GenericControls::for_device(&fixture);
        controls.toggle();
        assert!(!controls.is_on);
        // The fixture device is untouched by control mutations.
        assert_eq!(fixture.status, DeviceStatus::Active);
    }
}
