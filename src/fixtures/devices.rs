//! Device fixture loading and vitals-history generation

use chrono::{DurationRound, TimeDelta, Utc};
use rand::Rng;
use snafu::ResultExt;

use crate::assets::Assets;
use crate::domain::device::{Device, DeviceKind, VitalSample, VitalsHistory};
use crate::error::{JsonSnafu, MissingAssetSnafu, Result};
use crate::fixtures::series_rng;

const DEVICES_PATH: &str = "fixtures/devices.json";

/// Hourly samples covering the last day
const HISTORY_HOURS: i64 = 24;

/// Load the device fixtures from the embedded JSON and attach generated
/// vitals histories
pub fn load_devices() -> Result<Vec<Device>> {
    let raw = Assets::get(DEVICES_PATH).ok_or_else(|| {
        MissingAssetSnafu {
            path: DEVICES_PATH.to_string(),
        }
        .build()
    })?;

    let mut devices: Vec<Device> =
        serde_json::from_slice(&raw.data).context(JsonSnafu {
            path: DEVICES_PATH.to_string(),
        })?;

    for device in &mut devices {
        device.vitals = generate_vitals(device);
    }

    Ok(devices)
}

/// Build the generated histories for one device
fn generate_vitals(device: &Device) -> VitalsHistory {
    let primary = match device.kind {
        DeviceKind::Light => brightness_history(&device.id),
        DeviceKind::Speaker => volume_history(&device.id),
        DeviceKind::Camera | DeviceKind::Hub => connectivity_history(&device.id),
        _ => value_history(&device.id, device.core_vital.raw_value),
    };

    let battery = if device.battery.is_some() {
        battery_history(&device.id)
    } else {
        Vec::new()
    };

    VitalsHistory {
        primary,
        power: power_history(&device.id, device.power.current, device.kind),
        battery,
    }
}

/// Timestamps for the last `HISTORY_HOURS` hours, oldest first
fn hourly_timestamps() -> Vec<chrono::DateTime<Utc>> {
    let now = Utc::now()
        .duration_trunc(TimeDelta::hours(1))
        .unwrap_or_else(|_| Utc::now());
    (0..HISTORY_HOURS)
        .rev()
        .map(|i| now - TimeDelta::hours(i))
        .collect()
}

/// Connectivity strength, 80-100 %
fn connectivity_history(id: &str) -> Vec<VitalSample> {
    let mut rng = series_rng(&format!("connectivity/{id}"));
    hourly_timestamps()
        .into_iter()
        .map(|timestamp| VitalSample {
            timestamp,
            value: (80 + rng.gen_range(0..20)) as f64,
        })
        .collect()
}

/// Power draw wobbling around the device's base draw
fn power_history(id: &str, base: f64, kind: DeviceKind) -> Vec<VitalSample> {
    let multiplier = match kind {
        DeviceKind::Light => 0.8,
        DeviceKind::Speaker => 0.6,
        _ => 1.0,
    };
    let mut rng = series_rng(&format!("power/{id}"));
    hourly_timestamps()
        .into_iter()
        .map(|timestamp| {
            let variation = (rng.gen_range(0.0..1.0) - 0.5) * base * 0.2;
            VitalSample {
                timestamp,
                value: (base + variation * multiplier).max(0.0),
            }
        })
        .collect()
}

/// Brightness following a day/night cycle
fn brightness_history(id: &str) -> Vec<VitalSample> {
    use chrono::Timelike;

    let mut rng = series_rng(&format!("brightness/{id}"));
    hourly_timestamps()
        .into_iter()
        .map(|timestamp| {
            let hour = timestamp.hour();
            let base = if (6..=22).contains(&hour) {
                60.0 + ((hour as f64 - 6.0) / 16.0 * std::f64::consts::PI).sin() * 20.0
            } else {
                20.0
            };
            let value = base + (rng.gen_range(0.0..1.0) - 0.5) * 20.0;
            VitalSample {
                timestamp,
                value: value.clamp(0.0, 100.0),
            }
        })
        .collect()
}

/// Volume level, 45-85 %
fn volume_history(id: &str) -> Vec<VitalSample> {
    let mut rng = series_rng(&format!("volume/{id}"));
    hourly_timestamps()
        .into_iter()
        .map(|timestamp| VitalSample {
            timestamp,
            value: (45.0_f64 + rng.gen_range(0.0..40.0)).clamp(0.0, 100.0),
        })
        .collect()
}

/// Battery draining from full toward a 10 % floor
fn battery_history(id: &str) -> Vec<VitalSample> {
    let mut rng = series_rng(&format!("battery/{id}"));
    let mut level = 100.0f64;
    hourly_timestamps()
        .into_iter()
        .map(|timestamp| {
            level = (level - rng.gen_range(0.0..3.0)).max(10.0);
            VitalSample {
                timestamp,
                value: level.floor(),
            }
        })
        .collect()
}

/// Generic wobble around the device's core vital reading
fn value_history(id: &str, base: f64) -> Vec<VitalSample> {
    let mut rng = series_rng(&format!("vital/{id}"));
    hourly_timestamps()
        .into_iter()
        .map(|timestamp| {
            let variation = (rng.gen_range(0.0..1.0) - 0.5) * base * 0.2;
            VitalSample {
                timestamp,
                value: (base + variation).max(0.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::DeviceStatus;

    #[test]
    fn test_devices_parse_and_cover_positions() {
        let devices = load_devices().expect("devices fixture parses");
        assert!(!devices.is_empty());
        for device in &devices {
            assert!((0.0..=1.0).contains(&device.x), "{} x", device.id);
            assert!((0.0..=1.0).contains(&device.y), "{} y", device.id);
            assert_eq!(device.vitals.power.len(), HISTORY_HOURS as usize);
            assert_eq!(device.vitals.primary.len(), HISTORY_HOURS as usize);
        }
    }

    #[test]
    fn test_all_kinds_are_represented() {
        let devices = load_devices().expect("devices fixture parses");
        for kind in [
            DeviceKind::Light,
            DeviceKind::Thermostat,
            DeviceKind::Camera,
            DeviceKind::Speaker,
            DeviceKind::Lock,
            DeviceKind::Plug,
            DeviceKind::Vacuum,
            DeviceKind::EnergyMonitor,
            DeviceKind::Hub,
        ] {
            assert!(
                devices.iter().any(|d| d.kind == kind),
                "missing fixture for {kind:?}"
            );
        }
    }

    #[test]
    fn test_battery_history_only_for_battery_devices() {
        let devices = load_devices().expect("devices fixture parses");
        for device in &devices {
            assert_eq!(
                device.battery.is_some(),
                !device.vitals.battery.is_empty(),
                "{}",
                device.id
            );
        }
    }

    #[test]
    fn test_histories_are_reproducible() {
        let first = load_devices().expect("devices fixture parses");
        let second = load_devices().expect("devices fixture parses");
        for (a, b) in first.iter().zip(second.iter()) {
            let values_a: Vec<f64> = a.vitals.power.iter().map(|s| s.value).collect();
            let values_b: Vec<f64> = b.vitals.power.iter().map(|s| s.value).collect();
            assert_eq!(values_a, values_b, "{}", a.id);
        }
    }

    #[test]
    fn test_connectivity_stays_in_range() {
        let history = connectivity_history("test");
        for sample in &history {
            assert!((80.0..=100.0).contains(&sample.value));
        }
    }

    #[test]
    fn test_battery_drains_monotonically() {
        let history = battery_history("test");
        for pair in history.windows(2) {
            assert!(pair[1].value <= pair[0].value);
        }
    }

    #[test]
    fn test_at_least_one_inactive_device() {
        // The health panel needs an offline row to sort to the top.
        let devices = load_devices().expect("devices fixture parses");
        assert!(
            devices
                .iter()
                .any(|d| d.status == DeviceStatus::Inactive)
        );
    }
}
