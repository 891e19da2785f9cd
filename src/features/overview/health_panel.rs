//! Device Health Panel
//!
//! Health-sorted device rows derived from the fixture directory.

use gpui::{
    Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::domain::device::Device;
use crate::theme::colors::HvColors;

/// Health bucket for a device, worst first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Health {
    Error,
    Warning,
    Ok,
}

impl Health {
    /// Derive the health bucket for a device: offline is an error, a low
    /// battery is a warning, everything else is fine
    pub fn of(device: &Device) -> Self {
        if !device.status.is_active() {
            Health::Error
        } else if device.battery.as_ref().is_some_and(|b| b.is_low()) {
            Health::Warning
        } else {
            Health::Ok
        }
    }

    fn color(&self) -> gpui::Rgba {
        match self {
            Health::Error => HvColors::danger(),
            Health::Warning => HvColors::warning(),
            Health::Ok => HvColors::success(),
        }
    }

    fn icon_path(&self) -> &'static str {
        match self {
            Health::Error => "icons/x-circle.svg",
            Health::Warning => "icons/alert-triangle.svg",
            Health::Ok => "icons/check-circle.svg",
        }
    }
}

/// Sort devices worst health first
pub fn health_sorted(devices: &[Device]) -> Vec<Device> {
    let mut sorted = devices.to_vec();
    sorted.sort_by_key(|d| Health::of(d));
    sorted
}

/// Device health panel component
pub struct HealthPanel {
    entities: AppEntities,
}

impl HealthPanel {
    pub fn new(entities: AppEntities, _cx: &mut Context<Self>) -> Self {
        Self { entities }
    }

    fn render_row(&self, device: &Device) -> impl IntoElement {
        let health = Health::of(device);

        div()
            .w_full()
            .px_4()
            .py_3()
            .border_b_1()
            .border_color(HvColors::border())
            .flex()
            .flex_row()
            .items_center()
            .gap_3()
            .child(
                div()
                    .text_color(health.color())
                    .child(gpui_component::Icon::empty().path(health.icon_path())),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(HvColors::text_primary())
                            .child(device.name.clone()),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(HvColors::text_secondary())
                            .child(format!("{} · {}", device.room, device.protocol.label())),
                    ),
            )
            .when_some(device.battery.as_ref(), |s, battery| {
                let color = if battery.level >= 50 {
                    HvColors::success()
                } else if battery.level >= 20 {
                    HvColors::warning()
                } else {
                    HvColors::danger()
                };
                s.child(
                    div()
                        .text_size(px(12.0))
                        .text_color(color)
                        .child(format!("{}%", battery.level)),
                )
            })
            .child(
                // Status chip
                div()
                    .px_2()
                    .py_1()
                    .rounded_md()
                    .text_size(px(11.0))
                    .bg(HvColors::card_muted_bg())
                    .text_color(if device.status.is_active() {
                        HvColors::success()
                    } else {
                        HvColors::danger()
                    })
                    .child(device.status.label()),
            )
    }
}

impl Render for HealthPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let devices = health_sorted(&self.entities.directory.read(cx).devices);

        div()
            .w_full()
            .rounded_lg()
            .border_1()
            .border_color(HvColors::border())
            .bg(HvColors::content_bg())
            .flex()
            .flex_col()
            .child(
                div()
                    .px_4()
                    .py_3()
                    .border_b_1()
                    .border_color(HvColors::border())
                    .text_size(px(15.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(HvColors::text_primary())
                    .child("Device Health"),
            )
            .children(devices.iter().map(|device| self.render_row(device)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::{
        Battery, CoreVital, DeviceKind, DeviceStatus, PowerDraw, Protocol, VitalsHistory,
    };
    use chrono::Utc;

    fn device(id: &str, status: DeviceStatus, battery: Option<u8>) -> Device {
        Device {
            id: id.to_string(),
            name: id.to_string(),
            kind: DeviceKind::Camera,
            room: "Kitchen".to_string(),
            x: 0.5,
            y: 0.5,
            status,
            core_vital: CoreVital::default(),
            battery: battery.map(|level| Battery {
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
    fn test_health_buckets() {
        assert_eq!(
            Health::of(&device("a", DeviceStatus::Inactive, None)),
            Health::Error
        );
        assert_eq!(
            Health::of(&device("b", DeviceStatus::Active, Some(15))),
            Health::Warning
        );
        assert_eq!(
            Health::of(&device("c", DeviceStatus::Active, Some(80))),
            Health::Ok
        );
        assert_eq!(Health::of(&device("d", DeviceStatus::Active, None)), Health::Ok);
    }

    #[test]
    fn test_sorted_worst_first() {
        let devices = vec![
            device("ok", DeviceStatus::Active, None),
            device("warn", DeviceStatus::Active, Some(10)),
            device("err", DeviceStatus::Inactive, None),
        ];
        let sorted = health_sorted(&devices);
        assert_eq!(sorted[0].id, "err");
        assert_eq!(sorted[1].id, "warn");
        assert_eq!(sorted[2].id, "ok");
    }
}
