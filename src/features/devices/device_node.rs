//! Device Node
//!
//! A device marker on the floor plan: selection ring, status ring, white
//! disc, kind icon. Radii shrink on narrow canvases.

use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, tooltip::Tooltip};

use crate::app::entities::AppEntities;
use crate::domain::device::Device;
use crate::theme::colors::HvColors;

const SELECTION_RADIUS: f32 = 35.0;
const STATUS_RADIUS: f32 = 28.0;
const DEVICE_RADIUS: f32 = 25.0;
const ICON_SIZE: f32 = 18.0;

/// A single device marker, positioned at canvas pixel coordinates
#[derive(IntoElement)]
pub struct DeviceNode {
    entities: AppEntities,
    device: Device,
    x: f32,
    y: f32,
    selected: bool,
    /// 0.8 on mobile-width canvases, 1.0 otherwise
    scale: f32,
}

impl DeviceNode {
    pub fn new(
        entities: AppEntities,
        device: Device,
        x: f32,
        y: f32,
        selected: bool,
        scale: f32,
    ) -> Self {
        Self {
            entities,
            device,
            x,
            y,
            selected,
            scale,
        }
    }
}

impl RenderOnce for DeviceNode {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let selection_diameter = SELECTION_RADIUS * 2.0 * self.scale;
        let status_diameter = STATUS_RADIUS * 2.0 * self.scale;
        let device_diameter = DEVICE_RADIUS * 2.0 * self.scale;
        let icon_size = ICON_SIZE * self.scale;

        let status_color = if self.device.status.is_active() {
            HvColors::success()
        } else {
            HvColors::inactive()
        };

        let tooltip_text = SharedString::from(format!(
            "{} · {}: {}",
            self.device.name,
            self.device.core_vital.label,
            self.device.display_vital()
        ));

        let entities = self.entities.clone();
        let device = self.device.clone();
        let device_id = self.device.id.clone();

        div()
            .id(SharedString::from(format!("device-node-{device_id}")))
            .absolute()
            .left(px(self.x - selection_diameter / 2.0))
            .top(px(self.y - selection_diameter / 2.0))
            .w(px(selection_diameter))
            .h(px(selection_diameter))
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .on_click(move |_event: &ClickEvent, _window, cx| {
                tracing::debug!(device = %device.id, "device node clicked");
                entities.selection.update(cx, |selection, cx| {
                    selection.toggle(device.clone());
                    cx.notify();
                });
            })
            .tooltip(move |window, cx| Tooltip::new(tooltip_text.clone()).build(window, cx))
            .when(self.selected, |s| {
                s.child(
                    // Selection ring
                    div()
                        .absolute()
                        .inset_0()
                        .rounded_full()
                        .border_2()
                        .border_color(HvColors::selection_ring()),
                )
            })
            .child(
                // Status ring
                div()
                    .absolute()
                    .w(px(status_diameter))
                    .h(px(status_diameter))
                    .rounded_full()
                    .border_2()
                    .border_color(status_color),
            )
            .child(
                // Device disc with kind icon
                div()
                    .w(px(device_diameter))
                    .h(px(device_diameter))
                    .rounded_full()
                    .bg(HvColors::device_bg())
                    .border_1()
                    .border_color(HvColors::border())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(self.device.kind.icon_color())
                    .child(
                        Icon::empty()
                            .path(self.device.kind.icon_path())
                            .size(px(icon_size)),
                    ),
            )
    }
}
