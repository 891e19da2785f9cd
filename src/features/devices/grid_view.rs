//! Device Grid
//!
//! Card-per-device alternative to the spatial floor plan. Clicking a
//! card toggles the same single-slot selection the floor plan uses.

use gpui::{
    Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div, prelude::*, px,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::domain::device::Device;
use crate::theme::colors::HvColors;

/// Grid view component
pub struct GridView {
    entities: AppEntities,
}

impl GridView {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.selection, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_card(
        &self,
        device: Device,
        selected: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let status_color = if device.status.is_active() {
            HvColors::success()
        } else {
            HvColors::inactive()
        };
        let border_color = if selected {
            HvColors::primary()
        } else {
            HvColors::border()
        };
        let clicked = device.clone();

        div()
            .id(SharedString::from(format!("device-card-{}", device.id)))
            .w(px(220.0))
            .p_4()
            .bg(HvColors::content_bg())
            .border_1()
            .border_color(border_color)
            .rounded_lg()
            .cursor_pointer()
            .hover(|s| s.border_color(HvColors::primary()))
            .on_click(cx.listener(move |this, _, _window, cx| {
                this.entities.selection.update(cx, |selection, cx| {
                    selection.toggle(clicked.clone());
                    cx.notify();
                });
            }))
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .w(px(36.0))
                            .h(px(36.0))
                            .rounded_full()
                            .bg(HvColors::card_muted_bg())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(device.kind.icon_color())
                            .child(Icon::empty().path(device.kind.icon_path())),
                    )
                    .child(div().w(px(8.0)).h(px(8.0)).rounded_full().bg(status_color)),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_size(px(14.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(HvColors::text_primary())
                            .child(device.name.clone()),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(HvColors::text_secondary())
                            .child(device.room.clone()),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(HvColors::text_secondary())
                            .child(device.core_vital.label.clone()),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(HvColors::text_primary())
                            .child(device.display_vital()),
                    ),
            )
    }
}

impl Render for GridView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let devices = self.entities.directory.read(cx).devices.clone();
        let selection = self.entities.selection.read(cx);
        let cards: Vec<(Device, bool)> = devices
            .into_iter()
            .map(|d| {
                let selected = selection.is_selected(&d.id);
                (d, selected)
            })
            .collect();

        div()
            .id("device-grid")
            .flex_1()
            .h_full()
            .overflow_scroll()
            .p_6()
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_wrap()
                    .gap_4()
                    .children(
                        cards
                            .into_iter()
                            .map(|(device, selected)| self.render_card(device, selected, cx)),
                    ),
            )
    }
}
