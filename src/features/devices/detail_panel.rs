//! Device Detail Panel
//!
//! Slide-in panel for the selected device: identity, kind-specific
//! control sections, facts, battery, power figures, and a vitals
//! sparkline. Control mutations are local UI state; the fixture device
//! never changes. The close button (and a second click on the node)
//! clears the selection.

use chrono::Utc;
use gpui::{
    ClickEvent, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div, prelude::*, px,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::domain::device::Device;
use crate::features::devices::controls::{
    CameraControls, DeviceControls, ENERGY_RATE, EnergyControls, FanMode, GenericControls,
    LightControls, ThermostatControls, ThermostatMode, UsageStatus, VideoQuality,
};
use crate::features::overview::chart::bar_heights;
use crate::state::selection_state::SelectionState;
use crate::theme::colors::HvColors;
use crate::utils::format::format_relative_age;

const SPARKLINE_HEIGHT: f32 = 80.0;

/// Detail panel component; renders nothing when no device is selected
pub struct DetailPanel {
    entities: AppEntities,
    /// Local control state for the selected device
    controls: Option<DeviceControls>,
    /// Device id the control state was seeded for
    controls_for: Option<String>,
}

impl DetailPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.selection, |this, selection, cx| {
            this.sync_controls(&selection, cx);
            cx.notify();
        })
        .detach();

        let mut panel = Self {
            entities: entities.clone(),
            controls: None,
            controls_for: None,
        };
        panel.sync_controls(&entities.selection, cx);
        panel
    }

    /// Reseed the control state whenever the selected device changes
    fn sync_controls(&mut self, selection: &Entity<SelectionState>, cx: &Context<Self>) {
        match selection.read(cx).selected() {
            Some(device) if self.controls_for.as_deref() != Some(device.id.as_str()) => {
                self.controls = Some(DeviceControls::for_device(device));
                self.controls_for = Some(device.id.clone());
            }
            Some(_) => {}
            None => {
                self.controls = None;
                self.controls_for = None;
            }
        }
    }

    fn render_section_title(title: &'static str) -> impl IntoElement {
        div()
            .text_size(px(13.0))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .text_color(HvColors::text_primary())
            .child(title)
    }

    fn render_control_row(label: &'static str, control: impl IntoElement) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(HvColors::text_secondary())
                    .child(label),
            )
            .child(control)
    }

    /// Pill-shaped on/off switch
    fn render_switch(
        &self,
        id: &'static str,
        on: bool,
        cx: &mut Context<Self>,
        handler: impl Fn(&mut Self) + 'static,
    ) -> impl IntoElement {
        div()
            .id(id)
            .w(px(44.0))
            .h(px(24.0))
            .rounded_full()
            .bg(if on {
                HvColors::primary()
            } else {
                HvColors::border()
            })
            .cursor_pointer()
            .flex()
            .items_center()
            .px(px(3.0))
            .when(on, |s| s.justify_end())
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                handler(this);
                cx.notify();
            }))
            .child(
                div()
                    .w(px(18.0))
                    .h(px(18.0))
                    .rounded_full()
                    .bg(HvColors::content_bg()),
            )
    }

    /// Chevron stepper with the current value between the arrows
    fn render_stepper(
        &self,
        id_prefix: &'static str,
        value: String,
        cx: &mut Context<Self>,
        handler: impl Fn(&mut Self, bool) + Clone + 'static,
    ) -> impl IntoElement {
        let down = handler.clone();
        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .id(SharedString::from(format!("{id_prefix}-down")))
                    .p_1()
                    .rounded_full()
                    .bg(HvColors::card_muted_bg())
                    .cursor_pointer()
                    .text_color(HvColors::text_secondary())
                    .hover(|s| s.bg(HvColors::border()))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        down(this, false);
                        cx.notify();
                    }))
                    .child(Icon::empty().path("icons/chevron-down.svg")),
            )
            .child(
                div()
                    .min_w(px(56.0))
                    .text_center()
                    .text_size(px(13.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(HvColors::text_primary())
                    .child(value),
            )
            .child(
                div()
                    .id(SharedString::from(format!("{id_prefix}-up")))
                    .p_1()
                    .rounded_full()
                    .bg(HvColors::card_muted_bg())
                    .cursor_pointer()
                    .text_color(HvColors::text_secondary())
                    .hover(|s| s.bg(HvColors::border()))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        handler(this, true);
                        cx.notify();
                    }))
                    .child(Icon::empty().path("icons/chevron-up.svg")),
            )
    }

    fn render_light_controls(
        &self,
        light: &LightControls,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(Self::render_section_title("Light Controls"))
                    .child(self.render_switch("light-power", light.is_on, cx, |this| {
                        if let Some(DeviceControls::Light(light)) = &mut this.controls {
                            light.toggle();
                        }
                    })),
            )
            .when(light.is_on, |s| {
                s.child(Self::render_control_row(
                    "Brightness",
                    self.render_stepper(
                        "light-brightness",
                        format!("{}%", light.brightness),
                        cx,
                        |this, up| {
                            if let Some(DeviceControls::Light(light)) = &mut this.controls {
                                light.step_brightness(up);
                            }
                        },
                    )
                    .into_any_element(),
                ))
                .child(Self::render_control_row(
                    "Temperature",
                    self.render_stepper(
                        "light-temp",
                        format!("{} ({}K)", light.color_name(), light.color_temp),
                        cx,
                        |this, up| {
                            if let Some(DeviceControls::Light(light)) = &mut this.controls {
                                light.step_color_temp(up);
                            }
                        },
                    )
                    .into_any_element(),
                ))
            })
    }

    fn render_thermostat_controls(
        &self,
        thermostat: &ThermostatControls,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let mode = thermostat.mode;
        let fan = thermostat.fan;

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(Self::render_section_title("Thermostat Controls"))
                    .child(self.render_switch("thermostat-power", thermostat.is_on, cx, |this| {
                        if let Some(DeviceControls::Thermostat(t)) = &mut this.controls {
                            t.toggle();
                        }
                    })),
            )
            .when(thermostat.is_on, |s| {
                s.child(Self::render_control_row(
                    "Target",
                    self.render_stepper(
                        "thermostat-target",
                        format!("{}°F", thermostat.target_temp),
                        cx,
                        |this, up| {
                            if let Some(DeviceControls::Thermostat(t)) = &mut this.controls {
                                t.step_target(up);
                            }
                        },
                    )
                    .into_any_element(),
                ))
                .child(Self::render_control_row(
                    "Mode",
                    div()
                        .flex()
                        .gap_1()
                        .children(ThermostatMode::all().iter().map(|m| {
                            let m = *m;
                            Button::toggle(
                                SharedString::from(format!("thermostat-mode-{}", m.label())),
                                m.label(),
                                m == mode,
                            )
                            .on_click(cx.listener(
                                move |this, _event: &ClickEvent, _window, cx| {
                                    if let Some(DeviceControls::Thermostat(t)) = &mut this.controls
                                    {
                                        t.set_mode(m);
                                        cx.notify();
                                    }
                                },
                            ))
                        }))
                        .into_any_element(),
                ))
                .child(Self::render_control_row(
                    "Fan",
                    div()
                        .flex()
                        .gap_1()
                        .children(FanMode::all().iter().map(|f| {
                            let f = *f;
                            Button::toggle(
                                SharedString::from(format!("thermostat-fan-{}", f.label())),
                                f.label(),
                                f == fan,
                            )
                            .on_click(cx.listener(
                                move |this, _event: &ClickEvent, _window, cx| {
                                    if let Some(DeviceControls::Thermostat(t)) = &mut this.controls
                                    {
                                        t.set_fan(f);
                                        cx.notify();
                                    }
                                },
                            ))
                        }))
                        .into_any_element(),
                ))
            })
    }

    fn render_camera_controls(
        &self,
        camera: &CameraControls,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let quality = camera.quality;

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(Self::render_section_title("Camera Controls"))
                    .child(
                        div()
                            .px_2()
                            .py_1()
                            .rounded_full()
                            .text_size(px(11.0))
                            .bg(if camera.recording {
                                HvColors::danger()
                            } else {
                                HvColors::card_muted_bg()
                            })
                            .text_color(if camera.recording {
                                HvColors::text_light()
                            } else {
                                HvColors::text_secondary()
                            })
                            .child(if camera.recording { "RECORDING" } else { "IDLE" }),
                    ),
            )
            .child(Self::render_control_row(
                "Recording",
                self.render_switch("camera-recording", camera.recording, cx, |this| {
                    if let Some(DeviceControls::Camera(c)) = &mut this.controls {
                        c.toggle_recording();
                    }
                })
                .into_any_element(),
            ))
            .child(Self::render_control_row(
                "Motion Detection",
                self.render_switch("camera-motion", camera.motion_detection, cx, |this| {
                    if let Some(DeviceControls::Camera(c)) = &mut this.controls {
                        c.toggle_motion_detection();
                    }
                })
                .into_any_element(),
            ))
            .child(Self::render_control_row(
                "Night Vision",
                self.render_switch("camera-night", camera.night_vision, cx, |this| {
                    if let Some(DeviceControls::Camera(c)) = &mut this.controls {
                        c.toggle_night_vision();
                    }
                })
                .into_any_element(),
            ))
            .child(Self::render_control_row(
                "Quality",
                div()
                    .flex()
                    .gap_1()
                    .children(VideoQuality::all().iter().map(|q| {
                        let q = *q;
                        Button::toggle(
                            SharedString::from(format!("camera-quality-{}", q.label())),
                            q.label(),
                            q == quality,
                        )
                        .on_click(cx.listener(
                            move |this, _event: &ClickEvent, _window, cx| {
                                if let Some(DeviceControls::Camera(c)) = &mut this.controls {
                                    c.set_quality(q);
                                    cx.notify();
                                }
                            },
                        ))
                    }))
                    .into_any_element(),
            ))
    }

    fn render_energy_controls(
        &self,
        energy: &EnergyControls,
        device: &Device,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let usage = device.core_vital.raw_value;
        let status = energy.usage_status(usage);
        let status_color = match status {
            UsageStatus::Normal => HvColors::success(),
            UsageStatus::High => HvColors::warning(),
            UsageStatus::Critical => HvColors::danger(),
        };

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(Self::render_section_title("Energy Monitor Controls"))
                    .child(
                        div()
                            .px_2()
                            .py_1()
                            .rounded_full()
                            .text_size(px(11.0))
                            .bg(HvColors::card_muted_bg())
                            .text_color(status_color)
                            .child(status.label()),
                    ),
            )
            .child(Self::render_control_row(
                "Real-time Monitoring",
                self.render_switch("energy-monitoring", energy.monitoring, cx, |this| {
                    if let Some(DeviceControls::Energy(e)) = &mut this.controls {
                        e.toggle_monitoring();
                    }
                })
                .into_any_element(),
            ))
            .child(Self::render_control_row(
                "Usage Alerts",
                self.render_switch("energy-alerts", energy.alerts_enabled, cx, |this| {
                    if let Some(DeviceControls::Energy(e)) = &mut this.controls {
                        e.toggle_alerts();
                    }
                })
                .into_any_element(),
            ))
            .child(Self::render_control_row(
                "Est. daily cost",
                div()
                    .text_size(px(13.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(HvColors::text_primary())
                    .child(format!(
                        "${:.2}",
                        device.power.daily / 1000.0 * ENERGY_RATE
                    ))
                    .into_any_element(),
            ))
            .when(energy.alerts_enabled, |s| {
                s.child(Self::render_control_row(
                    "High Threshold",
                    self.render_stepper(
                        "energy-high",
                        format!("{} W", energy.high_threshold),
                        cx,
                        |this, up| {
                            if let Some(DeviceControls::Energy(e)) = &mut this.controls {
                                e.step_high_threshold(up);
                            }
                        },
                    )
                    .into_any_element(),
                ))
                .child(Self::render_control_row(
                    "Critical Threshold",
                    self.render_stepper(
                        "energy-critical",
                        format!("{} W", energy.critical_threshold),
                        cx,
                        |this, up| {
                            if let Some(DeviceControls::Energy(e)) = &mut this.controls {
                                e.step_critical_threshold(up);
                            }
                        },
                    )
                    .into_any_element(),
                ))
            })
    }

    fn render_generic_controls(
        &self,
        generic: &GenericControls,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(Self::render_section_title("Controls"))
                    .child(self.render_switch("generic-power", generic.is_on, cx, |this| {
                        if let Some(DeviceControls::Generic(g)) = &mut this.controls {
                            g.toggle();
                        }
                    })),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(HvColors::text_muted())
                    .child(if generic.is_on {
                        "Device is powered on"
                    } else {
                        "Device is powered off"
                    }),
            )
    }

    fn render_controls(&self, device: &Device, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        let controls = self.controls.clone()?;
        let section = match &controls {
            DeviceControls::Light(light) => self.render_light_controls(light, cx).into_any_element(),
            DeviceControls::Thermostat(t) => {
                self.render_thermostat_controls(t, cx).into_any_element()
            }
            DeviceControls::Camera(c) => self.render_camera_controls(c, cx).into_any_element(),
            DeviceControls::Energy(e) => {
                self.render_energy_controls(e, device, cx).into_any_element()
            }
            DeviceControls::Generic(g) => self.render_generic_controls(g, cx).into_any_element(),
        };

        Some(
            div()
                .px_6()
                .py_4()
                .border_b_1()
                .border_color(HvColors::border())
                .child(section),
        )
    }

    fn render_fact_row(label: &'static str, value: String) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .justify_between()
            .py_2()
            .border_b_1()
            .border_color(HvColors::border())
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(HvColors::text_secondary())
                    .child(label),
            )
            .child(
                div()
                    .text_size(px(13.0))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(HvColors::text_primary())
                    .child(value),
            )
    }

    fn render_sparkline(device: &Device) -> Option<impl IntoElement> {
        if device.vitals.primary.is_empty() {
            return None;
        }
        let values: Vec<f64> = device.vitals.primary.iter().map(|s| s.value).collect();
        let heights = bar_heights(&values, SPARKLINE_HEIGHT);

        Some(
            div()
                .flex()
                .flex_col()
                .gap_2()
                .child(
                    div()
                        .text_size(px(12.0))
                        .text_color(HvColors::text_secondary())
                        .child(format!("{} · last 24h", device.core_vital.label)),
                )
                .child(
                    div()
                        .w_full()
                        .h(px(SPARKLINE_HEIGHT))
                        .flex()
                        .flex_row()
                        .items_end()
                        .gap(px(1.0))
                        .children(heights.into_iter().map(|height| {
                            div()
                                .flex_1()
                                .h(px(height))
                                .rounded_sm()
                                .bg(device.kind.icon_color())
                        })),
                ),
        )
    }

    fn render_device(&self, device: &Device, cx: &mut Context<Self>) -> impl IntoElement {
        let now = Utc::now();
        let status_color = if device.status.is_active() {
            HvColors::success()
        } else {
            HvColors::inactive()
        };

        div()
            .flex()
            .flex_col()
            .child(
                // Header
                div()
                    .p_6()
                    .border_b_1()
                    .border_color(HvColors::border())
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_3()
                            .child(
                                div()
                                    .w(px(40.0))
                                    .h(px(40.0))
                                    .rounded_full()
                                    .bg(HvColors::card_muted_bg())
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .text_color(device.kind.icon_color())
                                    .child(Icon::empty().path(device.kind.icon_path())),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .child(
                                        div()
                                            .text_size(px(17.0))
                                            .font_weight(gpui::FontWeight::BOLD)
                                            .text_color(HvColors::text_primary())
                                            .child(device.name.clone()),
                                    )
                                    .child(
                                        div()
                                            .flex()
                                            .items_center()
                                            .gap_2()
                                            .child(
                                                div()
                                                    .w(px(8.0))
                                                    .h(px(8.0))
                                                    .rounded_full()
                                                    .bg(status_color),
                                            )
                                            .child(
                                                div()
                                                    .text_size(px(12.0))
                                                    .text_color(HvColors::text_secondary())
                                                    .child(format!(
                                                        "{} · {}",
                                                        device.status.label(),
                                                        device.room
                                                    )),
                                            ),
                                    ),
                            ),
                    )
                    .child(
                        div()
                            .id("detail-panel-close")
                            .p_2()
                            .rounded_md()
                            .cursor_pointer()
                            .text_color(HvColors::text_secondary())
                            .hover(|s| s.bg(HvColors::card_muted_bg()))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.entities.selection.update(cx, |selection, cx| {
                                    selection.clear();
                                    cx.notify();
                                });
                            }))
                            .child(Icon::empty().path("icons/x.svg")),
                    ),
            )
            .children(self.render_controls(device, cx))
            .child(
                // Facts
                div()
                    .p_6()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(Self::render_fact_row(
                        "Kind",
                        device.kind.label().to_string(),
                    ))
                    .child(Self::render_fact_row(
                        device_vital_label(device),
                        device.display_vital(),
                    ))
                    .child(Self::render_fact_row(
                        "Connection",
                        device.protocol.label().to_string(),
                    ))
                    .child(Self::render_fact_row(
                        "Power draw",
                        format!("{:.1} W", device.power.current),
                    ))
                    .child(Self::render_fact_row(
                        "Daily usage",
                        format!("{:.1} Wh", device.power.daily),
                    ))
                    .child(Self::render_fact_row(
                        "Monthly usage",
                        format!("{:.0} Wh", device.power.monthly),
                    ))
                    .child(Self::render_fact_row(
                        "Last activity",
                        format_relative_age(&device.last_activity, &now),
                    )),
            )
            .when_some(device.battery.as_ref(), |s, battery| {
                s.child(
                    div()
                        .px_6()
                        .pb_4()
                        .flex()
                        .items_center()
                        .gap_2()
                        .text_color(if battery.is_low() {
                            HvColors::danger()
                        } else {
                            HvColors::success()
                        })
                        .child(Icon::empty().path("icons/battery.svg"))
                        .child(div().text_size(px(13.0)).child(format!(
                            "Battery {}%{}",
                            battery.level,
                            if battery.is_charging {
                                " · charging"
                            } else {
                                ""
                            }
                        ))),
                )
            })
            .child(
                div()
                    .px_6()
                    .pb_6()
                    .children(Self::render_sparkline(device)),
            )
    }
}

impl Render for DetailPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let device = self.entities.selection.read(cx).selected().cloned();

        div()
            .id("detail-panel-scroll")
            .h_full()
            .bg(HvColors::content_bg())
            .border_l_1()
            .border_color(HvColors::border())
            .overflow_y_scroll()
            .when_some(device, |s, device| {
                s.child(self.render_device(&device, cx))
            })
    }
}

/// Label for the vital row; a low battery changes what the row means
fn device_vital_label(device: &Device) -> &'static str {
    match &device.battery {
        Some(battery) if battery.is_low() => "Battery",
        _ => "Core vital",
    }
}
