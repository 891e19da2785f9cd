//! Incidents Panel
//!
//! Severity-tagged list of recent incidents with a severity filter.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::domain::incident::{Incident, Severity};
use crate::theme::colors::HvColors;

/// Incidents panel component
pub struct IncidentsPanel {
    entities: AppEntities,
    /// Active severity filter; None shows everything
    filter: Option<Severity>,
}

impl IncidentsPanel {
    pub fn new(entities: AppEntities, _cx: &mut Context<Self>) -> Self {
        Self {
            entities,
            filter: None,
        }
    }

    fn render_filter_chip(
        &self,
        severity: Option<Severity>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let is_active = self.filter == severity;
        let label = severity.map_or("All", |s| s.label());

        div()
            .id(SharedString::from(format!("incident-filter-{label}")))
            .px_2()
            .py_1()
            .rounded_md()
            .text_size(px(12.0))
            .cursor_pointer()
            .bg(if is_active {
                HvColors::primary_tint()
            } else {
                gpui::rgba(0x00000000)
            })
            .text_color(if is_active {
                HvColors::primary()
            } else {
                HvColors::text_secondary()
            })
            .hover(|s| s.bg(HvColors::card_muted_bg()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.filter = severity;
                cx.notify();
            }))
            .child(label)
    }

    fn render_incident(&self, incident: &Incident) -> impl IntoElement {
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
                // Severity tag
                div()
                    .px_2()
                    .py_1()
                    .rounded_md()
                    .text_size(px(11.0))
                    .text_color(HvColors::text_light())
                    .bg(incident.severity.color())
                    .child(incident.severity.label()),
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
                            .child(format!("{} · {}", incident.device_name, incident.room)),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(HvColors::text_secondary())
                            .child(incident.description.clone()),
                    ),
            )
            .child(
                div()
                    .text_size(px(11.0))
                    .text_color(HvColors::text_muted())
                    .child(incident.age.clone()),
            )
    }
}

impl Render for IncidentsPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let incidents: Vec<Incident> = {
            let directory = self.entities.directory.read(cx);
            directory
                .incidents
                .iter()
                .filter(|i| self.filter.is_none_or(|f| i.severity == f))
                .cloned()
                .collect()
        };

        let mut filters = vec![self.render_filter_chip(None, cx).into_any_element()];
        for severity in Severity::all() {
            filters.push(
                self.render_filter_chip(Some(*severity), cx)
                    .into_any_element(),
            );
        }

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
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(15.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(HvColors::text_primary())
                            .child("Recent Incidents"),
                    )
                    .child(div().flex().gap_1().children(filters)),
            )
            .children(
                incidents
                    .iter()
                    .map(|incident| self.render_incident(incident)),
            )
            .when(incidents.is_empty(), |s| {
                s.child(
                    div()
                        .p_6()
                        .text_size(px(13.0))
                        .text_color(HvColors::text_muted())
                        .child("No incidents for this severity"),
                )
            })
    }
}
