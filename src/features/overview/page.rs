//! Overview Page
//!
//! Dashboard with KPI metric cards, the trend chart for the active
//! metric, and the incidents and device health panels.

use gpui::{
    ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::domain::device::Trend;
use crate::domain::metrics::{Metric, MetricKind, TimeRange};
use crate::features::overview::chart::MetricChart;
use crate::features::overview::controller::OverviewController;
use crate::features::overview::health_panel::HealthPanel;
use crate::features::overview::incidents_panel::IncidentsPanel;
use crate::theme::colors::HvColors;
use crate::components::layout::page_header::PageHeader;
use crate::components::primitives::button::Button;

/// Overview page component
pub struct OverviewPage {
    entities: AppEntities,
    controller: OverviewController,
    incidents_panel: Entity<IncidentsPanel>,
    health_panel: Entity<HealthPanel>,
}

impl OverviewPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = OverviewController::new(entities.clone());

        // Re-render when the active metric or time range changes
        cx.observe(&entities.dashboard, |_this, _, cx| cx.notify())
            .detach();

        let incidents_panel = cx.new(|cx| IncidentsPanel::new(entities.clone(), cx));
        let health_panel = cx.new(|cx| HealthPanel::new(entities.clone(), cx));

        Self {
            entities,
            controller,
            incidents_panel,
            health_panel,
        }
    }

    fn trend_color(trend: Trend) -> gpui::Rgba {
        match trend {
            Trend::Up => HvColors::success(),
            Trend::Down => HvColors::danger(),
            Trend::Stable => HvColors::text_muted(),
        }
    }

    fn render_metric_card(
        &self,
        metric: &Metric,
        is_active: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let kind = metric.kind;

        div()
            .id(SharedString::from(format!("metric-card-{:?}", kind)))
            .flex_1()
            .p_5()
            .rounded_lg()
            .border_1()
            .border_color(if is_active {
                HvColors::primary()
            } else {
                HvColors::border()
            })
            .bg(if is_active {
                HvColors::content_bg()
            } else {
                HvColors::card_muted_bg()
            })
            .cursor_pointer()
            .hover(|s| s.bg(HvColors::content_bg()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.controller.select_metric(kind, cx);
            }))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .mb_2()
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(HvColors::text_secondary())
                            .child(kind.label()),
                    )
                    .child(
                        div()
                            .text_color(Self::trend_color(metric.trend))
                            .child(Icon::empty().path(metric.trend.icon_path())),
                    ),
            )
            .child(
                div()
                    .text_size(px(24.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(HvColors::text_primary())
                    .child(metric.display_value()),
            )
            .child(
                div()
                    .text_size(px(13.0))
                    .text_color(Self::trend_color(metric.trend))
                    .child(metric.change.clone()),
            )
    }

    fn render_range_selector(
        &self,
        active_range: TimeRange,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .flex()
            .bg(HvColors::card_muted_bg())
            .rounded_lg()
            .p_1()
            .gap_1()
            .children(TimeRange::all().iter().map(|range| {
                let range = *range;
                Button::toggle(
                    SharedString::from(format!("range-{}", range.label())),
                    range.label(),
                    range == active_range,
                )
                .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                    this.controller.select_time_range(range, cx);
                }))
            }))
    }
}

impl Render for OverviewPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (active_metric, time_range, metrics) = {
            let dashboard = self.entities.dashboard.read(cx);
            (
                dashboard.active_metric,
                dashboard.time_range,
                dashboard.metrics.clone(),
            )
        };
        let chart_metric = metrics.get(active_metric).clone();

        let cards = MetricKind::all()
            .iter()
            .map(|kind| {
                let metric = metrics.get(*kind);
                self.render_metric_card(metric, *kind == active_metric, cx)
                    .into_any_element()
            })
            .collect::<Vec<_>>();

        div()
            .size_full()
            .flex()
            .flex_col()
            .child(PageHeader::new("Overview"))
            .child(
                div()
                    .id("overview-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_8()
                    .flex()
                    .flex_col()
                    .gap_8()
                    .child(
                        // KPI tiles
                        div().flex().flex_row().gap_6().children(cards),
                    )
                    .child(
                        // Trend chart card
                        div()
                            .w_full()
                            .p_6()
                            .rounded_lg()
                            .border_1()
                            .border_color(HvColors::border())
                            .bg(HvColors::content_bg())
                            .flex()
                            .flex_col()
                            .gap_6()
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .justify_between()
                                    .child(
                                        div()
                                            .flex()
                                            .flex_col()
                                            .child(
                                                div()
                                                    .text_size(px(16.0))
                                                    .font_weight(gpui::FontWeight::BOLD)
                                                    .text_color(HvColors::text_primary())
                                                    .child(chart_metric.kind.label()),
                                            )
                                            .child(
                                                div()
                                                    .flex()
                                                    .items_center()
                                                    .gap_2()
                                                    .child(
                                                        div()
                                                            .text_size(px(22.0))
                                                            .font_weight(gpui::FontWeight::BOLD)
                                                            .text_color(HvColors::text_primary())
                                                            .child(chart_metric.display_value()),
                                                    )
                                                    .child(
                                                        div()
                                                            .text_size(px(13.0))
                                                            .text_color(Self::trend_color(
                                                                chart_metric.trend,
                                                            ))
                                                            .child(chart_metric.change.clone()),
                                                    ),
                                            ),
                                    )
                                    .child(self.render_range_selector(time_range, cx)),
                            )
                            .child(MetricChart::new(chart_metric, time_range)),
                    )
                    .child(
                        // Bottom row: incidents and device health
                        div()
                            .flex()
                            .flex_row()
                            .gap_8()
                            .items_start()
                            .child(div().flex_1().child(self.incidents_panel.clone()))
                            .child(div().flex_1().child(self.health_panel.clone())),
                    ),
            )
    }
}
