//! Overview Controller
//!
//! Applies metric-card selections after the simulated latency. The
//! dashboard state hands out a generation token per click; a stale token
//! is dropped on arrival, so the last click always wins without any
//! explicit cancellation.

use std::time::Duration;

use gpui::App;

use crate::app::entities::AppEntities;
use crate::constants::METRIC_SELECT_DELAY_MS;
use crate::domain::metrics::{MetricKind, TimeRange};

/// Overview page controller
pub struct OverviewController {
    entities: AppEntities,
}

impl OverviewController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Handle a metric-card click; takes effect after the simulated delay
    pub fn select_metric(&self, kind: MetricKind, cx: &mut App) {
        let token = self
            .entities
            .dashboard
            .update(cx, |dashboard, _| dashboard.request_metric(kind));

        tracing::debug!(?kind, token, "metric card clicked");

        let dashboard = self.entities.dashboard.clone();
        cx.spawn(async move |cx| {
            cx.background_executor()
                .timer(Duration::from_millis(METRIC_SELECT_DELAY_MS))
                .await;
            let _ = dashboard.update(cx, |dashboard, cx| {
                if dashboard.apply_metric(kind, token) {
                    tracing::debug!(?kind, "metric selection applied");
                    cx.notify();
                }
            });
        })
        .detach();
    }

    /// Handle a chart range click; immediate, no simulated delay
    pub fn select_time_range(&self, range: TimeRange, cx: &mut App) {
        self.entities.dashboard.update(cx, |dashboard, cx| {
            dashboard.set_time_range(range);
            cx.notify();
        });
    }
}
