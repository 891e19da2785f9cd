//! Metric Trend Chart
//!
//! Bar chart of the active metric's history, normalized to the series
//! min/max so short ranges still fill the plot area.

use gpui::{
    App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*, px,
};

use crate::domain::metrics::{Metric, TimeRange};
use crate::theme::colors::HvColors;

const PLOT_HEIGHT: f32 = 220.0;
const MIN_BAR_HEIGHT: f32 = 4.0;

/// Compute per-value bar heights in pixels
///
/// A flat series renders mid-height bars rather than an empty plot.
pub fn bar_heights(values: &[f64], plot_height: f32) -> Vec<f32> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    values
        .iter()
        .map(|value| {
            let normalized = if max > min {
                (value - min) / (max - min)
            } else {
                0.5
            };
            MIN_BAR_HEIGHT + (normalized as f32) * (plot_height - MIN_BAR_HEIGHT)
        })
        .collect()
}

/// The trend chart widget
#[derive(IntoElement)]
pub struct MetricChart {
    metric: Metric,
    range: TimeRange,
}

impl MetricChart {
    pub fn new(metric: Metric, range: TimeRange) -> Self {
        Self { metric, range }
    }
}

impl RenderOnce for MetricChart {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let values: Vec<f64> = self
            .metric
            .history(self.range)
            .iter()
            .map(|s| s.value)
            .collect();
        let heights = bar_heights(&values, PLOT_HEIGHT);

        div()
            .w_full()
            .h(px(PLOT_HEIGHT))
            .flex()
            .flex_row()
            .items_end()
            .gap(px(1.0))
            .children(heights.into_iter().map(|height| {
                div()
                    .flex_1()
                    .h(px(height))
                    .rounded_sm()
                    .bg(HvColors::primary())
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_heights_span_the_plot() {
        let heights = bar_heights(&[10.0, 20.0, 15.0], 200.0);
        assert_eq!(heights.len(), 3);
        assert_eq!(heights[0], MIN_BAR_HEIGHT);
        assert_eq!(heights[1], 200.0);
        assert!(heights[2] > heights[0] && heights[2] < heights[1]);
    }

    #[test]
    fn test_flat_series_renders_mid_height() {
        let heights = bar_heights(&[42.0, 42.0], 200.0);
        for height in heights {
            assert_eq!(height, MIN_BAR_HEIGHT + 0.5 * (200.0 - MIN_BAR_HEIGHT));
        }
    }
}
