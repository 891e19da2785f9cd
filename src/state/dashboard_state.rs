//! DashboardState - Overview Metrics and Active-Metric Selection
//!
//! Metric-card clicks take effect after a fixed simulated delay. A
//! generation counter makes the last click win: applying a stale token
//! is a no-op, so no cancellation machinery is needed.

use crate::domain::metrics::{MetricKind, SystemMetrics, TimeRange};
use crate::fixtures;


/// State for the overview dashboard
#[derive(Debug)]
pub struct DashboardState {
    /// Generated metric fixtures
    pub metrics: SystemMetrics,
    /// Metric currently shown in the trend chart
    pub active_metric: MetricKind,
    /// Chart time range (changes immediately, no delay)
    pub time_range: TimeRange,
    /// Generation of the latest metric-card click
    generation: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(fixtures::metrics::system_metrics())
    }
}

impl DashboardState {
    pub fn new(metrics: SystemMetrics) -> Self {
        Self {
            metrics,
            active_metric: MetricKind::default(),
            time_range: TimeRange::default(),
            generation: 0,
        }
    }

    /// Register a metric-card click; the returned token must be passed
    /// back to `apply_metric` once the simulated delay elapses
    pub fn request_metric(&mut self, _kind: MetricKind) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Apply a pending selection; stale tokens lose to newer clicks
    ///
    /// Returns true when the selection was applied.
    pub fn apply_metric(&mut self, kind: MetricKind, token: u64) -> bool {
        if token != self.generation {
            return false;
        }
        self.active_metric = kind;
        true
    }

    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_with_current_token() {
        let mut state = DashboardState::default();
        let token = state.request_metric(MetricKind::Temperature);
        assert!(state.apply_metric(MetricKind::Temperature, token));
        assert_eq!(state.active_metric, MetricKind::Temperature);
    }

    #[test]
    fn test_stale_token_loses_to_newer_click() {
        let mut state = DashboardState::default();
        let first = state.request_metric(MetricKind::Temperature);
        let second = state.request_metric(MetricKind::AirQuality);

        // The older pending selection arrives late and is dropped.
        assert!(!state.apply_metric(MetricKind::Temperature, first));
        assert_eq!(state.active_metric, MetricKind::PowerUsage);

        assert!(state.apply_metric(MetricKind::AirQuality, second));
        assert_eq!(state.active_metric, MetricKind::AirQuality);
    }

    #[test]
    fn test_time_range_changes_immediately() {
        let mut state = DashboardState::default();
        state.set_time_range(TimeRange::Quarter);
        assert_eq!(state.time_range, TimeRange::Quarter);
    }
}
