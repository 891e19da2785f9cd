//! Metrics - System-Wide Dashboard Metrics

use chrono::NaiveDate;

use crate::domain::device::Trend;
use crate::utils::format::format_number;

/// The three dashboard KPI metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetricKind {
    #[default]
    PowerUsage,
    Temperature,
    AirQuality,
}

impl MetricKind {
    pub fn all() -> &'static [MetricKind] {
        &[
            MetricKind::PowerUsage,
            MetricKind::Temperature,
            MetricKind::AirQuality,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::PowerUsage => "Power Usage",
            MetricKind::Temperature => "Temperature",
            MetricKind::AirQuality => "Air Quality",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::PowerUsage => "W",
            MetricKind::Temperature => "°F",
            MetricKind::AirQuality => "PPM",
        }
    }
}

/// Chart time ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    Quarter,
}

impl TimeRange {
    pub fn all() -> &'static [TimeRange] {
        &[TimeRange::Week, TimeRange::Month, TimeRange::Quarter]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Week => "7D",
            TimeRange::Month => "30D",
            TimeRange::Quarter => "90D",
        }
    }

    /// Number of daily samples in the range
    pub fn days(&self) -> usize {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
        }
    }
}

/// A single dated metric sample
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub date: NaiveDate,
    pub value: f64,
}

/// A dashboard metric with its generated histories
#[derive(Debug, Clone)]
pub struct Metric {
    pub kind: MetricKind,
    pub current: f64,
    pub trend: Trend,
    /// Change caption like "+12%" or "-3 PPM"
    pub change: String,
    pub history_week: Vec<MetricSample>,
    pub history_month: Vec<MetricSample>,
    pub history_quarter: Vec<MetricSample>,
}

impl Metric {
    /// History for the given time range
    pub fn history(&self, range: TimeRange) -> &[MetricSample] {
        match range {
            TimeRange::Week => &self.history_week,
            TimeRange::Month => &self.history_month,
            TimeRange::Quarter => &self.history_quarter,
        }
    }

    /// Headline value with unit, e.g. "1,247 W"
    pub fn display_value(&self) -> String {
        format!(
            "{} {}",
            format_number(self.current.round() as i64),
            self.kind.unit()
        )
    }
}

/// The full set of dashboard metrics
#[derive(Debug, Clone)]
pub struct SystemMetrics {
    pub power_usage: Metric,
    pub temperature: Metric,
    pub air_quality: Metric,
}

impl SystemMetrics {
    pub fn get(&self, kind: MetricKind) -> &Metric {
        match kind {
            MetricKind::PowerUsage => &self.power_usage,
            MetricKind::Temperature => &self.temperature,
            MetricKind::AirQuality => &self.air_quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_formats_with_unit() {
        let metric = Metric {
            kind: MetricKind::PowerUsage,
            current: 1247.0,
            trend: Trend::Up,
            change: "+12%".to_string(),
            history_week: Vec::new(),
            history_month: Vec::new(),
            history_quarter: Vec::new(),
        };
        assert_eq!(metric.display_value(), "1,247 W");
    }

    #[test]
    fn test_time_range_days() {
        assert_eq!(TimeRange::Week.days(), 7);
        assert_eq!(TimeRange::Month.days(), 30);
        assert_eq!(TimeRange::Quarter.days(), 90);
    }
}
