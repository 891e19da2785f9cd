//! Dashboard metric generation
//!
//! Histories follow the shapes of the original demo data: power usage
//! around 1200 W, temperature around 72 °F, air quality around 15 PPM,
//! each with a sinusoidal drift plus seeded noise and hard clamps.

use chrono::{TimeDelta, Utc};
use rand::Rng;
use rand::rngs::StdRng;

use crate::domain::device::Trend;
use crate::domain::metrics::{Metric, MetricKind, MetricSample, SystemMetrics, TimeRange};
use crate::fixtures::series_rng;

/// Generate the full dashboard metric set
pub fn system_metrics() -> SystemMetrics {
    SystemMetrics {
        power_usage: Metric {
            kind: MetricKind::PowerUsage,
            current: 1247.0,
            trend: Trend::Up,
            change: "+12%".to_string(),
            history_week: power_history(TimeRange::Week),
            history_month: power_history(TimeRange::Month),
            history_quarter: power_history(TimeRange::Quarter),
        },
        temperature: Metric {
            kind: MetricKind::Temperature,
            current: 72.0,
            trend: Trend::Stable,
            change: "0°F".to_string(),
            history_week: temperature_history(TimeRange::Week),
            history_month: temperature_history(TimeRange::Month),
            history_quarter: temperature_history(TimeRange::Quarter),
        },
        air_quality: Metric {
            kind: MetricKind::AirQuality,
            current: 15.0,
            trend: Trend::Down,
            change: "-3 PPM".to_string(),
            history_week: air_quality_history(TimeRange::Week),
            history_month: air_quality_history(TimeRange::Month),
            history_quarter: air_quality_history(TimeRange::Quarter),
        },
    }
}

fn daily_series(
    range: TimeRange,
    rng: &mut StdRng,
    mut value_for_day: impl FnMut(usize, &mut StdRng) -> f64,
) -> Vec<MetricSample> {
    let today = Utc::now().date_naive();
    let days = range.days();

    (0..days)
        .rev()
        .map(|i| MetricSample {
            date: today - TimeDelta::days(i as i64),
            value: value_for_day(i, rng),
        })
        .collect()
}

/// Power usage: 1200 W base, clamped to 800..1600
fn power_history(range: TimeRange) -> Vec<MetricSample> {
    let mut rng = series_rng(&format!("metrics/power/{}", range.label()));
    daily_series(range, &mut rng, |i, rng| {
        let daily = (i as f64 * 0.1).sin() * 100.0;
        let noise = (rng.gen_range(0.0..1.0) - 0.5) * 150.0;
        (1200.0 + daily + noise).round().clamp(800.0, 1600.0)
    })
}

/// Temperature: 72 °F base, clamped to 65..80
fn temperature_history(range: TimeRange) -> Vec<MetricSample> {
    let mut rng = series_rng(&format!("metrics/temperature/{}", range.label()));
    daily_series(range, &mut rng, |i, rng| {
        let seasonal = (i as f64 * 0.05).sin() * 3.0;
        let daily = (i as f64 * 0.2).sin() * 2.0;
        let noise = (rng.gen_range(0.0..1.0) - 0.5) * 2.0;
        (72.0 + seasonal + daily + noise).round().clamp(65.0, 80.0)
    })
}

/// Air quality: 15 PPM base (lower is better), clamped to 5..35
fn air_quality_history(range: TimeRange) -> Vec<MetricSample> {
    let mut rng = series_rng(&format!("metrics/air/{}", range.label()));
    daily_series(range, &mut rng, |i, rng| {
        let drift = (i as f64 * 0.08).sin() * 5.0;
        let noise = (rng.gen_range(0.0..1.0) - 0.5) * 8.0;
        (15.0 + drift + noise).round().clamp(5.0, 35.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_lengths_match_ranges() {
        let metrics = system_metrics();
        for kind in MetricKind::all() {
            let metric = metrics.get(*kind);
            assert_eq!(metric.history(TimeRange::Week).len(), 7);
            assert_eq!(metric.history(TimeRange::Month).len(), 30);
            assert_eq!(metric.history(TimeRange::Quarter).len(), 90);
        }
    }

    #[test]
    fn test_values_respect_clamps() {
        let metrics = system_metrics();
        for sample in metrics.power_usage.history(TimeRange::Quarter) {
            assert!((800.0..=1600.0).contains(&sample.value));
        }
        for sample in metrics.temperature.history(TimeRange::Quarter) {
            assert!((65.0..=80.0).contains(&sample.value));
        }
        for sample in metrics.air_quality.history(TimeRange::Quarter) {
            assert!((5.0..=35.0).contains(&sample.value));
        }
    }

    #[test]
    fn test_metrics_are_reproducible() {
        let first = system_metrics();
        let second = system_metrics();
        let values = |m: &Metric| -> Vec<f64> {
            m.history(TimeRange::Month).iter().map(|s| s.value).collect()
        };
        assert_eq!(values(&first.power_usage), values(&second.power_usage));
        assert_eq!(values(&first.temperature), values(&second.temperature));
        assert_eq!(values(&first.air_quality), values(&second.air_quality));
    }

    #[test]
    fn test_samples_are_dated_oldest_first() {
        let metrics = system_metrics();
        let history = metrics.power_usage.history(TimeRange::Week);
        for pair in history.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }
}
