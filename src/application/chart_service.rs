// Chart service - Historical dataset views for chart rendering
use crate::domain::chart::{aggregate, Granularity, Metric, Point, ViewScale};
use crate::domain::clock::clock_time_to_date;
use crate::domain::sample::Dataset;
use crate::domain::units::{decikelvin_to_celsius, megawatts_to_kwh};
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    dataset: Arc<Dataset>,
    step_seconds: u32,
}

impl ChartService {
    pub fn new(dataset: Arc<Dataset>, step_seconds: u32) -> Self {
        Self { dataset, step_seconds }
    }

    /// Points for one metric at the requested view scale. The 5s view is
    /// the raw series; minute/hour views are bucketed downsamples.
    pub fn chart_points(&self, view: ViewScale, metric: Metric) -> Vec<Point> {
        let raw = self.raw_points(metric);
        match view {
            ViewScale::FiveSeconds => raw,
            ViewScale::Minute => aggregate(&raw, Granularity::Minute, metric),
            ViewScale::Hour => aggregate(&raw, Granularity::Hour, metric),
        }
    }

    fn raw_points(&self, metric: Metric) -> Vec<Point> {
        match metric {
            Metric::Temperature => self
                .dataset
                .temperature
                .iter()
                .map(|sample| Point {
                    date: clock_time_to_date(&sample.time),
                    temperature: sample
                        .value
                        .filter(|v| v.is_finite())
                        .map(decikelvin_to_celsius),
                    energy: None,
                })
                .collect(),
            Metric::Energy => self
                .dataset
                .power
                .iter()
                .map(|sample| Point {
                    date: clock_time_to_date(&sample.time),
                    temperature: None,
                    energy: Some(megawatts_to_kwh(&sample.value, self.step_seconds)),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::Sample;

    fn service() -> ChartService {
        let dataset = Dataset::new(
            vec![
                Sample { time: "10:00:00".to_string(), value: Some(2831.5) },
                Sample { time: "10:00:05".to_string(), value: None },
                Sample { time: "10:00:10".to_string(), value: Some(2851.5) },
            ],
            vec![
                Sample { time: "10:00:00".to_string(), value: "1,0".to_string() },
                Sample { time: "10:00:05".to_string(), value: "2,0".to_string() },
            ],
        );
        ChartService::new(Arc::new(dataset), 5)
    }

    #[test]
    fn test_raw_temperature_view_keeps_gaps() {
        let points = service().chart_points(ViewScale::FiveSeconds, Metric::Temperature);
        assert_eq!(points.len(), 3);
        assert!((points[0].temperature.unwrap() - 10.0).abs() < 1e-9);
        assert_eq!(points[1].temperature, None);
        assert!((points[2].temperature.unwrap() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_energy_view_integrates_per_tick() {
        let points = service().chart_points(ViewScale::FiveSeconds, Metric::Energy);
        assert_eq!(points.len(), 2);
        assert!((points[0].energy.unwrap() - 1000.0 * 5.0 / 3600.0).abs() < 1e-9);
    }

    #[test]
    fn test_minute_view_buckets() {
        let points = service().chart_points(ViewScale::Minute, Metric::Temperature);
        // All samples fall in the 10:00 minute; the gap is skipped.
        assert_eq!(points.len(), 1);
        assert!((points[0].temperature.unwrap() - 11.0).abs() < 1e-9);
    }
}
