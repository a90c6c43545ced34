// Chart point model and temporal bucketing
use chrono::{NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chart-ready point. Only the field for the metric being viewed is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub date: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
}

/// Temporal resolution of a chart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewScale {
    #[serde(rename = "5s")]
    FiveSeconds,
    Minute,
    Hour,
}

/// Bucket width for downsampled views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Minute,
    Hour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Temperature,
    Energy,
}

// At a 5-second tick there are 12 ticks per minute and 720 per hour;
// the factor rescales an average per-tick kWh into the bucket's total.
fn normal_factor(mode: Granularity) -> f64 {
    match mode {
        Granularity::Minute => 12.0,
        Granularity::Hour => 720.0,
    }
}

// Bucket start on the canonical reference day. Keeping only the clock
// time collapses multiple calendar days onto the same bucket, which is
// what the cyclic day-over-day overlay views expect.
fn bucket_key(date: NaiveDateTime, mode: Granularity) -> NaiveDateTime {
    let time = date.time();
    let secs = match mode {
        Granularity::Minute => i64::from(time.hour()) * 3600 + i64::from(time.minute()) * 60,
        Granularity::Hour => i64::from(time.hour()) * 3600,
    };
    NaiveDateTime::UNIX_EPOCH + TimeDelta::seconds(secs)
}

/// Downsample a point series into one point per distinct bucket, sorted
/// by bucket start ascending. Temperature buckets emit the arithmetic
/// mean; energy buckets emit the mean rescaled to the bucket duration.
/// Points missing the selected metric are skipped; buckets that receive
/// no points are never emitted.
pub fn aggregate(src: &[Point], mode: Granularity, metric: Metric) -> Vec<Point> {
    let factor = normal_factor(mode);
    let mut buckets: BTreeMap<NaiveDateTime, (f64, u64)> = BTreeMap::new();

    for point in src {
        let value = match metric {
            Metric::Temperature => point.temperature,
            Metric::Energy => point.energy,
        };
        let Some(value) = value else { continue };
        let entry = buckets.entry(bucket_key(point.date, mode)).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(date, (sum, count))| {
            let avg = if count > 0 { sum / count as f64 } else { 0.0 };
            match metric {
                Metric::Temperature => Point { date, temperature: Some(avg), energy: None },
                Metric::Energy => Point { date, temperature: None, energy: Some(avg * factor) },
            }
        })
        .collect()
}
