// Replay service - Streams the historical dataset as a live feed
use crate::domain::clock::{delay_to_next_step, truncate_to_step};
use crate::domain::prefixes::Prefixes;
use crate::domain::reading::RealtimeData;
use crate::domain::sample::Dataset;
use crate::domain::time_index::find_closest_index;
use crate::domain::units::{decikelvin_to_celsius, megawatts_to_kwh};
use chrono::{Local, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Exclusively-owned state of one running replay. The dataset and its
/// prefixes are shared read-only; everything mutable lives here.
///
/// The start index's contribution is already covered by the prefix seed,
/// so only indices strictly after `start` are added to the running sums.
pub struct ReplayCursor {
    dataset: Arc<Dataset>,
    prefixes: Arc<Prefixes>,
    step_seconds: u32,
    start: usize,
    idx: usize,
    started: bool,
    sum_temp: f64,
    count_temp: u64,
    total_kwh: f64,
    last_temp_c: Option<f64>,
}

impl ReplayCursor {
    /// Position a cursor at the last dataset timestamp at or before
    /// `target` ("HH:MM:SS"). Returns `None` when the temperature series
    /// is empty, in which case there is nothing to replay.
    pub fn new(
        dataset: Arc<Dataset>,
        prefixes: Arc<Prefixes>,
        target: &str,
        step_seconds: u32,
    ) -> Option<Self> {
        if dataset.temperature.is_empty() {
            return None;
        }

        let start = find_closest_index(&prefixes.times, target);
        let mut last_temp_c = None;
        for j in (0..=start).rev() {
            if let Some(dk) = dataset.temperature_value(j) {
                last_temp_c = Some(decikelvin_to_celsius(dk));
                break;
            }
        }

        Some(Self {
            sum_temp: prefixes.temp_sum[start],
            count_temp: prefixes.temp_cnt[start],
            total_kwh: prefixes.kwh_sum[start],
            dataset,
            prefixes,
            step_seconds,
            start,
            idx: start,
            started: false,
            last_temp_c,
        })
    }

    fn build(&mut self, idx: usize) -> RealtimeData {
        let advancing = idx > self.start;

        let temperature = match self.dataset.temperature_value(idx) {
            Some(dk) => {
                let celsius = decikelvin_to_celsius(dk);
                self.last_temp_c = Some(celsius);
                if advancing {
                    self.sum_temp += celsius;
                    self.count_temp += 1;
                }
                celsius
            }
            None => self.last_temp_c.unwrap_or(0.0),
        };

        let kwh = megawatts_to_kwh(self.dataset.power_value(idx), self.step_seconds);
        if advancing {
            self.total_kwh += kwh;
        }

        RealtimeData {
            time: self.prefixes.times[idx].clone(),
            temperature,
            power: kwh,
            avg_temperature: if self.count_temp > 0 {
                self.sum_temp / self.count_temp as f64
            } else {
                self.last_temp_c.unwrap_or(0.0)
            },
            total_power: self.total_kwh,
        }
    }

    /// Next reading, starting with the one at the start index; `None`
    /// once the temperature series is exhausted. Never wraps.
    pub fn next_reading(&mut self) -> Option<RealtimeData> {
        if !self.started {
            self.started = true;
            return Some(self.build(self.start));
        }
        if self.idx + 1 < self.prefixes.times.len() {
            self.idx += 1;
            return Some(self.build(self.idx));
        }
        None
    }
}

/// Spawns one replay task per stream request; each task owns its cursor
/// and sends readings into a bounded channel.
#[derive(Clone)]
pub struct ReplayService {
    dataset: Arc<Dataset>,
    prefixes: Arc<Prefixes>,
    step_ms: u64,
    step_seconds: u32,
}

impl ReplayService {
    pub fn new(dataset: Arc<Dataset>, step_ms: u64, step_seconds: u32) -> Self {
        let prefixes = Arc::new(Prefixes::build(&dataset, step_seconds));
        Self { dataset, prefixes, step_ms, step_seconds }
    }

    /// Start a replay at the current wall-clock time truncated to the
    /// step. Dropping the receiver stops the task at its next await.
    pub fn stream_readings(&self) -> mpsc::Receiver<RealtimeData> {
        let target = truncate_to_step(Local::now().time(), self.step_seconds);
        self.stream_readings_from(&target)
    }

    pub fn stream_readings_from(&self, target: &str) -> mpsc::Receiver<RealtimeData> {
        let (tx, rx) = mpsc::channel(16);
        let cursor = ReplayCursor::new(
            self.dataset.clone(),
            self.prefixes.clone(),
            target,
            self.step_seconds,
        );
        let step_ms = self.step_ms;

        tracing::debug!("starting replay at target {}", target);

        tokio::spawn(async move {
            let Some(mut cursor) = cursor else {
                tracing::debug!("empty temperature series, nothing to replay");
                return;
            };

            // First reading goes out immediately; the replay then aligns
            // itself to the next wall-clock step boundary.
            let Some(first) = cursor.next_reading() else { return };
            if tx.send(first).await.is_err() {
                return;
            }
            let boundary = delay_to_next_step(Utc::now().timestamp_millis(), step_ms);
            if !sleep_unless_closed(&tx, boundary).await {
                return;
            }

            while let Some(reading) = cursor.next_reading() {
                if tx.send(reading).await.is_err() {
                    break;
                }
                if !sleep_unless_closed(&tx, Duration::from_millis(step_ms)).await {
                    break;
                }
            }
        });

        rx
    }
}

// Stop pulling => stop producing: racing the delay against channel
// closure releases the timer as soon as the consumer disconnects.
async fn sleep_unless_closed(tx: &mpsc::Sender<RealtimeData>, wait: Duration) -> bool {
    tokio::select! {
        _ = tx.closed() => false,
        _ = tokio::time::sleep(wait) => true,
    }
}
