// Prefix-sum accumulator over the temperature and power series
use crate::domain::sample::Dataset;
use crate::domain::units::{decikelvin_to_celsius, megawatts_to_kwh};

/// Running cumulative totals aligned with the dataset, enabling O(1)
/// seeding of the replay at any index.
///
/// `temp_sum`, `temp_cnt` and `kwh_sum` cover `0..dataset.len()` and are
/// non-decreasing. `times` carries the temperature series' timestamps
/// only, so lookups through it are bounded by the temperature series
/// length even when the power series is longer.
#[derive(Debug, Clone, Default)]
pub struct Prefixes {
    pub times: Vec<String>,
    pub temp_sum: Vec<f64>,
    pub temp_cnt: Vec<u64>,
    pub kwh_sum: Vec<f64>,
}

impl Prefixes {
    /// Build all prefix arrays in one linear pass.
    pub fn build(dataset: &Dataset, step_seconds: u32) -> Self {
        let n = dataset.len();
        let times: Vec<String> = dataset.temperature.iter().map(|s| s.time.clone()).collect();

        let mut temp_sum = Vec::with_capacity(n);
        let mut temp_cnt = Vec::with_capacity(n);
        let mut kwh_sum = Vec::with_capacity(n);

        let mut sum = 0.0;
        let mut count = 0u64;
        let mut energy = 0.0;

        for i in 0..n {
            if let Some(dk) = dataset.temperature_value(i) {
                sum += decikelvin_to_celsius(dk);
                count += 1;
            }
            energy += megawatts_to_kwh(dataset.power_value(i), step_seconds);

            temp_sum.push(sum);
            temp_cnt.push(count);
            kwh_sum.push(energy);
        }

        Self { times, temp_sum, temp_cnt, kwh_sum }
    }
}
