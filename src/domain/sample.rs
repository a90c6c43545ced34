// Sensor sample and dataset domain models
use serde::{Deserialize, Serialize};

/// One timestamped reading from the historical dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample<V> {
    pub time: String,
    pub value: V,
}

/// Temperature sample in raw sensor units (decikelvin); `None` means the
/// sensor produced no reading at this tick.
pub type TempSample = Sample<Option<f64>>;

/// Power sample in megawatts, kept as the source's decimal string
/// (comma or dot separator).
pub type PowerSample = Sample<String>;

/// Two parallel series aligned by position. The series are not guaranteed
/// equal length; a shorter series is implicitly padded with missing values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub temperature: Vec<TempSample>,
    pub power: Vec<PowerSample>,
}

impl Dataset {
    pub fn new(temperature: Vec<TempSample>, power: Vec<PowerSample>) -> Self {
        Self { temperature, power }
    }

    /// Logical length: the longer of the two series.
    pub fn len(&self) -> usize {
        self.temperature.len().max(self.power.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw temperature value at `idx`, with absent and non-finite
    /// readings both treated as missing.
    pub fn temperature_value(&self, idx: usize) -> Option<f64> {
        self.temperature
            .get(idx)
            .and_then(|s| s.value)
            .filter(|v| v.is_finite())
    }

    /// Power string at `idx`; an absent element reads as "0".
    pub fn power_value(&self, idx: usize) -> &str {
        self.power.get(idx).map(|s| s.value.as_str()).unwrap_or("0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp(time: &str, value: Option<f64>) -> TempSample {
        Sample { time: time.to_string(), value }
    }

    #[test]
    fn test_len_is_longer_series() {
        let dataset = Dataset::new(
            vec![temp("10:00:00", Some(2831.5))],
            vec![
                Sample { time: "10:00:00".to_string(), value: "1,0".to_string() },
                Sample { time: "10:00:05".to_string(), value: "2,0".to_string() },
            ],
        );
        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_temperature_value_filters_missing_and_non_finite() {
        let dataset = Dataset::new(
            vec![
                temp("10:00:00", Some(2831.5)),
                temp("10:00:05", None),
                temp("10:00:10", Some(f64::NAN)),
            ],
            Vec::new(),
        );
        assert_eq!(dataset.temperature_value(0), Some(2831.5));
        assert_eq!(dataset.temperature_value(1), None);
        assert_eq!(dataset.temperature_value(2), None);
        assert_eq!(dataset.temperature_value(3), None);
    }

    #[test]
    fn test_power_value_defaults_past_end() {
        let dataset = Dataset::new(
            Vec::new(),
            vec![Sample { time: "10:00:00".to_string(), value: "3.5".to_string() }],
        );
        assert_eq!(dataset.power_value(0), "3.5");
        assert_eq!(dataset.power_value(1), "0");
    }
}
