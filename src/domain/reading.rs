// Realtime reading emitted by the replay stream
use serde::Serialize;

/// One emitted reading: the instantaneous values for a tick plus the
/// cumulative aggregates since the start of the dataset. Constructed
/// fresh per tick and immutable once sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeData {
    pub time: String,
    /// Current temperature in °C (carried forward when the sample is missing).
    pub temperature: f64,
    /// Energy produced during this tick, in kWh.
    pub power: f64,
    /// Cumulative mean temperature in °C.
    pub avg_temperature: f64,
    /// Cumulative energy in kWh.
    pub total_power: f64,
}
