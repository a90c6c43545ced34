// Sensor unit conversions

/// Convert a raw decikelvin reading to degrees Celsius.
pub fn decikelvin_to_celsius(dk: f64) -> f64 {
    dk / 10.0 - 273.15
}

/// Convert an instantaneous megawatt value (decimal string, comma or dot
/// separator) to the kilowatt-hours produced over one step.
/// Unparseable or non-finite input contributes zero.
pub fn megawatts_to_kwh(raw: &str, step_seconds: u32) -> f64 {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(mw) if mw.is_finite() => mw * 1000.0 * (step_seconds as f64 / 3600.0),
        _ => 0.0,
    }
}
