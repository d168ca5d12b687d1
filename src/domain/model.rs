use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One bulletin line that parsed completely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarthquakeRecord {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Event time, already converted into the display zone.
    pub occurred_at: DateTime<FixedOffset>,
    pub magnitude: f32,
    /// Kilometers.
    pub depth: f32,
}
