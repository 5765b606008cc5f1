// Telemetry domain model - one sensor snapshot from a brewing vessel
use chrono::{DateTime, FixedOffset, Local};
use serde::Deserialize;

/// A single timestamped reading as delivered by the warm query. Field names
/// follow the wire format of the telemetry source.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryRow {
    #[serde(rename = "DeviceID")]
    pub device_id: String,
    #[serde(rename = "Room", default)]
    pub room: Option<String>,
    #[serde(rename = "FermentationTemp")]
    pub fermentation_temp: f64,
    #[serde(rename = "FermentationPressure")]
    pub fermentation_pressure: f64,
    #[serde(rename = "SpecificGravity")]
    pub specific_gravity: f64,
    #[serde(rename = "CO2ppm")]
    pub co2_ppm: f64,
    #[serde(rename = "KegLevelPercent")]
    pub keg_level_percent: f64,
    #[serde(rename = "FlowRate")]
    pub flow_rate: f64,
    #[serde(rename = "AmbientTemp")]
    pub ambient_temp: f64,
    #[serde(rename = "AmbientHumidity")]
    pub ambient_humidity: f64,
    #[serde(rename = "VibrationLevel")]
    pub vibration_level: f64,
    #[serde(rename = "EnqueuedTime")]
    pub enqueued_time: String,
}

impl TelemetryRow {
    pub fn enqueued_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.enqueued_time).ok()
    }

    /// Millisecond timestamp for ordering. Unparseable timestamps sort last
    /// when rows are ordered newest-first.
    pub fn enqueued_millis(&self) -> i64 {
        self.enqueued_at()
            .map(|t| t.timestamp_millis())
            .unwrap_or(i64::MIN)
    }

    /// Local-time display form of the timestamp; falls back to the raw
    /// string when it does not parse.
    pub fn local_time(&self) -> String {
        self.enqueued_at()
            .map(|t| {
                t.with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|| self.enqueued_time.clone())
    }
}

#[cfg(test)]
pub(crate) fn sample_row(enqueued_time: &str) -> TelemetryRow {
    TelemetryRow {
        device_id: "fermenter-01".to_string(),
        room: Some("Cellar A".to_string()),
        fermentation_temp: 19.5,
        fermentation_pressure: 13.2,
        specific_gravity: 1.012,
        co2_ppm: 850.0,
        keg_level_percent: 72.0,
        flow_rate: 4.5,
        ambient_temp: 21.0,
        ambient_humidity: 55.0,
        vibration_level: 0.3,
        enqueued_time: enqueued_time.to_string(),
    }
}
