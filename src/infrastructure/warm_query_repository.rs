// Warm query repository implementation
use crate::application::telemetry_repository::TelemetryRepository;
use crate::domain::telemetry::TelemetryRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// The result set that carries the telemetry rows, by convention.
const PRIMARY_RESULT_NAME: &str = "PrimaryResult";

#[derive(Debug, Clone)]
pub struct WarmQueryRepository {
    endpoint: String,
    token: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct WarmQueryResponse {
    #[serde(rename = "primaryResults", default)]
    primary_results: Vec<NamedResultSet>,
}

#[derive(Debug, Deserialize)]
struct NamedResultSet {
    name: String,
    #[serde(default)]
    data: Vec<TelemetryRow>,
}

impl WarmQueryRepository {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TelemetryRepository for WarmQueryRepository {
    async fn fetch_rows(&self) -> Result<Vec<TelemetryRow>> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send warm query request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Warm query failed with status {}: {}", status, body);
        }

        let payload = response
            .json::<WarmQueryResponse>()
            .await
            .context("Failed to parse warm query response")?;

        let rows = payload
            .primary_results
            .into_iter()
            .find(|set| set.name == PRIMARY_RESULT_NAME)
            .map(|set| set.data)
            .unwrap_or_default();

        tracing::debug!("Warm query returned {} rows", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE: &str = r#"{
        "primaryResults": [
            {"name": "Diagnostics", "data": []},
            {"name": "PrimaryResult", "data": [{
                "DeviceID": "fermenter-01",
                "Room": "Cellar A",
                "FermentationTemp": 19.5,
                "FermentationPressure": 13.2,
                "SpecificGravity": 1.012,
                "CO2ppm": 850,
                "KegLevelPercent": 72,
                "FlowRate": 4.5,
                "AmbientTemp": 21.0,
                "AmbientHumidity": 55.0,
                "VibrationLevel": 0.3,
                "EnqueuedTime": "2026-08-01T10:00:00Z"
            }]}
        ]
    }"#;

    #[test]
    fn test_envelope_picks_primary_result_set() {
        let payload: WarmQueryResponse = serde_json::from_str(ENVELOPE).unwrap();
        let rows = payload
            .primary_results
            .into_iter()
            .find(|set| set.name == PRIMARY_RESULT_NAME)
            .map(|set| set.data)
            .unwrap_or_default();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].device_id, "fermenter-01");
        assert_eq!(rows[0].room.as_deref(), Some("Cellar A"));
        assert_eq!(rows[0].co2_ppm, 850.0);
    }

    #[test]
    fn test_missing_primary_results_is_empty() {
        let payload: WarmQueryResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.primary_results.is_empty());
    }

    #[test]
    fn test_row_without_room_parses() {
        let raw = r#"{
            "DeviceID": "fermenter-02",
            "FermentationTemp": 18.0,
            "FermentationPressure": 12.0,
            "SpecificGravity": 1.040,
            "CO2ppm": 600,
            "KegLevelPercent": 90,
            "FlowRate": 0.0,
            "AmbientTemp": 20.0,
            "AmbientHumidity": 50.0,
            "VibrationLevel": 0.1,
            "EnqueuedTime": "2026-08-01T09:00:00Z"
        }"#;
        let row: TelemetryRow = serde_json::from_str(raw).unwrap();
        assert!(row.room.is_none());
    }
}
