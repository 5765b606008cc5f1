// Repository trait for telemetry data access
use crate::domain::telemetry::TelemetryRow;
use async_trait::async_trait;

#[async_trait]
pub trait TelemetryRepository: Send + Sync {
    /// Fetch all rows from the telemetry source. Ordering is not
    /// guaranteed; callers sort before building series.
    async fn fetch_rows(&self) -> anyhow::Result<Vec<TelemetryRow>>;
}
