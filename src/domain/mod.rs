// Domain layer - Pure data types and chart geometry
pub mod bars;
pub mod dashboard;
pub mod gauge;
pub mod range;
pub mod series;
pub mod sparkline;
pub mod telemetry;
