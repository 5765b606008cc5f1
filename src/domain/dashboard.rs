// Dashboard view model - everything one page render needs
use super::bars::BarLayout;
use super::gauge::GaugeLayout;
use super::sparkline::SparklineLayout;
use super::telemetry::TelemetryRow;

/// A headline metric card. `value` is `None` when the reading is missing
/// or NaN; rendering shows a dash.
#[derive(Debug, Clone)]
pub struct MetricCard {
    pub title: String,
    pub value: Option<String>,
    pub unit: String,
    pub hint: Option<String>,
}

impl MetricCard {
    pub fn new(title: &str, value: Option<String>, unit: &str, hint: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            value,
            unit: unit.to_string(),
            hint: hint.map(str::to_string),
        }
    }
}

/// One sparkline trend chart. `layout` is `None` when there is no data.
#[derive(Debug, Clone)]
pub struct TrendChart {
    pub title: String,
    pub layout: Option<SparklineLayout>,
}

/// The CO2 snapshot bar chart. `layout` is `None` when there is no data.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub unit: String,
    pub values: Vec<f64>,
    pub layout: Option<BarLayout>,
}

#[derive(Debug, Clone)]
pub struct GaugeCard {
    pub title: String,
    pub unit: String,
    pub value: f64,
    pub layout: GaugeLayout,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub room: String,
    pub device_id: String,
    pub last_updated: String,
    pub cards: Vec<MetricCard>,
    pub mini_cards: Vec<MetricCard>,
    pub trends: Vec<TrendChart>,
    pub co2_bars: BarChart,
    pub flow_gauge: Option<GaugeCard>,
    /// The most recent rows shown in the readings table, newest first.
    pub recent: Vec<TelemetryRow>,
    pub total_rows: usize,
}
