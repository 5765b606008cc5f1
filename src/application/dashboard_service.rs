// Dashboard service - Use case for building the fermentation dashboard
use crate::application::telemetry_repository::TelemetryRepository;
use crate::domain::bars::BarLayout;
use crate::domain::dashboard::{BarChart, Dashboard, GaugeCard, MetricCard, TrendChart};
use crate::domain::gauge::{GaugeLayout, Point};
use crate::domain::series::{build_series, SeriesOptions};
use crate::domain::sparkline::{Canvas, SparklineLayout};
use crate::domain::telemetry::TelemetryRow;
use std::sync::Arc;

/// How many of the most recent rows feed each trend sparkline.
const TREND_WINDOW: usize = 24;
/// How many of the most recent rows feed the CO2 bar chart.
const BAR_WINDOW: usize = 12;
/// How many rows the readings table shows.
const TABLE_ROWS: usize = 10;

const GAUGE_RADIUS: f64 = 42.0;
const GAUGE_CENTER: Point = Point { x: 50.0, y: 50.0 };
/// The flow gauge never scales below this, and leaves 20% headroom above
/// the current reading otherwise.
const GAUGE_FLOOR_MAX: f64 = 50.0;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn TelemetryRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn TelemetryRepository>) -> Self {
        Self { repository }
    }

    /// Builds the full dashboard, or `None` when no telemetry is available
    /// (the caller renders the empty state). Fetch failures are absorbed
    /// into the empty state rather than propagated.
    pub async fn get_dashboard(&self) -> Option<Dashboard> {
        let mut rows = match self.repository.fetch_rows().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("Failed to fetch brewery telemetry: {e:#}");
                Vec::new()
            }
        };

        // Newest first; everything downstream relies on this ordering.
        rows.sort_by_key(|row| std::cmp::Reverse(row.enqueued_millis()));

        let latest = rows.first()?.clone();
        let total_rows = rows.len();
        let recent = rows.iter().take(TABLE_ROWS).cloned().collect();

        Some(Dashboard {
            room: latest
                .room
                .clone()
                .unwrap_or_else(|| "Unknown room".to_string()),
            device_id: latest.device_id.clone(),
            last_updated: latest.local_time(),
            cards: build_cards(&latest),
            mini_cards: build_mini_cards(&latest),
            trends: build_trends(&rows),
            co2_bars: build_co2_bars(&rows),
            flow_gauge: build_flow_gauge(&latest),
            recent,
            total_rows,
        })
    }
}

/// Fixed-precision display value; NaN readings display as a dash.
pub fn fmt_value(value: f64, fraction_digits: usize) -> Option<String> {
    if value.is_nan() {
        None
    } else {
        Some(format!("{value:.fraction_digits$}"))
    }
}

/// Shortest display form, for counts and percentages.
fn fmt_plain(value: f64) -> Option<String> {
    if value.is_nan() {
        None
    } else {
        Some(format!("{value}"))
    }
}

fn build_cards(latest: &TelemetryRow) -> Vec<MetricCard> {
    vec![
        MetricCard::new(
            "Fermentation Temp",
            fmt_value(latest.fermentation_temp, 2),
            "C",
            Some("Target 18-22 C"),
        ),
        MetricCard::new(
            "Fermentation Pressure",
            fmt_value(latest.fermentation_pressure, 2),
            "psi",
            Some("Typical 12-15 psi"),
        ),
        MetricCard::new(
            "Specific Gravity",
            fmt_value(latest.specific_gravity, 3),
            "SG",
            Some("Track attenuation"),
        ),
        MetricCard::new(
            "Flow Rate",
            fmt_value(latest.flow_rate, 2),
            "L/min",
            Some("Transfer stability"),
        ),
        MetricCard::new(
            "CO2 Concentration",
            fmt_plain(latest.co2_ppm),
            "ppm",
            Some("Ventilation health"),
        ),
        MetricCard::new(
            "Keg Level",
            fmt_plain(latest.keg_level_percent),
            "%",
            Some("Remaining volume"),
        ),
    ]
}

fn build_mini_cards(latest: &TelemetryRow) -> Vec<MetricCard> {
    vec![
        MetricCard::new("Ambient Temp", fmt_value(latest.ambient_temp, 2), "C", None),
        MetricCard::new(
            "Ambient Humidity",
            fmt_value(latest.ambient_humidity, 2),
            "%",
            None,
        ),
        MetricCard::new(
            "Vibration",
            fmt_value(latest.vibration_level, 2),
            "mm/s",
            None,
        ),
    ]
}

fn build_trends(rows: &[TelemetryRow]) -> Vec<TrendChart> {
    let window = &rows[..rows.len().min(TREND_WINDOW)];

    vec![
        trend(
            "Temperature (C)",
            window,
            |r| r.fermentation_temp,
            SeriesOptions::new("C"),
        ),
        trend(
            "Pressure (psi)",
            window,
            |r| r.fermentation_pressure,
            SeriesOptions::new("psi"),
        ),
        trend(
            "Specific Gravity",
            window,
            |r| r.specific_gravity,
            SeriesOptions::new("SG").with_fraction_digits(3),
        ),
        trend(
            "Flow (L/min)",
            window,
            |r| r.flow_rate,
            SeriesOptions::new("L/min"),
        ),
    ]
}

fn trend(
    title: &str,
    window: &[TelemetryRow],
    accessor: impl Fn(&TelemetryRow) -> f64,
    options: SeriesOptions,
) -> TrendChart {
    let series = build_series(window, accessor, &options);
    TrendChart {
        title: title.to_string(),
        layout: SparklineLayout::compute(&series, Canvas::default()),
    }
}

fn build_co2_bars(rows: &[TelemetryRow]) -> BarChart {
    let values: Vec<f64> = rows.iter().take(BAR_WINDOW).map(|r| r.co2_ppm).collect();
    BarChart {
        title: "CO2 (ppm)".to_string(),
        unit: "ppm".to_string(),
        layout: BarLayout::compute(&values),
        values,
    }
}

fn build_flow_gauge(latest: &TelemetryRow) -> Option<GaugeCard> {
    let max = GAUGE_FLOOR_MAX.max(latest.flow_rate * 1.2);
    match GaugeLayout::compute(latest.flow_rate, max, GAUGE_RADIUS, GAUGE_CENTER) {
        Ok(layout) => Some(GaugeCard {
            title: "Flow Rate".to_string(),
            unit: "L/min".to_string(),
            value: latest.flow_rate,
            layout,
        }),
        Err(e) => {
            tracing::error!("Flow gauge layout failed: {e}");
            None
        }
    }
}
