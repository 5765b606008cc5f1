// HTML + SVG rendering of the dashboard view model
use crate::domain::dashboard::{BarChart, Dashboard, GaugeCard, MetricCard, TrendChart};
use crate::domain::gauge::Point;
use crate::domain::sparkline::SparklineLayout;
use crate::domain::telemetry::TelemetryRow;
use std::fmt::Write as _;

const STYLE: &str = r#"
:root { color-scheme: dark; }
* { box-sizing: border-box; }
body { margin: 0; background: #0f172a; color: #f1f5f9; font-family: system-ui, sans-serif; }
.page { max-width: 72rem; margin: 0 auto; padding: 2.5rem 1.5rem; display: grid; gap: 2rem; }
.header { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; justify-content: space-between; }
.eyebrow { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.2em; color: #94a3b8; margin: 0; }
.header h1 { font-size: 2.25rem; margin: 0.25rem 0; }
.muted { color: #94a3b8; }
.subtle { color: #cbd5e1; }
.badge { border: 1px solid #334155; background: #1e293b; border-radius: 0.5rem; padding: 0.75rem 1rem; }
.cards { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr)); }
.card { border: 1px solid #1e293b; background: #1e293b99; border-radius: 0.75rem; padding: 1.25rem; }
.card .value { font-size: 2rem; font-weight: 700; margin: 0.5rem 0 0; }
.card .unit { font-size: 1.1rem; color: #94a3b8; margin-left: 0.25rem; }
.card .hint { float: right; font-size: 0.75rem; color: #94a3b8; border: 1px solid #334155; border-radius: 9999px; padding: 0.2rem 0.6rem; }
.mini .value { font-size: 1.5rem; }
.panel { border: 1px solid #1e293b; background: #1e293bb3; border-radius: 0.75rem; padding: 1.25rem; }
.panel h2 { margin-top: 0; }
.split { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(24rem, 1fr)); }
.chart-grid { display: grid; gap: 0.75rem; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
.chart { border: 1px solid #1e293b; background: #0f172a99; border-radius: 0.5rem; padding: 0.75rem; }
.chart-title { font-size: 0.9rem; color: #cbd5e1; margin: 0 0 0.5rem; }
.spark-bounds { display: flex; justify-content: space-between; font-size: 0.75rem; color: #94a3b8; }
.spark-note { font-size: 0.75rem; color: #94a3b8; margin: 0.25rem 0 0; }
.sparkline { width: 100%; color: #fcd34d; }
.no-data { color: #64748b; font-size: 0.9rem; }
.bar-row { display: flex; }
.bar-ticks { display: flex; flex-direction: column; justify-content: space-between; font-size: 0.75rem; color: #64748b; padding: 0.25rem 0.5rem 0.25rem 0; }
.bar-track { display: flex; align-items: flex-end; gap: 0.25rem; height: 8rem; flex: 1; border-left: 1px solid #1e293b; padding-left: 0.5rem; }
.bar { flex: 1; background: #fbbf24b3; border-radius: 0.25rem 0.25rem 0 0; }
.bar-footer { display: flex; justify-content: space-between; font-size: 0.7rem; color: #64748b; margin-top: 0.25rem; }
.gauge-value { font-size: 1.25rem; font-weight: 600; margin: 0.25rem 0 0; }
table { width: 100%; border-collapse: collapse; font-size: 0.9rem; text-align: left; }
th { color: #94a3b8; font-weight: 500; padding: 0.5rem 1rem 0.5rem 0; }
td { padding: 0.5rem 1rem 0.5rem 0; border-top: 1px solid #1e293b; }
.table-note { font-size: 0.75rem; color: #94a3b8; margin-top: 0.75rem; }
.empty { min-height: 100vh; display: grid; place-items: center; padding: 1.5rem; text-align: center; }
ul { margin: 0.75rem 0 0; padding-left: 1.25rem; color: #cbd5e1; }
li { margin-top: 0.5rem; }
"#;

pub fn render_empty_state() -> String {
    page(
        "Brewery Dashboard",
        r#"<div class="empty"><div>
<h1>No telemetry available</h1>
<p class="subtle">We couldn't load brewery data right now. Please verify the warm query and credentials, then refresh.</p>
</div></div>"#,
    )
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut body = String::with_capacity(16 * 1024);
    body.push_str("<div class=\"page\">");

    render_header(&mut body, dashboard);

    body.push_str("<section class=\"cards\">");
    for card in &dashboard.cards {
        render_card(&mut body, card, false);
    }
    body.push_str("</section>");

    body.push_str("<section class=\"cards\">");
    for card in &dashboard.mini_cards {
        render_card(&mut body, card, true);
    }
    body.push_str("</section>");

    body.push_str(
        r#"<section class="panel"><h2>Notes</h2><ul>
<li>Data refreshes automatically every 30 seconds at the source.</li>
<li>Temperature, pressure, and gravity are key for fermentation health.</li>
<li>Vent CO2 if ppm trends upward; watch flow rate during transfers.</li>
</ul></section>"#,
    );

    body.push_str("<section class=\"split\">");
    body.push_str("<div class=\"panel\"><h2>Fermentation trends</h2><div class=\"chart-grid\">");
    for trend in &dashboard.trends {
        render_trend(&mut body, trend);
    }
    body.push_str("</div></div>");

    body.push_str("<div class=\"panel\"><h2>CO2 &amp; Flow snapshot</h2>");
    render_bar_chart(&mut body, &dashboard.co2_bars);
    match &dashboard.flow_gauge {
        Some(gauge) => render_gauge(&mut body, gauge),
        None => body.push_str("<p class=\"no-data\">No data</p>"),
    }
    body.push_str("</div></section>");

    render_table(&mut body, dashboard);

    body.push_str("</div>");
    page("Brewery Dashboard", &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title><style>{STYLE}</style></head><body>{body}</body></html>",
        escape(title)
    )
}

fn render_header(out: &mut String, dashboard: &Dashboard) {
    let _ = write!(
        out,
        r#"<header class="header"><div>
<p class="eyebrow">Brewery Room Monitor</p>
<h1>Fermentation Dashboard</h1>
<p class="subtle">Live device telemetry every 30 seconds for <strong>{}</strong></p>
<p class="muted">Device: {}</p>
</div><div class="badge">
<p class="eyebrow">Last updated</p>
<p class="gauge-value">{}</p>
</div></header>"#,
        escape(&dashboard.room),
        escape(&dashboard.device_id),
        escape(&dashboard.last_updated),
    );
}

fn render_card(out: &mut String, card: &MetricCard, mini: bool) {
    let class = if mini { "card mini" } else { "card" };
    let _ = write!(out, "<div class=\"{class}\">");
    if let Some(hint) = &card.hint {
        let _ = write!(out, "<span class=\"hint\">{}</span>", escape(hint));
    }
    let _ = write!(
        out,
        "<p class=\"eyebrow\">{}</p><p class=\"value\">{}<span class=\"unit\">{}</span></p></div>",
        escape(&card.title),
        escape(card.value.as_deref().unwrap_or("-")),
        escape(&card.unit),
    );
}

fn render_trend(out: &mut String, trend: &TrendChart) {
    let _ = write!(
        out,
        "<div class=\"chart\"><p class=\"chart-title\">{}</p>",
        escape(&trend.title)
    );
    match &trend.layout {
        Some(layout) => render_sparkline(out, layout),
        None => out.push_str("<p class=\"no-data\">No data</p>"),
    }
    out.push_str("</div>");
}

fn render_sparkline(out: &mut String, layout: &SparklineLayout) {
    let w = layout.canvas.width;
    let h = layout.canvas.height;

    let _ = write!(
        out,
        "<div class=\"spark-bounds\"><span>Min {:.2}</span><span>Max {:.2}</span></div>",
        layout.range.min, layout.range.max
    );
    let _ = write!(
        out,
        "<svg class=\"sparkline\" viewBox=\"0 0 {w:.0} {h:.0}\" role=\"img\">"
    );

    // Axes
    let _ = write!(
        out,
        "<line x1=\"24\" y1=\"{0:.1}\" x2=\"{1:.1}\" y2=\"{0:.1}\" stroke=\"#334155\" stroke-width=\"1\"/>",
        h - 12.0,
        w - 8.0
    );
    let _ = write!(
        out,
        "<line x1=\"24\" y1=\"{:.1}\" x2=\"24\" y2=\"12\" stroke=\"#334155\" stroke-width=\"1\"/>",
        h - 12.0
    );

    // Gridlines at the range ticks, sharing the polyline's y mapping.
    for tick in &layout.ticks {
        let _ = write!(
            out,
            "<line x1=\"20\" y1=\"{0:.1}\" x2=\"{1:.1}\" y2=\"{0:.1}\" stroke=\"#1f2937\" stroke-width=\"1\" stroke-dasharray=\"2 4\"/>\
<text x=\"0\" y=\"{2:.1}\" fill=\"#94a3b8\" font-size=\"10\">{3:.2}</text>",
            tick.y,
            w - 8.0,
            tick.y + 4.0,
            tick.value
        );
    }

    let _ = write!(
        out,
        "<polyline fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linejoin=\"round\" stroke-linecap=\"round\" points=\"{}\"/>",
        layout.polyline()
    );

    // The newest point gets a full-opacity marker; earlier ones fade back.
    for point in &layout.coordinates {
        let (radius, opacity) = if point.is_latest { (3.0, 1.0) } else { (2.0, 0.35) };
        let _ = write!(
            out,
            "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{radius}\" fill=\"currentColor\" fill-opacity=\"{opacity}\"><title>{}</title></circle>",
            point.x,
            point.y,
            escape(&point.label)
        );
    }

    out.push_str("</svg>");
    let _ = write!(
        out,
        "<p class=\"spark-note\">Recent {} points</p>",
        layout.coordinates.len()
    );
}

fn render_bar_chart(out: &mut String, chart: &BarChart) {
    let _ = write!(
        out,
        "<div class=\"chart\"><p class=\"chart-title\">{}</p>",
        escape(&chart.title)
    );

    let Some(layout) = &chart.layout else {
        out.push_str("<p class=\"no-data\">No data</p></div>");
        return;
    };

    out.push_str("<div class=\"bar-row\"><div class=\"bar-ticks\">");
    for tick in layout.ticks.iter().rev() {
        let _ = write!(out, "<span>{tick:.0}</span>");
    }
    out.push_str("</div><div class=\"bar-track\">");
    for (fraction, value) in layout.fractions.iter().zip(&chart.values) {
        let _ = write!(
            out,
            "<div class=\"bar\" style=\"height:{:.1}%\" title=\"{:.0} {}\"></div>",
            fraction * 100.0,
            value,
            escape(&chart.unit)
        );
    }
    out.push_str("</div></div>");
    let _ = write!(
        out,
        "<div class=\"bar-footer\"><span>Last {} readings</span><span>Peak {:.0} {}</span></div></div>",
        chart.values.len(),
        layout.max_value,
        escape(&chart.unit)
    );
}

fn render_gauge(out: &mut String, gauge: &GaugeCard) {
    let layout = &gauge.layout;
    let Point { x: cx, y: cy } = layout.center;
    let r = layout.radius;
    let arc = &layout.arc;

    let _ = write!(
        out,
        "<div class=\"chart\"><p class=\"chart-title\">{}</p><svg viewBox=\"0 0 100 60\" role=\"img\">",
        escape(&gauge.title)
    );

    // Full dial background, then the value arc on top of it.
    let _ = write!(
        out,
        "<path d=\"M {:.1} {cy:.1} A {r:.1} {r:.1} 0 1 1 {:.1} {cy:.1}\" fill=\"none\" stroke=\"#1f2937\" stroke-width=\"8\"/>",
        cx - r,
        cx + r
    );
    let _ = write!(
        out,
        "<path d=\"M {:.1} {:.1} A {r:.1} {r:.1} 0 {} 1 {:.1} {:.1}\" fill=\"none\" stroke=\"#fbbf24\" stroke-width=\"8\"/>",
        arc.start.x,
        arc.start.y,
        if arc.large_arc { 1 } else { 0 },
        arc.end.x,
        arc.end.y
    );

    for tick in &layout.ticks {
        let _ = write!(
            out,
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#475569\" stroke-width=\"1\"/>",
            tick.inner.x, tick.inner.y, tick.outer.x, tick.outer.y
        );
        if let Some(label) = &tick.label {
            let _ = write!(
                out,
                "<text x=\"{:.1}\" y=\"{:.1}\" fill=\"#94a3b8\" font-size=\"6\" text-anchor=\"middle\">{}</text>",
                tick.inner.x,
                tick.inner.y + 8.0,
                escape(label)
            );
        }
    }

    let _ = write!(
        out,
        "<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"4\" fill=\"#fbbf24\"/></svg>"
    );
    let _ = write!(
        out,
        "<p class=\"gauge-value\">{:.2} <span class=\"muted\">{}</span></p></div>",
        gauge.value,
        escape(&gauge.unit)
    );
}

fn render_table(out: &mut String, dashboard: &Dashboard) {
    let _ = write!(
        out,
        r#"<section class="panel"><h2>Recent readings <span class="muted" style="font-size:0.9rem">Showing {} of {} rows</span></h2>
<table><thead><tr>
<th>Timestamp</th><th>Temp (C)</th><th>Pressure (psi)</th><th>Gravity</th><th>CO2 (ppm)</th><th>Keg Level</th><th>Flow (L/min)</th>
</tr></thead><tbody>"#,
        dashboard.recent.len(),
        dashboard.total_rows
    );

    for row in &dashboard.recent {
        render_table_row(out, row);
    }

    out.push_str(
        "</tbody></table><p class=\"table-note\">Metrics populate from the warm query result; the table shows the ten most recent rows.</p></section>",
    );
}

fn render_table_row(out: &mut String, row: &TelemetryRow) {
    let _ = write!(
        out,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><strong>{}</strong> <span class=\"muted\">%</span></td><td>{}</td></tr>",
        escape(&row.local_time()),
        cell(row.fermentation_temp, 2),
        cell(row.fermentation_pressure, 2),
        cell(row.specific_gravity, 3),
        plain_cell(row.co2_ppm),
        plain_cell(row.keg_level_percent),
        cell(row.flow_rate, 2),
    );
}

fn cell(value: f64, fraction_digits: usize) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{value:.fraction_digits$}")
    }
}

fn plain_cell(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{value}")
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bars::BarLayout;
    use crate::domain::dashboard::Dashboard;
    use crate::domain::gauge::GaugeLayout;
    use crate::domain::series::LabeledPoint;
    use crate::domain::sparkline::Canvas;
    use crate::domain::telemetry::sample_row;

    fn sample_dashboard() -> Dashboard {
        let points = [
            LabeledPoint {
                value: 19.5,
                label: "t0 - 19.50 C".to_string(),
            },
            LabeledPoint {
                value: 18.2,
                label: "t1 - 18.20 C".to_string(),
            },
        ];
        Dashboard {
            room: "Cellar A".to_string(),
            device_id: "fermenter-01".to_string(),
            last_updated: "2026-08-01 10:00:00".to_string(),
            cards: vec![MetricCard::new(
                "Fermentation Temp",
                Some("19.50".to_string()),
                "C",
                Some("Target 18-22 C"),
            )],
            mini_cards: vec![MetricCard::new("Vibration", None, "mm/s", None)],
            trends: vec![TrendChart {
                title: "Temperature (C)".to_string(),
                layout: SparklineLayout::compute(&points, Canvas::default()),
            }],
            co2_bars: BarChart {
                title: "CO2 (ppm)".to_string(),
                unit: "ppm".to_string(),
                values: vec![850.0, 900.0],
                layout: BarLayout::compute(&[850.0, 900.0]),
            },
            flow_gauge: Some(GaugeCard {
                title: "Flow Rate".to_string(),
                unit: "L/min".to_string(),
                value: 4.5,
                layout: GaugeLayout::compute(
                    4.5,
                    50.0,
                    42.0,
                    Point { x: 50.0, y: 50.0 },
                )
                .unwrap(),
            }),
            recent: vec![sample_row("2026-08-01T10:00:00Z")],
            total_rows: 1,
        }
    }

    #[test]
    fn test_empty_state_mentions_missing_telemetry() {
        let html = render_empty_state();
        assert!(html.contains("No telemetry available"));
    }

    #[test]
    fn test_dashboard_page_contains_device_and_charts() {
        let html = render_dashboard(&sample_dashboard());
        assert!(html.contains("fermenter-01"));
        assert!(html.contains("Cellar A"));
        assert!(html.contains("<polyline"));
        assert!(html.contains("Showing 1 of 1 rows"));
        // Missing mini card reading renders as a dash.
        assert!(html.contains(">-<span class=\"unit\">mm/s</span>"));
    }

    #[test]
    fn test_empty_trend_renders_placeholder() {
        let mut dashboard = sample_dashboard();
        dashboard.trends[0].layout = None;
        let html = render_dashboard(&dashboard);
        assert!(html.contains("No data"));
        assert!(!html.contains("<polyline"));
    }

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(escape("<Cellar & \"A\">"), "&lt;Cellar &amp; &quot;A&quot;&gt;");
    }
}
