// Series builder - labeled numeric points derived from telemetry rows
use super::telemetry::TelemetryRow;

/// A numeric value paired with its human-readable label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct SeriesOptions {
    pub unit: String,
    pub fraction_digits: usize,
}

impl SeriesOptions {
    pub fn new(unit: &str) -> Self {
        Self {
            unit: unit.to_string(),
            fraction_digits: 2,
        }
    }

    pub fn with_fraction_digits(mut self, fraction_digits: usize) -> Self {
        self.fraction_digits = fraction_digits;
        self
    }
}

/// Extracts one numeric field per row into a labeled series. Rows arrive
/// sorted newest-first and the output preserves that order; reversal for
/// display is the chart layout's job. Values are passed through as-is,
/// including NaN.
pub fn build_series(
    rows: &[TelemetryRow],
    accessor: impl Fn(&TelemetryRow) -> f64,
    options: &SeriesOptions,
) -> Vec<LabeledPoint> {
    rows.iter()
        .map(|row| {
            let value = accessor(row);
            let label = format!(
                "{} - {:.*} {}",
                row.local_time(),
                options.fraction_digits,
                value,
                options.unit
            );
            LabeledPoint { value, label }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::sample_row;

    #[test]
    fn test_empty_rows_build_empty_series() {
        let series = build_series(&[], |r| r.fermentation_temp, &SeriesOptions::new("C"));
        assert!(series.is_empty());
    }

    #[test]
    fn test_label_format() {
        // A non-parsing timestamp passes through verbatim, which keeps the
        // expected label independent of the host timezone.
        let row = sample_row("t0");
        let series = build_series(
            std::slice::from_ref(&row),
            |r| r.fermentation_temp,
            &SeriesOptions::new("C"),
        );
        assert_eq!(series[0].label, "t0 - 19.50 C");
        assert_eq!(series[0].value, 19.5);
    }

    #[test]
    fn test_fraction_digits_override() {
        let row = sample_row("t0");
        let series = build_series(
            std::slice::from_ref(&row),
            |r| r.specific_gravity,
            &SeriesOptions::new("SG").with_fraction_digits(3),
        );
        assert_eq!(series[0].label, "t0 - 1.012 SG");
    }

    #[test]
    fn test_input_order_preserved() {
        let mut newest = sample_row("t0");
        newest.flow_rate = 5.0;
        let mut oldest = sample_row("t1");
        oldest.flow_rate = 3.0;

        let series = build_series(
            &[newest, oldest],
            |r| r.flow_rate,
            &SeriesOptions::new("L/min"),
        );
        assert_eq!(series[0].value, 5.0);
        assert_eq!(series[1].value, 3.0);
    }
}
