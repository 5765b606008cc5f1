// Sparkline layout - maps a labeled series onto line-chart pixel coordinates
use super::range::Range;
use super::series::LabeledPoint;

const LEFT_INSET: f64 = 24.0;
const HORIZONTAL_MARGIN: f64 = 36.0;
const VERTICAL_MARGIN: f64 = 30.0;
const BOTTOM_INSET: f64 = 18.0;

/// Logical drawing surface for a sparkline.
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 120.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SparkPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub label: String,
    /// Set on the most recent point so rendering can highlight it.
    pub is_latest: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct SparklineLayout {
    pub canvas: Canvas,
    pub range: Range,
    /// Oldest point first, newest last.
    pub coordinates: Vec<SparkPoint>,
    pub ticks: [Tick; 3],
}

impl SparklineLayout {
    /// Lays out a newest-first series so the oldest point renders leftmost
    /// and the newest rightmost. `None` is the no-data signal; callers
    /// render a placeholder instead of a chart.
    pub fn compute(points: &[LabeledPoint], canvas: Canvas) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let range = Range::of(&values)?;
        let n = points.len();

        let coordinates = points
            .iter()
            .rev()
            .enumerate()
            .map(|(i, point)| {
                let x = if n > 1 {
                    i as f64 / (n - 1) as f64 * (canvas.width - HORIZONTAL_MARGIN) + LEFT_INSET
                } else {
                    LEFT_INSET
                };
                SparkPoint {
                    x,
                    y: y_for(&range, point.value, canvas),
                    value: point.value,
                    label: point.label.clone(),
                    is_latest: i == n - 1,
                }
            })
            .collect();

        let ticks = range.ticks().map(|value| Tick {
            value,
            y: y_for(&range, value, canvas),
        });

        Some(Self {
            canvas,
            range,
            coordinates,
            ticks,
        })
    }

    /// Coordinate list in SVG polyline form.
    pub fn polyline(&self) -> String {
        self.coordinates
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// Inverted y-axis: higher values render higher on the canvas.
fn y_for(range: &Range, value: f64, canvas: Canvas) -> f64 {
    canvas.height - (range.fraction_of(value) * (canvas.height - VERTICAL_MARGIN) + BOTTOM_INSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[f64]) -> Vec<LabeledPoint> {
        values
            .iter()
            .map(|&value| LabeledPoint {
                value,
                label: format!("{value}"),
            })
            .collect()
    }

    #[test]
    fn test_empty_series_is_no_data() {
        assert!(SparklineLayout::compute(&[], Canvas::default()).is_none());
    }

    #[test]
    fn test_single_point_sits_at_left_inset() {
        let layout = SparklineLayout::compute(&points(&[10.0]), Canvas::default()).unwrap();
        assert_eq!(layout.coordinates.len(), 1);
        assert_eq!(layout.coordinates[0].x, 24.0);
        assert!(layout.coordinates[0].is_latest);
    }

    #[test]
    fn test_newest_first_input_renders_oldest_leftmost() {
        // Input arrives newest-first: t=3, t=2, t=1.
        let layout = SparklineLayout::compute(&points(&[3.0, 2.0, 1.0]), Canvas::default()).unwrap();

        let xs: Vec<f64> = layout.coordinates.iter().map(|p| p.x).collect();
        assert!(xs[0] < xs[1] && xs[1] < xs[2]);
        assert_eq!(layout.coordinates[0].value, 1.0);
        assert_eq!(layout.coordinates[2].value, 3.0);
        assert!(layout.coordinates[2].is_latest);
        assert!(!layout.coordinates[0].is_latest);
    }

    #[test]
    fn test_higher_values_render_higher() {
        let layout = SparklineLayout::compute(&points(&[20.0, 10.0]), Canvas::default()).unwrap();
        let low = &layout.coordinates[0];
        let high = &layout.coordinates[1];
        assert_eq!(low.value, 10.0);
        assert_eq!(high.value, 20.0);
        assert!(high.y < low.y);
    }

    #[test]
    fn test_rightmost_point_spans_canvas_width() {
        let canvas = Canvas::default();
        let layout = SparklineLayout::compute(&points(&[2.0, 1.0]), canvas).unwrap();
        let last = layout.coordinates.last().unwrap();
        assert!((last.x - (canvas.width - 36.0 + 24.0)).abs() < 1e-9);
    }

    #[test]
    fn test_ticks_use_the_same_y_mapping() {
        let canvas = Canvas::default();
        let layout = SparklineLayout::compute(&points(&[19.5, 18.2, 17.9]), canvas).unwrap();

        // Min tick sits at the bottom inset, max tick at the top margin.
        let [min_tick, mid_tick, max_tick] = layout.ticks;
        assert!((min_tick.y - (canvas.height - 18.0)).abs() < 1e-9);
        assert!((max_tick.y - (canvas.height - (canvas.height - 30.0) - 18.0)).abs() < 1e-9);
        assert!(max_tick.y < mid_tick.y && mid_tick.y < min_tick.y);
    }

    #[test]
    fn test_flat_series_renders_without_dividing_by_zero() {
        let layout = SparklineLayout::compute(&points(&[5.0, 5.0, 5.0]), Canvas::default()).unwrap();
        for p in &layout.coordinates {
            assert!(p.y.is_finite());
            // fraction_of(5) == 0 with the floored span, so the line sits at
            // the bottom inset.
            assert!((p.y - (120.0 - 18.0)).abs() < 1e-9);
        }
    }
}
