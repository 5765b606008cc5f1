// Gauge layout - semicircular dial arc for a single clamped value
use std::f64::consts::PI;
use thiserror::Error;

const TICK_LENGTH: f64 = 6.0;
const TICK_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// A non-positive or non-finite max is a caller contract violation;
    /// failing here beats silently producing NaN geometry.
    #[error("gauge max must be a positive finite number, got {0}")]
    NonPositiveMax(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Arc endpoints plus the sweep-convention bit selecting which of the two
/// candidate arcs to draw when the fill spans more than half the dial.
#[derive(Debug, Clone, Copy)]
pub struct ArcGeometry {
    pub start: Point,
    pub end: Point,
    pub large_arc: bool,
}

#[derive(Debug, Clone)]
pub struct GaugeTick {
    pub inner: Point,
    pub outer: Point,
    /// Only the 0 / 0.5 / 1 ticks carry a label.
    pub label: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GaugeLayout {
    pub fraction: f64,
    pub radius: f64,
    pub center: Point,
    pub arc: ArcGeometry,
    pub ticks: Vec<GaugeTick>,
}

impl GaugeLayout {
    /// Lays out a 180-degree dial filled from the left endpoint to the
    /// clamped value/max fraction. The value is clamped to [0, max];
    /// `max <= 0` is rejected rather than divided.
    pub fn compute(
        value: f64,
        max: f64,
        radius: f64,
        center: Point,
    ) -> Result<Self, LayoutError> {
        if !max.is_finite() || max <= 0.0 {
            return Err(LayoutError::NonPositiveMax(max));
        }

        let fraction = value.clamp(0.0, max) / max;
        let arc = ArcGeometry {
            start: point_at(center, radius, 0.0),
            end: point_at(center, radius, fraction),
            large_arc: fraction > 0.5,
        };

        let ticks = TICK_FRACTIONS
            .iter()
            .map(|&f| GaugeTick {
                inner: point_at(center, radius - TICK_LENGTH, f),
                outer: point_at(center, radius, f),
                label: if f == 0.0 || f == 0.5 || f == 1.0 {
                    Some(format!("{}", (max * f).round() as i64))
                } else {
                    None
                },
            })
            .collect();

        Ok(Self {
            fraction,
            radius,
            center,
            arc,
            ticks,
        })
    }
}

// Dial endpoint at a fraction: 0 is the left end of the semicircle, 1 the
// right, and the arc opens upward (screen y grows downward).
fn point_at(center: Point, radius: f64, fraction: f64) -> Point {
    let angle = PI - fraction * PI;
    Point {
        x: center.x + radius * angle.cos(),
        y: center.y - radius * angle.sin(),
    }
}
