// Min/max/span normalization over a numeric sequence

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub span: f64,
}

impl Range {
    /// Computes the range of a numeric sequence. Returns `None` for an empty
    /// sequence; callers render a "No data" placeholder instead of charting.
    /// A zero span (all values equal) is floored to 1 so normalization never
    /// divides by zero.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let raw_span = max - min;
        let span = if raw_span == 0.0 { 1.0 } else { raw_span };

        Some(Self { min, max, span })
    }

    /// Position of a value within the range as a fraction of the span.
    /// Values drawn from the same sequence land in [0, 1] by construction.
    pub fn fraction_of(&self, value: f64) -> f64 {
        (value - self.min) / self.span
    }

    /// Three representative values for axis labels: min, midpoint, max.
    pub fn ticks(&self) -> [f64; 3] {
        [self.min, self.min + self.span * 0.5, self.max]
    }
}
