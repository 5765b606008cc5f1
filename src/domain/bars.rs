// Bar chart layout - proportional bar heights against a shared maximum

/// Floor on a bar's height fraction so zero-valued bars stay visible as a
/// sliver instead of collapsing.
const MIN_VISIBLE_FRACTION: f64 = 0.06;

#[derive(Debug, Clone)]
pub struct BarLayout {
    /// One height fraction per input value, in input order.
    pub fractions: Vec<f64>,
    /// Shared maximum, floored at 1 so all-zero input still divides cleanly.
    pub max_value: f64,
    pub ticks: [f64; 3],
}

impl BarLayout {
    /// `None` is the no-data signal for an empty sequence.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let max_value = values.iter().copied().fold(1.0_f64, f64::max);
        let fractions = values
            .iter()
            .map(|&v| (v / max_value).max(MIN_VISIBLE_FRACTION))
            .collect();

        Some(Self {
            fractions,
            max_value,
            ticks: [0.0, max_value * 0.5, max_value],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_no_data() {
        assert!(BarLayout::compute(&[]).is_none());
    }

    #[test]
    fn test_zero_bar_keeps_minimum_visible_height() {
        let layout = BarLayout::compute(&[0.0, 10.0]).unwrap();
        assert_eq!(layout.max_value, 10.0);
        assert_eq!(layout.fractions[0], 0.06);
        assert_eq!(layout.fractions[1], 1.0);
    }

    #[test]
    fn test_all_zero_input_floors_max_at_one() {
        let layout = BarLayout::compute(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(layout.max_value, 1.0);
        assert_eq!(layout.ticks, [0.0, 0.5, 1.0]);
        for f in &layout.fractions {
            assert_eq!(*f, 0.06);
        }
    }

    #[test]
    fn test_fractions_are_proportional() {
        let layout = BarLayout::compute(&[200.0, 400.0, 800.0]).unwrap();
        assert_eq!(layout.max_value, 800.0);
        assert_eq!(layout.fractions, vec![0.25, 0.5, 1.0]);
        assert_eq!(layout.ticks, [0.0, 400.0, 800.0]);
    }
}
