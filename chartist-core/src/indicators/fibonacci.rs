//! Fibonacci retracement levels over the recent swing.
//!
//! Swing high / low are the max high and min low of the last 20 bars (or all
//! bars when fewer exist). Each level is `high - (high - low) * ratio`.

use crate::components::indicator::{Indicator, IndicatorOutput};
use crate::domain::BarSeries;
use crate::indicators::vector::{max_of, min_of};

/// Fixed lookback for the swing range.
pub const FIB_LOOKBACK: usize = 20;

/// (output key, retracement ratio)
pub const FIB_LEVELS: [(&str, f64); 5] = [
    ("fib_23_6", 0.236),
    ("fib_38_2", 0.382),
    ("fib_50_0", 0.5),
    ("fib_61_8", 0.618),
    ("fib_78_6", 0.786),
];

#[derive(Debug, Clone, Default)]
pub struct Fibonacci;

impl Indicator for Fibonacci {
    fn name(&self) -> &str {
        "fibonacci"
    }

    fn min_bars(&self) -> usize {
        2
    }

    fn compute(&self, bars: &BarSeries) -> IndicatorOutput {
        calculate_fibonacci(bars)
    }
}

pub fn calculate_fibonacci(bars: &BarSeries) -> IndicatorOutput {
    let mut out = IndicatorOutput::new();
    if bars.len() < 2 {
        return out;
    }
    let recent = bars.tail(FIB_LOOKBACK);
    let (Some(high), Some(low)) = (max_of(recent.highs()), min_of(recent.lows())) else {
        return out;
    };
    let range = high - low;
    for (key, ratio) in FIB_LEVELS {
        out.insert_number(key, high - range * ratio);
    }
    out.insert_number("recent_high", high);
    out.insert_number("recent_low", low);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_hlc, DEFAULT_EPSILON};

    #[test]
    fn levels_between_high_and_low() {
        let bars = make_hlc(&[(110.0, 100.0, 105.0), (200.0, 150.0, 190.0)]);
        let out = calculate_fibonacci(&bars);
        assert_eq!(out.number("recent_high"), Some(200.0));
        assert_eq!(out.number("recent_low"), Some(100.0));
        assert_approx(out.number("fib_23_6").unwrap(), 176.4, DEFAULT_EPSILON);
        assert_approx(out.number("fib_50_0").unwrap(), 150.0, DEFAULT_EPSILON);
        assert_approx(out.number("fib_78_6").unwrap(), 121.4, 1e-9);
        assert_eq!(out.len(), 7);
    }

    #[test]
    fn only_last_twenty_bars() {
        let mut data = vec![(1000.0, 1.0, 500.0)];
        data.extend(std::iter::repeat((20.0, 10.0, 15.0)).take(20));
        let out = calculate_fibonacci(&make_hlc(&data));
        assert_eq!(out.number("recent_high"), Some(20.0));
        assert_eq!(out.number("recent_low"), Some(10.0));
    }

    #[test]
    fn single_bar_is_not_enough() {
        assert!(calculate_fibonacci(&make_hlc(&[(2.0, 1.0, 1.5)])).is_empty());
    }
}
