//! Commodity Channel Index (CCI).
//!
//! TP = (H + L + C) / 3; MA and MD (mean deviation) over the trailing window.
//! CCI = (TP_last - MA) / (0.015 * MD). MD == 0 → CCI = 0, neutral.

use crate::components::indicator::{Indicator, IndicatorOutput, Tag};
use crate::domain::BarSeries;
use crate::indicators::vector::{mean, mean_abs_deviation, typical_price};

const LAMBERT_CONSTANT: f64 = 0.015;

#[derive(Debug, Clone)]
pub struct Cci {
    period: usize,
    name: String,
}

impl Cci {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "CCI period must be >= 1");
        Self {
            period,
            name: format!("cci_{period}"),
        }
    }
}

impl Default for Cci {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Indicator for Cci {
    fn name(&self) -> &str {
        &self.name
    }

    fn min_bars(&self) -> usize {
        self.period
    }

    fn compute(&self, bars: &BarSeries) -> IndicatorOutput {
        calculate_cci(bars, self.period)
    }
}

pub fn calculate_cci(bars: &BarSeries, period: usize) -> IndicatorOutput {
    let mut out = IndicatorOutput::new();
    let n = bars.len();
    if period == 0 || n < period {
        return out;
    }

    let tp = typical_price(
        &bars.highs()[n - period..],
        &bars.lows()[n - period..],
        &bars.closes()[n - period..],
    );
    let (Some(ma), Some(&last)) = (mean(&tp), tp.last()) else {
        return out;
    };
    let md = mean_abs_deviation(&tp, ma).unwrap_or(0.0);

    let cci = if md == 0.0 {
        0.0
    } else {
        (last - ma) / (LAMBERT_CONSTANT * md)
    };
    out.insert_number("cci", cci);
    out.insert_tag("cci_signal", classify(cci));
    out
}

fn classify(cci: f64) -> Tag {
    if cci > 100.0 {
        Tag::Overbought
    } else if cci < -100.0 {
        Tag::Oversold
    } else {
        Tag::Neutral
    }
}
