//! Average True Range (ATR).
//!
//! True Range: max(high-low, |high-prev_close|, |low-prev_close|), from bar 1.
//! ATR seed: mean of the first `period` TR values; Wilder smoothing after that.
//! Needs period + 1 bars.

use crate::components::indicator::{Indicator, IndicatorOutput};
use crate::domain::BarSeries;
use crate::indicators::range::true_range;
use crate::indicators::smoothing::wilder_smooth_final;

#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
    name: String,
}

impl Atr {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ATR period must be >= 1");
        Self {
            period,
            name: format!("atr_{period}"),
        }
    }
}

impl Default for Atr {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Atr {
    fn name(&self) -> &str {
        &self.name
    }

    fn min_bars(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, bars: &BarSeries) -> IndicatorOutput {
        calculate_atr(bars, self.period)
    }
}

pub fn calculate_atr(bars: &BarSeries, period: usize) -> IndicatorOutput {
    let mut out = IndicatorOutput::new();
    if bars.len() < period + 1 {
        return out;
    }
    let tr = true_range(bars.highs(), bars.lows(), bars.closes());
    if let Some(atr) = wilder_smooth_final(&tr, period) {
        out.insert_number("atr", atr);
    }
    out
}
