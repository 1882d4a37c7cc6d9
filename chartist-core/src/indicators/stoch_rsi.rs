//! Stochastic RSI.
//!
//! 1. RSI series (same recurrence as `rsi`), undefined for the first `period` closes
//! 2. Min-max normalization of each RSI over its trailing `period` window
//!    (0.5 when the window is flat)
//! 3. %K = SMA(stoch, smooth_k), %D = SMA(%K, smooth_d), both scaled ×100
//!
//! Undefined positions stay `None` through every stage.

use crate::components::indicator::{Indicator, IndicatorOutput, Tag};
use crate::domain::BarSeries;
use crate::indicators::rsi::rsi_series;
use crate::indicators::smoothing::sma_optional;
use crate::indicators::vector::{max_of, min_of};

#[derive(Debug, Clone)]
pub struct StochRsi {
    period: usize,
    smooth_k: usize,
    smooth_d: usize,
    name: String,
}

impl StochRsi {
    pub fn new(period: usize, smooth_k: usize, smooth_d: usize) -> Self {
        assert!(period >= 1, "StochRSI period must be >= 1");
        assert!(
            smooth_k >= 1 && smooth_d >= 1,
            "StochRSI smoothing windows must be >= 1"
        );
        Self {
            period,
            smooth_k,
            smooth_d,
            name: format!("stoch_rsi_{period}_{smooth_k}_{smooth_d}"),
        }
    }
}

impl Default for StochRsi {
    fn default() -> Self {
        Self::new(14, 3, 3)
    }
}

impl Indicator for StochRsi {
    fn name(&self) -> &str {
        &self.name
    }

    /// First RSI at `period`, first stoch at `2*period - 1`, then each SMA
    /// stage adds `window - 1`.
    fn min_bars(&self) -> usize {
        2 * self.period + self.smooth_k + self.smooth_d - 2
    }

    fn compute(&self, bars: &BarSeries) -> IndicatorOutput {
        calculate_stoch_rsi(bars, self.period, self.smooth_k, self.smooth_d)
    }
}

pub fn calculate_stoch_rsi(
    bars: &BarSeries,
    period: usize,
    smooth_k: usize,
    smooth_d: usize,
) -> IndicatorOutput {
    let mut out = IndicatorOutput::new();
    if period == 0 || bars.len() < 2 * period {
        return out;
    }

    let stoch = stoch_series(&rsi_series(bars.closes(), period), period);
    let k_series = sma_optional(&stoch, smooth_k);
    let d_series = sma_optional(&k_series, smooth_d);

    if let (Some(Some(k)), Some(Some(d))) = (k_series.last(), d_series.last()) {
        let k = k * 100.0;
        let d = d * 100.0;
        out.insert_number("stoch_rsi_k", k);
        out.insert_number("stoch_rsi_d", d);
        out.insert_tag("stoch_rsi_signal", classify(k, d));
    }
    out
}

/// Rolling min-max normalization of an RSI series, index-aligned.
///
/// A position is defined only when its whole trailing window is defined.
pub fn stoch_series(rsi: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; rsi.len()];
    if period == 0 {
        return result;
    }
    for i in (period - 1)..rsi.len() {
        let window: Option<Vec<f64>> = rsi[i + 1 - period..=i].iter().copied().collect();
        let (Some(window), Some(current)) = (window, rsi[i]) else {
            continue;
        };
        let (Some(lo), Some(hi)) = (min_of(&window), max_of(&window)) else {
            continue;
        };
        result[i] = Some(if hi == lo {
            0.5
        } else {
            (current - lo) / (hi - lo)
        });
    }
    result
}

fn classify(k: f64, d: f64) -> Tag {
    if k > 80.0 && d > 80.0 {
        Tag::Overbought
    } else if k < 20.0 && d < 20.0 {
        Tag::Oversold
    } else {
        Tag::Neutral
    }
}
