//! Relative Strength Index (RSI).
//!
//! Uses Wilder smoothing of average gains and average losses.
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! Needs period + 1 closes (period deltas for the seed).
//! Edge case: avg_loss == 0 → RSI = 100, even with no gains.

use crate::components::indicator::{Indicator, IndicatorOutput};
use crate::domain::BarSeries;
use crate::indicators::vector::diff;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn min_bars(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, bars: &BarSeries) -> IndicatorOutput {
        calculate_rsi(bars, self.period)
    }
}

/// RSI of the closes; `rsi` is omitted with fewer than `period + 1` closes.
pub fn calculate_rsi(bars: &BarSeries, period: usize) -> IndicatorOutput {
    let mut out = IndicatorOutput::new();
    if let Some(Some(rsi)) = rsi_series(bars.closes(), period).last() {
        out.insert_number("rsi", *rsi);
    }
    out
}

/// Full RSI series, index-aligned with `closes`.
///
/// Entries `0..period` are `None`; `result[period]` comes from the seed means
/// and later entries from Wilder-advanced averages.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut result = vec![None; n];

    if period == 0 || n < period + 1 {
        return result;
    }

    let changes = diff(closes);
    let p = period as f64;

    // Seed: simple means over the first `period` changes
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for &ch in &changes[..period] {
        if ch > 0.0 {
            avg_gain += ch;
        } else {
            avg_loss -= ch;
        }
    }
    avg_gain /= p;
    avg_loss /= p;
    result[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    for (k, &ch) in changes.iter().enumerate().skip(period) {
        let gain = ch.max(0.0);
        let loss = (-ch).max(0.0);
        avg_gain = (avg_gain * (p - 1.0) + gain) / p;
        avg_loss = (avg_loss * (p - 1.0) + loss) / p;
        // changes[k] is the move into close k + 1
        result[k + 1] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    result
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
