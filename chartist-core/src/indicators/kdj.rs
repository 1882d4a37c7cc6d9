//! KDJ — smoothed stochastic oscillator.
//!
//! RSV = (close - LLV) / (HHV - LLV) * 100 over the trailing `p1` bars (50 on a flat window).
//! K[t] = RSV[t] / p2 + K[t-1] * (1 - 1/p2), seeded with the first RSV.
//! D[t] = K[t] / p3 + D[t-1] * (1 - 1/p3), seeded with the first K.
//! J = 3K - 2D. Only the final triple is reported.

use crate::components::indicator::{Indicator, IndicatorOutput};
use crate::domain::BarSeries;
use crate::indicators::vector::{max_of, min_of};

#[derive(Debug, Clone)]
pub struct Kdj {
    p1: usize,
    p2: usize,
    p3: usize,
    name: String,
}

impl Kdj {
    pub fn new(p1: usize, p2: usize, p3: usize) -> Self {
        assert!(p1 >= 1 && p2 >= 1 && p3 >= 1, "KDJ periods must be >= 1");
        Self {
            p1,
            p2,
            p3,
            name: format!("kdj_{p1}_{p2}_{p3}"),
        }
    }
}

impl Default for Kdj {
    fn default() -> Self {
        Self::new(9, 3, 3)
    }
}

impl Indicator for Kdj {
    fn name(&self) -> &str {
        &self.name
    }

    fn min_bars(&self) -> usize {
        self.p1
    }

    fn compute(&self, bars: &BarSeries) -> IndicatorOutput {
        calculate_kdj(bars, self.p1, self.p2, self.p3)
    }
}

pub fn calculate_kdj(bars: &BarSeries, p1: usize, p2: usize, p3: usize) -> IndicatorOutput {
    let mut out = IndicatorOutput::new();
    if p2 == 0 || p3 == 0 {
        return out;
    }
    let rsv = rsv_series(bars, p1);
    let Some(&first) = rsv.first() else {
        return out;
    };

    let alpha_k = 1.0 / p2 as f64;
    let alpha_d = 1.0 / p3 as f64;
    let mut k = first;
    let mut d = k;
    for &r in &rsv[1..] {
        k = alpha_k * r + (1.0 - alpha_k) * k;
        d = alpha_d * k + (1.0 - alpha_d) * d;
    }
    let j = 3.0 * k - 2.0 * d;

    out.insert_number("kdj_k", k);
    out.insert_number("kdj_d", d);
    out.insert_number("kdj_j", j);
    out
}

/// RSV for every bar from `p1 - 1` onward. Length `n - p1 + 1`.
pub fn rsv_series(bars: &BarSeries, p1: usize) -> Vec<f64> {
    let n = bars.len();
    if p1 == 0 || n < p1 {
        return Vec::new();
    }
    let (closes, highs, lows) = (bars.closes(), bars.highs(), bars.lows());
    ((p1 - 1)..n)
        .map(|i| {
            let start = i + 1 - p1;
            let hhv = max_of(&highs[start..=i]).unwrap_or(closes[i]);
            let llv = min_of(&lows[start..=i]).unwrap_or(closes[i]);
            if hhv == llv {
                50.0
            } else {
                (closes[i] - llv) / (hhv - llv) * 100.0
            }
        })
        .collect()
}
