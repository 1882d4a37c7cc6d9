//! Supertrend — ATR-band trend detector.
//!
//! Inherently sequential: the bands ratchet and the trend flips based on the
//! previous bar's state, so the computation is an explicit fold over bars
//! carrying a `BandState`.
//!
//! ATR here is index-aligned with the bars: TR[0] = 0, ATR[period-1] is the
//! mean of TR[0..period], then Wilder smoothing. This differs from `atr` by one
//! bar of warm-up and is kept distinct on purpose.
//!
//! Output: the active band (lower when trending up, upper when trending down),
//! the direction, and both final bands of the last bar.

use crate::components::indicator::{Indicator, IndicatorOutput, Tag};
use crate::domain::BarSeries;
use crate::indicators::range::true_range;
use crate::indicators::smoothing::wilder_smooth_series;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct Supertrend {
    period: usize,
    multiplier: f64,
    name: String,
}

impl Supertrend {
    pub fn new(period: usize, multiplier: f64) -> Self {
        assert!(period >= 1, "Supertrend period must be >= 1");
        Self {
            period,
            multiplier,
            name: format!("supertrend_{period}_{multiplier}"),
        }
    }
}

impl Default for Supertrend {
    fn default() -> Self {
        Self::new(10, 3.0)
    }
}

impl Indicator for Supertrend {
    fn name(&self) -> &str {
        &self.name
    }

    fn min_bars(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, bars: &BarSeries) -> IndicatorOutput {
        calculate_supertrend(bars, self.period, self.multiplier)
    }
}

/// Trend state threaded through the fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Initial,
    Up,
    Down,
}

/// Carried from one bar to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandState {
    pub trend: Trend,
    pub final_upper: f64,
    pub final_lower: f64,
}

/// Per-bar inputs to a fold step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandInput {
    pub close: f64,
    pub prev_close: f64,
    pub basic_upper: f64,
    pub basic_lower: f64,
}

/// One evaluated bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupertrendPoint {
    pub index: usize,
    pub value: f64,
    pub trend: Trend,
    pub upper: f64,
    pub lower: f64,
}

impl BandState {
    /// State at the first bar with a defined ATR: bands equal the basic bands
    /// and the trend resolves from `Initial` immediately.
    pub fn seed(close: f64, basic_upper: f64, basic_lower: f64) -> (Self, f64) {
        let initial = Self {
            trend: Trend::Initial,
            final_upper: basic_upper,
            final_lower: basic_lower,
        };
        initial.resolve_initial(close)
    }

    fn resolve_initial(self, close: f64) -> (Self, f64) {
        let trend = if close > self.final_upper {
            Trend::Up
        } else {
            Trend::Down
        };
        let value = match trend {
            Trend::Up => self.final_lower,
            _ => self.final_upper,
        };
        (Self { trend, ..self }, value)
    }

    /// Advance one bar. Returns the new state and the emitted supertrend value.
    ///
    /// Bands ratchet: the upper band only falls unless the previous close broke
    /// above it, the lower band only rises unless the previous close broke below.
    /// Flips compare the close against the previous bar's opposite band.
    pub fn step(self, input: BandInput) -> (Self, f64) {
        let final_upper =
            if input.basic_upper < self.final_upper || input.prev_close > self.final_upper {
                input.basic_upper
            } else {
                self.final_upper
            };
        let final_lower =
            if input.basic_lower > self.final_lower || input.prev_close < self.final_lower {
                input.basic_lower
            } else {
                self.final_lower
            };
        let next = Self {
            trend: self.trend,
            final_upper,
            final_lower,
        };

        match self.trend {
            Trend::Up if input.close < self.final_lower => {
                (Self { trend: Trend::Down, ..next }, final_upper)
            }
            Trend::Up => (next, final_lower),
            Trend::Down if input.close > self.final_upper => {
                (Self { trend: Trend::Up, ..next }, final_lower)
            }
            Trend::Down => (next, final_upper),
            Trend::Initial => next.resolve_initial(input.close),
        }
    }
}

/// ATR series aligned to bar indices; `None` before index `period - 1`.
pub fn aligned_atr(bars: &BarSeries, period: usize) -> Vec<Option<f64>> {
    let n = bars.len();
    let mut tr = Vec::with_capacity(n);
    if n > 0 {
        tr.push(0.0);
    }
    tr.extend(true_range(bars.highs(), bars.lows(), bars.closes()));

    let mut result = vec![None; n];
    if period == 0 {
        return result;
    }
    for (k, atr) in wilder_smooth_series(&tr, period).into_iter().enumerate() {
        result[period - 1 + k] = Some(atr);
    }
    result
}

/// Run the band fold over the whole series.
pub fn supertrend_series(bars: &BarSeries, period: usize, multiplier: f64) -> Vec<SupertrendPoint> {
    let atr = aligned_atr(bars, period);
    let Some(start) = atr.iter().position(Option::is_some) else {
        return Vec::new();
    };
    let (closes, highs, lows) = (bars.closes(), bars.highs(), bars.lows());

    let basic = |i: usize, atr: f64| {
        let hl2 = (highs[i] + lows[i]) / 2.0;
        (hl2 + multiplier * atr, hl2 - multiplier * atr)
    };

    let mut points = Vec::with_capacity(bars.len() - start);
    let Some(start_atr) = atr[start] else {
        return points;
    };
    let (upper, lower) = basic(start, start_atr);
    let (mut state, value) = BandState::seed(closes[start], upper, lower);
    points.push(SupertrendPoint {
        index: start,
        value,
        trend: state.trend,
        upper: state.final_upper,
        lower: state.final_lower,
    });

    for i in (start + 1)..bars.len() {
        let Some(a) = atr[i] else { continue };
        let (basic_upper, basic_lower) = basic(i, a);
        let prev_trend = state.trend;
        let (next, value) = state.step(BandInput {
            close: closes[i],
            prev_close: closes[i - 1],
            basic_upper,
            basic_lower,
        });
        if next.trend != prev_trend {
            trace!(index = i, from = ?prev_trend, to = ?next.trend, "supertrend flip");
        }
        state = next;
        points.push(SupertrendPoint {
            index: i,
            value,
            trend: state.trend,
            upper: state.final_upper,
            lower: state.final_lower,
        });
    }

    points
}

pub fn calculate_supertrend(bars: &BarSeries, period: usize, multiplier: f64) -> IndicatorOutput {
    let mut out = IndicatorOutput::new();
    if period == 0 || bars.len() < period + 1 {
        return out;
    }
    if let Some(last) = supertrend_series(bars, period, multiplier).last() {
        out.insert_number("supertrend", last.value);
        out.insert_tag(
            "supertrend_direction",
            if last.trend == Trend::Up {
                Tag::Up
            } else {
                Tag::Down
            },
        );
        out.insert_number("supertrend_upper", last.upper);
        out.insert_number("supertrend_lower", last.lower);
    }
    out
}
