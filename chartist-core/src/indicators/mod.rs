//! Concrete indicator implementations and the primitives they share.
//!
//! Every indicator implements the `Indicator` trait from
//! `components::indicator` and recomputes whatever intermediate series it
//! needs from the raw bars. No indicator reads another's output.

pub mod adx;
pub mod atr;
pub mod cci;
pub mod fibonacci;
pub mod kdj;
pub mod moving_average;
pub mod range;
pub mod rsi;
pub mod smoothing;
pub mod stoch_rsi;
pub mod supertrend;
pub mod vector;
pub mod volatility;

pub use adx::{calculate_adx, Adx};
pub use atr::{calculate_atr, Atr};
pub use cci::{calculate_cci, Cci};
pub use fibonacci::{calculate_fibonacci, Fibonacci};
pub use kdj::{calculate_kdj, Kdj};
pub use moving_average::{calculate_moving_averages, MovingAverages};
pub use rsi::{calculate_rsi, Rsi};
pub use stoch_rsi::{calculate_stoch_rsi, StochRsi};
pub use supertrend::{calculate_supertrend, Supertrend};
pub use volatility::{calculate_volatility, Volatility};

/// Create a synthetic series from close prices for testing.
///
/// open = prev_close (or close for the first bar),
/// high = max(open, close) + 1.0, low = min(open, close) - 1.0.
#[cfg(test)]
pub fn make_series(closes: &[f64]) -> crate::domain::BarSeries {
    let mut highs = Vec::with_capacity(closes.len());
    let mut lows = Vec::with_capacity(closes.len());
    for (i, &close) in closes.iter().enumerate() {
        let open = if i == 0 { close } else { closes[i - 1] };
        highs.push(open.max(close) + 1.0);
        lows.push(open.min(close) - 1.0);
    }
    crate::domain::BarSeries::new(closes.to_vec(), highs, lows).unwrap()
}

/// Build a series from (high, low, close) triples.
#[cfg(test)]
pub fn make_hlc(data: &[(f64, f64, f64)]) -> crate::domain::BarSeries {
    crate::domain::BarSeries::new(
        data.iter().map(|d| d.2).collect(),
        data.iter().map(|d| d.0).collect(),
        data.iter().map(|d| d.1).collect(),
    )
    .unwrap()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
