//! Shared fixtures for integration tests.

use chartist_core::BarSeries;

/// Generate N bars of synthetic OHLC data with realistic variation.
///
/// Deterministic pseudo-random walk using a simple LCG; every bar is sane
/// (low <= close <= high).
#[allow(dead_code)]
pub fn make_test_series(n: usize) -> BarSeries {
    let mut closes = Vec::with_capacity(n);
    let mut highs = Vec::with_capacity(n);
    let mut lows = Vec::with_capacity(n);
    let mut price: f64 = 100.0;

    for i in 0..n {
        let seed = (i as u64).wrapping_mul(6364136223846793005).wrapping_add(1);
        let change = ((seed >> 33) % 200) as f64 * 0.05 - 5.0; // -5.0 to +5.0
        price = (price + change).max(10.0);

        let open = price - 0.5;
        let close = price + 0.3;
        highs.push(open.max(close) + 2.0);
        lows.push(open.min(close) - 2.0);
        closes.push(close);
    }

    BarSeries::new(closes, highs, lows).unwrap()
}

/// Closes strictly increasing by 1.0 from `start`, highs/lows ±0.5.
#[allow(dead_code)]
pub fn rising_series(n: usize, start: f64) -> BarSeries {
    let closes: Vec<f64> = (0..n).map(|i| start + i as f64).collect();
    let highs = closes.iter().map(|c| c + 0.5).collect();
    let lows = closes.iter().map(|c| c - 0.5).collect();
    BarSeries::new(closes, highs, lows).unwrap()
}

#[allow(dead_code)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}
