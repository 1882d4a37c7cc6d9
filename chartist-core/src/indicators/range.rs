//! True Range and Directional Movement series.
//!
//! Both are undefined at bar 0 (no previous bar), so the returned vectors have
//! length `n - 1`: entry `k` belongs to bar `k + 1`.

/// TR[t] = max(high[t]-low[t], |high[t]-close[t-1]|, |low[t]-close[t-1]|) for t >= 1.
pub fn true_range(highs: &[f64], lows: &[f64], closes: &[f64]) -> Vec<f64> {
    let n = closes.len().min(highs.len()).min(lows.len());
    (1..n)
        .map(|i| {
            let h = highs[i];
            let l = lows[i];
            let pc = closes[i - 1];
            (h - l).max((h - pc).abs()).max((l - pc).abs())
        })
        .collect()
}

/// +DM and -DM for t >= 1.
///
/// high_diff = high[t] - high[t-1], low_diff = low[t-1] - low[t].
/// At most one of the two is non-zero on any bar.
pub fn directional_movement(highs: &[f64], lows: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = highs.len().min(lows.len());
    let mut plus_dm = Vec::with_capacity(n.saturating_sub(1));
    let mut minus_dm = Vec::with_capacity(n.saturating_sub(1));

    for i in 1..n {
        let high_diff = highs[i] - highs[i - 1];
        let low_diff = lows[i - 1] - lows[i];

        plus_dm.push(if high_diff > low_diff && high_diff > 0.0 {
            high_diff
        } else {
            0.0
        });
        minus_dm.push(if low_diff > high_diff && low_diff > 0.0 {
            low_diff
        } else {
            0.0
        });
    }

    (plus_dm, minus_dm)
}
