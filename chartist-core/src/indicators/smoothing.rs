//! Smoothing primitives: Wilder, SMA, EMA, WMA.
//!
//! All functions take a plain slice and return either the final value or the
//! sequence of values defined after warm-up. Nothing here is cached between calls.

/// Wilder smoothing, final value only.
///
/// Seed: mean of the first `period` values. Each later value `x` advances the
/// seed as `(seed * (period - 1) + x) / period`.
/// Returns `None` when `values.len() < period` or `period == 0`.
pub fn wilder_smooth_final(values: &[f64], period: usize) -> Option<f64> {
    wilder_smooth_series(values, period).last().copied()
}

/// Wilder smoothing, keeping every intermediate value.
///
/// Output length is `values.len() - period + 1`: `out[0]` is the seed mean,
/// `out[k]` the value after consuming `values[period - 1 + k]`.
/// Empty when `values.len() < period` or `period == 0`.
pub fn wilder_smooth_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    let p = period as f64;
    let mut result = Vec::with_capacity(values.len() - period + 1);
    let mut prev = values[..period].iter().sum::<f64>() / p;
    result.push(prev);
    for &x in &values[period..] {
        prev = (prev * (p - 1.0) + x) / p;
        result.push(prev);
    }
    result
}

/// Mean of the trailing `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(values[values.len() - period..].iter().sum::<f64>() / period as f64)
}

/// Mean of every trailing `period` window. Length `values.len() - period + 1`.
pub fn sma_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    values
        .windows(period)
        .map(|w| w.iter().sum::<f64>() / period as f64)
        .collect()
}

/// Rolling mean over index-aligned optional values.
///
/// `out[i]` is defined only when all of `values[i + 1 - period..=i]` are
/// defined; undefined entries propagate instead of being read as zero.
pub fn sma_optional(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; values.len()];
    if period == 0 {
        return result;
    }
    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        let sum: Option<f64> = window.iter().copied().sum();
        result[i] = sum.map(|s| s / period as f64);
    }
    result
}

/// Exponential moving average, `alpha = 2 / (period + 1)`.
///
/// Seeded with the first raw value (not a period mean), so the output has
/// the same length as the input.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let mut result = Vec::with_capacity(values.len());
    let Some(&first) = values.first() else {
        return result;
    };
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut prev = first;
    result.push(prev);
    for &x in &values[1..] {
        prev = alpha * x + (1.0 - alpha) * prev;
        result.push(prev);
    }
    result
}

/// Linearly weighted moving average with weights `1..=period`, newest heaviest.
/// Length `values.len() - period + 1`.
pub fn wma(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    let weight_sum = (period * (period + 1)) as f64 / 2.0;
    values
        .windows(period)
        .map(|w| {
            w.iter()
                .enumerate()
                .map(|(j, v)| v * (j + 1) as f64)
                .sum::<f64>()
                / weight_sum
        })
        .collect()
}
