//! Elementwise and rolling-window helpers over `f64` slices.

/// Successive differences: `out[i] = values[i+1] - values[i]`. Length `n - 1`.
pub fn diff(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Simple returns: `out[i] = (values[i+1] - values[i]) / values[i]`. Length `n - 1`.
///
/// A zero base price yields a zero return rather than infinity.
pub fn pct_change(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| if w[0] == 0.0 { 0.0 } else { (w[1] - w[0]) / w[0] })
        .collect()
}

/// Arithmetic mean. `None` on an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by n). `None` on an empty slice.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    Some(var.sqrt())
}

/// Mean of `|v - center|` over the slice.
pub fn mean_abs_deviation(values: &[f64], center: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|v| (v - center).abs()).sum::<f64>() / values.len() as f64)
}

pub fn max_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

pub fn min_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Trailing-window maximum; `out[j]` covers `values[j..j+window]`. Length `n - window + 1`.
pub fn rolling_max(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return Vec::new();
    }
    values
        .windows(window)
        .filter_map(max_of)
        .collect()
}

/// Trailing-window minimum; `out[j]` covers `values[j..j+window]`. Length `n - window + 1`.
pub fn rolling_min(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return Vec::new();
    }
    values
        .windows(window)
        .filter_map(min_of)
        .collect()
}

/// Typical price `(H + L + C) / 3`, elementwise.
pub fn typical_price(highs: &[f64], lows: &[f64], closes: &[f64]) -> Vec<f64> {
    highs
        .iter()
        .zip(lows)
        .zip(closes)
        .map(|((h, l), c)| (h + l + c) / 3.0)
        .collect()
}
