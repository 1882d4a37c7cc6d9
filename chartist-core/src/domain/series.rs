//! BarSeries — validated parallel columns of closes, highs and lows.
//!
//! Every indicator reads a `BarSeries`. Construction is the single place the
//! engine checks caller preconditions: equal lengths and finite values. Once a
//! series exists, indicator computations cannot fail.

use crate::domain::Bar;
use crate::error::IndicatorError;

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    closes: Vec<f64>,
    highs: Vec<f64>,
    lows: Vec<f64>,
}

impl BarSeries {
    pub fn new(closes: Vec<f64>, highs: Vec<f64>, lows: Vec<f64>) -> Result<Self, IndicatorError> {
        if closes.len() != highs.len() || closes.len() != lows.len() {
            return Err(IndicatorError::LengthMismatch {
                closes: closes.len(),
                highs: highs.len(),
                lows: lows.len(),
            });
        }
        check_finite("closes", &closes)?;
        check_finite("highs", &highs)?;
        check_finite("lows", &lows)?;
        Ok(Self {
            closes,
            highs,
            lows,
        })
    }

    /// Close-only feed: highs and lows are taken equal to closes.
    pub fn from_closes(closes: Vec<f64>) -> Result<Self, IndicatorError> {
        let highs = closes.clone();
        let lows = closes.clone();
        Self::new(closes, highs, lows)
    }

    pub fn from_bars(bars: &[Bar]) -> Result<Self, IndicatorError> {
        Self::new(
            bars.iter().map(|b| b.close).collect(),
            bars.iter().map(|b| b.high).collect(),
            bars.iter().map(|b| b.low).collect(),
        )
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn highs(&self) -> &[f64] {
        &self.highs
    }

    pub fn lows(&self) -> &[f64] {
        &self.lows
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// The trailing `n` bars (or all of them when fewer exist).
    pub fn tail(&self, n: usize) -> BarSeries {
        let start = self.len().saturating_sub(n);
        Self {
            closes: self.closes[start..].to_vec(),
            highs: self.highs[start..].to_vec(),
            lows: self.lows[start..].to_vec(),
        }
    }
}

fn check_finite(series: &'static str, values: &[f64]) -> Result<(), IndicatorError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(IndicatorError::NonFinite { series, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_length_mismatch() {
        let err = BarSeries::new(vec![1.0, 2.0], vec![1.0], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::LengthMismatch {
                closes: 2,
                highs: 1,
                lows: 2
            }
        );
    }

    #[test]
    fn rejects_nan_and_infinity() {
        let err = BarSeries::from_closes(vec![1.0, f64::NAN, 3.0]).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::NonFinite {
                series: "closes",
                index: 1
            }
        );

        let err = BarSeries::new(vec![1.0, 2.0], vec![2.0, 3.0], vec![0.5, f64::NEG_INFINITY])
            .unwrap_err();
        assert_eq!(
            err,
            IndicatorError::NonFinite {
                series: "lows",
                index: 1
            }
        );
    }

    #[test]
    fn empty_series_is_valid() {
        let s = BarSeries::from_closes(Vec::new()).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn from_bars_splits_columns() {
        let bars = [
            Bar::new(1.0, 2.0, 0.5, 1.5, 10.0),
            Bar::new(1.5, 3.0, 1.0, 2.5, 10.0),
        ];
        let s = BarSeries::from_bars(&bars).unwrap();
        assert_eq!(s.closes(), &[1.5, 2.5]);
        assert_eq!(s.highs(), &[2.0, 3.0]);
        assert_eq!(s.lows(), &[0.5, 1.0]);
    }

    #[test]
    fn tail_keeps_trailing_window() {
        let s = BarSeries::from_closes(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.tail(2).closes(), &[3.0, 4.0]);
        assert_eq!(s.tail(10).len(), 4);
    }
}
