//! Moving-average family and the MA alignment classifier.
//!
//! SMA at 5/10/20/50/120/200 and EMA at 5/12/20/26/50, each present only once
//! the series covers its window. `ma_trend` needs ma5, ma10 and ma20.

use crate::components::indicator::{Indicator, IndicatorOutput, Tag};
use crate::domain::BarSeries;
use crate::indicators::smoothing::{ema, sma};

pub const SMA_WINDOWS: [usize; 6] = [5, 10, 20, 50, 120, 200];
pub const EMA_WINDOWS: [usize; 5] = [5, 12, 20, 26, 50];

#[derive(Debug, Clone, Default)]
pub struct MovingAverages;

impl Indicator for MovingAverages {
    fn name(&self) -> &str {
        "moving_averages"
    }

    fn min_bars(&self) -> usize {
        SMA_WINDOWS[0]
    }

    fn compute(&self, bars: &BarSeries) -> IndicatorOutput {
        calculate_moving_averages(bars)
    }
}

pub fn calculate_moving_averages(bars: &BarSeries) -> IndicatorOutput {
    let mut out = IndicatorOutput::new();
    let closes = bars.closes();

    for window in SMA_WINDOWS {
        if let Some(v) = sma(closes, window) {
            out.insert_number(format!("ma{window}"), v);
        }
    }
    for window in EMA_WINDOWS {
        if closes.len() < window {
            continue;
        }
        if let Some(&v) = ema(closes, window).last() {
            out.insert_number(format!("ema{window}"), v);
        }
    }

    if let (Some(ma5), Some(ma10), Some(ma20)) =
        (out.number("ma5"), out.number("ma10"), out.number("ma20"))
    {
        out.insert_tag("ma_trend", classify_alignment(ma5, ma10, ma20));
    }
    out
}

fn classify_alignment(ma5: f64, ma10: f64, ma20: f64) -> Tag {
    if ma5 > ma10 && ma10 > ma20 {
        Tag::BullishAlignment
    } else if ma5 < ma10 && ma10 < ma20 {
        Tag::BearishAlignment
    } else {
        Tag::Entangled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_series, DEFAULT_EPSILON};

    #[test]
    fn keys_gated_by_length() {
        let closes: Vec<f64> = (0..12).map(|i| 100.0 + i as f64).collect();
        let out = calculate_moving_averages(&make_series(&closes));
        assert!(out.contains_key("ma5") && out.contains_key("ma10"));
        assert!(!out.contains_key("ma20"));
        assert!(out.contains_key("ema5") && out.contains_key("ema12"));
        assert!(!out.contains_key("ema20"));
        // ma20 missing → no classification
        assert!(!out.contains_key("ma_trend"));
    }

    #[test]
    fn sma_values() {
        let closes: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let out = calculate_moving_averages(&make_series(&closes));
        // last five: 15..19
        assert_approx(out.number("ma5").unwrap(), 17.0, DEFAULT_EPSILON);
        assert_approx(out.number("ma20").unwrap(), 9.5, DEFAULT_EPSILON);
    }

    #[test]
    fn rising_is_bullish_falling_is_bearish() {
        let up: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let down: Vec<f64> = up.iter().rev().copied().collect();
        assert_eq!(
            calculate_moving_averages(&make_series(&up)).tag("ma_trend"),
            Some(Tag::BullishAlignment)
        );
        assert_eq!(
            calculate_moving_averages(&make_series(&down)).tag("ma_trend"),
            Some(Tag::BearishAlignment)
        );
    }

    #[test]
    fn flat_is_entangled() {
        let out = calculate_moving_averages(&make_series(&[7.0; 25]));
        assert_eq!(out.tag("ma_trend"), Some(Tag::Entangled));
    }

    #[test]
    fn too_short_for_anything() {
        assert!(calculate_moving_averages(&make_series(&[1.0, 2.0, 3.0])).is_empty());
    }
}
