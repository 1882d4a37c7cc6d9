//! ADX — Average Directional Index (Wilder), with +DI / -DI.
//!
//! Steps:
//! 1. Compute +DM, -DM and TR from consecutive bars
//! 2. Current +DI / -DI = 100 * Wilder(±DM) / Wilder(TR)
//! 3. Full Wilder series of ±DM and TR → one DX per index
//!    DX = 100 * |+DI - -DI| / (+DI + -DI), skipped when the DI sum is zero
//! 4. ADX = Wilder-smoothed DX (needs at least `period` DX values)
//!
//! Needs 2 * period bars.

use crate::components::indicator::{Indicator, IndicatorOutput, Tag};
use crate::domain::BarSeries;
use crate::indicators::range::{directional_movement, true_range};
use crate::indicators::smoothing::{wilder_smooth_final, wilder_smooth_series};

#[derive(Debug, Clone)]
pub struct Adx {
    period: usize,
    name: String,
}

impl Adx {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ADX period must be >= 1");
        Self {
            period,
            name: format!("adx_{period}"),
        }
    }
}

impl Default for Adx {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Adx {
    fn name(&self) -> &str {
        &self.name
    }

    fn min_bars(&self) -> usize {
        2 * self.period
    }

    fn compute(&self, bars: &BarSeries) -> IndicatorOutput {
        calculate_adx(bars, self.period)
    }
}

pub fn calculate_adx(bars: &BarSeries, period: usize) -> IndicatorOutput {
    let mut out = IndicatorOutput::new();
    if period == 0 || bars.len() < 2 * period {
        return out;
    }

    let (plus_dm, minus_dm) = directional_movement(bars.highs(), bars.lows());
    let tr = true_range(bars.highs(), bars.lows(), bars.closes());
    if tr.len() < period {
        return out;
    }

    // Current DI from the final smoothed values
    if let (Some(s_plus), Some(s_minus), Some(s_tr)) = (
        wilder_smooth_final(&plus_dm, period),
        wilder_smooth_final(&minus_dm, period),
        wilder_smooth_final(&tr, period),
    ) {
        if s_tr != 0.0 {
            let plus_di = s_plus / s_tr * 100.0;
            let minus_di = s_minus / s_tr * 100.0;
            out.insert_number("plus_di", plus_di);
            out.insert_number("minus_di", minus_di);
            out.insert_tag(
                "trend_direction",
                if plus_di > minus_di { Tag::Up } else { Tag::Down },
            );
        }
    }

    let dx = dx_series(&plus_dm, &minus_dm, &tr, period);
    if let Some(adx) = wilder_smooth_final(&dx, period) {
        out.insert_number("adx", adx);
        out.insert_tag("adx_signal", classify(adx));
    }
    out
}

/// DX for every index where the smoothed TR and the DI sum are non-zero.
fn dx_series(plus_dm: &[f64], minus_dm: &[f64], tr: &[f64], period: usize) -> Vec<f64> {
    let smooth_plus = wilder_smooth_series(plus_dm, period);
    let smooth_minus = wilder_smooth_series(minus_dm, period);
    let smooth_tr = wilder_smooth_series(tr, period);

    smooth_plus
        .iter()
        .zip(&smooth_minus)
        .zip(&smooth_tr)
        .filter_map(|((&sp, &sm), &st)| {
            if st == 0.0 {
                return None;
            }
            let plus_di = sp / st * 100.0;
            let minus_di = sm / st * 100.0;
            let di_sum = plus_di + minus_di;
            if di_sum == 0.0 {
                None
            } else {
                Some((plus_di - minus_di).abs() / di_sum * 100.0)
            }
        })
        .collect()
}

fn classify(adx: f64) -> Tag {
    if adx > 25.0 {
        Tag::StrongTrend
    } else if adx > 20.0 {
        Tag::Trend
    } else {
        Tag::WeakTrend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{make_hlc, make_series};

    fn sample_bars() -> BarSeries {
        make_hlc(&[
            (105.0, 95.0, 102.0),
            (108.0, 100.0, 106.0),
            (107.0, 98.0, 99.0),
            (103.0, 97.0, 101.0),
            (106.0, 100.0, 105.0),
            (110.0, 103.0, 108.0),
            (112.0, 106.0, 110.0),
            (111.0, 104.0, 105.0),
            (109.0, 103.0, 107.0),
            (113.0, 105.0, 112.0),
        ])
    }

    #[test]
    fn adx_bounds() {
        let out = calculate_adx(&sample_bars(), 3);
        for key in ["adx", "plus_di", "minus_di"] {
            let v = out.number(key).unwrap();
            assert!((0.0..=100.0).contains(&v), "{key} out of bounds: {v}");
        }
    }

    #[test]
    fn adx_strong_uptrend() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64 * 5.0).collect();
        let out = calculate_adx(&make_series(&closes), 5);
        assert_eq!(out.tag("trend_direction"), Some(Tag::Up));
        // every bar is pure +DM → DX = 100 throughout
        assert!(out.number("adx").unwrap() > 99.0);
        assert_eq!(out.tag("adx_signal"), Some(Tag::StrongTrend));
        assert_eq!(out.number("minus_di"), Some(0.0));
    }

    #[test]
    fn adx_downtrend_direction() {
        let closes: Vec<f64> = (0..30).map(|i| 200.0 - i as f64 * 3.0).collect();
        let out = calculate_adx(&make_series(&closes), 5);
        assert_eq!(out.tag("trend_direction"), Some(Tag::Down));
    }

    #[test]
    fn adx_flat_market_omits_dx_fields() {
        // no ranges and no movement: smoothed TR = 0 → DI and ADX omitted
        let bars = make_hlc(&[(10.0, 10.0, 10.0); 12]);
        assert!(calculate_adx(&bars, 3).is_empty());
    }

    #[test]
    fn adx_needs_double_period() {
        let closes: Vec<f64> = (0..9).map(|i| 100.0 + i as f64).collect();
        assert!(calculate_adx(&make_series(&closes), 5).is_empty());
        let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        assert!(calculate_adx(&make_series(&closes), 5).contains_key("adx"));
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(classify(25.0), Tag::Trend);
        assert_eq!(classify(25.1), Tag::StrongTrend);
        assert_eq!(classify(20.0), Tag::WeakTrend);
        assert_eq!(classify(20.5), Tag::Trend);
    }

    #[test]
    fn adx_min_bars() {
        assert_eq!(Adx::new(14).min_bars(), 28);
        assert_eq!(Adx::new(7).min_bars(), 14);
    }
}
