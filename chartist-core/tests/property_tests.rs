//! Property tests for indicator invariants.
//!
//! Uses proptest to verify:
//! 1. Wilder smoothing stays within the input's extremes
//! 2. RSI, ADX, +DI, -DI stay within [0, 100]
//! 3. KDJ identity J = 3K - 2D
//! 4. SuperTrend flips happen exactly on crossings of the previous opposite band
//! 5. Idempotence of the full batch

use chartist_core::indicators::rsi::rsi_series;
use chartist_core::indicators::smoothing::{wilder_smooth_final, wilder_smooth_series};
use chartist_core::indicators::supertrend::{supertrend_series, Trend};
use chartist_core::indicators::*;
use chartist_core::{analyze, BarSeries, IndicatorConfig};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_values(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0..1000.0_f64, min_len..120)
}

/// Sane bars: low <= close <= high, from a bounded random walk.
fn arb_bars(min_len: usize) -> impl Strategy<Value = BarSeries> {
    prop::collection::vec((-3.0..3.0_f64, 0.0..1.0_f64, 0.0..4.0_f64), min_len..150).prop_map(
        |steps| {
            let mut price: f64 = 100.0;
            let mut closes = Vec::with_capacity(steps.len());
            let mut highs = Vec::with_capacity(steps.len());
            let mut lows = Vec::with_capacity(steps.len());
            for (change, pos, width) in steps {
                price = (price + change).max(1.0);
                let low = price - width * pos;
                let high = low + width;
                closes.push(price);
                highs.push(high);
                lows.push(low);
            }
            BarSeries::new(closes, highs, lows).unwrap()
        },
    )
}

// ── 1. Wilder bounded by extremes ───────────────────────────────────

proptest! {
    #[test]
    fn wilder_within_extremes(values in arb_values(1), period in 1usize..20) {
        prop_assume!(values.len() >= period);
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let tol = 1e-9 * (hi.abs() + lo.abs() + 1.0);
        for v in wilder_smooth_series(&values, period) {
            prop_assert!(v >= lo - tol && v <= hi + tol, "{v} outside [{lo}, {hi}]");
        }
        prop_assert!(wilder_smooth_final(&values, period).is_some());
    }

    #[test]
    fn wilder_final_is_last_of_series(values in arb_values(1), period in 1usize..20) {
        let series = wilder_smooth_series(&values, period);
        prop_assert_eq!(wilder_smooth_final(&values, period), series.last().copied());
    }
}

// ── 2. Bounded oscillators ──────────────────────────────────────────

proptest! {
    #[test]
    fn rsi_bounded(bars in arb_bars(2), period in 1usize..20) {
        for v in rsi_series(bars.closes(), period).into_iter().flatten() {
            prop_assert!((0.0..=100.0).contains(&v), "RSI {v}");
        }
    }

    #[test]
    fn rsi_is_100_without_losses(start in 1.0..500.0_f64, steps in prop::collection::vec(0.0..5.0_f64, 15..60)) {
        let mut closes = vec![start];
        for s in steps {
            let last = *closes.last().unwrap();
            closes.push(last + s);
        }
        let bars = BarSeries::from_closes(closes).unwrap();
        prop_assert_eq!(calculate_rsi(&bars, 14).number("rsi"), Some(100.0));
    }

    #[test]
    fn adx_and_di_bounded(bars in arb_bars(10), period in 2usize..15) {
        let out = calculate_adx(&bars, period);
        for key in ["adx", "plus_di", "minus_di"] {
            if let Some(v) = out.number(key) {
                prop_assert!((-1e-9..=100.0 + 1e-9).contains(&v), "{key} = {v}");
            }
        }
    }

    #[test]
    fn stoch_rsi_bounded(bars in arb_bars(40)) {
        let out = calculate_stoch_rsi(&bars, 14, 3, 3);
        for key in ["stoch_rsi_k", "stoch_rsi_d"] {
            if let Some(v) = out.number(key) {
                prop_assert!((-1e-9..=100.0 + 1e-9).contains(&v), "{key} = {v}");
            }
        }
    }
}

// ── 3. KDJ identity ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn kdj_j_identity(bars in arb_bars(9), p1 in 1usize..12, p2 in 1usize..6, p3 in 1usize..6) {
        let out = calculate_kdj(&bars, p1, p2, p3);
        if let (Some(k), Some(d), Some(j)) =
            (out.number("kdj_k"), out.number("kdj_d"), out.number("kdj_j"))
        {
            prop_assert!((j - (3.0 * k - 2.0 * d)).abs() < 1e-9);
        }
    }
}

// ── 4. SuperTrend flip rule ─────────────────────────────────────────

proptest! {
    /// A flip happens on bar i iff the close crossed the previous bar's
    /// opposite-side band.
    #[test]
    fn supertrend_flips_only_on_crossing(
        bars in arb_bars(12),
        period in 2usize..10,
        multiplier in 0.5..4.0_f64,
    ) {
        let points = supertrend_series(&bars, period, multiplier);
        let closes = bars.closes();
        for w in points.windows(2) {
            let (prev, cur) = (w[0], w[1]);
            prop_assert!(cur.trend != Trend::Initial);
            let close = closes[cur.index];
            let should_flip = match prev.trend {
                Trend::Up => close < prev.lower,
                Trend::Down => close > prev.upper,
                Trend::Initial => false,
            };
            prop_assert_eq!(cur.trend != prev.trend, should_flip, "bar {}", cur.index);
        }
    }

    #[test]
    fn supertrend_value_is_active_band(bars in arb_bars(12), period in 2usize..10) {
        for p in supertrend_series(&bars, period, 3.0) {
            match p.trend {
                Trend::Up => prop_assert_eq!(p.value, p.lower),
                Trend::Down => prop_assert_eq!(p.value, p.upper),
                Trend::Initial => prop_assert!(false, "unresolved trend at {}", p.index),
            }
        }
    }
}

// ── 5. Idempotence ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn batch_is_idempotent(bars in arb_bars(1)) {
        let cfg = IndicatorConfig::default();
        let a = analyze(&bars, &cfg).unwrap();
        let b = analyze(&bars, &cfg).unwrap();
        prop_assert_eq!(a, b);
    }
}
