//! Factory — converts an `IndicatorConfig` into runtime `Indicator` objects.
//!
//! Parameters are validated here so the indicator constructors' asserts
//! never fire on user-supplied configuration.

use crate::config::{IndicatorConfig, IndicatorKind};
use crate::error::IndicatorError;
use crate::indicators::{
    Adx, Atr, Cci, Fibonacci, Kdj, MovingAverages, Rsi, StochRsi, Supertrend, Volatility,
};

use super::indicator::Indicator;

// ─── Helpers ─────────────────────────────────────────────────────────

fn require_period(
    indicator: &'static str,
    field: &str,
    value: usize,
) -> Result<usize, IndicatorError> {
    if value == 0 {
        Err(IndicatorError::invalid(indicator, format!("{field} must be >= 1")))
    } else {
        Ok(value)
    }
}

fn require_multiplier(indicator: &'static str, value: f64) -> Result<f64, IndicatorError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(IndicatorError::invalid(
            indicator,
            format!("multiplier must be finite and > 0, got {value}"),
        ))
    }
}

// ─── Indicator factory ───────────────────────────────────────────────

/// Create a single indicator of `kind` with parameters from `config`.
pub fn create_indicator(
    kind: IndicatorKind,
    config: &IndicatorConfig,
) -> Result<Box<dyn Indicator>, IndicatorError> {
    match kind {
        IndicatorKind::Rsi => {
            let period = require_period("rsi", "period", config.rsi.period)?;
            Ok(Box::new(Rsi::new(period)))
        }
        IndicatorKind::StochRsi => {
            let c = &config.stoch_rsi;
            let period = require_period("stoch_rsi", "period", c.period)?;
            let smooth_k = require_period("stoch_rsi", "smooth_k", c.smooth_k)?;
            let smooth_d = require_period("stoch_rsi", "smooth_d", c.smooth_d)?;
            Ok(Box::new(StochRsi::new(period, smooth_k, smooth_d)))
        }
        IndicatorKind::Cci => {
            let period = require_period("cci", "period", config.cci.period)?;
            Ok(Box::new(Cci::new(period)))
        }
        IndicatorKind::Kdj => {
            let c = &config.kdj;
            let p1 = require_period("kdj", "p1", c.p1)?;
            let p2 = require_period("kdj", "p2", c.p2)?;
            let p3 = require_period("kdj", "p3", c.p3)?;
            Ok(Box::new(Kdj::new(p1, p2, p3)))
        }
        IndicatorKind::Atr => {
            let period = require_period("atr", "period", config.atr.period)?;
            Ok(Box::new(Atr::new(period)))
        }
        IndicatorKind::Adx => {
            let period = require_period("adx", "period", config.adx.period)?;
            Ok(Box::new(Adx::new(period)))
        }
        IndicatorKind::Supertrend => {
            let c = &config.supertrend;
            let period = require_period("supertrend", "period", c.period)?;
            let multiplier = require_multiplier("supertrend", c.multiplier)?;
            Ok(Box::new(Supertrend::new(period, multiplier)))
        }
        IndicatorKind::Volatility => {
            let period = require_period("volatility", "period", config.volatility.period)?;
            Ok(Box::new(Volatility::new(period)))
        }
        IndicatorKind::Fibonacci => Ok(Box::new(Fibonacci)),
        IndicatorKind::MovingAverages => Ok(Box::new(MovingAverages)),
    }
}

/// Create every enabled indicator, in configuration order.
pub fn build_indicators(
    config: &IndicatorConfig,
) -> Result<Vec<Box<dyn Indicator>>, IndicatorError> {
    config
        .enabled
        .iter()
        .map(|&kind| create_indicator(kind, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_all() {
        let indicators = build_indicators(&IndicatorConfig::default()).unwrap();
        let names: Vec<&str> = indicators.iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            vec![
                "rsi_14",
                "stoch_rsi_14_3_3",
                "cci_20",
                "kdj_9_3_3",
                "atr_14",
                "adx_14",
                "supertrend_10_3",
                "volatility_20",
                "fibonacci",
                "moving_averages",
            ]
        );
    }

    #[test]
    fn zero_period_rejected() {
        let mut cfg = IndicatorConfig::default();
        cfg.kdj.p3 = 0;
        let err = build_indicators(&cfg).err().unwrap();
        assert_eq!(
            err,
            IndicatorError::InvalidParameter {
                indicator: "kdj",
                reason: "p3 must be >= 1".into()
            }
        );
    }

    #[test]
    fn zero_period_ignored_when_disabled() {
        let mut cfg = IndicatorConfig::default().with_only(&[IndicatorKind::Rsi]);
        cfg.adx.period = 0;
        assert_eq!(build_indicators(&cfg).unwrap().len(), 1);
    }

    #[test]
    fn bad_multiplier_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut cfg = IndicatorConfig::default();
            cfg.supertrend.multiplier = bad;
            assert!(matches!(
                create_indicator(IndicatorKind::Supertrend, &cfg),
                Err(IndicatorError::InvalidParameter { indicator: "supertrend", .. })
            ));
        }
    }
}
