//! Rolling volatility — standard deviation of simple returns, in percent.
//!
//! returns[t] = (close[t] - close[t-1]) / close[t-1]
//! volatility = std(returns over the trailing `period`) * 100, population form.
//! Needs period + 1 closes.

use crate::components::indicator::{Indicator, IndicatorOutput};
use crate::domain::BarSeries;
use crate::indicators::vector::{pct_change, std_dev};

#[derive(Debug, Clone)]
pub struct Volatility {
    period: usize,
    name: String,
}

impl Volatility {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "Volatility period must be >= 1");
        Self {
            period,
            name: format!("volatility_{period}"),
        }
    }
}

impl Default for Volatility {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Indicator for Volatility {
    fn name(&self) -> &str {
        &self.name
    }

    fn min_bars(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, bars: &BarSeries) -> IndicatorOutput {
        calculate_volatility(bars, self.period)
    }
}

pub fn calculate_volatility(bars: &BarSeries, period: usize) -> IndicatorOutput {
    let mut out = IndicatorOutput::new();
    if period == 0 || bars.len() < period + 1 {
        return out;
    }
    let returns = pct_change(bars.closes());
    if let Some(sd) = std_dev(&returns[returns.len() - period..]) {
        out.insert_number("volatility", sd * 100.0);
    }
    out
}
