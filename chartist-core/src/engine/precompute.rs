//! Batch orchestration: run a set of indicators over bar series and merge
//! their outputs.
//!
//! Each indicator is evaluated independently. One indicator lacking history
//! contributes no keys and never prevents the others from reporting.

use crate::components::factory::build_indicators;
use crate::components::indicator::{Indicator, IndicatorOutput};
use crate::config::IndicatorConfig;
use crate::domain::BarSeries;
use crate::error::IndicatorError;
use std::collections::HashMap;
use tracing::debug;

/// Run every indicator on `bars` and merge the results into one mapping.
pub fn compute_all(bars: &BarSeries, indicators: &[Box<dyn Indicator>]) -> IndicatorOutput {
    let mut merged = IndicatorOutput::new();
    for indicator in indicators {
        if bars.len() < indicator.min_bars() {
            debug!(
                indicator = indicator.name(),
                bars = bars.len(),
                min_bars = indicator.min_bars(),
                "insufficient data, skipping"
            );
        }
        let out = indicator.compute(bars);
        debug!(indicator = indicator.name(), keys = out.len(), "computed");
        merged.merge(out);
    }
    merged
}

/// Build the configured indicators and run them on `bars`.
pub fn analyze(bars: &BarSeries, config: &IndicatorConfig) -> Result<IndicatorOutput, IndicatorError> {
    let indicators = build_indicators(config)?;
    Ok(compute_all(bars, &indicators))
}

/// Compute all indicators for every symbol.
pub fn compute_by_symbol(
    series_by_symbol: &HashMap<String, BarSeries>,
    indicators: &[Box<dyn Indicator>],
) -> HashMap<String, IndicatorOutput> {
    series_by_symbol
        .iter()
        .map(|(symbol, bars)| (symbol.clone(), compute_all(bars, indicators)))
        .collect()
}

/// Bars needed before every indicator in the set reports its primary key.
pub fn compute_warmup(indicators: &[Box<dyn Indicator>]) -> usize {
    indicators.iter().map(|i| i.min_bars()).max().unwrap_or(0)
}
