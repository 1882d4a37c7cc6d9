//! Component traits and construction.
//!
//! - `indicator`: the `Indicator` trait and the flat result mapping
//! - `factory`: configuration → indicator objects

pub mod factory;
pub mod indicator;

pub use factory::{build_indicators, create_indicator};
pub use indicator::{Indicator, IndicatorOutput, IndicatorValue, Tag};
