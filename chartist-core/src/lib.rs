//! Chartist Core — technical indicator engine over OHLC bar series.
//!
//! This crate contains:
//! - Domain types (bars, validated bar series)
//! - Smoothing and range primitives (Wilder, SMA, EMA, WMA, TR, DM)
//! - Oscillators (RSI, StochRSI, CCI, KDJ)
//! - Trend/volatility indicators (ATR, ADX, SuperTrend, volatility,
//!   Fibonacci retracement, MA alignment)
//! - The `Indicator` trait, flat result mapping, factory and batch driver
//!
//! Every computation is a pure function of its inputs: no caches, no global
//! state, safe to run concurrently across symbols.

pub mod components;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod indicators;

pub use components::{build_indicators, Indicator, IndicatorOutput, IndicatorValue, Tag};
pub use config::{ConfigError, IndicatorConfig, IndicatorKind};
pub use domain::{Bar, BarSeries};
pub use engine::{analyze, compute_all};
pub use error::IndicatorError;
