//! Indicator trait and the flat result mapping indicators produce.
//!
//! Indicators are pure functions: a validated bar series in, a key/value
//! mapping out. A key is present only when the indicator could compute it
//! for the given input length; absence means "not yet computable".

use crate::domain::BarSeries;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Trait for indicators.
///
/// # Statelessness
/// `compute` takes `&self` and an immutable series. Calling it twice on the
/// same input yields bit-identical output, and any number of calls may run
/// concurrently.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "rsi_14", "supertrend_10_3").
    fn name(&self) -> &str;

    /// Minimum number of bars before the indicator's primary key is present.
    fn min_bars(&self) -> usize;

    /// Compute the indicator's final values for the whole series.
    fn compute(&self, bars: &BarSeries) -> IndicatorOutput;
}

/// Categorical readings attached to numeric indicator values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Overbought,
    Oversold,
    Neutral,
    StrongTrend,
    Trend,
    WeakTrend,
    Up,
    Down,
    BullishAlignment,
    BearishAlignment,
    Entangled,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Overbought => "overbought",
            Tag::Oversold => "oversold",
            Tag::Neutral => "neutral",
            Tag::StrongTrend => "strong_trend",
            Tag::Trend => "trend",
            Tag::WeakTrend => "weak_trend",
            Tag::Up => "up",
            Tag::Down => "down",
            Tag::BullishAlignment => "bullish_alignment",
            Tag::BearishAlignment => "bearish_alignment",
            Tag::Entangled => "entangled",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in an `IndicatorOutput`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Number(f64),
    Tag(Tag),
}

/// Flat mapping from indicator key to number or tag.
///
/// Ordered by key so serialized output is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorOutput {
    values: BTreeMap<String, IndicatorValue>,
}

impl IndicatorOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_number(&mut self, key: impl Into<String>, value: f64) {
        self.values
            .insert(key.into(), IndicatorValue::Number(value));
    }

    pub fn insert_tag(&mut self, key: impl Into<String>, tag: Tag) {
        self.values.insert(key.into(), IndicatorValue::Tag(tag));
    }

    pub fn get(&self, key: &str) -> Option<&IndicatorValue> {
        self.values.get(key)
    }

    /// Numeric value for `key`, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(IndicatorValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    /// Tag for `key`, if present and categorical.
    pub fn tag(&self, key: &str) -> Option<Tag> {
        match self.values.get(key) {
            Some(IndicatorValue::Tag(t)) => Some(*t),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Absorb every key from `other`. Later values win on key collision.
    pub fn merge(&mut self, other: IndicatorOutput) {
        self.values.extend(other.values);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndicatorValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
