//! Serializable indicator configuration.
//!
//! One section per parameterized indicator plus the list of enabled
//! indicators. Every field defaults, so an empty TOML document is a valid
//! configuration carrying the standard parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors from loading or parsing a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),
}

/// Every indicator the engine knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Rsi,
    StochRsi,
    Cci,
    Kdj,
    Atr,
    Adx,
    Supertrend,
    Volatility,
    Fibonacci,
    MovingAverages,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 10] = [
        IndicatorKind::Rsi,
        IndicatorKind::StochRsi,
        IndicatorKind::Cci,
        IndicatorKind::Kdj,
        IndicatorKind::Atr,
        IndicatorKind::Adx,
        IndicatorKind::Supertrend,
        IndicatorKind::Volatility,
        IndicatorKind::Fibonacci,
        IndicatorKind::MovingAverages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::Rsi => "rsi",
            IndicatorKind::StochRsi => "stoch_rsi",
            IndicatorKind::Cci => "cci",
            IndicatorKind::Kdj => "kdj",
            IndicatorKind::Atr => "atr",
            IndicatorKind::Adx => "adx",
            IndicatorKind::Supertrend => "supertrend",
            IndicatorKind::Volatility => "volatility",
            IndicatorKind::Fibonacci => "fibonacci",
            IndicatorKind::MovingAverages => "moving_averages",
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        IndicatorKind::ALL
            .into_iter()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| ConfigError::UnknownIndicator(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RsiConfig {
    pub period: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StochRsiConfig {
    pub period: usize,
    pub smooth_k: usize,
    pub smooth_d: usize,
}

impl Default for StochRsiConfig {
    fn default() -> Self {
        Self {
            period: 14,
            smooth_k: 3,
            smooth_d: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CciConfig {
    pub period: usize,
}

impl Default for CciConfig {
    fn default() -> Self {
        Self { period: 20 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KdjConfig {
    pub p1: usize,
    pub p2: usize,
    pub p3: usize,
}

impl Default for KdjConfig {
    fn default() -> Self {
        Self { p1: 9, p2: 3, p3: 3 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AtrConfig {
    pub period: usize,
}

impl Default for AtrConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdxConfig {
    pub period: usize,
}

impl Default for AdxConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SupertrendConfig {
    pub period: usize,
    pub multiplier: f64,
}

impl Default for SupertrendConfig {
    fn default() -> Self {
        Self {
            period: 10,
            multiplier: 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VolatilityConfig {
    pub period: usize,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self { period: 20 }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Indicators to compute, in order.
    pub enabled: Vec<IndicatorKind>,
    pub rsi: RsiConfig,
    pub stoch_rsi: StochRsiConfig,
    pub cci: CciConfig,
    pub kdj: KdjConfig,
    pub atr: AtrConfig,
    pub adx: AdxConfig,
    pub supertrend: SupertrendConfig,
    pub volatility: VolatilityConfig,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            enabled: IndicatorKind::ALL.to_vec(),
            rsi: RsiConfig::default(),
            stoch_rsi: StochRsiConfig::default(),
            cci: CciConfig::default(),
            kdj: KdjConfig::default(),
            atr: AtrConfig::default(),
            adx: AdxConfig::default(),
            supertrend: SupertrendConfig::default(),
            volatility: VolatilityConfig::default(),
        }
    }
}

impl IndicatorConfig {
    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Restrict the enabled set to `only`, keeping the standard order.
    pub fn with_only(mut self, only: &[IndicatorKind]) -> Self {
        self.enabled.retain(|k| only.contains(k));
        self
    }
}
