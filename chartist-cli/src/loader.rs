//! CSV bar loading.
//!
//! Input rows are `symbol,date,open,high,low,close,volume` with a header.
//! Rows are grouped by symbol in first-appearance order and keep their file
//! order within a symbol.

use chartist_core::Bar;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("read {path}, record {record}: {source}")]
    Csv {
        path: String,
        record: usize,
        #[source]
        source: csv::Error,
    },

    #[error("no bars in {path}")]
    Empty { path: String },

    #[error("symbol '{0}' not present in input")]
    UnknownSymbol(String),
}

#[derive(Debug, Deserialize)]
struct BarRow {
    symbol: String,
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    #[serde(default)]
    volume: f64,
}

/// All bars of one symbol, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolBars {
    pub symbol: String,
    pub dates: Vec<NaiveDate>,
    pub bars: Vec<Bar>,
}

impl SymbolBars {
    fn new(symbol: String) -> Self {
        Self {
            symbol,
            dates: Vec::new(),
            bars: Vec::new(),
        }
    }

    /// Date of the most recent bar.
    pub fn as_of(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Indices of bars failing the OHLC sanity check.
    pub fn insane_bars(&self) -> Vec<usize> {
        self.bars
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_sane())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Load and group every row of a CSV file.
pub fn load_csv(path: &Path) -> Result<Vec<SymbolBars>, LoadError> {
    let label = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: label.clone(),
        source,
    })?;
    read_bars(file, &label)
}

/// Parse CSV rows from any reader. `label` names the source in errors.
pub fn read_bars<R: Read>(source: R, label: &str) -> Result<Vec<SymbolBars>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut groups: Vec<SymbolBars> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (idx, row) in reader.deserialize::<BarRow>().enumerate() {
        let row = row.map_err(|source| LoadError::Csv {
            path: label.to_string(),
            record: idx + 1,
            source,
        })?;
        let slot = *index.entry(row.symbol.clone()).or_insert_with(|| {
            groups.push(SymbolBars::new(row.symbol.clone()));
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.dates.push(row.date);
        group
            .bars
            .push(Bar::new(row.open, row.high, row.low, row.close, row.volume));
    }

    if groups.is_empty() {
        return Err(LoadError::Empty {
            path: label.to_string(),
        });
    }
    Ok(groups)
}

/// Keep only `symbol`, or fail if it never appears.
pub fn select_symbol(groups: Vec<SymbolBars>, symbol: &str) -> Result<Vec<SymbolBars>, LoadError> {
    let selected: Vec<SymbolBars> = groups.into_iter().filter(|g| g.symbol == symbol).collect();
    if selected.is_empty() {
        Err(LoadError::UnknownSymbol(symbol.to_string()))
    } else {
        Ok(selected)
    }
}
