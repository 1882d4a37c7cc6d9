//! Chartist CLI — compute indicator reports from bar CSVs.
//!
//! Commands:
//! - `compute` — load a bar CSV, compute the configured indicators per symbol
//!   and print one JSON report
//! - `defaults` — print the default indicator configuration as TOML
//! - `check` — validate a configuration file

mod loader;

use anyhow::{bail, Context, Result};
use chartist_core::{
    build_indicators, compute_all, BarSeries, IndicatorConfig, IndicatorKind, IndicatorOutput,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use loader::{load_csv, select_symbol, SymbolBars};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "chartist",
    about = "Chartist CLI — technical indicators over OHLC bars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute indicators for every symbol in a bar CSV.
    Compute {
        /// CSV with columns symbol,date,open,high,low,close,volume.
        #[arg(long)]
        input: PathBuf,

        /// Path to a TOML indicator config. Defaults to the standard set.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only report this symbol.
        #[arg(long)]
        symbol: Option<String>,

        /// Restrict to these indicators (e.g. --only rsi,adx).
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Pretty-print the JSON report.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Print the default configuration as TOML.
    Defaults,
    /// Validate a configuration file and list the indicators it enables.
    Check {
        /// Path to a TOML indicator config.
        #[arg(long)]
        config: PathBuf,
    },
}

/// Per-symbol entry of the JSON report.
#[derive(Debug, Serialize)]
struct SymbolReport {
    as_of: NaiveDate,
    bars: usize,
    indicators: IndicatorOutput,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            input,
            config,
            symbol,
            only,
            pretty,
        } => run_compute(&input, config.as_deref(), symbol.as_deref(), &only, pretty),
        Commands::Defaults => run_defaults(),
        Commands::Check { config } => run_check(&config),
    }
}

fn load_config(path: Option<&Path>, only: &[String]) -> Result<IndicatorConfig> {
    let config = match path {
        Some(p) => IndicatorConfig::from_file(p)
            .with_context(|| format!("loading config {}", p.display()))?,
        None => IndicatorConfig::default(),
    };
    if only.is_empty() {
        return Ok(config);
    }
    let kinds = only
        .iter()
        .map(|s| s.parse::<IndicatorKind>())
        .collect::<Result<Vec<_>, _>>()?;
    let config = config.with_only(&kinds);
    if config.enabled.is_empty() {
        bail!("--only selects none of the enabled indicators");
    }
    Ok(config)
}

fn run_compute(
    input: &Path,
    config_path: Option<&Path>,
    symbol: Option<&str>,
    only: &[String],
    pretty: bool,
) -> Result<()> {
    let config = load_config(config_path, only)?;
    let indicators = build_indicators(&config)?;

    let mut groups = load_csv(input)?;
    if let Some(sym) = symbol {
        groups = select_symbol(groups, sym)?;
    }
    info!(
        symbols = groups.len(),
        indicators = indicators.len(),
        input = %input.display(),
        "computing"
    );

    let reports: BTreeMap<String, SymbolReport> = groups
        .par_iter()
        .filter_map(|group| {
            let report = symbol_report(group, |bars| compute_all(bars, &indicators))?;
            Some((group.symbol.clone(), report))
        })
        .collect();

    let json = if pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    println!("{json}");
    Ok(())
}

/// Validate one symbol's bars and compute its report. Symbols whose bars
/// cannot form a series are logged and skipped.
fn symbol_report(
    group: &SymbolBars,
    compute: impl Fn(&BarSeries) -> IndicatorOutput,
) -> Option<SymbolReport> {
    let insane = group.insane_bars();
    if !insane.is_empty() {
        warn!(
            symbol = %group.symbol,
            count = insane.len(),
            first_index = insane[0],
            "bars fail OHLC sanity check"
        );
    }
    let series = match BarSeries::from_bars(&group.bars) {
        Ok(series) => series,
        Err(e) => {
            warn!(symbol = %group.symbol, error = %e, "skipping symbol");
            return None;
        }
    };
    let as_of = group.as_of()?;
    Some(SymbolReport {
        as_of,
        bars: series.len(),
        indicators: compute(&series),
    })
}

fn run_defaults() -> Result<()> {
    print!("{}", IndicatorConfig::default().to_toml()?);
    Ok(())
}

fn run_check(path: &Path) -> Result<()> {
    let config = IndicatorConfig::from_file(path)?;
    let indicators = build_indicators(&config)?;
    println!("Config OK: {}", path.display());
    for indicator in &indicators {
        println!(
            "  {:<20} min_bars = {}",
            indicator.name(),
            indicator.min_bars()
        );
    }
    Ok(())
}
