//! Batch engine: runs indicator sets over bar series.

pub mod precompute;

pub use precompute::{analyze, compute_all, compute_by_symbol, compute_warmup};
