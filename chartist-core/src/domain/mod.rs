//! Domain types: raw bars and the validated column view the indicators read.

pub mod bar;
pub mod series;

pub use bar::Bar;
pub use series::BarSeries;
