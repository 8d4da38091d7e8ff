//! Core data model.
//!
//! - [`Series`]: aligned `(x, y)` samples
//! - [`MeasurementRecord`]: one benchmark file, `(n, euler t, euler err, exact t, exact err)` rows
//! - [`PathMatrix`]: simulated asset paths, one row per path
//! - [`variant`]: the dimensions that identify a benchmark variant

mod series;
pub mod variant;

pub use series::{MeasurementRecord, PathMatrix, Series};
pub use variant::{ContractDirection, OptionStyle, SimulationMethod, Statistic};
