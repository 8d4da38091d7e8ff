//! # bench_core: Analysis Foundation for Monte Carlo Benchmark Charts
//!
//! ## Layer Role
//!
//! bench_core is the bottom layer of the workspace, providing:
//! - Data model: `Series`, `MeasurementRecord`, `PathMatrix` (`types`)
//! - Variant dimensions: `ContractDirection`, `OptionStyle`,
//!   `SimulationMethod`, `Statistic` (`types::variant`)
//! - Error taxonomy: `LoadError`, `FitError`, `AnalysisError` (`error`)
//! - Power-law complexity estimation in log-log space (`estimator`)
//! - Title metadata parsing for chart titles and file names (`title`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates and only depends on
//! `thiserror` (and optionally `serde`). File reading lives in
//! `adapter_loader`, rendering in `bench_plot`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use bench_core::estimator::ComplexityEstimator;
//!
//! let n = [10.0, 20.0, 40.0, 80.0];
//! let t = [1.0, 2.0, 4.0, 8.0];
//!
//! let fit = ComplexityEstimator::default().fit(&n, &t).unwrap();
//! assert!((fit.exponent - 1.0).abs() < 1e-12);
//! assert!((fit.scale - 0.1).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for fits and variant identifiers

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod estimator;
pub mod title;
pub mod types;

pub use error::{AnalysisError, ErrorKind, FitError, LoadError};
pub use estimator::{ComplexityEstimator, ComplexityFit, LinearFit};
pub use title::{TitleMarkers, TitleMetadata};
pub use types::{MeasurementRecord, PathMatrix, Series};
