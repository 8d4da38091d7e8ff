//! # bench_analysis
//!
//! Runs the complexity estimator over every tracked benchmark variant.
//!
//! A variant is one (contract direction, option style, simulation method,
//! statistic) combination. The engine writes one measurement file per
//! (direction, style); the method and statistic select a column.
//!
//! ```no_run
//! use bench_analysis::{render_report, BenchmarkComparator, MeasurementLayout, VariantCatalog};
//! use bench_core::ComplexityEstimator;
//!
//! let layout = MeasurementLayout::with_default_template("data");
//! let comparator = BenchmarkComparator::new(VariantCatalog::standard(), ComplexityEstimator::default());
//! let reports = comparator.run(&layout);
//! print!("{}", render_report(&reports));
//! ```
//!
//! One variant failing (missing file, degenerate data) never affects the
//! others; its report carries the error instead of a fit.

mod catalog;
mod comparator;
mod layout;
mod report;

pub use catalog::{VariantCatalog, VariantId};
pub use comparator::{BenchmarkComparator, MeasurementSet, VariantReport};
pub use layout::{MeasurementLayout, MeasurementSource};
pub use report::{render_report, section_heading};
