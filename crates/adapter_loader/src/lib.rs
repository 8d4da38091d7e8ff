//! # adapter_loader
//!
//! Input adapter for the text files written by the Monte Carlo engine.
//!
//! All numeric files are comma-delimited, header-less tables of IEEE-754
//! doubles. Fields may carry surrounding whitespace (the engine writes
//! `", "` separators) and blank lines are ignored.
//!
//! ## Readers
//!
//! - [`load_columns`]: generic `k`-column table, returned column-major
//! - [`load_series`]: two-column curve (price or greek vs initial stock price)
//! - [`load_measurements`]: five-column benchmark file
//! - [`load_paths`]: one simulated path per row, width inferred
//! - [`read_title`]: the free-text run title
//!
//! Every failure is a [`bench_core::LoadError`] naming the file and, for
//! shape problems, the 1-based data row.

mod table;
mod title;
mod typed;

pub use table::{load_columns, load_rows};
pub use title::read_title;
pub use typed::{load_measurements, load_paths, load_series};
