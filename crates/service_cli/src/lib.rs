//! # service_cli
//!
//! Commands behind the `mcviz` binary. Each command reads the engine's text
//! output from the configured data directory and either prints a report or
//! renders figures through [`bench_plot::FigureOutput`].
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the loader, the
//! comparator and the plot composer together; it holds no analysis logic of
//! its own.

pub mod commands;
pub mod error;

pub use commands::{Figure, RunContext};
pub use error::{CliError, Result};
