//! # bench_plot
//!
//! Comparative charts for Monte Carlo output.
//!
//! [`PlotComposer`] overlays several labelled [`PlotSeries`] on shared axes
//! and resolves limits, colours and legend entries into a
//! [`ComposedChart`]. Sinks then render that chart:
//!
//! - [`PngSink`]: 16x9 inch PNG at a given DPI (plotters)
//! - [`TerminalSink`]: blocking full-screen view (ratatui + crossterm)
//! - [`ChartJsSink`]: Chart.js-compatible JSON
//!
//! ```no_run
//! use bench_core::Series;
//! use bench_plot::{ChartSpec, FigureOutput, Marker, PlotComposer, PlotSeries};
//!
//! let fair = Series::new(vec![10.0, 20.0], vec![0.1, 2.3]).unwrap();
//! let chart = PlotComposer::new()
//!     .compose(
//!         ChartSpec::new("Option price").x_label("Initial stock price"),
//!         vec![PlotSeries::new(fair, "Fair option price").marker(Marker::Plus)],
//!     )
//!     .unwrap();
//! FigureOutput::standard("figures", 100, false, true)
//!     .emit(&chart, "price")
//!     .unwrap();
//! ```

mod chart;
mod composer;
mod error;
mod series;
pub mod sink;

pub use chart::{format_tick, AxisScale, ChartSpec, ChartStyle, ComposedChart};
pub use composer::PlotComposer;
pub use error::PlotError;
pub use series::{Marker, PlotSeries, SeriesColor, StrokeStyle};
pub use sink::{ChartJsSink, FigureOutput, FigureSink, PngSink, TerminalSink};
