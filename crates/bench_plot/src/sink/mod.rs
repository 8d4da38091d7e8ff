//! Figure output destinations.
//!
//! - [`PngSink`]: raster file on a 16x9 inch canvas
//! - [`ChartJsSink`]: Chart.js-compatible JSON document
//! - [`TerminalSink`]: interactive terminal view, blocks until closed

mod chartjs;
mod png;
mod terminal;

pub use chartjs::{
    to_chartjs, ChartJsAxis, ChartJsAxisTitle, ChartJsData, ChartJsDataset, ChartJsLegend,
    ChartJsLineChart, ChartJsOptions, ChartJsPlugins, ChartJsPoint, ChartJsScales, ChartJsSink,
    ChartJsTitle,
};
pub use png::PngSink;
pub use terminal::{draw_chart, TerminalSink};

use crate::chart::ComposedChart;
use crate::error::PlotError;
use std::path::{Path, PathBuf};

/// Figure output destination.
pub trait FigureSink {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Emit `chart` under file stem `stem`.
    ///
    /// Returns the written path for file sinks, `None` otherwise.
    fn emit(&self, chart: &ComposedChart, stem: &str) -> Result<Option<PathBuf>, PlotError>;
}

/// Fans a chart out to every configured sink, in order.
#[derive(Default)]
pub struct FigureOutput {
    sinks: Vec<Box<dyn FigureSink>>,
}

impl FigureOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// PNG always, Chart.js JSON when `export_json`, terminal view when `show`.
    ///
    /// Files are written before the blocking terminal view opens.
    pub fn standard(figures_dir: impl AsRef<Path>, dpi: u32, show: bool, export_json: bool) -> Self {
        let dir = figures_dir.as_ref();
        let mut output = Self::new().with_sink(PngSink::new(dir, dpi));
        if export_json {
            output = output.with_sink(ChartJsSink::new(dir));
        }
        if show {
            output = output.with_sink(TerminalSink::new());
        }
        output
    }

    pub fn with_sink(mut self, sink: impl FigureSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn sink_names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    /// Emit to every sink; stops at the first failure.
    pub fn emit(&self, chart: &ComposedChart, stem: &str) -> Result<Vec<PathBuf>, PlotError> {
        let mut written = Vec::new();
        for sink in &self.sinks {
            if let Some(path) = sink.emit(chart, stem)? {
                written.push(path);
            }
        }
        Ok(written)
    }
}

impl std::fmt::Debug for FigureOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FigureOutput")
            .field("sinks", &self.sink_names())
            .finish()
    }
}

pub(crate) fn ensure_dir(dir: &Path) -> Result<(), PlotError> {
    std::fs::create_dir_all(dir).map_err(|e| PlotError::io(dir, &e))
}
