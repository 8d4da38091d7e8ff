//! CLI command implementations
//!
//! Each submodule implements one `mcviz` command. Figure commands split into
//! a pure `figure(s)` builder and a `run` that emits the result.

pub mod benchmark;
pub mod check;
pub mod complexity;
pub mod greek;
pub mod paths;
pub mod stddev;

use adapter_loader::read_title;
use bench_core::TitleMetadata;
use bench_plot::{ComposedChart, FigureOutput};
use infra_config::AnalysisConfig;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::Result;

/// A composed chart and the file stem it is written under.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub stem: String,
    pub chart: ComposedChart,
}

/// Resolved configuration plus the sinks figures go to.
#[derive(Debug)]
pub struct RunContext {
    pub config: AnalysisConfig,
    pub output: FigureOutput,
}

impl RunContext {
    /// Sinks chosen from the `[output]` settings
    pub fn new(config: AnalysisConfig) -> Self {
        let output = FigureOutput::standard(
            &config.figures_dir,
            config.output.dpi,
            config.output.show,
            config.output.export_json,
        );
        Self { config, output }
    }

    pub fn with_output(config: AnalysisConfig, output: FigureOutput) -> Self {
        Self { config, output }
    }

    /// Read the run title from the title file
    pub fn title(&self) -> Result<TitleMetadata> {
        Ok(read_title(self.config.title_path())?)
    }

    /// Title prefix followed by `suffix`, sanitised for use as a file name
    pub fn file_stem(&self, title: &TitleMetadata, suffix: &str) -> String {
        let markers = &self.config.title;
        if title.filename_prefix(markers).is_none() {
            warn!(
                marker = %markers.filename_marker,
                "Filename marker not in title, figure stem has no prefix"
            );
        }
        title.file_stem(markers, suffix)
    }

    /// Emit figures in order, returning every written path
    pub fn emit_all(&self, figures: &[Figure]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for figure in figures {
            let paths = self.output.emit(&figure.chart, &figure.stem)?;
            info!(figure = %figure.stem, files = paths.len(), "Figure emitted");
            written.extend(paths);
        }
        Ok(written)
    }
}
