//! Paths command implementation

use adapter_loader::load_paths;
use bench_plot::{ChartSpec, ChartStyle, PlotComposer, PlotSeries};
use tracing::info;

use super::{Figure, RunContext};
use crate::Result;

/// One unlabelled line per simulated asset path, indexed by time step.
pub fn figure(ctx: &RunContext) -> Result<Figure> {
    let title = ctx.title()?;
    let matrix = load_paths(ctx.config.data_path("paths.txt"))?;
    info!(paths = matrix.path_count(), steps = matrix.steps(), "Loaded asset paths");

    let series: Vec<PlotSeries> = (0..matrix.path_count())
        .filter_map(|i| matrix.path_series(i))
        .map(PlotSeries::unlabelled)
        .collect();

    let spec = ChartSpec::new(title.text())
        .x_label("Number of time steps")
        .y_label("Asset price")
        .style(ChartStyle::curves())
        .legend(false);
    let chart = PlotComposer::new().compose(spec, series)?;

    Ok(Figure {
        stem: ctx.file_stem(&title, "paths"),
        chart,
    })
}

/// Run the paths command
pub fn run(ctx: &RunContext) -> Result<()> {
    let figure = figure(ctx)?;
    ctx.emit_all(&[figure])?;
    Ok(())
}
