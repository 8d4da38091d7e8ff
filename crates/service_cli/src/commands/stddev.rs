//! Stddev command implementation
//!
//! Standard deviation of the Monte Carlo estimate across initial stock
//! prices, with and without variance reduction.

use adapter_loader::load_series;
use bench_plot::{ChartSpec, ChartStyle, Marker, PlotComposer, PlotSeries, SeriesColor, StrokeStyle};

use super::{Figure, RunContext};
use crate::Result;

/// (file, label, colour, exact simulation)
const INPUTS: [(&str, &str, SeriesColor, bool); 4] = [
    (
        "MC_exact_stddev.txt",
        "Exact simulation, with variance reduction",
        SeriesColor::Red,
        true,
    ),
    (
        "MC_stddev.txt",
        "Euler method, with variance reduction",
        SeriesColor::Blue,
        false,
    ),
    (
        "MC_exact_stddev_VR.txt",
        "Exact simulation, no variance reduction",
        SeriesColor::Black,
        true,
    ),
    (
        "MC_stddev_VR.txt",
        "Euler method, no variance reduction",
        SeriesColor::Green,
        false,
    ),
];

/// Files read by the figure, in drawing order
pub fn input_files() -> Vec<&'static str> {
    INPUTS.iter().map(|(file, ..)| *file).collect()
}

pub fn figure(ctx: &RunContext) -> Result<Figure> {
    let title = ctx.title()?;

    let mut series = Vec::with_capacity(INPUTS.len());
    for (file, label, color, exact) in INPUTS {
        let data = load_series(ctx.config.data_path(file))?;
        let plot = PlotSeries::new(data, label).color(color);
        series.push(if exact {
            plot.marker(Marker::Plus)
        } else {
            plot.stroke(StrokeStyle::Dashed)
        });
    }

    let spec = ChartSpec::new(title.text())
        .x_label("Initial stock price")
        .y_label("Standard deviation")
        .style(ChartStyle::curves());
    let chart = PlotComposer::new().compose(spec, series)?;

    Ok(Figure {
        stem: ctx.file_stem(&title, "stddev"),
        chart,
    })
}

/// Run the stddev command
pub fn run(ctx: &RunContext) -> Result<()> {
    let figure = figure(ctx)?;
    ctx.emit_all(&[figure])?;
    Ok(())
}
