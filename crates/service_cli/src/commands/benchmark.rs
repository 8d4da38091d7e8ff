//! Benchmark command implementation
//!
//! Prints the complexity report, then draws a time plot and an error plot
//! per contract direction from the same loaded measurements.

use bench_analysis::{render_report, MeasurementSet, VariantCatalog, VariantId};
use bench_core::types::{ContractDirection, OptionStyle, SimulationMethod, Statistic};
use bench_plot::{
    AxisScale, ChartSpec, ChartStyle, ComposedChart, Marker, PlotComposer, PlotError, PlotSeries,
    StrokeStyle,
};
use tracing::{info, warn};

use super::{complexity, Figure, RunContext};
use crate::Result;

/// Time and error figures for every direction with at least one loaded file.
///
/// `params` is appended to each title as a second line. A figure that cannot
/// be composed is logged and left out; the others still render.
pub fn figures(
    catalog: &VariantCatalog,
    set: &MeasurementSet,
    params: Option<&str>,
) -> Vec<Figure> {
    let mut figures = Vec::new();
    for direction in catalog.directions() {
        if !set.has_direction(direction) {
            warn!(%direction, "No measurements loaded, skipping figures");
            continue;
        }
        let styles: Vec<OptionStyle> = catalog
            .files()
            .into_iter()
            .filter(|(d, _)| *d == direction)
            .map(|(_, s)| s)
            .collect();

        for (statistic, suffix) in [(Statistic::Time, "time_plot"), (Statistic::Error, "error_plot")] {
            let stem = format!("{}_{}", direction, suffix);
            match statistic_chart(set, direction, &styles, statistic, params) {
                Ok(chart) => figures.push(Figure { stem, chart }),
                Err(err) => warn!(figure = %stem, error = %err, "Figure skipped"),
            }
        }
    }
    figures
}

fn statistic_chart(
    set: &MeasurementSet,
    direction: ContractDirection,
    styles: &[OptionStyle],
    statistic: Statistic,
    params: Option<&str>,
) -> std::result::Result<ComposedChart, PlotError> {
    let (heading, y_label, scale) = match statistic {
        Statistic::Time => (
            format!("Time plot for {} options", direction),
            "Time elapsed",
            AxisScale::Linear,
        ),
        Statistic::Error => (
            format!("Error plot for {} option", direction),
            "Maximum pricing error",
            AxisScale::Log,
        ),
    };
    let title = match params {
        Some(params) => format!("{}\n{}", heading, params),
        None => heading,
    };

    let mut series = Vec::new();
    for &style in styles {
        let Some(record) = set.record(direction, style) else {
            continue;
        };
        for method in SimulationMethod::ALL {
            let variant = VariantId::new(direction, style, method, statistic);
            let data = record.series(method, statistic);
            if scale == AxisScale::Log && !data.xs().iter().all(|n| n.is_finite() && *n > 0.0) {
                warn!(variant = %variant, "Sample counts not positive, series left off log axis");
                continue;
            }
            series.push(
                PlotSeries::new(data, variant.label())
                    .stroke(StrokeStyle::Dashed)
                    .marker(Marker::Circle),
            );
        }
    }

    let spec = ChartSpec::new(title)
        .x_label("Number of simulations")
        .y_label(y_label)
        .x_scale(scale)
        .style(ChartStyle::benchmark());
    PlotComposer::new().compose(spec, series)
}

/// Run the benchmark command
pub fn run(ctx: &RunContext) -> Result<()> {
    let comparator = complexity::comparator(&ctx.config);
    let set = MeasurementSet::load(&complexity::layout(&ctx.config), comparator.catalog());
    let reports = comparator.evaluate(&set);
    print!("{}", render_report(&reports));

    let title = match ctx.title() {
        Ok(title) => Some(title),
        Err(err) => {
            warn!(error = %err, "Title unavailable, figure titles carry no parameters");
            None
        }
    };
    let params = title.as_ref().map(|t| t.params(&ctx.config.title));

    let figures = figures(comparator.catalog(), &set, params);
    info!(figures = figures.len(), "Rendering benchmark figures");
    ctx.emit_all(&figures)?;

    complexity::ensure_any_fit(&reports)
}
