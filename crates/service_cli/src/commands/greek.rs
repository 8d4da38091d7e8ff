//! Greek command implementation
//!
//! Plots an analytical price or sensitivity curve against the initial stock
//! price. Price, delta and gamma are overlaid with the Euler and exact Monte
//! Carlo estimates.

use adapter_loader::load_series;
use bench_plot::{ChartSpec, ChartStyle, Marker, PlotComposer, PlotSeries, SeriesColor};
use clap::ValueEnum;
use tracing::info;

use super::{Figure, RunContext};
use crate::Result;

/// Quantity shown by the greek figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GreekKind {
    Price,
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

/// One input file of a greek figure
#[derive(Debug, Clone, PartialEq)]
pub struct GreekInput {
    pub file: String,
    pub label: String,
    pub color: SeriesColor,
}

impl GreekKind {
    pub const ALL: [GreekKind; 6] = [
        GreekKind::Price,
        GreekKind::Delta,
        GreekKind::Gamma,
        GreekKind::Vega,
        GreekKind::Theta,
        GreekKind::Rho,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GreekKind::Price => "price",
            GreekKind::Delta => "delta",
            GreekKind::Gamma => "gamma",
            GreekKind::Vega => "vega",
            GreekKind::Theta => "theta",
            GreekKind::Rho => "rho",
        }
    }

    pub fn y_label(&self) -> String {
        format!("Option {}", self.name())
    }

    /// Input files in drawing order
    pub fn inputs(&self) -> Vec<GreekInput> {
        let name = self.name();
        let analytical = format!("option_{}.txt", name);
        match self {
            GreekKind::Price | GreekKind::Delta | GreekKind::Gamma => vec![
                GreekInput {
                    file: analytical,
                    label: format!("Fair option {}", name),
                    color: SeriesColor::Blue,
                },
                GreekInput {
                    file: format!("MC_{}s.txt", name),
                    label: format!("Monte Carlo Euler method {}", name),
                    color: SeriesColor::Red,
                },
                GreekInput {
                    file: format!("MC_exact_{}s.txt", name),
                    label: format!("Monte Carlo exact simulation {}", name),
                    color: SeriesColor::Green,
                },
            ],
            GreekKind::Vega | GreekKind::Theta | GreekKind::Rho => vec![GreekInput {
                file: analytical,
                label: self.y_label(),
                color: SeriesColor::Blue,
            }],
        }
    }
}

/// Compose the figure for `kind`; every input file is required.
pub fn figure(ctx: &RunContext, kind: GreekKind) -> Result<Figure> {
    let title = ctx.title()?;

    let mut series = Vec::new();
    for input in kind.inputs() {
        let data = load_series(ctx.config.data_path(&input.file))?;
        series.push(
            PlotSeries::new(data, input.label)
                .color(input.color)
                .marker(Marker::Plus),
        );
    }

    let spec = ChartSpec::new(title.text())
        .x_label("Initial stock price")
        .y_label(kind.y_label())
        .style(ChartStyle::curves());
    let chart = PlotComposer::new().compose(spec, series)?;

    Ok(Figure {
        stem: ctx.file_stem(&title, kind.name()),
        chart,
    })
}

/// Run the greek command
pub fn run(ctx: &RunContext, kind: GreekKind) -> Result<()> {
    info!(greek = kind.name(), "Plotting greek");
    let figure = figure(ctx, kind)?;
    ctx.emit_all(&[figure])?;
    Ok(())
}
