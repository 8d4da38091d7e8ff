//! Composer and file sinks end to end.

use bench_core::Series;
use bench_plot::{
    AxisScale, ChartJsSink, ChartSpec, ChartStyle, FigureOutput, Marker, PlotComposer, PlotError,
    PlotSeries, SeriesColor, StrokeStyle,
};

fn on_grid(f: impl Fn(f64) -> f64) -> Series {
    Series::from_points((1..=100).map(|i| {
        let x = i as f64;
        (x, f(x))
    }))
}

#[test]
fn test_three_series_limits_and_legend_order() {
    let chart = PlotComposer::new()
        .compose(
            ChartSpec::new("Option price\n(Smin = 1, Smax = 100)")
                .x_label("Initial stock price")
                .y_label("Option price")
                .style(ChartStyle::curves()),
            vec![
                PlotSeries::new(on_grid(|x| x * 0.5), "Fair option price")
                    .color(SeriesColor::Blue)
                    .marker(Marker::Plus),
                PlotSeries::new(on_grid(|x| x * 0.5 + 0.1), "Monte Carlo Euler method price")
                    .color(SeriesColor::Red)
                    .marker(Marker::Plus),
                PlotSeries::new(on_grid(|x| x * 0.5 - 0.1), "Monte Carlo exact simulation price")
                    .color(SeriesColor::Green)
                    .marker(Marker::Plus),
            ],
        )
        .unwrap();

    assert_eq!(chart.x_limits, (1.0, 100.0));
    assert_eq!(
        chart.legend,
        vec![
            "Fair option price",
            "Monte Carlo Euler method price",
            "Monte Carlo exact simulation price",
        ]
    );
    assert!(chart.y_limits.0 < 0.4);
    assert!(chart.y_limits.1 > 50.1);
}

#[test]
fn test_log_error_chart_requires_positive_counts() {
    let result = PlotComposer::new().compose(
        ChartSpec::new("Error plot for put option").x_scale(AxisScale::Log),
        vec![PlotSeries::new(
            Series::from_points([(0.0, 1.0), (10.0, 0.5)]),
            "European Euler maximum error",
        )],
    );
    assert_eq!(result.unwrap_err(), PlotError::InvalidDomain { min: 0.0 });
}

#[test]
fn test_figure_output_writes_json() {
    let chart = PlotComposer::new()
        .compose(
            ChartSpec::new("Standard deviation").x_label("Initial stock price"),
            vec![
                PlotSeries::new(on_grid(|x| 0.01 * x), "Exact simulation, no variance reduction")
                    .marker(Marker::Plus),
                PlotSeries::new(on_grid(|x| 0.012 * x), "Euler method, no variance reduction")
                    .stroke(StrokeStyle::Dashed),
            ],
        )
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = FigureOutput::new().with_sink(ChartJsSink::new(dir.path()));
    let written = output.emit(&chart, "run_stddev").unwrap();

    assert_eq!(written, vec![dir.path().join("run_stddev.json")]);
    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written[0]).unwrap()).unwrap();
    assert_eq!(doc["data"]["datasets"].as_array().unwrap().len(), 2);
    assert_eq!(doc["data"]["datasets"][0]["data"].as_array().unwrap().len(), 100);
    assert_eq!(doc["options"]["scales"]["x"]["min"], 1.0);
}
