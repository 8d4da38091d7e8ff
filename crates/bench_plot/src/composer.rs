//! Overlays labelled series on shared axes.

use crate::chart::{AxisScale, ChartSpec, ComposedChart};
use crate::error::PlotError;
use crate::series::{PlotSeries, SeriesColor};
use tracing::debug;

/// Fraction of the y range added above and below the data
const Y_PADDING: f64 = 0.05;

/// Builds [`ComposedChart`]s from a spec and an ordered list of series.
///
/// - x limits are the min/max x of the FIRST series
/// - y limits span every series, padded by 5% (±1 for a flat range)
/// - the legend lists labelled series in supplied order
/// - series without a colour take the next one from the cycle
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotComposer;

impl PlotComposer {
    pub fn new() -> Self {
        Self
    }

    /// Compose a chart.
    ///
    /// # Errors
    ///
    /// - `PlotError::EmptyChart` if `series` is empty, the first series has
    ///   no finite samples, or no series has a finite y value
    /// - `PlotError::InvalidDomain` if the x axis is logarithmic and the
    ///   first series reaches x ≤ 0
    pub fn compose(
        &self,
        spec: ChartSpec,
        series: Vec<PlotSeries>,
    ) -> Result<ComposedChart, PlotError> {
        let empty = || PlotError::EmptyChart {
            title: spec.title.clone(),
        };

        let first = series.first().ok_or_else(empty)?;
        let (x_min, x_max) = first.series.x_range().ok_or_else(empty)?;
        if spec.x_scale == AxisScale::Log && x_min <= 0.0 {
            return Err(PlotError::InvalidDomain { min: x_min });
        }

        let (y_min, y_max) = series
            .iter()
            .filter_map(|s| s.series.y_range())
            .reduce(|(lo, hi), (a, b)| (lo.min(a), hi.max(b)))
            .ok_or_else(empty)?;

        let x_limits = widen_flat(x_min, x_max, spec.x_scale);
        let y_limits = pad(y_min, y_max);

        let legend: Vec<String> = series.iter().filter_map(|s| s.label.clone()).collect();

        let series: Vec<PlotSeries> = series
            .into_iter()
            .enumerate()
            .map(|(i, mut s)| {
                s.color = s.color.or(Some(SeriesColor::cycle(i)));
                s
            })
            .collect();

        debug!(
            title = %spec.title,
            series = series.len(),
            x_min = x_limits.0,
            x_max = x_limits.1,
            "Composed chart"
        );

        Ok(ComposedChart {
            spec,
            series,
            x_limits,
            y_limits,
            legend,
        })
    }
}

fn pad(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 {
        (min - Y_PADDING * span, max + Y_PADDING * span)
    } else {
        (min - 1.0, max + 1.0)
    }
}

/// A single-x series still needs a drawable axis
fn widen_flat(min: f64, max: f64, scale: AxisScale) -> (f64, f64) {
    if max > min {
        return (min, max);
    }
    match scale {
        AxisScale::Linear => (min - 1.0, max + 1.0),
        AxisScale::Log => (min / 10.0, max * 10.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{Marker, StrokeStyle};
    use approx::assert_relative_eq;
    use bench_core::Series;

    fn series(points: &[(f64, f64)]) -> Series {
        Series::from_points(points.iter().copied())
    }

    #[test]
    fn test_x_limits_from_first_series_only() {
        let chart = PlotComposer::new()
            .compose(
                ChartSpec::new("t"),
                vec![
                    PlotSeries::new(series(&[(10.0, 1.0), (50.0, 2.0)]), "a"),
                    PlotSeries::new(series(&[(0.0, 1.0), (500.0, 9.0)]), "b"),
                ],
            )
            .unwrap();
        assert_eq!(chart.x_limits, (10.0, 50.0));
        // y covers both series
        assert_relative_eq!(chart.y_limits.0, 1.0 - 0.4);
        assert_relative_eq!(chart.y_limits.1, 9.0 + 0.4);
    }

    #[test]
    fn test_flat_y_range() {
        let chart = PlotComposer::new()
            .compose(
                ChartSpec::new("flat"),
                vec![PlotSeries::new(series(&[(1.0, 5.0), (2.0, 5.0)]), "c")],
            )
            .unwrap();
        assert_eq!(chart.y_limits, (4.0, 6.0));
    }

    #[test]
    fn test_no_series() {
        let err = PlotComposer::new()
            .compose(ChartSpec::new("nothing"), vec![])
            .unwrap_err();
        assert_eq!(
            err,
            PlotError::EmptyChart {
                title: "nothing".to_string()
            }
        );
    }

    #[test]
    fn test_empty_first_series() {
        let err = PlotComposer::new()
            .compose(
                ChartSpec::new("e"),
                vec![
                    PlotSeries::new(series(&[]), "empty"),
                    PlotSeries::new(series(&[(1.0, 1.0)]), "full"),
                ],
            )
            .unwrap_err();
        assert!(matches!(err, PlotError::EmptyChart { .. }));
    }

    #[test]
    fn test_log_scale_rejects_non_positive_domain() {
        let err = PlotComposer::new()
            .compose(
                ChartSpec::new("log").x_scale(AxisScale::Log),
                vec![PlotSeries::new(series(&[(0.0, 1.0), (10.0, 2.0)]), "a")],
            )
            .unwrap_err();
        assert_eq!(err, PlotError::InvalidDomain { min: 0.0 });
    }

    #[test]
    fn test_log_scale_drops_unplottable_points_of_other_series() {
        let chart = PlotComposer::new()
            .compose(
                ChartSpec::new("log").x_scale(AxisScale::Log),
                vec![
                    PlotSeries::new(series(&[(10.0, 1.0), (100.0, 0.1)]), "a"),
                    PlotSeries::new(series(&[(-1.0, 1.0), (10.0, 0.5)]), "b"),
                ],
            )
            .unwrap();
        assert_eq!(chart.points(1), vec![(10.0, 0.5)]);
    }

    #[test]
    fn test_colors_assigned_by_position_unless_given() {
        let chart = PlotComposer::new()
            .compose(
                ChartSpec::new("c"),
                vec![
                    PlotSeries::new(series(&[(1.0, 1.0)]), "a"),
                    PlotSeries::new(series(&[(1.0, 2.0)]), "b").color(SeriesColor::Red),
                    PlotSeries::new(series(&[(1.0, 3.0)]), "c"),
                ],
            )
            .unwrap();
        assert_eq!(chart.color(0), SeriesColor::Blue);
        assert_eq!(chart.color(1), SeriesColor::Red);
        assert_eq!(chart.color(2), SeriesColor::Green);
    }

    #[test]
    fn test_unlabelled_series_not_in_legend() {
        let chart = PlotComposer::new()
            .compose(
                ChartSpec::new("paths").legend(false),
                vec![
                    PlotSeries::unlabelled(series(&[(0.0, 25.0), (1.0, 26.0)])),
                    PlotSeries::unlabelled(series(&[(0.0, 25.0), (1.0, 24.0)])),
                ],
            )
            .unwrap();
        assert!(chart.legend.is_empty());
        assert!(!chart.has_legend());
        assert_eq!(chart.x_limits, (0.0, 1.0));
    }

    #[test]
    fn test_title_passed_verbatim() {
        let title = "Time plot for call options\n(Smin = 10, Smax = 40)";
        let chart = PlotComposer::new()
            .compose(
                ChartSpec::new(title),
                vec![PlotSeries::new(series(&[(1.0, 1.0), (2.0, 2.0)]), "a")
                    .stroke(StrokeStyle::Dashed)
                    .marker(Marker::Circle)],
            )
            .unwrap();
        assert_eq!(chart.spec.title, title);
        assert_eq!(
            chart.title_lines(),
            vec!["Time plot for call options", "(Smin = 10, Smax = 40)"]
        );
    }
}
