//! Chart specification and the composed, render-ready chart.

use crate::series::{PlotSeries, SeriesColor};
use serde::Serialize;

/// Scale of the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Linear,
    /// Base-10 logarithmic; requires a positive domain
    Log,
}

impl AxisScale {
    /// Map a data value to drawing space (log10 for `Log`)
    pub fn to_axis(&self, value: f64) -> f64 {
        match self {
            AxisScale::Linear => value,
            AxisScale::Log => value.log10(),
        }
    }

    /// Inverse of [`AxisScale::to_axis`]
    pub fn from_axis(&self, value: f64) -> f64 {
        match self {
            AxisScale::Linear => value,
            AxisScale::Log => 10f64.powf(value),
        }
    }
}

/// Fixed typography of a chart, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartStyle {
    /// Title size
    pub title_font_size: f64,
    /// Axis label and legend size
    pub label_font_size: f64,
    /// Tick label size
    pub tick_font_size: f64,
    /// Bold title
    pub title_bold: bool,
}

impl ChartStyle {
    /// Benchmark time/error figures
    pub fn benchmark() -> Self {
        Self {
            title_font_size: 20.0,
            label_font_size: 16.0,
            tick_font_size: 12.0,
            title_bold: true,
        }
    }

    /// Price, greek and standard deviation figures
    pub fn curves() -> Self {
        Self {
            title_font_size: 18.0,
            label_font_size: 14.0,
            tick_font_size: 11.0,
            title_bold: true,
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::curves()
    }
}

/// What to draw, minus the data.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Verbatim title; `\n` separates lines
    pub title: String,
    /// x axis description
    pub x_label: String,
    /// y axis description
    pub y_label: String,
    /// Linear, or log10 for sample-count axes
    pub x_scale: AxisScale,
    /// Typography
    pub style: ChartStyle,
    /// Draw the legend when any series is labelled
    pub show_legend: bool,
}

impl ChartSpec {
    /// Linear chart with the default style and a legend
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            x_scale: AxisScale::Linear,
            style: ChartStyle::default(),
            show_legend: true,
        }
    }

    /// Set the x axis description
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Set the y axis description
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Set the x axis scale
    pub fn x_scale(mut self, scale: AxisScale) -> Self {
        self.x_scale = scale;
        self
    }

    /// Set the typography
    pub fn style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Show or hide the legend
    pub fn legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }
}

/// A chart ready for any sink: limits resolved, colours assigned,
/// legend entries collected.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedChart {
    /// What was requested
    pub spec: ChartSpec,
    /// Series in drawing order, each with a colour
    pub series: Vec<PlotSeries>,
    /// x limits in data units
    pub x_limits: (f64, f64),
    /// Padded y limits
    pub y_limits: (f64, f64),
    /// Labels of the labelled series, in supplied order
    pub legend: Vec<String>,
}

impl ComposedChart {
    /// Title split on `\n`
    pub fn title_lines(&self) -> Vec<&str> {
        self.spec.title.split('\n').collect()
    }

    /// Whether a legend should be drawn at all
    pub fn has_legend(&self) -> bool {
        self.spec.show_legend && !self.legend.is_empty()
    }

    /// Colour of series `index`
    pub fn color(&self, index: usize) -> SeriesColor {
        self.series
            .get(index)
            .and_then(|s| s.color)
            .unwrap_or_else(|| SeriesColor::cycle(index))
    }

    /// Points of series `index` that can be drawn on this chart's axes
    pub fn points(&self, index: usize) -> Vec<(f64, f64)> {
        let log_x = self.spec.x_scale == AxisScale::Log;
        self.series
            .get(index)
            .map(|s| {
                s.series
                    .points()
                    .filter(|(x, y)| x.is_finite() && y.is_finite() && (!log_x || *x > 0.0))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Like [`ComposedChart::points`] with x mapped to drawing space
    pub fn axis_points(&self, index: usize) -> Vec<(f64, f64)> {
        let scale = self.spec.x_scale;
        self.points(index)
            .into_iter()
            .map(|(x, y)| (scale.to_axis(x), y))
            .collect()
    }

    /// x limits in drawing space
    pub fn axis_x_limits(&self) -> (f64, f64) {
        let scale = self.spec.x_scale;
        (scale.to_axis(self.x_limits.0), scale.to_axis(self.x_limits.1))
    }
}

/// Compact tick label
pub fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e5).contains(&magnitude) {
        format!("{:.1e}", value)
    } else if magnitude >= 100.0 {
        format!("{:.0}", value)
    } else {
        let fixed = format!("{:.3}", value);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}
