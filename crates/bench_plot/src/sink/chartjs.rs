//! Chart.js-compatible JSON export.

use super::{ensure_dir, FigureSink};
use crate::chart::{AxisScale, ComposedChart};
use crate::error::PlotError;
use crate::series::{Marker, StrokeStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// One `{x, y}` point
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartJsPoint {
    pub x: f64,
    pub y: f64,
}

/// Line dataset
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<ChartJsPoint>,
    pub border_color: String,
    pub background_color: String,
    /// Empty for solid lines
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub border_dash: Vec<u32>,
    /// `"cross"`, `"circle"`, or `false` for no marker
    pub point_style: serde_json::Value,
    pub point_radius: u32,
    pub fill: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartJsData {
    pub datasets: Vec<ChartJsDataset>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartJsAxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartJsAxis {
    /// `"linear"` or `"logarithmic"`
    #[serde(rename = "type")]
    pub axis_type: String,
    pub min: f64,
    pub max: f64,
    pub title: ChartJsAxisTitle,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartJsScales {
    pub x: ChartJsAxis,
    pub y: ChartJsAxis,
}

/// Title; one entry per line
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsTitle {
    pub display: bool,
    pub text: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartJsLegend {
    pub display: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartJsPlugins {
    pub title: ChartJsTitle,
    pub legend: ChartJsLegend,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartJsOptions {
    pub scales: ChartJsScales,
    pub plugins: ChartJsPlugins,
}

/// Chart.js line chart document
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsLineChart {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartJsData,
    pub options: ChartJsOptions,
}

/// Convert a composed chart to a Chart.js line chart.
pub fn to_chartjs(chart: &ComposedChart) -> ChartJsLineChart {
    let datasets = chart
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let color = chart.color(i).hex();
            let (point_style, point_radius) = match s.marker {
                Marker::Plus => (serde_json::Value::from("cross"), 4),
                Marker::Circle => (serde_json::Value::from("circle"), 3),
                Marker::None => (serde_json::Value::Bool(false), 0),
            };
            ChartJsDataset {
                label: s.label.clone(),
                data: chart
                    .points(i)
                    .into_iter()
                    .map(|(x, y)| ChartJsPoint { x, y })
                    .collect(),
                border_color: color.clone(),
                background_color: color,
                border_dash: match s.stroke {
                    StrokeStyle::Solid => Vec::new(),
                    StrokeStyle::Dashed => vec![6, 4],
                },
                point_style,
                point_radius,
                fill: false,
            }
        })
        .collect();

    let axis = |scale: AxisScale, (min, max): (f64, f64), label: &str| ChartJsAxis {
        axis_type: match scale {
            AxisScale::Linear => "linear".to_string(),
            AxisScale::Log => "logarithmic".to_string(),
        },
        min,
        max,
        title: ChartJsAxisTitle {
            display: !label.is_empty(),
            text: label.to_string(),
        },
    };

    ChartJsLineChart {
        chart_type: "line".to_string(),
        data: ChartJsData { datasets },
        options: ChartJsOptions {
            scales: ChartJsScales {
                x: axis(chart.spec.x_scale, chart.x_limits, &chart.spec.x_label),
                y: axis(AxisScale::Linear, chart.y_limits, &chart.spec.y_label),
            },
            plugins: ChartJsPlugins {
                title: ChartJsTitle {
                    display: true,
                    text: chart.title_lines().into_iter().map(String::from).collect(),
                },
                legend: ChartJsLegend {
                    display: chart.has_legend(),
                },
            },
        },
    }
}

/// Writes `<dir>/<stem>.json`.
#[derive(Debug, Clone)]
pub struct ChartJsSink {
    output_dir: PathBuf,
}

impl ChartJsSink {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

impl FigureSink for ChartJsSink {
    fn name(&self) -> &'static str {
        "chartjs"
    }

    fn emit(&self, chart: &ComposedChart, stem: &str) -> Result<Option<PathBuf>, PlotError> {
        ensure_dir(&self.output_dir)?;
        let path = self.output_dir.join(format!("{}.json", stem));
        let json = serde_json::to_string_pretty(&to_chartjs(chart)).map_err(PlotError::render)?;
        std::fs::write(&path, &json).map_err(|e| PlotError::io(&path, &e))?;

        info!(path = %path.display(), size = json.len(), "Chart.js figure written");
        Ok(Some(path))
    }
}
