//! PNG figures via plotters.

use super::{ensure_dir, FigureSink};
use crate::chart::{format_tick, ComposedChart};
use crate::error::PlotError;
use crate::series::{Marker, StrokeStyle};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};
use tracing::info;

/// Canvas size in inches
const CANVAS_INCHES: (u32, u32) = (16, 9);

/// Writes `<dir>/<stem>.png` on a 16x9 inch canvas.
///
/// Font sizes and line widths are given in points and scaled by `dpi / 72`.
#[derive(Debug, Clone)]
pub struct PngSink {
    output_dir: PathBuf,
    dpi: u32,
}

impl PngSink {
    pub fn new(output_dir: impl AsRef<Path>, dpi: u32) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            dpi,
        }
    }

    /// Pixel size of the canvas
    pub fn canvas_size(&self) -> (u32, u32) {
        (CANVAS_INCHES.0 * self.dpi, CANVAS_INCHES.1 * self.dpi)
    }

    /// Points to pixels
    fn px(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }

    fn font(&self, points: f64, style: FontStyle) -> TextStyle<'static> {
        TextStyle::from(FontDesc::new(FontFamily::SansSerif, self.px(points), style)).color(&BLACK)
    }

    /// Render `chart` to `path`.
    pub fn render_to(&self, chart: &ComposedChart, path: &Path) -> Result<(), PlotError> {
        let (width, _) = self.canvas_size();
        let root = BitMapBackend::new(path, self.canvas_size()).into_drawing_area();
        root.fill(&WHITE).map_err(PlotError::render)?;

        let style = &chart.spec.style;
        let margin = self.px(6.0).round() as i32;

        // Title block, one text row per line
        let title_weight = if style.title_bold {
            FontStyle::Bold
        } else {
            FontStyle::Normal
        };
        let title_style = self
            .font(style.title_font_size, title_weight)
            .pos(Pos::new(HPos::Center, VPos::Top));
        let lines = chart.title_lines();
        let line_height = (self.px(style.title_font_size) * 1.25).ceil() as i32;
        let title_height = margin * 2 + line_height * lines.len() as i32;

        let (title_area, plot_area) = root.split_vertically(title_height);
        for (i, line) in lines.iter().enumerate() {
            title_area
                .draw(&Text::new(
                    line.to_string(),
                    (width as i32 / 2, margin + line_height * i as i32),
                    title_style.clone(),
                ))
                .map_err(PlotError::render)?;
        }

        let (x_min, x_max) = chart.axis_x_limits();
        let (y_min, y_max) = chart.y_limits;
        let mut cc = ChartBuilder::on(&plot_area)
            .margin(margin)
            .x_label_area_size(self.px(style.label_font_size * 3.0).round() as i32)
            .y_label_area_size(self.px(style.label_font_size * 4.5).round() as i32)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(PlotError::render)?;

        let label_font = self.font(style.label_font_size, FontStyle::Normal);
        let tick_font = self.font(style.tick_font_size, FontStyle::Normal);
        let x_scale = chart.spec.x_scale;
        let x_formatter = |v: &f64| format_tick(x_scale.from_axis(*v));
        let y_formatter = |v: &f64| format_tick(*v);

        cc.configure_mesh()
            .x_desc(chart.spec.x_label.as_str())
            .y_desc(chart.spec.y_label.as_str())
            .axis_desc_style(label_font.clone())
            .label_style(tick_font)
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .draw()
            .map_err(PlotError::render)?;

        let line_width = self.px(1.5).round().max(1.0) as u32;
        let dash = self.px(6.0).round() as i32;
        let gap = self.px(3.0).round() as i32;
        let marker_size = self.px(4.0).round() as i32;
        let legend_len = self.px(20.0).round() as i32;

        for (i, s) in chart.series.iter().enumerate() {
            let (r, g, b) = chart.color(i).rgb();
            let color = RGBColor(r, g, b);
            let line_style = color.stroke_width(line_width);
            let points = chart.axis_points(i);

            let anno = match s.stroke {
                StrokeStyle::Solid => cc.draw_series(LineSeries::new(points.clone(), line_style)),
                StrokeStyle::Dashed => cc.draw_series(DashedLineSeries::new(
                    points.clone(),
                    dash,
                    gap,
                    line_style,
                )),
            }
            .map_err(PlotError::render)?;

            if let Some(label) = &s.label {
                anno.label(label.as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + legend_len, y)], line_style)
                });
            }

            match s.marker {
                Marker::Plus => {
                    cc.draw_series(points.iter().map(|&c| {
                        EmptyElement::at(c)
                            + PathElement::new(vec![(-marker_size, 0), (marker_size, 0)], line_style)
                            + PathElement::new(vec![(0, -marker_size), (0, marker_size)], line_style)
                    }))
                    .map_err(PlotError::render)?;
                }
                Marker::Circle => {
                    cc.draw_series(
                        points
                            .iter()
                            .map(|&c| Circle::new(c, marker_size, color.filled())),
                    )
                    .map_err(PlotError::render)?;
                }
                Marker::None => {}
            }
        }

        if chart.has_legend() {
            cc.configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.85))
                .border_style(&BLACK)
                .label_font(label_font)
                .draw()
                .map_err(PlotError::render)?;
        }

        root.present().map_err(PlotError::render)?;
        Ok(())
    }
}

impl FigureSink for PngSink {
    fn name(&self) -> &'static str {
        "png"
    }

    fn emit(&self, chart: &ComposedChart, stem: &str) -> Result<Option<PathBuf>, PlotError> {
        ensure_dir(&self.output_dir)?;
        let path = self.output_dir.join(format!("{}.png", stem));
        self.render_to(chart, &path)?;

        let (width, height) = self.canvas_size();
        info!(path = %path.display(), width, height, dpi = self.dpi, "Figure written");
        Ok(Some(path))
    }
}
