//! Interactive terminal view using ratatui.

use super::FigureSink;
use crate::chart::{format_tick, ComposedChart};
use crate::error::PlotError;
use crate::series::{SeriesColor, StrokeStyle};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Shows each chart full-screen and waits for `q`, `Esc` or `Enter`.
///
/// Skipped with a warning when stdout is not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSink;

impl TerminalSink {
    pub fn new() -> Self {
        Self
    }
}

impl FigureSink for TerminalSink {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn emit(&self, chart: &ComposedChart, stem: &str) -> Result<Option<PathBuf>, PlotError> {
        if !io::stdout().is_terminal() {
            warn!(figure = stem, "stdout is not a terminal, skipping interactive view");
            return Ok(None);
        }

        let mut session = TerminalSession::open()?;
        session.show(chart)?;
        debug!(figure = stem, "Interactive view closed");
        Ok(None)
    }
}

/// Raw-mode alternate screen, restored on drop.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn open() -> Result<Self, PlotError> {
        enable_raw_mode().map_err(terminal_error)?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(terminal_error)?;
        Ok(Self { terminal })
    }

    fn show(&mut self, chart: &ComposedChart) -> Result<(), PlotError> {
        loop {
            self.terminal
                .draw(|frame| {
                    let area = frame.size();
                    draw_chart(frame, area, chart);
                })
                .map_err(terminal_error)?;

            if let Event::Key(key) = event::read().map_err(terminal_error)? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
                {
                    return Ok(());
                }
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn terminal_error(err: io::Error) -> PlotError {
    PlotError::Terminal(err.to_string())
}

fn term_color(color: SeriesColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Axis labels at both ends and the middle, in data units
fn axis_labels<'a>(bounds: [f64; 2], to_data: impl Fn(f64) -> f64) -> Vec<Span<'a>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::raw(format_tick(to_data(*v))))
        .collect()
}

/// Draw a composed chart: title rows, the plot, and a legend row when enabled.
pub fn draw_chart(frame: &mut Frame, area: Rect, chart: &ComposedChart) {
    let title_lines = chart.title_lines();
    let legend_height = if chart.has_legend() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(title_lines.len() as u16),
            Constraint::Min(0),
            Constraint::Length(legend_height),
        ])
        .split(area);

    let title_style = if chart.spec.style.title_bold {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let title = Paragraph::new(
        title_lines
            .iter()
            .map(|l| Line::from(Span::styled(*l, title_style)))
            .collect::<Vec<_>>(),
    )
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let data: Vec<Vec<(f64, f64)>> = (0..chart.series.len())
        .map(|i| chart.axis_points(i))
        .collect();
    let datasets: Vec<Dataset> = chart
        .series
        .iter()
        .zip(&data)
        .enumerate()
        .map(|(i, (s, points))| {
            let marker = match s.stroke {
                StrokeStyle::Solid => symbols::Marker::Braille,
                StrokeStyle::Dashed => symbols::Marker::Dot,
            };
            Dataset::default()
                .marker(marker)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(term_color(chart.color(i))))
                .data(points)
        })
        .collect();

    let (x_min, x_max) = chart.axis_x_limits();
    let x_bounds = [x_min, x_max];
    let y_bounds = [chart.y_limits.0, chart.y_limits.1];
    let x_scale = chart.spec.x_scale;

    let plot = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title(chart.spec.x_label.as_str())
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds, |v| x_scale.from_axis(v))),
        )
        .y_axis(
            Axis::default()
                .title(chart.spec.y_label.as_str())
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds, |v| v)),
        );
    frame.render_widget(plot, chunks[1]);

    if chart.has_legend() {
        let mut spans: Vec<Span> = Vec::new();
        for (i, s) in chart.series.iter().enumerate() {
            let Some(label) = &s.label else { continue };
            if !spans.is_empty() {
                spans.push(Span::raw(" | "));
            }
            let sample = match s.stroke {
                StrokeStyle::Solid => "── ",
                StrokeStyle::Dashed => "╌╌ ",
            };
            spans.push(Span::styled(
                format!("{}{}", sample, label),
                Style::default().fg(term_color(chart.color(i))),
            ));
        }
        let legend = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(legend, chunks[2]);
    }
}
