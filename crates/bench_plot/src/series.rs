//! Styled series: a data series plus how it is drawn.

use bench_core::Series;
use serde::Serialize;

/// Line stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
}

/// Point marker drawn at every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Plus,
    Circle,
    #[default]
    None,
}

/// Categorical series colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesColor {
    Blue,
    Orange,
    Green,
    Red,
    Purple,
    Brown,
    Pink,
    Gray,
    Olive,
    Cyan,
    /// Outside the default cycle
    Black,
}

impl SeriesColor {
    /// Default colour cycle
    pub const CYCLE: [SeriesColor; 10] = [
        SeriesColor::Blue,
        SeriesColor::Orange,
        SeriesColor::Green,
        SeriesColor::Red,
        SeriesColor::Purple,
        SeriesColor::Brown,
        SeriesColor::Pink,
        SeriesColor::Gray,
        SeriesColor::Olive,
        SeriesColor::Cyan,
    ];

    /// Colour of the `index`-th series when none is given
    pub fn cycle(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    /// 8-bit RGB components
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            SeriesColor::Blue => (0x1f, 0x77, 0xb4),
            SeriesColor::Orange => (0xff, 0x7f, 0x0e),
            SeriesColor::Green => (0x2c, 0xa0, 0x2c),
            SeriesColor::Red => (0xd6, 0x27, 0x28),
            SeriesColor::Purple => (0x94, 0x67, 0xbd),
            SeriesColor::Brown => (0x8c, 0x56, 0x4b),
            SeriesColor::Pink => (0xe3, 0x77, 0xc2),
            SeriesColor::Gray => (0x7f, 0x7f, 0x7f),
            SeriesColor::Olive => (0xbc, 0xbd, 0x22),
            SeriesColor::Cyan => (0x17, 0xbe, 0xcf),
            SeriesColor::Black => (0x00, 0x00, 0x00),
        }
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// A series with its label and drawing style.
///
/// Unlabelled series are drawn but left out of the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    /// Data to draw
    pub series: Series,
    /// Legend entry; unlabelled series are left out of the legend
    pub label: Option<String>,
    /// Line stroke
    pub stroke: StrokeStyle,
    /// Marker at every sample
    pub marker: Marker,
    /// `None` picks from the colour cycle by position
    pub color: Option<SeriesColor>,
}

impl PlotSeries {
    /// Labelled solid line without markers
    pub fn new(series: Series, label: impl Into<String>) -> Self {
        Self {
            series,
            label: Some(label.into()),
            stroke: StrokeStyle::Solid,
            marker: Marker::None,
            color: None,
        }
    }

    /// Solid line with no legend entry
    pub fn unlabelled(series: Series) -> Self {
        Self {
            series,
            label: None,
            stroke: StrokeStyle::Solid,
            marker: Marker::None,
            color: None,
        }
    }

    /// Set the line stroke
    pub fn stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Set the sample marker
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    /// Fix the colour instead of taking it from the cycle
    pub fn color(mut self, color: SeriesColor) -> Self {
        self.color = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_cycle_wraps() {
        assert_eq!(SeriesColor::cycle(0), SeriesColor::Blue);
        assert_eq!(SeriesColor::cycle(3), SeriesColor::Red);
        assert_eq!(SeriesColor::cycle(10), SeriesColor::Blue);
    }

    #[test]
    fn test_hex() {
        assert_eq!(SeriesColor::Blue.hex(), "#1f77b4");
        assert_eq!(SeriesColor::Cyan.hex(), "#17becf");
        assert_eq!(SeriesColor::Black.hex(), "#000000");
        assert!(!SeriesColor::CYCLE.contains(&SeriesColor::Black));
    }

    #[test]
    fn test_builder() {
        let s = PlotSeries::new(Series::from_points([(1.0, 2.0)]), "MC")
            .stroke(StrokeStyle::Dashed)
            .marker(Marker::Circle)
            .color(SeriesColor::Green);
        assert_eq!(s.label.as_deref(), Some("MC"));
        assert_eq!(s.stroke, StrokeStyle::Dashed);
        assert_eq!(s.marker, Marker::Circle);
        assert_eq!(s.color, Some(SeriesColor::Green));

        let path = PlotSeries::unlabelled(Series::from_points([(0.0, 25.0)]));
        assert!(path.label.is_none());
    }
}
