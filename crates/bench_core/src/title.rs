//! Title metadata written by the simulation engine.
//!
//! The engine writes one free-text title describing the run parameters.
//! Charts use it verbatim as a title, and two marker tokens split it:
//! - the text before the *filename marker* becomes the figure file prefix
//! - the text from the *params marker* onwards is the parameter summary
//!
//! Marker tokens are conventions of the upstream title generator, so they
//! are configuration rather than constants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default token ending the filename prefix
pub const DEFAULT_FILENAME_MARKER: &str = "simulations";

/// Default token starting the parameter summary
pub const DEFAULT_PARAMS_MARKER: &str = "(Smin";

/// Marker tokens used to split a title.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TitleMarkers {
    /// The filename prefix is everything before this token
    pub filename_marker: String,
    /// The parameter summary is everything from this token on
    pub params_marker: String,
}

impl Default for TitleMarkers {
    fn default() -> Self {
        Self {
            filename_marker: DEFAULT_FILENAME_MARKER.to_string(),
            params_marker: DEFAULT_PARAMS_MARKER.to_string(),
        }
    }
}

/// Read-only title string of a simulation run.
///
/// # Examples
///
/// ```
/// use bench_core::{TitleMarkers, TitleMetadata};
///
/// let title = TitleMetadata::new("European call 1000 simulations (Smin = 10, Smax = 50)");
/// let markers = TitleMarkers::default();
///
/// assert_eq!(title.filename_prefix(&markers), Some("European call 1000 "));
/// assert_eq!(title.params(&markers), "(Smin = 10, Smax = 50)");
/// assert_eq!(title.file_stem(&markers, "price"), "European_call_1000_price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleMetadata {
    text: String,
}

impl TitleMetadata {
    /// Wrap a title, dropping trailing line terminators
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        let trimmed = text.trim_end_matches(['\r', '\n']).len();
        text.truncate(trimmed);
        Self { text }
    }

    /// Full title text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text before the filename marker, `None` if the marker is absent
    pub fn filename_prefix(&self, markers: &TitleMarkers) -> Option<&str> {
        if markers.filename_marker.is_empty() {
            return None;
        }
        self.text
            .find(&markers.filename_marker)
            .map(|end| &self.text[..end])
    }

    /// Text from the params marker to the end.
    ///
    /// Falls back to the whole title when the marker is absent.
    pub fn params(&self, markers: &TitleMarkers) -> &str {
        if markers.params_marker.is_empty() {
            return &self.text;
        }
        match self.text.find(&markers.params_marker) {
            Some(start) => &self.text[start..],
            None => &self.text,
        }
    }

    /// Figure file stem: sanitised filename prefix followed by `suffix`.
    ///
    /// Without a prefix the stem is the sanitised suffix alone.
    pub fn file_stem(&self, markers: &TitleMarkers, suffix: &str) -> String {
        let prefix = self.filename_prefix(markers).unwrap_or("");
        sanitize_file_component(&format!("{}{}", prefix, suffix))
    }
}

impl std::fmt::Display for TitleMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Replace whitespace and path separators with underscores
pub fn sanitize_file_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect()
}
