//! Plotting errors.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from composing or rendering a chart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// No series, or the first series has no samples.
    #[error("Empty chart '{title}': nothing to plot")]
    EmptyChart { title: String },

    /// A logarithmic axis was requested over a non-positive domain.
    #[error("Invalid domain for log axis: minimum x = {min}")]
    InvalidDomain { min: f64 },

    /// The drawing backend failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Terminal setup or input failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Writing a figure file failed.
    #[error("IO error writing {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

impl PlotError {
    pub fn render(message: impl std::fmt::Display) -> Self {
        Self::Render(message.to_string())
    }

    pub fn io(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}
