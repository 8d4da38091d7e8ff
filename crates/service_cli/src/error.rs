//! Error types for the `mcviz` commands.

use bench_core::{AnalysisError, LoadError};
use bench_plot::PlotError;
use infra_config::ConfigError;
use thiserror::Error;

/// Command error type
#[derive(Debug, Error)]
pub enum CliError {
    /// A required input file is missing
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Argument rejected by a command
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Loading or fitting failed
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Composing or rendering a figure failed
    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::InputNotFound { path } => Self::FileNotFound(path.display().to_string()),
            other => Self::Analysis(AnalysisError::Load(other)),
        }
    }
}

/// Result alias for commands
pub type Result<T> = std::result::Result<T, CliError>;
