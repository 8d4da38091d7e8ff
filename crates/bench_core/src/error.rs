//! Error types for structured error handling.
//!
//! This module provides:
//! - `LoadError`: Errors from reading measurement, series and title files
//! - `FitError`: Errors from the power-law complexity estimator
//! - `AnalysisError`: Union of the two, as reported per benchmark variant
//! - `ErrorKind`: Flat tag used when reports need to name the failure class
//!
//! Loader errors carry the file path and enough shape context for a human to
//! fix the upstream data. None of them are retried: inputs are static.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading delimited input files.
///
/// # Variants
///
/// - `InputNotFound`: The file does not exist
/// - `MalformedInput`: Wrong field count or non-numeric token in a row
/// - `EmptySeries`: The file holds no data rows
/// - `Io`: Any other I/O failure while reading
///
/// # Examples
///
/// ```
/// use bench_core::LoadError;
///
/// let err = LoadError::malformed("data/prices.txt", 3, "expected 2 fields, found 3");
/// assert_eq!(
///     format!("{}", err),
///     "Malformed input in data/prices.txt at row 3: expected 2 fields, found 3"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Input file is missing.
    #[error("Input not found: {}", .path.display())]
    InputNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// A row has the wrong shape or an unparsable token.
    #[error("Malformed input in {} at row {row}: {reason}", .path.display())]
    MalformedInput {
        /// File containing the bad row
        path: PathBuf,
        /// 1-based data row index
        row: usize,
        /// Expected vs actual shape, or the offending token
        reason: String,
    },

    /// The file contains no usable rows.
    #[error("Empty series: {} contains no data rows", .path.display())]
    EmptySeries {
        /// The empty file
        path: PathBuf,
    },

    /// Underlying I/O failure other than a missing file.
    #[error("IO error reading {}: {message}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Rendered I/O error
        message: String,
    },
}

impl LoadError {
    /// Create an `InputNotFound` error
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::InputNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a `MalformedInput` error
    pub fn malformed(path: impl AsRef<Path>, row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.as_ref().to_path_buf(),
            row,
            reason: reason.into(),
        }
    }

    /// Create an `EmptySeries` error
    pub fn empty(path: impl AsRef<Path>) -> Self {
        Self::EmptySeries {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Map an I/O error, promoting `NotFound` to `InputNotFound`
    pub fn from_io(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(path)
        } else {
            Self::Io {
                path: path.as_ref().to_path_buf(),
                message: err.to_string(),
            }
        }
    }

    /// Path of the file the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Self::InputNotFound { path }
            | Self::MalformedInput { path, .. }
            | Self::EmptySeries { path }
            | Self::Io { path, .. } => path,
        }
    }
}

/// Errors raised by the power-law complexity estimator.
///
/// # Examples
///
/// ```
/// use bench_core::FitError;
///
/// let err = FitError::NonPositiveMeasurement { index: 2, n: 40.0, t: 0.0 };
/// assert!(format!("{}", err).contains("index 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// A sample count or measurement is zero, negative or not finite.
    #[error("Non-positive measurement at index {index}: n = {n}, t = {t}")]
    NonPositiveMeasurement {
        /// Position of the offending sample
        index: usize,
        /// Sample count at that position
        n: f64,
        /// Measurement at that position
        t: f64,
    },

    /// The log-transformed sample counts have (near) zero variance.
    #[error("Degenerate fit: {points} point(s), variance of ln(n) = {variance:e}")]
    DegenerateFit {
        /// Number of points supplied
        points: usize,
        /// Denominator of the slope formula
        variance: f64,
    },

    /// Sample counts and measurements differ in length.
    #[error("Length mismatch: {n_len} sample counts, {t_len} measurements")]
    LengthMismatch {
        /// Number of sample counts
        n_len: usize,
        /// Number of measurements
        t_len: usize,
    },
}

/// Failure of one benchmark variant, from loading or fitting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The variant's measurement file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The variant's series could not be fitted.
    #[error(transparent)]
    Fit(#[from] FitError),
}

impl AnalysisError {
    /// Flat failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Load(LoadError::InputNotFound { .. }) => ErrorKind::InputNotFound,
            Self::Load(LoadError::MalformedInput { .. }) => ErrorKind::MalformedInput,
            Self::Load(LoadError::EmptySeries { .. }) => ErrorKind::EmptySeries,
            Self::Load(LoadError::Io { .. }) => ErrorKind::Io,
            Self::Fit(FitError::NonPositiveMeasurement { .. }) => ErrorKind::NonPositiveMeasurement,
            Self::Fit(FitError::DegenerateFit { .. }) => ErrorKind::DegenerateFit,
            Self::Fit(FitError::LengthMismatch { .. }) => ErrorKind::LengthMismatch,
        }
    }
}

/// Failure class tag for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing input file
    InputNotFound,
    /// Wrong column count or non-numeric token
    MalformedInput,
    /// Zero usable rows
    EmptySeries,
    /// Other I/O failure
    Io,
    /// Regression precondition: all values must be positive
    NonPositiveMeasurement,
    /// Regression precondition: distinct sample counts required
    DegenerateFit,
    /// Regression precondition: aligned inputs required
    LengthMismatch,
}

impl ErrorKind {
    /// Stable name used in printed reports
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::InputNotFound => "InputNotFoundError",
            ErrorKind::MalformedInput => "MalformedInputError",
            ErrorKind::EmptySeries => "EmptySeriesError",
            ErrorKind::Io => "IoError",
            ErrorKind::NonPositiveMeasurement => "NonPositiveMeasurementError",
            ErrorKind::DegenerateFit => "DegenerateFitError",
            ErrorKind::LengthMismatch => "LengthMismatchError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
