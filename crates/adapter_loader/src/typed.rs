//! Typed readers on top of the table reader.

use crate::table::{load_columns, load_rows};
use bench_core::{LoadError, MeasurementRecord, PathMatrix, Series};
use std::path::Path;
use tracing::info;

/// Load a two-column curve, e.g. option price against initial stock price.
pub fn load_series(path: impl AsRef<Path>) -> Result<Series, LoadError> {
    let path = path.as_ref();
    let mut columns = load_columns(path, 2)?.into_iter();
    let (xs, ys) = match (columns.next(), columns.next()) {
        (Some(xs), Some(ys)) => (xs, ys),
        _ => return Err(LoadError::empty(path)),
    };
    Series::new(xs, ys).map_err(|e| LoadError::malformed(path, 0, e.to_string()))
}

/// Load a benchmark measurement file with the column layout
/// `sampleCount, eulerTime, eulerError, exactTime, exactError`.
///
/// Shape is validated here; positivity of counts and times is a
/// precondition of the estimator and is checked there.
pub fn load_measurements(path: impl AsRef<Path>) -> Result<MeasurementRecord, LoadError> {
    let path = path.as_ref();
    let columns: [Vec<f64>; MeasurementRecord::COLUMNS] = load_columns(path, MeasurementRecord::COLUMNS)?
        .try_into()
        .map_err(|_| LoadError::empty(path))?;
    let record = MeasurementRecord::from_columns(columns)
        .map_err(|e| LoadError::malformed(path, 0, e.to_string()))?;

    info!(path = %path.display(), runs = record.len(), "Loaded benchmark measurements");
    Ok(record)
}

/// Load simulated asset paths, one path per row.
///
/// The width of the first row fixes the number of time points; every
/// other row must match it.
pub fn load_paths(path: impl AsRef<Path>) -> Result<PathMatrix, LoadError> {
    let path = path.as_ref();
    let rows = load_rows(path, None)?;
    let matrix = PathMatrix::from_rows(rows)
        .ok_or_else(|| LoadError::malformed(path, 0, "rows differ in width"))?;

    info!(
        path = %path.display(),
        paths = matrix.path_count(),
        steps = matrix.steps(),
        "Loaded simulated paths"
    );
    Ok(matrix)
}
