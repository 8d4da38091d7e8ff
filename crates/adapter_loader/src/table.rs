//! Delimited numeric table reader.

use bench_core::LoadError;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Read a comma-delimited numeric table row by row.
///
/// With `expected_width = Some(k)` every row must hold exactly `k` fields;
/// with `None` the width of the first row is enforced on the rest.
///
/// # Errors
///
/// - `LoadError::InputNotFound` if the file does not exist
/// - `LoadError::MalformedInput` for a row of the wrong width or with a
///   non-numeric token
/// - `LoadError::EmptySeries` if no data rows were found
/// - `LoadError::Io` for other read failures
pub fn load_rows(
    path: impl AsRef<Path>,
    expected_width: Option<usize>,
) -> Result<Vec<Vec<f64>>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::from_io(path, &e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width = expected_width;

    for result in reader.records() {
        let row = rows.len() + 1;
        let record = result.map_err(|e| map_csv_error(path, row, &e))?;

        // Whitespace-only lines trim down to a single empty field
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        let expected = *width.get_or_insert(record.len());
        if record.len() != expected {
            return Err(LoadError::malformed(
                path,
                row,
                format!("expected {} fields, found {}", expected, record.len()),
            ));
        }

        let values = record
            .iter()
            .enumerate()
            .map(|(column, field)| {
                field.parse::<f64>().map_err(|_| {
                    LoadError::malformed(
                        path,
                        row,
                        format!("non-numeric token '{}' in column {}", field, column + 1),
                    )
                })
            })
            .collect::<Result<Vec<f64>, LoadError>>()?;

        rows.push(values);
    }

    if rows.is_empty() {
        return Err(LoadError::empty(path));
    }

    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = width.unwrap_or(0),
        "Loaded table"
    );

    Ok(rows)
}

/// Read a `k`-column table and return its columns.
///
/// Each returned column has one entry per data row, in file order.
///
/// # Examples
///
/// ```no_run
/// let columns = adapter_loader::load_columns("data/option_price.txt", 2).unwrap();
/// assert_eq!(columns.len(), 2);
/// assert_eq!(columns[0].len(), columns[1].len());
/// ```
pub fn load_columns(path: impl AsRef<Path>, k: usize) -> Result<Vec<Vec<f64>>, LoadError> {
    let rows = load_rows(path, Some(k))?;
    let mut columns: Vec<Vec<f64>> = (0..k).map(|_| Vec::with_capacity(rows.len())).collect();
    for row in rows {
        for (column, value) in columns.iter_mut().zip(row) {
            column.push(value);
        }
    }
    Ok(columns)
}

fn map_csv_error(path: &Path, row: usize, err: &csv::Error) -> LoadError {
    match err.kind() {
        csv::ErrorKind::Io(io) => LoadError::from_io(path, io),
        _ => LoadError::malformed(path, row, err.to_string()),
    }
}
