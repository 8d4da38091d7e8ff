//! Numeric series types produced by the loader.

use super::variant::{SimulationMethod, Statistic};
use crate::error::FitError;

/// An ordered sequence of paired samples `(x_i, y_i)`.
///
/// Order is significant and preserved from the input. Ascending `x` is
/// expected but not enforced. A `Series` is immutable once built.
///
/// # Examples
///
/// ```
/// use bench_core::Series;
///
/// let s = Series::new(vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]).unwrap();
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.x_range(), Some((1.0, 3.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Series {
    /// Build a series from aligned columns.
    ///
    /// # Errors
    ///
    /// Returns `FitError::LengthMismatch` if the columns differ in length.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, FitError> {
        if xs.len() != ys.len() {
            return Err(FitError::LengthMismatch {
                n_len: xs.len(),
                t_len: ys.len(),
            });
        }
        Ok(Self { xs, ys })
    }

    /// Build a series from `(x, y)` pairs
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (xs, ys) = points.into_iter().unzip();
        Self { xs, ys }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// True when the series holds no samples
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Independent variable
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Dependent variable
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Iterate over `(x, y)` pairs in order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Minimum and maximum of the x values, `None` when empty
    pub fn x_range(&self) -> Option<(f64, f64)> {
        min_max(&self.xs)
    }

    /// Minimum and maximum of the y values, `None` when empty
    pub fn y_range(&self) -> Option<(f64, f64)> {
        min_max(&self.ys)
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied().filter(|v| v.is_finite());
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Benchmark measurements for one (option style, contract direction) file.
///
/// Row `i` holds the sample count and the elapsed time / maximum pricing
/// error of both simulation methods at that sample count.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    sample_counts: Vec<f64>,
    euler_time: Vec<f64>,
    euler_error: Vec<f64>,
    exact_time: Vec<f64>,
    exact_error: Vec<f64>,
}

impl MeasurementRecord {
    /// Column order of a measurement file
    pub const COLUMNS: usize = 5;

    /// Build a record from the five aligned columns
    /// `sampleCount, eulerTime, eulerError, exactTime, exactError`.
    ///
    /// # Errors
    ///
    /// Returns `FitError::LengthMismatch` if any column differs in length
    /// from the sample counts.
    pub fn from_columns(columns: [Vec<f64>; 5]) -> Result<Self, FitError> {
        let [sample_counts, euler_time, euler_error, exact_time, exact_error] = columns;
        for column in [&euler_time, &euler_error, &exact_time, &exact_error] {
            if column.len() != sample_counts.len() {
                return Err(FitError::LengthMismatch {
                    n_len: sample_counts.len(),
                    t_len: column.len(),
                });
            }
        }
        Ok(Self {
            sample_counts,
            euler_time,
            euler_error,
            exact_time,
            exact_error,
        })
    }

    /// Number of benchmark runs
    pub fn len(&self) -> usize {
        self.sample_counts.len()
    }

    /// True when no runs were recorded
    pub fn is_empty(&self) -> bool {
        self.sample_counts.is_empty()
    }

    /// Sample counts of each run
    pub fn sample_counts(&self) -> &[f64] {
        &self.sample_counts
    }

    /// Elapsed times for a method
    pub fn times(&self, method: SimulationMethod) -> &[f64] {
        match method {
            SimulationMethod::Euler => &self.euler_time,
            SimulationMethod::Exact => &self.exact_time,
        }
    }

    /// Maximum pricing errors for a method
    pub fn errors(&self, method: SimulationMethod) -> &[f64] {
        match method {
            SimulationMethod::Euler => &self.euler_error,
            SimulationMethod::Exact => &self.exact_error,
        }
    }

    /// Measurements of one statistic for a method
    pub fn values(&self, method: SimulationMethod, statistic: Statistic) -> &[f64] {
        match statistic {
            Statistic::Time => self.times(method),
            Statistic::Error => self.errors(method),
        }
    }

    /// `(sampleCount, statistic)` projection as a [`Series`]
    pub fn series(&self, method: SimulationMethod, statistic: Statistic) -> Series {
        Series {
            xs: self.sample_counts.clone(),
            ys: self.values(method, statistic).to_vec(),
        }
    }
}

/// Simulated asset paths, one row per path, all rows of equal width.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatrix {
    rows: Vec<Vec<f64>>,
}

impl PathMatrix {
    /// Build a matrix from rows.
    ///
    /// Returns `None` if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self { rows })
    }

    /// Number of paths
    pub fn path_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of time points per path
    pub fn steps(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Raw rows
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Path `index` as a series indexed by time step
    pub fn path_series(&self, index: usize) -> Option<Series> {
        self.rows.get(index).map(|row| {
            Series::from_points(row.iter().enumerate().map(|(i, &p)| (i as f64, p)))
        })
    }
}
