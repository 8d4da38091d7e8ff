//! Power-law complexity estimation.
//!
//! Fits `t ≈ a · n^h` to paired samples by ordinary least squares on the
//! log-transformed data `x = ln n`, `y = ln t`:
//!
//! ```text
//! h = (mean(x·y) − mean(x)·mean(y)) / (mean(x·x) − mean(x)²)
//! k = mean(y) − h·mean(x)
//! a = exp(k)
//! ```
//!
//! Numerator and denominator are evaluated in their centred form,
//! `mean((x − x̄)(y − ȳ))` and `mean((x − x̄)²)`, which is algebraically
//! identical and does not cancel catastrophically for large `ln n`.
//!
//! ## Examples
//!
//! ```
//! use bench_core::estimator::ComplexityEstimator;
//!
//! // Quadratic growth: t = 0.5 · n²
//! let n = [1.0, 2.0, 4.0, 8.0, 16.0];
//! let t: Vec<f64> = n.iter().map(|&n: &f64| 0.5 * n.powi(2)).collect();
//!
//! let fit = ComplexityEstimator::default().fit(&n, &t).unwrap();
//! assert!((fit.exponent - 2.0).abs() < 1e-12);
//! assert!((fit.scale - 0.5).abs() < 1e-12);
//! ```

use crate::error::FitError;
use crate::types::Series;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default lower bound on the variance of `ln n`.
///
/// Below it the slope denominator is treated as zero and the fit is
/// reported as degenerate.
pub const DEFAULT_DEGENERATE_EPSILON: f64 = 1e-12;

/// Fitted power law `t ≈ scale · n^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComplexityFit {
    /// Constant factor `a > 0`
    pub scale: f64,
    /// Empirical growth exponent `h` (≈ 1 for linear growth)
    pub exponent: f64,
}

impl ComplexityFit {
    /// Evaluate the fitted model at sample count `n`
    pub fn predict(&self, n: f64) -> f64 {
        self.scale * n.powf(self.exponent)
    }
}

impl fmt::Display for ComplexityFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a = {:.6e}, h = {:.4}", self.scale, self.exponent)
    }
}

/// Straight line `y = slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope of the best-fit line
    pub slope: f64,
    /// Intercept of the best-fit line
    pub intercept: f64,
}

/// Log-log least-squares estimator for power-law complexity.
///
/// Stateless apart from the degeneracy threshold; fitting is a pure
/// function of its input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityEstimator {
    epsilon: f64,
}

impl Default for ComplexityEstimator {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_DEGENERATE_EPSILON,
        }
    }
}

impl ComplexityEstimator {
    /// Create an estimator with a custom degeneracy threshold.
    ///
    /// # Panics
    ///
    /// Panics if `epsilon` is not a positive finite number.
    pub fn new(epsilon: f64) -> Self {
        assert!(
            epsilon > 0.0 && epsilon.is_finite(),
            "epsilon must be positive and finite"
        );
        Self { epsilon }
    }

    /// Degeneracy threshold on the variance of `ln n`
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Fit `t ≈ a · n^h`.
    ///
    /// # Errors
    ///
    /// - `FitError::LengthMismatch` if `n` and `t` differ in length
    /// - `FitError::NonPositiveMeasurement` if any `n_i` or `t_i` is not a
    ///   positive finite number; checked before any logarithm is taken
    /// - `FitError::DegenerateFit` for fewer than two points or when the
    ///   variance of `ln n` is below the threshold
    pub fn fit(&self, n: &[f64], t: &[f64]) -> Result<ComplexityFit, FitError> {
        if n.len() != t.len() {
            return Err(FitError::LengthMismatch {
                n_len: n.len(),
                t_len: t.len(),
            });
        }

        if let Some((index, (&ni, &ti))) = n
            .iter()
            .zip(t)
            .enumerate()
            .find(|(_, (ni, ti))| !is_positive(**ni) || !is_positive(**ti))
        {
            return Err(FitError::NonPositiveMeasurement { index, n: ni, t: ti });
        }

        let xs: Vec<f64> = n.iter().map(|v| v.ln()).collect();
        let ys: Vec<f64> = t.iter().map(|v| v.ln()).collect();
        let line = self.best_fit_line(&xs, &ys)?;

        Ok(ComplexityFit {
            scale: line.intercept.exp(),
            exponent: line.slope,
        })
    }

    /// Fit a series whose x values are sample counts
    pub fn fit_series(&self, series: &Series) -> Result<ComplexityFit, FitError> {
        self.fit(series.xs(), series.ys())
    }

    /// Ordinary least-squares line through `(xs, ys)`.
    ///
    /// # Errors
    ///
    /// `FitError::LengthMismatch` or `FitError::DegenerateFit`, as for [`fit`](Self::fit).
    pub fn best_fit_line(&self, xs: &[f64], ys: &[f64]) -> Result<LinearFit, FitError> {
        if xs.len() != ys.len() {
            return Err(FitError::LengthMismatch {
                n_len: xs.len(),
                t_len: ys.len(),
            });
        }
        let points = xs.len();
        if points < 2 {
            return Err(FitError::DegenerateFit {
                points,
                variance: 0.0,
            });
        }

        let count = points as f64;
        let mean_x = xs.iter().sum::<f64>() / count;
        let mean_y = ys.iter().sum::<f64>() / count;

        let (covariance, variance) = xs.iter().zip(ys).fold((0.0, 0.0), |(cov, var), (&x, &y)| {
            let dx = x - mean_x;
            (cov + dx * (y - mean_y), var + dx * dx)
        });
        let covariance = covariance / count;
        let variance = variance / count;

        if variance.abs() < self.epsilon {
            return Err(FitError::DegenerateFit { points, variance });
        }

        let slope = covariance / variance;
        Ok(LinearFit {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_doubling_scenario() {
        let n = [10.0, 20.0, 40.0, 80.0];
        let t = [1.0, 2.0, 4.0, 8.0];

        let fit = ComplexityEstimator::default().fit(&n, &t).unwrap();

        assert_relative_eq!(fit.exponent, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.scale, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_two_points_exact_fit() {
        let n = [3.0, 7.0];
        let t = [2.5 * 3.0_f64.sqrt(), 2.5 * 7.0_f64.sqrt()];

        let fit = ComplexityEstimator::default().fit(&n, &t).unwrap();

        assert_relative_eq!(fit.exponent, 0.5, epsilon = 1e-12);
        assert_relative_eq!(fit.scale, 2.5, max_relative = 1e-12);
        for (&ni, &ti) in n.iter().zip(&t) {
            assert_relative_eq!(fit.predict(ni), ti, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_idempotent() {
        let n = [10.0, 20.0, 40.0, 80.0, 160.0];
        let t = [0.0237, 0.0255, 0.0727, 0.128, 0.257];
        let estimator = ComplexityEstimator::default();

        let first = estimator.fit(&n, &t).unwrap();
        let second = estimator.fit(&n, &t).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_repeated_n_is_degenerate() {
        let n = [100.0, 100.0, 100.0];
        let t = [1.0, 1.1, 0.9];

        let err = ComplexityEstimator::default().fit(&n, &t).unwrap_err();
        match err {
            FitError::DegenerateFit { points, .. } => assert_eq!(points, 3),
            other => panic!("Expected DegenerateFit, got {:?}", other),
        }
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let err = ComplexityEstimator::default().fit(&[10.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            FitError::DegenerateFit {
                points: 1,
                variance: 0.0
            }
        );
    }

    #[test]
    fn test_empty_is_degenerate() {
        let err = ComplexityEstimator::default().fit(&[], &[]).unwrap_err();
        assert!(matches!(err, FitError::DegenerateFit { points: 0, .. }));
    }

    #[test]
    fn test_epsilon_boundary() {
        let estimator = ComplexityEstimator::default();

        // ln-spread of 1e-7 gives a variance of 2.5e-15, below 1e-12
        let tight = [100.0, 100.0 * (1.0 + 1e-7)];
        assert!(matches!(
            estimator.fit(&tight, &[1.0, 2.0]),
            Err(FitError::DegenerateFit { .. })
        ));

        // ln(101/100) ≈ 0.00995 gives a variance of ≈ 2.5e-5
        let spread = [100.0, 101.0];
        assert!(estimator.fit(&spread, &[1.0, 2.0]).is_ok());

        // The same spread is degenerate under a coarser threshold
        let coarse = ComplexityEstimator::new(1e-4);
        assert!(matches!(
            coarse.fit(&spread, &[1.0, 2.0]),
            Err(FitError::DegenerateFit { .. })
        ));
    }

    #[test]
    fn test_non_positive_time() {
        let err = ComplexityEstimator::default()
            .fit(&[10.0, 20.0, 40.0], &[1.0, 0.0, 4.0])
            .unwrap_err();
        assert_eq!(
            err,
            FitError::NonPositiveMeasurement {
                index: 1,
                n: 20.0,
                t: 0.0
            }
        );
    }

    #[test]
    fn test_non_positive_n_reported_before_degeneracy() {
        // Also degenerate, but positivity is checked first
        let err = ComplexityEstimator::default()
            .fit(&[-5.0, -5.0], &[1.0, 1.0])
            .unwrap_err();
        assert!(matches!(err, FitError::NonPositiveMeasurement { index: 0, .. }));
    }

    #[test]
    fn test_nan_is_rejected() {
        let err = ComplexityEstimator::default()
            .fit(&[10.0, 20.0], &[1.0, f64::NAN])
            .unwrap_err();
        assert!(matches!(err, FitError::NonPositiveMeasurement { index: 1, .. }));
    }

    #[test]
    fn test_length_mismatch() {
        let err = ComplexityEstimator::default()
            .fit(&[10.0, 20.0], &[1.0])
            .unwrap_err();
        assert_eq!(err, FitError::LengthMismatch { n_len: 2, t_len: 1 });
    }

    #[test]
    fn test_fit_series() {
        let series = Series::new(vec![10.0, 20.0, 40.0, 80.0], vec![1.0, 2.0, 4.0, 8.0]).unwrap();
        let fit = ComplexityEstimator::default().fit_series(&series).unwrap();
        assert_relative_eq!(fit.exponent, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_best_fit_line() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0];
        let line = ComplexityEstimator::default().best_fit_line(&xs, &ys).unwrap();
        assert_relative_eq!(line.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(line.intercept, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_display() {
        let fit = ComplexityFit {
            scale: 0.1,
            exponent: 1.0,
        };
        assert_eq!(fit.to_string(), "a = 1.000000e-1, h = 1.0000");
    }

    #[test]
    #[should_panic(expected = "epsilon must be positive")]
    fn test_new_rejects_zero_epsilon() {
        let _ = ComplexityEstimator::new(0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_noiseless_power_law_round_trip(
                scale in 1e-3_f64..1e3,
                exponent in -2.0_f64..3.0,
                counts in prop::collection::btree_set(1u32..1_000_000, 2..16),
            ) {
                let n: Vec<f64> = counts.iter().map(|&c| c as f64).collect();
                let (lo, hi) = (n[0], n[n.len() - 1]);
                prop_assume!(hi / lo >= 2.0);

                let t: Vec<f64> = n.iter().map(|&ni| scale * ni.powf(exponent)).collect();
                let fit = ComplexityEstimator::default().fit(&n, &t).unwrap();

                prop_assert!((fit.exponent - exponent).abs() < 1e-9,
                    "exponent {} vs {}", fit.exponent, exponent);
                prop_assert!(((fit.scale - scale) / scale).abs() < 1e-9,
                    "scale {} vs {}", fit.scale, scale);
            }

            #[test]
            fn test_fit_is_pure(
                t in prop::collection::vec(1e-6_f64..1e6, 4),
            ) {
                let n = [10.0, 20.0, 40.0, 80.0];
                let estimator = ComplexityEstimator::default();
                prop_assert_eq!(estimator.fit(&n, &t), estimator.fit(&n, &t));
            }
        }
    }
}
