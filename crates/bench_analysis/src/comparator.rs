//! Per-variant complexity estimation.

use crate::catalog::{VariantCatalog, VariantId};
use crate::layout::MeasurementSource;
use bench_core::types::{ContractDirection, OptionStyle};
use bench_core::{AnalysisError, ComplexityEstimator, ComplexityFit, LoadError, MeasurementRecord};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Outcome of fitting one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantReport {
    /// Variant the outcome belongs to
    pub variant: VariantId,
    /// Fit, or why the variant has none
    pub outcome: Result<ComplexityFit, AnalysisError>,
}

impl VariantReport {
    /// True when the variant was fitted
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// `"<label> complexity: a = …, h = …"` or
    /// `"<label> complexity: unavailable (<kind>: <error>)"`
    pub fn line(&self) -> String {
        match &self.outcome {
            Ok(fit) => format!("{} complexity: {}", self.variant.report_label(), fit),
            Err(err) => format!(
                "{} complexity: unavailable ({}: {})",
                self.variant.report_label(),
                err.kind(),
                err
            ),
        }
    }
}

/// Measurement records of every file a catalog needs, each loaded once.
///
/// A failed load is kept as its error so every variant reading that file
/// reports the same cause.
#[derive(Debug, Clone, Default)]
pub struct MeasurementSet {
    records: BTreeMap<(ContractDirection, OptionStyle), Result<MeasurementRecord, LoadError>>,
}

impl MeasurementSet {
    /// Load every file `catalog` needs through `source`, once each
    pub fn load<S: MeasurementSource + ?Sized>(source: &S, catalog: &VariantCatalog) -> Self {
        let mut records = BTreeMap::new();
        for (direction, style) in catalog.files() {
            let result = source.load(direction, style);
            if let Err(err) = &result {
                warn!(%direction, %style, error = %err, "Measurement file unavailable");
            }
            records.insert((direction, style), result);
        }
        Self { records }
    }

    /// Load result of one file, `None` if the catalog did not need it
    pub fn get(
        &self,
        direction: ContractDirection,
        style: OptionStyle,
    ) -> Option<&Result<MeasurementRecord, LoadError>> {
        self.records.get(&(direction, style))
    }

    /// Successfully loaded record, if any
    pub fn record(&self, direction: ContractDirection, style: OptionStyle) -> Option<&MeasurementRecord> {
        self.get(direction, style).and_then(|r| r.as_ref().ok())
    }

    /// True when at least one file of `direction` loaded
    pub fn has_direction(&self, direction: ContractDirection) -> bool {
        self.records
            .iter()
            .any(|((d, _), r)| *d == direction && r.is_ok())
    }
}

/// Fits every catalog variant independently.
#[derive(Debug, Clone)]
pub struct BenchmarkComparator {
    catalog: VariantCatalog,
    estimator: ComplexityEstimator,
}

impl BenchmarkComparator {
    /// Comparator over `catalog`, fitting with `estimator`
    pub fn new(catalog: VariantCatalog, estimator: ComplexityEstimator) -> Self {
        Self { catalog, estimator }
    }

    /// Variants in report order
    pub fn catalog(&self) -> &VariantCatalog {
        &self.catalog
    }

    /// Load every measurement file once, then fit each variant.
    pub fn run<S: MeasurementSource + ?Sized>(&self, source: &S) -> Vec<VariantReport> {
        let set = MeasurementSet::load(source, &self.catalog);
        self.evaluate(&set)
    }

    /// Fit each variant from already loaded records, in catalog order.
    pub fn evaluate(&self, set: &MeasurementSet) -> Vec<VariantReport> {
        self.catalog
            .iter()
            .map(|&variant| {
                let outcome = self.fit_variant(set, variant);
                match &outcome {
                    Ok(fit) => info!(
                        variant = %variant,
                        scale = fit.scale,
                        exponent = fit.exponent,
                        "Fitted complexity"
                    ),
                    Err(err) => warn!(variant = %variant, kind = %err.kind(), "Variant skipped"),
                }
                VariantReport { variant, outcome }
            })
            .collect()
    }

    fn fit_variant(
        &self,
        set: &MeasurementSet,
        variant: VariantId,
    ) -> Result<ComplexityFit, AnalysisError> {
        let record = match set.get(variant.direction, variant.style) {
            Some(Ok(record)) => record,
            Some(Err(err)) => return Err(err.clone().into()),
            // Set loaded for a different catalog
            None => return Err(AnalysisError::Load(LoadError::not_found(format!(
                "{}_style_{}",
                variant.direction.name(),
                variant.style.code()
            )))),
        };

        let fit = self.estimator.fit(
            record.sample_counts(),
            record.values(variant.method, variant.statistic),
        )?;
        Ok(fit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bench_core::types::{SimulationMethod, Statistic};
    use bench_core::ErrorKind;
    use std::cell::RefCell;

    /// In-memory source counting how often each file is requested.
    struct FakeSource {
        present: Vec<(ContractDirection, OptionStyle)>,
        calls: RefCell<Vec<(ContractDirection, OptionStyle)>>,
    }

    impl FakeSource {
        fn new(present: Vec<(ContractDirection, OptionStyle)>) -> Self {
            Self {
                present,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl MeasurementSource for FakeSource {
        fn load(
            &self,
            direction: ContractDirection,
            style: OptionStyle,
        ) -> Result<MeasurementRecord, LoadError> {
            self.calls.borrow_mut().push((direction, style));
            if !self.present.contains(&(direction, style)) {
                return Err(LoadError::not_found(format!("{}_{}", direction, style.code())));
            }
            // Euler time = 0.1 n, exact time = 0.01 n^2, errors = 1/sqrt(n)
            let n = vec![10.0, 20.0, 40.0, 80.0];
            let euler_t = n.iter().map(|x| 0.1 * x).collect();
            let exact_t = n.iter().map(|x| 0.01 * x * x).collect();
            let err: Vec<f64> = n.iter().map(|x: &f64| 1.0 / x.sqrt()).collect();
            MeasurementRecord::from_columns([n, euler_t, err.clone(), exact_t, err])
                .map_err(|e| LoadError::malformed("fake", 0, e.to_string()))
        }
    }

    #[test]
    fn test_each_file_loaded_once() {
        let source = FakeSource::new(vec![(ContractDirection::Call, OptionStyle::European)]);
        let comparator =
            BenchmarkComparator::new(VariantCatalog::standard(), ComplexityEstimator::default());
        let reports = comparator.run(&source);

        assert_eq!(reports.len(), 12);
        assert_eq!(source.calls.borrow().len(), 6);
    }

    #[test]
    fn test_fits_each_method_column() {
        let source = FakeSource::new(vec![(ContractDirection::Call, OptionStyle::European)]);
        let catalog = VariantCatalog::from_dimensions(
            &[ContractDirection::Call],
            &[OptionStyle::European],
            &SimulationMethod::ALL,
            &[Statistic::Time, Statistic::Error],
        );
        let reports = BenchmarkComparator::new(catalog, ComplexityEstimator::default()).run(&source);

        let fits: Vec<ComplexityFit> = reports
            .iter()
            .map(|r| *r.outcome.as_ref().unwrap())
            .collect();
        assert_relative_eq!(fits[0].exponent, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fits[0].scale, 0.1, epsilon = 1e-12);
        assert_relative_eq!(fits[1].exponent, -0.5, epsilon = 1e-12);
        assert_relative_eq!(fits[2].exponent, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fits[2].scale, 0.01, epsilon = 1e-12);
        assert_relative_eq!(fits[3].exponent, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_file_does_not_abort_siblings() {
        let source = FakeSource::new(vec![(ContractDirection::Call, OptionStyle::European)]);
        let catalog = VariantCatalog::from_dimensions(
            &[ContractDirection::Call],
            &[OptionStyle::European, OptionStyle::ArithmeticAsian],
            &[SimulationMethod::Euler],
            &[Statistic::Time],
        );
        let reports = BenchmarkComparator::new(catalog, ComplexityEstimator::default()).run(&source);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].variant.style, OptionStyle::European);
        assert!(reports[0].is_ok());
        assert_eq!(reports[1].variant.style, OptionStyle::ArithmeticAsian);
        assert_eq!(
            reports[1].outcome.as_ref().unwrap_err().kind(),
            ErrorKind::InputNotFound
        );
    }

    #[test]
    fn test_report_lines() {
        let variant = VariantId::new(
            ContractDirection::Call,
            OptionStyle::European,
            SimulationMethod::Euler,
            Statistic::Time,
        );
        let ok = VariantReport {
            variant,
            outcome: Ok(ComplexityFit {
                scale: 0.1,
                exponent: 1.0,
            }),
        };
        assert_eq!(
            ok.line(),
            "European Euler time complexity: a = 1.000000e-1, h = 1.0000"
        );

        let failed = VariantReport {
            variant,
            outcome: Err(LoadError::not_found("data/call_style_0_measurements.txt").into()),
        };
        assert_eq!(
            failed.line(),
            "European Euler time complexity: unavailable (InputNotFoundError: Input not found: data/call_style_0_measurements.txt)"
        );
    }

    #[test]
    fn test_has_direction() {
        let source = FakeSource::new(vec![(ContractDirection::Put, OptionStyle::GeometricAsian)]);
        let set = MeasurementSet::load(&source, &VariantCatalog::standard());
        assert!(set.has_direction(ContractDirection::Put));
        assert!(!set.has_direction(ContractDirection::Call));
        assert!(set
            .record(ContractDirection::Put, OptionStyle::GeometricAsian)
            .is_some());
    }
}
