//! Complexity command implementation
//!
//! Fits `T(n) = a * n^h` to every configured benchmark variant and prints
//! the report grouped by contract direction.

use bench_analysis::{render_report, BenchmarkComparator, MeasurementLayout, VariantCatalog, VariantReport};
use bench_core::types::SimulationMethod;
use bench_core::ComplexityEstimator;
use infra_config::AnalysisConfig;
use tracing::info;

use super::RunContext;
use crate::{CliError, Result};

/// Catalog from the `[benchmark]` dimensions; both simulation methods always
pub fn catalog(config: &AnalysisConfig) -> VariantCatalog {
    let bench = &config.benchmark;
    VariantCatalog::from_dimensions(
        &bench.directions,
        &bench.styles,
        &SimulationMethod::ALL,
        &bench.statistics,
    )
}

pub fn layout(config: &AnalysisConfig) -> MeasurementLayout {
    MeasurementLayout::new(&config.data_dir, &config.benchmark.file_template)
}

pub fn comparator(config: &AnalysisConfig) -> BenchmarkComparator {
    BenchmarkComparator::new(
        catalog(config),
        ComplexityEstimator::new(config.benchmark.degenerate_epsilon),
    )
}

/// Fail when no variant could be fitted at all.
pub fn ensure_any_fit(reports: &[VariantReport]) -> Result<()> {
    if reports.iter().any(VariantReport::is_ok) {
        return Ok(());
    }
    match reports.iter().find_map(|r| r.outcome.as_ref().err()) {
        Some(err) => Err(CliError::Analysis(err.clone())),
        None => Err(CliError::InvalidArgument(
            "benchmark catalog is empty".to_string(),
        )),
    }
}

/// Run the complexity command
pub fn run(ctx: &RunContext) -> Result<()> {
    let comparator = comparator(&ctx.config);
    info!(
        variants = comparator.catalog().len(),
        data_dir = %ctx.config.data_dir.display(),
        "Estimating complexity"
    );

    let reports = comparator.run(&layout(&ctx.config));
    print!("{}", render_report(&reports));
    ensure_any_fit(&reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bench_core::types::{ContractDirection, OptionStyle, Statistic};

    #[test]
    fn test_catalog_follows_config() {
        let mut config = AnalysisConfig::default();
        config.benchmark.directions = vec![ContractDirection::Put];
        config.benchmark.styles = vec![OptionStyle::European];
        config.benchmark.statistics = vec![Statistic::Time, Statistic::Error];

        let catalog = catalog(&config);
        assert_eq!(catalog.len(), 4);
        assert!(catalog.iter().all(|v| v.direction == ContractDirection::Put));
    }

    #[test]
    fn test_ensure_any_fit_rejects_all_failures() {
        let mut config = AnalysisConfig::default();
        config.data_dir = "does/not/exist".into();
        let reports = comparator(&config).run(&layout(&config));

        assert_eq!(reports.len(), 12);
        let err = ensure_any_fit(&reports).unwrap_err();
        assert!(matches!(err, CliError::Analysis(_)));
    }
}
