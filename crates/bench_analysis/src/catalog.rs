//! Variant identifiers and the ordered catalog of tracked variants.

use bench_core::types::{ContractDirection, OptionStyle, SimulationMethod, Statistic};
use std::fmt;

/// One benchmark variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantId {
    /// Contract direction, selects the measurement file
    pub direction: ContractDirection,
    /// Option style, selects the measurement file
    pub style: OptionStyle,
    /// Simulation method, selects the column pair
    pub method: SimulationMethod,
    /// Measured statistic, selects time or error column
    pub statistic: Statistic,
}

impl VariantId {
    /// Variant from its four dimensions
    pub fn new(
        direction: ContractDirection,
        style: OptionStyle,
        method: SimulationMethod,
        statistic: Statistic,
    ) -> Self {
        Self {
            direction,
            style,
            method,
            statistic,
        }
    }

    /// Legend label, e.g. `"Asian Arithmetic exact time"`.
    ///
    /// The direction is not part of the label; reports and figures are
    /// already split per direction.
    pub fn label(&self) -> String {
        format!(
            "{} {} {}",
            self.style.label(),
            self.method.label(),
            self.statistic.label()
        )
    }

    /// Report label, e.g. `"Arithmetic Asian exact time"`
    pub fn report_label(&self) -> String {
        format!(
            "{} {} {}",
            self.style.report_name(),
            self.method.label(),
            self.statistic.label()
        )
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.label())
    }
}

/// Ordered set of variants to analyse.
///
/// Order is the product directions × styles × methods × statistics, in the
/// order each dimension was given. Reports and legends follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantCatalog {
    variants: Vec<VariantId>,
}

impl VariantCatalog {
    /// {call, put} × {European, Asian arithmetic, Asian geometric} × {Euler, exact} × {time}
    pub fn standard() -> Self {
        Self::from_dimensions(
            &ContractDirection::ALL,
            &OptionStyle::ALL,
            &SimulationMethod::ALL,
            &[Statistic::Time],
        )
    }

    /// Build the ordered product of the given dimensions
    pub fn from_dimensions(
        directions: &[ContractDirection],
        styles: &[OptionStyle],
        methods: &[SimulationMethod],
        statistics: &[Statistic],
    ) -> Self {
        let mut variants =
            Vec::with_capacity(directions.len() * styles.len() * methods.len() * statistics.len());
        for &direction in directions {
            for &style in styles {
                for &method in methods {
                    for &statistic in statistics {
                        variants.push(VariantId::new(direction, style, method, statistic));
                    }
                }
            }
        }
        Self { variants }
    }

    /// Number of variants
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// True when any dimension was empty
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Variants in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &VariantId> {
        self.variants.iter()
    }

    /// Directions in catalog order, without repeats
    pub fn directions(&self) -> Vec<ContractDirection> {
        let mut out: Vec<ContractDirection> = Vec::new();
        for v in &self.variants {
            if !out.contains(&v.direction) {
                out.push(v.direction);
            }
        }
        out
    }

    /// (direction, style) pairs in catalog order, without repeats.
    ///
    /// Each pair corresponds to one measurement file.
    pub fn files(&self) -> Vec<(ContractDirection, OptionStyle)> {
        let mut out: Vec<(ContractDirection, OptionStyle)> = Vec::new();
        for v in &self.variants {
            let key = (v.direction, v.style);
            if !out.contains(&key) {
                out.push(key);
            }
        }
        out
    }

    /// Variants of one direction and statistic, in catalog order
    pub fn select(&self, direction: ContractDirection, statistic: Statistic) -> Vec<VariantId> {
        self.variants
            .iter()
            .filter(|v| v.direction == direction && v.statistic == statistic)
            .copied()
            .collect()
    }
}

impl Default for VariantCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
