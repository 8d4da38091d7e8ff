//! Dimensions identifying a benchmark variant.
//!
//! A variant is one combination of contract direction, option style,
//! simulation method and measured statistic. The upstream engine writes one
//! measurement file per (direction, style); method and statistic select a
//! column inside it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unrecognised variant dimension name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {dimension}: '{value}'")]
pub struct ParseVariantError {
    /// Which dimension failed to parse
    pub dimension: &'static str,
    /// The rejected input
    pub value: String,
}

/// Contract direction of the benchmarked option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContractDirection {
    /// Call option
    Call,
    /// Put option
    Put,
}

impl ContractDirection {
    /// All directions in catalog order
    pub const ALL: [ContractDirection; 2] = [ContractDirection::Call, ContractDirection::Put];

    /// Lower-case name, as used in file names
    pub fn name(&self) -> &'static str {
        match self {
            ContractDirection::Call => "call",
            ContractDirection::Put => "put",
        }
    }
}

impl fmt::Display for ContractDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContractDirection {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(ContractDirection::Call),
            "put" | "p" => Ok(ContractDirection::Put),
            _ => Err(ParseVariantError {
                dimension: "contract direction",
                value: s.to_string(),
            }),
        }
    }
}

/// Option payoff style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OptionStyle {
    /// Payoff on the terminal price
    European,
    /// Payoff on the arithmetic average of the path
    #[cfg_attr(feature = "serde", serde(alias = "asian-arithmetic", alias = "arithmetic"))]
    ArithmeticAsian,
    /// Payoff on the geometric average of the path
    #[cfg_attr(feature = "serde", serde(alias = "asian-geometric", alias = "geometric"))]
    GeometricAsian,
}

impl OptionStyle {
    /// All styles in catalog order
    pub const ALL: [OptionStyle; 3] = [
        OptionStyle::European,
        OptionStyle::ArithmeticAsian,
        OptionStyle::GeometricAsian,
    ];

    /// Numeric style code used by the engine in file names
    pub fn code(&self) -> u8 {
        match self {
            OptionStyle::European => 0,
            OptionStyle::ArithmeticAsian => 1,
            OptionStyle::GeometricAsian => 2,
        }
    }

    /// Legend label, e.g. `"Asian Arithmetic"`
    pub fn label(&self) -> &'static str {
        match self {
            OptionStyle::European => "European",
            OptionStyle::ArithmeticAsian => "Asian Arithmetic",
            OptionStyle::GeometricAsian => "Asian Geometric",
        }
    }

    /// Name used in printed complexity reports, e.g. `"Arithmetic Asian"`
    pub fn report_name(&self) -> &'static str {
        match self {
            OptionStyle::European => "European",
            OptionStyle::ArithmeticAsian => "Arithmetic Asian",
            OptionStyle::GeometricAsian => "Geometric Asian",
        }
    }
}

impl fmt::Display for OptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OptionStyle {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "european" | "0" => Ok(OptionStyle::European),
            "arithmetic-asian" | "asian-arithmetic" | "arithmetic" | "1" => {
                Ok(OptionStyle::ArithmeticAsian)
            }
            "geometric-asian" | "asian-geometric" | "geometric" | "2" => {
                Ok(OptionStyle::GeometricAsian)
            }
            _ => Err(ParseVariantError {
                dimension: "option style",
                value: s.to_string(),
            }),
        }
    }
}

/// Path simulation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SimulationMethod {
    /// Euler-Maruyama discretisation
    Euler,
    /// Exact simulation of geometric Brownian motion
    Exact,
}

impl SimulationMethod {
    /// All methods in catalog order
    pub const ALL: [SimulationMethod; 2] = [SimulationMethod::Euler, SimulationMethod::Exact];

    /// Label for legends and reports
    pub fn label(&self) -> &'static str {
        match self {
            SimulationMethod::Euler => "Euler",
            SimulationMethod::Exact => "exact",
        }
    }
}

impl fmt::Display for SimulationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SimulationMethod {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "euler" => Ok(SimulationMethod::Euler),
            "exact" => Ok(SimulationMethod::Exact),
            _ => Err(ParseVariantError {
                dimension: "simulation method",
                value: s.to_string(),
            }),
        }
    }
}

/// Measured quantity of a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Statistic {
    /// Elapsed wall-clock time
    Time,
    /// Maximum pricing error against the analytical value
    Error,
}

impl Statistic {
    /// Label for legends and reports
    pub fn label(&self) -> &'static str {
        match self {
            Statistic::Time => "time",
            Statistic::Error => "maximum error",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Statistic {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "time" => Ok(Statistic::Time),
            "error" | "max-error" => Ok(Statistic::Error),
            _ => Err(ParseVariantError {
                dimension: "statistic",
                value: s.to_string(),
            }),
        }
    }
}
