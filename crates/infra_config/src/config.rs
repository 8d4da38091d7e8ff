//! Configuration management
//!
//! Handles loading configuration from TOML files, environment variables and CLI arguments.

use bench_core::estimator::DEFAULT_DEGENERATE_EPSILON;
use bench_core::types::{ContractDirection, OptionStyle, Statistic};
use bench_core::TitleMarkers;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Default measurement file name template
pub const DEFAULT_FILE_TEMPLATE: &str = "{direction}_style_{style}_measurements.txt";

const ENV_DATA_DIR: &str = "MCVIZ_DATA_DIR";
const ENV_FIGURES_DIR: &str = "MCVIZ_FIGURES_DIR";
const ENV_TITLE_FILE: &str = "MCVIZ_TITLE_FILE";
const ENV_LOG_LEVEL: &str = "MCVIZ_LOG_LEVEL";
const ENV_DPI: &str = "MCVIZ_DPI";
const ENV_SHOW: &str = "MCVIZ_SHOW";
const ENV_EXPORT_JSON: &str = "MCVIZ_EXPORT_JSON";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid DPI: {0}. Must be between 10 and 1200")]
    InvalidDpi(u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid degenerate-fit epsilon: {0}. Must be positive and finite")]
    InvalidEpsilon(f64),

    #[error("Invalid file template '{0}': must contain {{direction}} and {{style}}")]
    InvalidTemplate(String),

    #[error("Benchmark catalog has no {0}")]
    EmptyCatalog(&'static str),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Figure output settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Raster resolution; the canvas is 16x9 inches
    pub dpi: u32,
    /// Show each figure in the terminal viewer before moving on
    pub show: bool,
    /// Also write a Chart.js JSON document per figure
    pub export_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dpi: 100,
            show: true,
            export_json: false,
        }
    }
}

/// Benchmark catalog settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Measurement file name, with `{direction}` and `{style}` placeholders
    pub file_template: String,
    pub directions: Vec<ContractDirection>,
    pub styles: Vec<OptionStyle>,
    pub statistics: Vec<Statistic>,
    /// Minimum variance of `ln(n)` accepted by the estimator
    pub degenerate_epsilon: f64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            file_template: DEFAULT_FILE_TEMPLATE.to_string(),
            directions: ContractDirection::ALL.to_vec(),
            styles: OptionStyle::ALL.to_vec(),
            statistics: vec![Statistic::Time],
            degenerate_epsilon: DEFAULT_DEGENERATE_EPSILON,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Directory holding the engine's text output
    pub data_dir: PathBuf,
    /// Directory figures are written to
    pub figures_dir: PathBuf,
    /// Title file, relative to `data_dir`
    pub title_file: String,
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    pub output: OutputConfig,
    pub title: TitleMarkers,
    pub benchmark: BenchmarkConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            figures_dir: PathBuf::from("figures"),
            title_file: "title.txt".to_string(),
            log_level: LogLevel::Info,
            output: OutputConfig::default(),
            title: TitleMarkers::default(),
            benchmark: BenchmarkConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Create a new AnalysisConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: AnalysisConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables over the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `MCVIZ_*` variables found by `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(ENV_FIGURES_DIR) {
            self.figures_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup(ENV_TITLE_FILE) {
            self.title_file = file;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(dpi) = lookup(ENV_DPI) {
            self.output.dpi = dpi
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}={} is not an integer", ENV_DPI, dpi)))?;
        }
        if let Some(show) = lookup(ENV_SHOW) {
            self.output.show = parse_flag(ENV_SHOW, &show)?;
        }
        if let Some(json) = lookup(ENV_EXPORT_JSON) {
            self.output.export_json = parse_flag(ENV_EXPORT_JSON, &json)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(10..=1200).contains(&self.output.dpi) {
            return Err(ConfigError::InvalidDpi(self.output.dpi));
        }

        let eps = self.benchmark.degenerate_epsilon;
        if !(eps.is_finite() && eps > 0.0) {
            return Err(ConfigError::InvalidEpsilon(eps));
        }

        let template = &self.benchmark.file_template;
        if !template.contains("{direction}") || !template.contains("{style}") {
            return Err(ConfigError::InvalidTemplate(template.clone()));
        }

        if self.benchmark.directions.is_empty() {
            return Err(ConfigError::EmptyCatalog("directions"));
        }
        if self.benchmark.styles.is_empty() {
            return Err(ConfigError::EmptyCatalog("styles"));
        }
        if self.benchmark.statistics.is_empty() {
            return Err(ConfigError::EmptyCatalog("statistics"));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(dir) = &cli.data_dir {
            self.data_dir = dir.clone();
        }
        if let Some(dir) = &cli.figures_dir {
            self.figures_dir = dir.clone();
        }
        if let Some(dpi) = cli.dpi {
            self.output.dpi = dpi;
        }
        if cli.no_show {
            self.output.show = false;
        }
        if cli.json {
            self.output.export_json = true;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        Ok(())
    }

    /// Path of a data file inside `data_dir`
    pub fn data_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    /// Path of the title file
    pub fn title_path(&self) -> PathBuf {
        self.data_path(&self.title_file)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvError(format!(
            "{}={} is not a boolean",
            key, value
        ))),
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub figures_dir: Option<PathBuf>,
    pub dpi: Option<u32>,
    /// Disable the terminal viewer
    pub no_show: bool,
    /// Enable Chart.js export
    pub json: bool,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<AnalysisConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<AnalysisConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.figures_dir, PathBuf::from("figures"));
        assert_eq!(config.title_path(), PathBuf::from("data").join("title.txt"));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.output.dpi, 100);
        assert!(config.output.show);
        assert!(!config.output.export_json);
        assert_eq!(config.benchmark.file_template, DEFAULT_FILE_TEMPLATE);
        assert_eq!(config.benchmark.directions.len(), 2);
        assert_eq!(config.benchmark.styles.len(), 3);
        assert_eq!(config.benchmark.statistics, vec![Statistic::Time]);
        assert_eq!(config.benchmark.degenerate_epsilon, 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
        assert_eq!(format!("{}", LogLevel::Error), "error");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            data_dir = "out/run1"
            log_level = "debug"

            [output]
            dpi = 150
            show = false
            export_json = true

            [title]
            filename_marker = "paths"

            [benchmark]
            file_template = "{direction}_{style}.txt"
            directions = ["put"]
            styles = ["european", "geometric-asian"]
            statistics = ["time", "error"]
            degenerate_epsilon = 1e-9
        "#;

        let config: AnalysisConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("out/run1"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output.dpi, 150);
        assert!(!config.output.show);
        assert!(config.output.export_json);
        assert_eq!(config.title.filename_marker, "paths");
        assert_eq!(config.title.params_marker, "(Smin");
        assert_eq!(config.benchmark.directions, vec![ContractDirection::Put]);
        assert_eq!(
            config.benchmark.styles,
            vec![OptionStyle::European, OptionStyle::GeometricAsian]
        );
        assert_eq!(
            config.benchmark.statistics,
            vec![Statistic::Time, Statistic::Error]
        );
        assert_eq!(config.benchmark.degenerate_epsilon, 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: AnalysisConfig = toml::from_str("[output]\ndpi = 72\n").unwrap();
        assert_eq!(config.output.dpi, 72);
        assert!(config.output.show);
        assert_eq!(config.figures_dir, PathBuf::from("figures"));
    }

    #[test]
    fn test_toml_rejects_bad_log_level() {
        let result: Result<AnalysisConfig, _> = toml::from_str(r#"log_level = "loud""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = AnalysisConfig::default();
        config.output.dpi = 5;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDpi(5)));

        let mut config = AnalysisConfig::default();
        config.benchmark.degenerate_epsilon = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidEpsilon(0.0)));

        let mut config = AnalysisConfig::default();
        config.benchmark.file_template = "measurements.txt".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTemplate(_))
        ));

        let mut config = AnalysisConfig::default();
        config.benchmark.statistics.clear();
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyCatalog("statistics"))
        );
    }

    #[test]
    fn test_apply_env() {
        let mut config = AnalysisConfig::default();
        config
            .apply_env(env_of(&[
                ("MCVIZ_DATA_DIR", "/tmp/engine"),
                ("MCVIZ_DPI", "200"),
                ("MCVIZ_SHOW", "false"),
                ("MCVIZ_EXPORT_JSON", "1"),
                ("MCVIZ_LOG_LEVEL", "warn"),
            ]))
            .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/engine"));
        assert_eq!(config.output.dpi, 200);
        assert!(!config.output.show);
        assert!(config.output.export_json);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_apply_env_rejects_garbage() {
        let mut config = AnalysisConfig::default();
        assert!(matches!(
            config.apply_env(env_of(&[("MCVIZ_DPI", "high")])),
            Err(ConfigError::EnvError(_))
        ));
        assert!(matches!(
            config.apply_env(env_of(&[("MCVIZ_SHOW", "maybe")])),
            Err(ConfigError::EnvError(_))
        ));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = AnalysisConfig::default();
        let cli = CliArgs {
            figures_dir: Some(PathBuf::from("plots")),
            dpi: Some(300),
            no_show: true,
            json: true,
            log_level: Some("debug".to_string()),
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.figures_dir, PathBuf::from("plots"));
        assert_eq!(config.output.dpi, 300);
        assert!(!config.output.show);
        assert!(config.output.export_json);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mcviz.toml");
        std::fs::write(
            &path,
            "data_dir = \"from_file\"\nfigures_dir = \"file_figs\"\n[output]\ndpi = 120\n",
        )
        .unwrap();

        let cli = CliArgs {
            config_file: Some(path),
            dpi: Some(300),
            ..Default::default()
        };
        let config = build_config_with(
            &cli,
            env_of(&[("MCVIZ_DATA_DIR", "from_env"), ("MCVIZ_DPI", "150")]),
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("from_env"));
        assert_eq!(config.figures_dir, PathBuf::from("file_figs"));
        assert_eq!(config.output.dpi, 300);
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with(&CliArgs::default(), env_of(&[])).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/mcviz.toml")),
            ..Default::default()
        };
        let err = build_config_with(&cli, env_of(&[])).unwrap_err();
        assert!(err.to_string().starts_with("Configuration file error"));
    }

    #[test]
    fn test_config_error_display() {
        assert!(ConfigError::InvalidDpi(0).to_string().contains("Invalid DPI"));
        assert_eq!(
            ConfigError::InvalidTemplate("x.txt".into()).to_string(),
            "Invalid file template 'x.txt': must contain {direction} and {style}"
        );
        assert_eq!(
            ConfigError::EmptyCatalog("styles").to_string(),
            "Benchmark catalog has no styles"
        );
    }

    #[test]
    fn test_shipped_config_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../mcviz.toml");
        let config = AnalysisConfig::from_file(&path).unwrap();
        config.validate().unwrap();
        assert_eq!(config.benchmark.statistics, vec![Statistic::Time, Statistic::Error]);
        assert_eq!(config.benchmark.styles, OptionStyle::ALL.to_vec());
        assert_eq!(config.title.params_marker, "(Smin");
    }

    #[test]
    fn test_style_names_accept_parse_aliases() {
        let config: AnalysisConfig = toml::from_str(
            r#"
            [benchmark]
            styles = ["european", "asian-arithmetic", "geometric"]
            "#,
        )
        .unwrap();
        assert_eq!(config.benchmark.styles, OptionStyle::ALL.to_vec());
    }
}
