//! # infra_config
//!
//! Run configuration for the `mcviz` tools.
//!
//! Sources are merged in order of precedence:
//! 1. CLI arguments
//! 2. Environment variables (`MCVIZ_*`)
//! 3. TOML config file
//! 4. Built-in defaults
//!
//! ```toml
//! data_dir = "data"
//! figures_dir = "figures"
//! log_level = "info"
//!
//! [output]
//! dpi = 100
//! show = false
//!
//! [benchmark]
//! statistics = ["time", "error"]
//! ```

mod config;

pub use config::{
    build_config, AnalysisConfig, BenchmarkConfig, CliArgs, ConfigError, LogLevel, OutputConfig,
    DEFAULT_FILE_TEMPLATE,
};
