//! mcviz - Benchmark Reports and Charts for Monte Carlo Option Pricing
//!
//! Operational entry point for analysing the text output of the pricing
//! engine.
//!
//! # Commands
//!
//! - `mcviz complexity` - Fit `T(n) = a * n^h` per variant and print the report
//! - `mcviz benchmark` - Report plus time and error figures per direction
//! - `mcviz greek --kind <kind>` - Price or greek against the initial stock price
//! - `mcviz stddev` - Estimator standard deviation, with and without variance reduction
//! - `mcviz paths` - Simulated asset paths
//! - `mcviz check` - Which inputs are present

use anyhow::Result;
use clap::{Parser, Subcommand};
use infra_config::{build_config, CliArgs};
use service_cli::commands::{self, greek::GreekKind};
use service_cli::RunContext;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Monte Carlo benchmark analysis and charting
#[derive(Parser)]
#[command(name = "mcviz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the engine output
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory figures are written to
    #[arg(long, global = true)]
    figures_dir: Option<PathBuf>,

    /// Raster resolution of PNG figures
    #[arg(long, global = true)]
    dpi: Option<u32>,

    /// Do not open the terminal viewer
    #[arg(long, global = true)]
    no_show: bool,

    /// Also export Chart.js JSON for every figure
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the complexity of every benchmark variant
    Complexity,

    /// Complexity report plus time and error figures
    Benchmark,

    /// Plot an option price or greek
    Greek {
        /// Quantity to plot
        #[arg(short, long, value_enum, default_value = "price")]
        kind: GreekKind,
    },

    /// Plot the standard deviation of the Monte Carlo estimate
    Stddev,

    /// Plot simulated asset paths
    Paths,

    /// Check configuration and input files
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            data_dir: self.data_dir.clone(),
            figures_dir: self.figures_dir.clone(),
            dpi: self.dpi,
            no_show: self.no_show,
            json: self.json,
            log_level: self.verbose.then(|| "debug".to_string()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    debug!(?config, "Configuration resolved");
    let ctx = RunContext::new(config);
    info!(sinks = ?ctx.output.sink_names(), "mcviz starting");

    match cli.command {
        Commands::Complexity => commands::complexity::run(&ctx)?,
        Commands::Benchmark => commands::benchmark::run(&ctx)?,
        Commands::Greek { kind } => commands::greek::run(&ctx, kind)?,
        Commands::Stddev => commands::stddev::run(&ctx)?,
        Commands::Paths => commands::paths::run(&ctx)?,
        Commands::Check => commands::check::run(&ctx)?,
    }
    Ok(())
}
