//! Check command implementation
//!
//! Lists every input file the other commands read and whether it exists,
//! along with the resolved output settings.

use infra_config::AnalysisConfig;
use std::fmt::Write;
use std::path::PathBuf;

use super::greek::GreekKind;
use super::{complexity, stddev, RunContext};
use crate::Result;

/// Presence of one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputStatus {
    /// Command that reads the file
    pub command: &'static str,
    pub path: PathBuf,
    pub present: bool,
}

/// Every input of every command, grouped by command
pub fn inputs(config: &AnalysisConfig) -> Vec<InputStatus> {
    let mut files: Vec<(&'static str, PathBuf)> = vec![("title", config.title_path())];

    let layout = complexity::layout(config);
    for (direction, style) in complexity::catalog(config).files() {
        files.push(("benchmark", layout.path_for(direction, style)));
    }
    for kind in GreekKind::ALL {
        for input in kind.inputs() {
            files.push(("greek", config.data_path(&input.file)));
        }
    }
    for file in stddev::input_files() {
        files.push(("stddev", config.data_path(file)));
    }
    files.push(("paths", config.data_path("paths.txt")));

    files
        .into_iter()
        .map(|(command, path)| InputStatus {
            command,
            present: path.is_file(),
            path,
        })
        .collect()
}

pub fn render(ctx: &RunContext, statuses: &[InputStatus]) -> String {
    let config = &ctx.config;
    let mut out = String::new();
    let _ = writeln!(out, "Data directory:    {}", config.data_dir.display());
    let _ = writeln!(out, "Figures directory: {}", config.figures_dir.display());
    let _ = writeln!(out, "Figure sinks:      {}", ctx.output.sink_names().join(", "));
    let _ = writeln!(out);

    let mut current = "";
    for status in statuses {
        if status.command != current {
            current = status.command;
            let _ = writeln!(out, "{}:", current);
        }
        let mark = if status.present { "ok" } else { "missing" };
        let _ = writeln!(out, "  [{}] {}", mark, status.path.display());
    }

    let present = statuses.iter().filter(|s| s.present).count();
    let _ = writeln!(out);
    let _ = writeln!(out, "{} of {} inputs present", present, statuses.len());
    out
}

/// Run the check command
pub fn run(ctx: &RunContext) -> Result<()> {
    let statuses = inputs(&ctx.config);
    print!("{}", render(ctx, &statuses));
    Ok(())
}
