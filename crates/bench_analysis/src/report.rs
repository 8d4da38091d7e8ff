//! Plain-text complexity report.

use crate::comparator::VariantReport;
use bench_core::types::ContractDirection;
use std::fmt::Write;

/// Heading printed above one direction's results
pub fn section_heading(direction: ContractDirection) -> &'static str {
    match direction {
        ContractDirection::Call => "Call options:",
        ContractDirection::Put => "Put options:",
    }
}

/// Render reports grouped by direction, keeping catalog order inside each group.
///
/// ```text
/// Call options:
///   European Euler time complexity: a = 2.451000e-3, h = 0.9512
///   European exact time complexity: unavailable (InputNotFoundError: ...)
/// ```
pub fn render_report(reports: &[VariantReport]) -> String {
    let mut out = String::new();
    let mut directions: Vec<ContractDirection> = Vec::new();
    for report in reports {
        if !directions.contains(&report.variant.direction) {
            directions.push(report.variant.direction);
        }
    }

    for (i, direction) in directions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", section_heading(*direction));
        for report in reports.iter().filter(|r| r.variant.direction == *direction) {
            let _ = writeln!(out, "  {}", report.line());
        }
    }
    out
}
