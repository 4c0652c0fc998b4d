//! Renders the benchmark report: a header with the theoretical complexities of the container under test,
//! then one table per phase -- its rows come from [crate::low_level_analysis::types::LevelMeasurement]'s `Display` -- closed by the phase's observations.

use crate::{
    configs::{HEADER_SEPARATOR_WIDTH, LOAD_TABLE_SEPARATOR_WIDTH, SEARCH_TABLE_SEPARATOR_WIDTH},
    containers::ContainerVariant,
    low_level_analysis::types::PhaseSummary,
    runners::adaptive::Phase,
};
use once_cell::sync::Lazy;
use std::fmt::Write;


static HEADER_SEPARATOR:       Lazy<String> = Lazy::new(|| "-".repeat(HEADER_SEPARATOR_WIDTH));
static SEARCH_TABLE_SEPARATOR: Lazy<String> = Lazy::new(|| "-".repeat(SEARCH_TABLE_SEPARATOR_WIDTH));
static LOAD_TABLE_SEPARATOR:   Lazy<String> = Lazy::new(|| "-".repeat(LOAD_TABLE_SEPARATOR_WIDTH));


/// The container name & the theoretical complexity of each of its operations
pub fn header(variant: ContainerVariant) -> String {
    let mut header = format!("\n{} TESTING -- {}\n\n", variant.name(), variant.rust_type());
    for (operation, complexity) in variant.theoretical_complexities() {
        _ = writeln!(header, "{}: {}", operation.as_str(), complexity);
    }
    _ = writeln!(header, "\n{}", *HEADER_SEPARATOR);
    header
}

/// The title & column names of a phase's table
pub fn table_header(phase: Phase) -> String {
    match phase {
        Phase::AppendAndSearch | Phase::InsertAndSearch => format!(
            "=== {} ===\n\n{:>12}{:>18}{:>18}{:>10}\n{}\n",
            phase.title(), "N", "INSERT_TIME (s)", "SEARCH_TIME (s)", "HITS", *SEARCH_TABLE_SEPARATOR),
        Phase::Prepend => format!(
            "\n{}\n=== {} ===\n\n{:>12}{:>18}\n{}\n",
            *HEADER_SEPARATOR, phase.title(), "N", "TIME (s)", *LOAD_TABLE_SEPARATOR),
    }
}

/// What was observed during the phase -- shown below its table
pub fn table_footer(summary: &PhaseSummary) -> String {
    format!("\n  {}\n\n", summary)
}

pub fn completion() -> &'static str {
    "\nTesting completed.\n"
}
