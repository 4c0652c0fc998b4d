//! Contains code for handling the Cargo features used to compile this crate:
//!   - which container is put under test (`vector`, `list`, `set`, `u_set`);
//!   - where the report goes (`report_stdout`, `report_stderr` or nowhere);
//!   - the tolerance for the observed complexity classification;
//!   - whether the [MetricsAllocator] replaces the global allocator.
#![allow(dead_code)]

use std::io::{stdout,stderr,Write};
use crate::{
    containers::ContainerVariant,
    metrics_allocator::MetricsAllocator,
};


#[cfg(not(any(feature = "vector", feature = "list", feature = "set", feature = "u_set")))]
compile_error!("No container selected: enable exactly one of the `vector`, `list`, `set` or `u_set` features");

#[cfg(any(all(feature = "vector", any(feature = "list", feature = "set", feature = "u_set")),
          all(feature = "list",   any(feature = "set", feature = "u_set")),
          all(feature = "set",    feature = "u_set")))]
compile_error!("More than one container selected: `vector`, `list`, `set` & `u_set` are mutually exclusive -- did you forget `--no-default-features`?");

#[cfg(feature = "vector")]
/// The container variant this binary was built to measure
pub const SELECTED_VARIANT: ContainerVariant = ContainerVariant::Vector;

#[cfg(feature = "list")]
/// The container variant this binary was built to measure
pub const SELECTED_VARIANT: ContainerVariant = ContainerVariant::List;

#[cfg(feature = "set")]
/// The container variant this binary was built to measure
pub const SELECTED_VARIANT: ContainerVariant = ContainerVariant::OrderedSet;

#[cfg(feature = "u_set")]
/// The container variant this binary was built to measure
pub const SELECTED_VARIANT: ContainerVariant = ContainerVariant::HashSet;


#[cfg(not(feature = "tolerance_25_percent"))]
/// acceptable proportional variance (acceptable measurement errors) when classifying the observed complexities
pub const PERCENT_TOLERANCE: f64 = 0.10;

#[cfg(feature = "tolerance_25_percent")]
/// acceptable proportional variance (acceptable measurement errors) when classifying the observed complexities
pub const PERCENT_TOLERANCE: f64 = 0.25;


#[cfg(feature = "report_stdout")]
/// Function to output an `&str` -- used to sink the benchmark report -- controlled by the crate's features (stdout, stderr, no_output)
pub const OUTPUT: fn(&str) = stdout_write;

#[cfg(all(feature = "report_stderr", not(feature = "report_stdout")))]
/// Function to output an `&str` -- used to sink the benchmark report -- controlled by the crate's features (stdout, stderr, no_output)
pub const OUTPUT: fn(&str) = stderr_write;

#[cfg(not(any(feature = "report_stdout", feature = "report_stderr")))]
/// Function to output an `&str` -- used to sink the benchmark report -- controlled by the crate's features (stdout, stderr, no_output)
pub const OUTPUT: fn(&str) = null_write;


#[cfg(not(feature = "no_allocator_metrics"))]
#[global_allocator]
/// Allows access to the metrics allocator -- replacing the Global Allocator, so each size level
/// may have its memory usage (and release) measured
pub static ALLOC: MetricsAllocator = MetricsAllocator::new();

#[cfg(feature = "no_allocator_metrics")]
/// Unregistered metrics allocator: all measurements will read as zero
pub static ALLOC: MetricsAllocator = MetricsAllocator::new();


fn stdout_write(buf: &str) {
    sync_outputs();
    print!("{}", buf);
    sync_outputs();
}

fn stderr_write(buf: &str) {
    sync_outputs();
    eprint!("{}", buf);
    sync_outputs();
}

/// Flushes both stdout and stderr so the next output will be in sync with everything that came before
fn sync_outputs() {
    _ = stdout().flush();
    _ = stderr().flush();
}

fn null_write(_buf: &str) {
    // release compilations will optimize out this call for '_buf' is not used
}
