//! Defines the enums & structs produced by the runners and consumed by the analysis & the report.

use crate::{
    containers::{ContainerVariant, OperationKind},
    utils::presentable_measurements::{bytes_measurement, seconds_measurement},
};
use std::{
    fmt::{Display, Formatter},
    time::Duration,
};


/// Possible observed complexity classifications, in big-O notation.
/// Results are for a single operation -- a size level performs `n` loads or a fixed number of searches.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum BigOAlgorithmComplexity {
    BetterThanO1,
    O1,
    BetweenO1AndOLogN,
    OLogN,
    BetweenOLogNAndON,
    ON,
    BetweenONAndONLogN,
    ONLogN,
    BetweenONLogNAndON2,
    ON2,
    WorseThanON2,
}
impl BigOAlgorithmComplexity {
    /// verbose description for each enum element
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1        => "Better than O(1)",
            Self::O1                  => "O(1)",
            Self::BetweenO1AndOLogN   => "Worse than O(1) but better than O(log(n))",
            Self::OLogN               => "O(log(n))",
            Self::BetweenOLogNAndON   => "Worse than O(log(n)) but better than O(n)",
            Self::ON                  => "O(n)",
            Self::BetweenONAndONLogN  => "Worse than O(n) but better than O(n.log(n))",
            Self::ONLogN              => "O(n.log(n))",
            Self::BetweenONLogNAndON2 => "Worse than O(n.log(n)) but better than O(n²)",
            Self::ON2                 => "O(n²)",
            Self::WorseThanON2        => "Worse than O(n²)",
        }
    }
    /// same as [Self::as_pretty_str()], with hints for the extremes -- which usually mean the measurements are off
    pub fn as_time_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1 => "Better than O(1) -- aren't the machines idle? is the workload too small?",
            Self::WorseThanON2 => "Worse than O(n²) -- CPU cache sizes or swapping might be playing a role",
            _ => self.as_pretty_str(),
        }
    }
}

/// What happened to the searches of a size level
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// all search keys were looked up in `elapsed` time, `hits` of them being present
    Measured { elapsed: Duration, hits: usize },
    /// searches were not attempted on this size level
    Skipped,
}

/// heap usage, in bytes, around one size level -- from just before the workload generation up to the container's teardown
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LevelSpaceMeasurements {
    /// heap memory in use just before generating the workload
    pub used_memory_before: usize,
    /// heap memory in use after the container & workload were destroyed
    pub used_memory_after:  usize,
    /// maximum heap memory in use during the size level
    pub max_used_memory:    usize,
}
impl LevelSpaceMeasurements {
    /// how much memory the size level needed on top of what was in use before it
    pub fn peak_delta(&self) -> usize {
        self.max_used_memory.saturating_sub(self.used_memory_before)
    }
    /// memory still held after the teardown -- >0 means something was not released
    pub fn retained_memory(&self) -> isize {
        self.used_memory_after as isize - self.used_memory_before as isize
    }
}

/// The measurement record of a single size level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelMeasurement {
    pub variant:   ContainerVariant,
    /// the operation used to load the workload into the container
    pub operation: OperationKind,
    /// workload size
    pub n:         u64,
    /// time spent loading the `n` elements
    pub load_time: Duration,
    pub search:    SearchOutcome,
    pub space:     LevelSpaceMeasurements,
}
impl Display for LevelMeasurement {
    /// one row of the report table -- searchless phases only show `N` & the load time
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // placing those in string variables since {:>18} doesn't work on implementers of Display
        let load_time = seconds_measurement(self.load_time).to_string();
        if self.operation == OperationKind::Prepend {
            return write!(f, "{:>12}{:>18}", self.n, load_time);
        }
        match self.search {
            SearchOutcome::Measured { elapsed, hits } => {
                let search_time = seconds_measurement(elapsed).to_string();
                write!(f, "{:>12}{:>18}{:>18}{:>10}", self.n, load_time, search_time, hits)
            },
            SearchOutcome::Skipped => write!(f, "{:>12}{:>18}{:>18}{:>10}", self.n, load_time, "SKIPPED", "-"),
        }
    }
}

/// What is left of a phase after it ends: its outline & the observed complexities
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSummary {
    pub variant:   ContainerVariant,
    pub operation: OperationKind,
    /// how many size levels were run
    pub levels:    u32,
    /// the biggest workload size measured
    pub largest_n: u64,
    /// the size level at which searches got too slow and were turned off, if they did
    pub search_cutoff_n: Option<u64>,
    /// per-operation load complexity, from the last two size levels
    pub observed_load_complexity:   Option<BigOAlgorithmComplexity>,
    /// per-key search complexity, from the last two size levels where searches were measured
    pub observed_search_complexity: Option<BigOAlgorithmComplexity>,
    /// the maximum heap usage above the phase's baseline, among all size levels
    pub peak_memory: usize,
}
impl Display for PhaseSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fn observed(complexity: Option<BigOAlgorithmComplexity>) -> &'static str {
            complexity.map_or("inconclusive -- not enough measured size levels", |complexity| complexity.as_time_pretty_str())
        }
        write!(f, "{} levels, up to N={}; observed {}: {}",
               self.levels, self.largest_n, self.operation.as_str(), observed(self.observed_load_complexity))?;
        if self.operation != OperationKind::Prepend {
            write!(f, "; observed {}: {}", OperationKind::Search.as_str(), observed(self.observed_search_complexity))?;
            if let Some(cutoff_n) = self.search_cutoff_n {
                write!(f, " (turned off after N={})", cutoff_n)?;
            }
        }
        write!(f, "; peak memory: {}", bytes_measurement(self.peak_memory as f64))
    }
}
