#![doc = include_str!("../README.md")]

pub mod features;
pub mod configs;
pub mod containers;
pub mod low_level_analysis;
pub mod metrics_allocator;
pub mod report;
pub mod runners;
pub mod utils;


// exported symbols
pub use {
    features::{ALLOC, OUTPUT, SELECTED_VARIANT},
    containers::{AssociativeContainer, ContainerLifecycle, ContainerVariant, OperationKind, SequentialContainer},
    low_level_analysis::types::{BigOAlgorithmComplexity, LevelMeasurement, LevelSpaceMeasurements, PhaseSummary, SearchOutcome},
    runners::{
        adaptive::{associative_phases, sequential_phases, AdaptiveDriver, Phase, PhaseLimits, PhasePlan},
        benchmark::run_benchmark,
        common::{MonotonicStopwatch, ScriptedStopwatch, Stopwatch},
    },
    utils::sequences::{random_sequence, shuffled_sequence},
};
