//! Contains the executors of the benchmark phases, gathering the measurements to pass to
//! [crate::low_level_analysis] & [crate::report]

pub mod common;
pub mod adaptive;
pub mod benchmark;
