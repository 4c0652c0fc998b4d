//! Thin utilities shared by the runners: workload generation & measurement presentation

pub mod sequences;
pub mod presentable_measurements;
