//! Exports the observed complexity analysis functions, as well as the measurement types they operate on. See:
//!   - [types]
//!   - [analyse_complexity()], [analyse_load_complexity()] & [analyse_search_complexity()]

mod low_level_analysis;
pub use low_level_analysis::*;
pub mod types;
