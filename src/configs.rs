//! Contains constants used throughout this crate.
//! None of them are configurable at runtime: changing them means rebuilding.

use std::time::Duration;

/// the workload size `N` every phase starts with -- doubled on each size level
pub const DEFAULT_SIZE: u64 = 256;

/// once bulk-loading a workload takes at least this long, the phase ends after the current size level
pub const LOAD_TIME_LIMIT: Duration = Duration::from_secs(2);

/// searches are only attempted if bulk-loading took less than this
pub const SEARCH_LOAD_CEILING: Duration = Duration::from_secs(4);

/// once running all search keys takes at least this long, searches are skipped for the rest of the phase
pub const SEARCH_TIME_LIMIT: Duration = Duration::from_secs(4);

/// how many keys are looked up on each size level
pub const SEARCH_KEYS_COUNT: usize = 1000;

/// search keys are drawn from `[1, SEARCH_KEYS_MAX_VALUE]`
pub const SEARCH_KEYS_MAX_VALUE: u64 = 50_000;

/// the first value of every insertion workload -- which is a permutation of `[SHUFFLE_START, SHUFFLE_START+N)`
pub const SHUFFLE_START: u64 = 1;

/// width of the line separating the header from the tables
pub const HEADER_SEPARATOR_WIDTH: usize = 80;
/// width of the line below the title of "load & search" tables
pub const SEARCH_TABLE_SEPARATOR_WIDTH: usize = 60;
/// width of the line below the title of "load only" tables
pub const LOAD_TABLE_SEPARATOR_WIDTH: usize = 30;
