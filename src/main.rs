//! Benchmarks the container selected at build time -- see the `vector`, `list`, `set` & `u_set` features.

use container_complexity::{
    configs::{SEARCH_KEYS_COUNT, SEARCH_KEYS_MAX_VALUE},
    random_sequence, run_benchmark,
    MonotonicStopwatch, PhaseLimits, OUTPUT, SELECTED_VARIANT,
};
use rand::{rngs::StdRng, SeedableRng};


fn main() {
    // independent engines: the search keys never depend on how many workloads were shuffled
    let mut search_keys_rng = StdRng::from_entropy();
    let workloads_rng = StdRng::from_entropy();

    let search_keys = random_sequence(&mut search_keys_rng, SEARCH_KEYS_COUNT, SEARCH_KEYS_MAX_VALUE);
    run_benchmark(SELECTED_VARIANT, &search_keys, PhaseLimits::default(), workloads_rng, MonotonicStopwatch, OUTPUT);
}
