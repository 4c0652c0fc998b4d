//! Contains code shared between this module's submodules: how time & space are measured

use crate::{
    features,
    low_level_analysis::types::LevelSpaceMeasurements,
};
use std::{
    collections::VecDeque,
    hint::black_box,
    time::{Duration, Instant},
};


/// Measures how long an operation takes.\
/// The benchmark uses [MonotonicStopwatch]; tests may replace it by a [ScriptedStopwatch] to drive the phases deterministically.
pub trait Stopwatch {
    /// runs `operation`, returning its result along with the time it took
    fn time<R>(&mut self, operation: impl FnOnce() -> R) -> (R, Duration);
}

/// The real clock: [Instant] is monotonic, so measurements are immune to wall clock adjustments
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicStopwatch;

impl Stopwatch for MonotonicStopwatch {
    fn time<R>(&mut self, operation: impl FnOnce() -> R) -> (R, Duration) {
        let start = Instant::now();
        // avoids the compiler cancelling calls whose results are never used
        let r = black_box(operation());
        let duration = start.elapsed();
        (r, duration)
    }
}

/// Runs the operations for real but, instead of measuring them, reports the given durations, in order
/// -- [Duration::ZERO] once they run out.
#[derive(Debug, Default, Clone)]
pub struct ScriptedStopwatch {
    durations: VecDeque<Duration>,
    /// how many operations were timed so far
    pub timed_operations: usize,
}

impl ScriptedStopwatch {
    pub fn new(durations: impl IntoIterator<Item=Duration>) -> Self {
        Self {
            durations: durations.into_iter().collect(),
            timed_operations: 0,
        }
    }
}

impl Stopwatch for ScriptedStopwatch {
    fn time<R>(&mut self, operation: impl FnOnce() -> R) -> (R, Duration) {
        let r = operation();
        self.timed_operations += 1;
        (r, self.durations.pop_front().unwrap_or_default())
    }
}

/// Runs `operation`, gathering the heap usage before, during & after it.\
/// `operation` should drop everything it allocates, so `used_memory_after` shows whether it was all given back.
pub fn measure_space<R>(operation: impl FnOnce() -> R) -> (R, LevelSpaceMeasurements) {
    let allocator_savepoint = features::ALLOC.save_point();
    let r = operation();
    let allocator_statistics = features::ALLOC.delta_statistics(&allocator_savepoint);
    (r, LevelSpaceMeasurements {
        used_memory_before: allocator_savepoint.metrics.current_used_memory,
        used_memory_after:  allocator_statistics.current_used_memory,
        max_used_memory:    allocator_statistics.max_used_memory,
    })
}


#[cfg(test)]
mod tests {

    //! Unit tests for [common](super) module

    use super::*;
    use serial_test::serial;

    #[test]
    fn monotonic_stopwatch_measures_the_operation() {
        let mut stopwatch = MonotonicStopwatch;
        let (r, elapsed) = stopwatch.time(|| {
            std::thread::sleep(Duration::from_millis(20));
            42
        });
        assert_eq!(r, 42);
        assert!(elapsed >= Duration::from_millis(20), "Slept for 20ms, but measured {:?}", elapsed);
    }

    #[test]
    fn scripted_stopwatch_replays_durations() {
        let mut stopwatch = ScriptedStopwatch::new([Duration::from_secs(3), Duration::from_millis(5)]);
        let mut calls = 0;
        assert_eq!(stopwatch.time(|| { calls += 1; 'a' }), ('a', Duration::from_secs(3)));
        assert_eq!(stopwatch.time(|| { calls += 1; 'b' }), ('b', Duration::from_millis(5)));
        assert_eq!(stopwatch.time(|| { calls += 1; 'c' }), ('c', Duration::ZERO));
        assert_eq!(calls, 3, "Every operation must really be executed");
        assert_eq!(stopwatch.timed_operations, 3);
    }

    #[cfg_attr(not(feature = "no_allocator_metrics"), test)]
    #[serial]
    fn measure_space_sees_the_peak_and_the_release() {
        let (len, space) = measure_space(|| {
            let vec = vec![7u64; 1 << 16];
            vec.len()
        });
        assert_eq!(len, 1 << 16);
        assert!(space.peak_delta() >= (1 << 16) * 8, "A 512KiB Vec should have shown up in the peak: {:?}", space);
        assert!(space.retained_memory() < (1 << 16) * 8, "The Vec was dropped, but its memory seems to be retained: {:?}", space);
    }
}
