//! The adaptive benchmark driver: loads workloads of doubling sizes into a container, timing the loads (and the searches
//! that follow them), until loading gets slower than [PhaseLimits::load_time_limit].
//!
//! Each phase walks through the states
//! ```text
//!   Sizing(N) --> Measured(level) --+--> Grow(2N) --> Sizing(2N) ...
//!                                   +--> Done
//! ```
//! where a size level goes:
//!   1. generate a shuffled workload of `N` elements;
//!   2. time loading it into the (empty) container;
//!   3. time looking up all search keys -- unless the phase doesn't search, the load was too slow or searches were turned off;
//!   4. destroy & recreate the container, so no capacity carries over to the next size level;
//!   5. stop if the load took at least [PhaseLimits::load_time_limit], otherwise double `N`.
//!
//! Searches taking at least [PhaseLimits::search_time_limit] turn searches off for the remaining (bigger) size levels of the phase.

use crate::{
    configs::{DEFAULT_SIZE, LOAD_TIME_LIMIT, SEARCH_LOAD_CEILING, SEARCH_TIME_LIMIT, SHUFFLE_START},
    containers::{AssociativeContainer, ContainerLifecycle, ContainerVariant, OperationKind, SequentialContainer},
    low_level_analysis::{
        analyse_load_complexity,
        analyse_search_complexity,
        types::{LevelMeasurement, PhaseSummary, SearchOutcome},
    },
    runners::common::{measure_space, Stopwatch},
    utils::sequences::shuffled_sequence,
};
use rand::Rng;
use std::time::Duration;


/// The thresholds & starting point of every phase.\
/// The benchmark always uses [PhaseLimits::default()] -- the constants in [crate::configs].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseLimits {
    /// `N` for the first size level
    pub initial_size:        u64,
    /// a load taking at least this long ends the phase
    pub load_time_limit:     Duration,
    /// searches are only attempted after loads faster than this
    pub search_load_ceiling: Duration,
    /// searches taking at least this long are not attempted again in the phase
    pub search_time_limit:   Duration,
}
impl Default for PhaseLimits {
    fn default() -> Self {
        Self {
            initial_size:        DEFAULT_SIZE,
            load_time_limit:     LOAD_TIME_LIMIT,
            search_load_ceiling: SEARCH_LOAD_CEILING,
            search_time_limit:   SEARCH_TIME_LIMIT,
        }
    }
}

/// The adaptive sizing loops a container may go through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// sequential containers: append the workload, then search it linearly
    AppendAndSearch,
    /// sequential containers: prepend the workload -- no searches
    Prepend,
    /// associative containers: insert the workload, then use their native search
    InsertAndSearch,
}
impl Phase {
    /// the operation used to load the workload
    pub fn operation(&self) -> OperationKind {
        match self {
            Self::AppendAndSearch => OperationKind::Append,
            Self::Prepend         => OperationKind::Prepend,
            Self::InsertAndSearch => OperationKind::Insert,
        }
    }
    pub fn title(&self) -> &'static str {
        match self {
            Self::AppendAndSearch => "APPEND AND SEARCH TEST",
            Self::Prepend         => "PREPEND TEST",
            Self::InsertAndSearch => "INSERT AND SEARCH TEST",
        }
    }
}

/// Binds a [Phase] to the container operations it exercises -- only the ones the container's capability group offers
pub struct PhasePlan<C> {
    pub phase:  Phase,
    load:   fn(&mut C, u64),
    search: Option<fn(&C, &u64) -> bool>,
}
impl<C> PhasePlan<C> {
    pub fn searches(&self) -> bool {
        self.search.is_some()
    }
}
impl<C: SequentialContainer> PhasePlan<C> {
    pub fn append_and_search() -> Self {
        Self {
            phase:  Phase::AppendAndSearch,
            load:   <C as SequentialContainer>::append,
            search: Some(<C as SequentialContainer>::linear_contains),
        }
    }
    pub fn prepend() -> Self {
        Self {
            phase:  Phase::Prepend,
            load:   <C as SequentialContainer>::prepend,
            search: None,
        }
    }
}
impl<C: AssociativeContainer> PhasePlan<C> {
    pub fn insert_and_search() -> Self {
        Self {
            phase:  Phase::InsertAndSearch,
            load:   <C as AssociativeContainer>::insert,
            search: Some(<C as AssociativeContainer>::contains),
        }
    }
}

/// See the module docs
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseState {
    /// `N` is known, but not yet measured
    Sizing(u64),
    /// the size level was measured -- next, decide whether to grow or stop
    Measured(LevelMeasurement),
    /// the next size level will use this `N`
    Grow(u64),
    Done,
}

/// Decides what comes after a measured size level.\
/// The phase also ends if doubling `N` would overflow.
pub fn next_state(level: &LevelMeasurement, limits: &PhaseLimits) -> PhaseState {
    if level.load_time >= limits.load_time_limit {
        PhaseState::Done
    } else {
        level.n.checked_mul(2)
            .map_or(PhaseState::Done, PhaseState::Grow)
    }
}

/// Runs phases for a single container variant, always looking up the same `search_keys`
pub struct AdaptiveDriver<'a, R: Rng, S: Stopwatch> {
    variant:     ContainerVariant,
    search_keys: &'a [u64],
    limits:      PhaseLimits,
    rng:         R,
    stopwatch:   S,
}

impl<'a, R: Rng, S: Stopwatch> AdaptiveDriver<'a, R, S> {

    pub fn new(variant: ContainerVariant, search_keys: &'a [u64], limits: PhaseLimits, rng: R, stopwatch: S) -> Self {
        Self { variant, search_keys, limits, rng, stopwatch }
    }

    pub fn stopwatch(&self) -> &S {
        &self.stopwatch
    }

    /// Runs a whole phase, from [PhaseLimits::initial_size] up to the size level where loading got too slow.\
    /// `on_level` receives every measurement as soon as it is taken.
    pub fn run_phase<C: ContainerLifecycle>(&mut self, plan: &PhasePlan<C>, mut on_level: impl FnMut(&LevelMeasurement)) -> PhaseSummary {
        let mut container = C::default();
        let mut search_enabled = plan.searches();
        let mut summary = PhaseSummary {
            variant:                    self.variant,
            operation:                  plan.phase.operation(),
            levels:                     0,
            largest_n:                  0,
            search_cutoff_n:            None,
            observed_load_complexity:   None,
            observed_search_complexity: None,
            peak_memory:                0,
        };
        let mut previous_level: Option<LevelMeasurement> = None;
        let mut previous_searched_level: Option<LevelMeasurement> = None;

        let mut state = PhaseState::Sizing(self.limits.initial_size);
        loop {
            state = match state {
                PhaseState::Sizing(n) => PhaseState::Measured(self.measure_level(plan, &mut container, n, search_enabled)),
                PhaseState::Measured(level) => {
                    on_level(&level);
                    summary.levels += 1;
                    summary.largest_n = level.n;
                    summary.peak_memory = summary.peak_memory.max(level.space.peak_delta());
                    if let Some(previous_level) = &previous_level {
                        if let Some(complexity) = analyse_load_complexity(previous_level, &level) {
                            summary.observed_load_complexity = Some(complexity);
                        }
                    }
                    if let SearchOutcome::Measured { elapsed, .. } = level.search {
                        if let Some(previous_searched_level) = &previous_searched_level {
                            if let Some(complexity) = analyse_search_complexity(previous_searched_level, &level) {
                                summary.observed_search_complexity = Some(complexity);
                            }
                        }
                        if elapsed >= self.limits.search_time_limit {
                            search_enabled = false;
                            summary.search_cutoff_n = Some(level.n);
                        }
                        previous_searched_level = Some(level);
                    }
                    let next = next_state(&level, &self.limits);
                    previous_level = Some(level);
                    next
                },
                PhaseState::Grow(n) => PhaseState::Sizing(n),
                PhaseState::Done => break summary,
            }
        }
    }

    /// Measures a single size level, leaving `container` empty & without any backing memory
    fn measure_level<C: ContainerLifecycle>(&mut self, plan: &PhasePlan<C>, container: &mut C, n: u64, search_enabled: bool) -> LevelMeasurement {
        let Self { variant, search_keys, limits, rng, stopwatch } = self;
        let search_keys: &[u64] = *search_keys;

        let ((load_time, search), space) = measure_space(|| {
            let workload = shuffled_sequence(rng, n, SHUFFLE_START);

            let (_len, load_time) = stopwatch.time(|| {
                for &value in &workload {
                    (plan.load)(container, value);
                }
                container.len()
            });

            let search = match plan.search {
                Some(search_fn) if search_enabled && load_time < limits.search_load_ceiling => {
                    let populated: &C = container;
                    let (hits, elapsed) = stopwatch.time(|| search_keys.iter()
                        .filter(|&key| search_fn(populated, key))
                        .count());
                    SearchOutcome::Measured { elapsed, hits }
                },
                _ => SearchOutcome::Skipped,
            };

            container.recreate();
            drop(workload);
            (load_time, search)
        });
        debug_assert_eq!(container.len(), 0, "the container must be empty after a size level");

        LevelMeasurement {
            variant: *variant,
            operation: plan.phase.operation(),
            n,
            load_time,
            search,
            space,
        }
    }
}

/// Convenience for [PhasePlan]s of sequential containers
pub fn sequential_phases<C: SequentialContainer>() -> [PhasePlan<C>; 2] {
    [PhasePlan::append_and_search(), PhasePlan::prepend()]
}

/// Convenience for [PhasePlan]s of associative containers
pub fn associative_phases<C: AssociativeContainer>() -> [PhasePlan<C>; 1] {
    [PhasePlan::insert_and_search()]
}


#[cfg(test)]
mod tests {

    //! Unit tests for [adaptive](super) module -- phases are driven by a [ScriptedStopwatch], so the thresholds are hit on cue

    use super::*;
    use crate::{
        configs::{SEARCH_KEYS_COUNT, SEARCH_KEYS_MAX_VALUE},
        low_level_analysis::types::BigOAlgorithmComplexity,
        runners::common::ScriptedStopwatch,
        utils::sequences::random_sequence,
    };
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::{BTreeSet, HashSet, LinkedList};

    fn secs(seconds: f64) -> Duration {
        Duration::from_secs_f64(seconds)
    }

    fn search_keys() -> Vec<u64> {
        random_sequence(&mut StdRng::seed_from_u64(1000), SEARCH_KEYS_COUNT, SEARCH_KEYS_MAX_VALUE)
    }

    fn driver<'a>(variant: ContainerVariant, search_keys: &'a [u64], script: impl IntoIterator<Item=Duration>) -> AdaptiveDriver<'a, StdRng, ScriptedStopwatch> {
        AdaptiveDriver::new(variant, search_keys, PhaseLimits::default(), StdRng::seed_from_u64(42), ScriptedStopwatch::new(script))
    }

    fn run<C: ContainerLifecycle>(driver: &mut AdaptiveDriver<StdRng, ScriptedStopwatch>, plan: &PhasePlan<C>) -> (Vec<LevelMeasurement>, PhaseSummary) {
        let mut levels = vec![];
        let summary = driver.run_phase(plan, |level| levels.push(*level));
        (levels, summary)
    }

    #[test]
    fn state_transitions() {
        let limits = PhaseLimits::default();
        let level = |n, load_time| LevelMeasurement {
            variant:   ContainerVariant::Vector,
            operation: OperationKind::Append,
            n,
            load_time,
            search:    SearchOutcome::Skipped,
            space:     Default::default(),
        };
        assert_eq!(next_state(&level(256, secs(0.5)), &limits), PhaseState::Grow(512));
        assert_eq!(next_state(&level(256, secs(1.999)), &limits), PhaseState::Grow(512));
        assert_eq!(next_state(&level(256, secs(2.0)), &limits), PhaseState::Done);
        assert_eq!(next_state(&level(u64::MAX / 2 + 1, secs(0.1)), &limits), PhaseState::Done);
    }

    /// a load exceeding the limit must end the phase right after that size level
    #[test]
    fn slow_load_ends_the_phase() {
        let keys = search_keys();
        // (load, search) for each level
        let mut driver = driver(ContainerVariant::HashSet, &keys, [secs(0.1), secs(0.01), secs(0.2), secs(0.01), secs(2.5), secs(0.01)]);
        let (levels, summary) = run(&mut driver, &PhasePlan::<HashSet<u64>>::insert_and_search());
        assert_eq!(levels.iter().map(|level| level.n).collect::<Vec<_>>(), vec![256, 512, 1024]);
        assert_eq!(summary.levels, 3);
        assert_eq!(summary.largest_n, 1024);
        assert_eq!(levels[2].load_time, secs(2.5));
        assert!(matches!(levels[2].search, SearchOutcome::Measured { .. }), "A 2.5s load is still below the search ceiling");
        assert_eq!(driver.stopwatch().timed_operations, 6, "No further size level should have been attempted");
    }

    /// once searches get too slow, no bigger size level may search again
    #[test]
    fn slow_search_turns_searches_off() {
        let keys = search_keys();
        let mut driver = driver(ContainerVariant::Vector, &keys, [
            secs(0.1), secs(0.5),
            secs(0.1), secs(4.0),
            secs(0.2),
            secs(0.4),
            secs(2.0),
        ]);
        let (levels, summary) = run(&mut driver, &PhasePlan::<Vec<u64>>::append_and_search());
        assert_eq!(levels.len(), 5);
        assert!(matches!(levels[0].search, SearchOutcome::Measured { .. }));
        assert!(matches!(levels[1].search, SearchOutcome::Measured { elapsed, .. } if elapsed == secs(4.0)));
        assert!(levels[2..].iter().all(|level| level.search == SearchOutcome::Skipped), "Searches were measured after being turned off");
        assert_eq!(summary.search_cutoff_n, Some(512));
        assert_eq!(driver.stopwatch().timed_operations, 7);
    }

    /// loads slower than the search ceiling skip the searches, without turning them off
    #[test]
    fn very_slow_load_skips_searches() {
        let keys = search_keys();
        let mut driver = driver(ContainerVariant::OrderedSet, &keys, [secs(4.5)]);
        let (levels, summary) = run(&mut driver, &PhasePlan::<BTreeSet<u64>>::insert_and_search());
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].search, SearchOutcome::Skipped);
        assert_eq!(summary.search_cutoff_n, None);
        assert_eq!(driver.stopwatch().timed_operations, 1);
    }

    #[test]
    fn prepend_never_searches() {
        let keys = search_keys();
        let mut driver = driver(ContainerVariant::List, &keys, [secs(0.1), secs(0.3), secs(3.0)]);
        let (levels, summary) = run(&mut driver, &PhasePlan::<LinkedList<u64>>::prepend());
        assert_eq!(levels.len(), 3);
        assert!(levels.iter().all(|level| level.search == SearchOutcome::Skipped && level.operation == OperationKind::Prepend));
        assert_eq!(summary.operation, OperationKind::Prepend);
        assert_eq!(summary.observed_search_complexity, None);
        assert_eq!(driver.stopwatch().timed_operations, 3);
    }

    /// hits must be exactly the search keys inside the workload's range: `[1, N]`
    #[test]
    fn hits_match_the_workload_range() {
        let keys = search_keys();
        // 6 quick levels (load + search each), then a slow load
        let script = (0..12).map(|_| secs(0.001)).chain([secs(2.0)]);
        let mut driver = driver(ContainerVariant::Vector, &keys, script);
        let (levels, _summary) = run(&mut driver, &PhasePlan::<Vec<u64>>::append_and_search());
        assert_eq!(levels.len(), 7);
        let mut last_hits = 0;
        for level in &levels {
            let expected_hits = keys.iter().filter(|&&key| key <= level.n).count();
            match level.search {
                SearchOutcome::Measured { hits, .. } => {
                    assert_eq!(hits, expected_hits, "Wrong hit count for N={}", level.n);
                    assert!(hits >= last_hits, "Hits went down from {} to {} at N={}", last_hits, hits, level.n);
                    assert!(hits <= SEARCH_KEYS_COUNT);
                    last_hits = hits;
                },
                SearchOutcome::Skipped => panic!("No search should have been skipped at N={}", level.n),
            }
        }
    }

    #[test]
    fn observed_complexities_come_from_the_last_levels() {
        let keys = search_keys();
        // loads: per element cost doubles (O(n)); searches: constant (O(1))
        let mut driver = driver(ContainerVariant::Vector, &keys, [
            secs(0.010), secs(0.05),
            secs(0.040), secs(0.05),
            secs(2.000), secs(0.05),
        ]);
        let (_levels, summary) = run(&mut driver, &PhasePlan::<Vec<u64>>::append_and_search());
        assert_eq!(summary.levels, 3);
        // last two loads: 0.04s for 512 & 2s for 1024 -- worse than O(n²) per element
        assert_eq!(summary.observed_load_complexity, Some(BigOAlgorithmComplexity::WorseThanON2));
        assert_eq!(summary.observed_search_complexity, Some(BigOAlgorithmComplexity::O1));
    }

    #[test]
    fn phases_per_capability_group() {
        assert_eq!(sequential_phases::<Vec<u64>>().map(|plan| plan.phase), [Phase::AppendAndSearch, Phase::Prepend]);
        assert_eq!(associative_phases::<HashSet<u64>>().map(|plan| plan.phase), [Phase::InsertAndSearch]);
        assert!(PhasePlan::<LinkedList<u64>>::append_and_search().searches());
        assert!(!PhasePlan::<LinkedList<u64>>::prepend().searches());
    }
}
