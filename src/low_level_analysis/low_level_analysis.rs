//! See [super].

use super::types::{BigOAlgorithmComplexity, LevelMeasurement, SearchOutcome};
use crate::features::PERCENT_TOLERANCE;


/// Classifies how the resource utilization `u` grew from `u1` to `u2` while the number of elements went from `n1` to `n2`.\
/// The utilization ratio is compared, in order, against the growth each complexity class predicts: the first class
/// matching within [PERCENT_TOLERANCE] wins -- falling short of a class' growth means "in between" it and the previous one.
pub fn analyse_complexity(u1: f64, u2: f64, n1: f64, n2: f64) -> BigOAlgorithmComplexity {
    use BigOAlgorithmComplexity::*;
    // (predicted growth, class if below it, class if matching it)
    let references = [
        (1.0,                                     BetterThanO1,        O1),
        (n2.log2() / n1.log2(),                   BetweenO1AndOLogN,   OLogN),
        (n2 / n1,                                 BetweenOLogNAndON,   ON),
        ((n2 * n2.log2()) / (n1 * n1.log2()),     BetweenONAndONLogN,  ONLogN),
        ((n2 / n1).powi(2),                       BetweenONLogNAndON2, ON2),
    ];
    let growth = u2 / u1;
    references.into_iter()
        .find_map(|(predicted, below, matching)| {
            let proportion = growth / predicted;
            if proportion < 1.0 - PERCENT_TOLERANCE {
                Some(below)
            } else if (proportion - 1.0).abs() <= PERCENT_TOLERANCE {
                Some(matching)
            } else {
                None
            }
        })
        .unwrap_or(WorseThanON2)
}

/// Classifies the complexity of a single load operation (append, prepend or insert) out of two size levels:
/// as the whole workload is timed, the time per element is what gets compared.\
/// `None` if the measurements can't be compared -- zero elapsed times, non growing or too small workloads.
pub fn analyse_load_complexity(previous: &LevelMeasurement, last: &LevelMeasurement) -> Option<BigOAlgorithmComplexity> {
    if !comparable_sizes(previous.n, last.n) {
        return None
    }
    let u1 = previous.load_time.as_secs_f64() / previous.n as f64;
    let u2 = last.load_time.as_secs_f64() / last.n as f64;
    comparable_utilizations(u1, u2)
        .then(|| analyse_complexity(u1, u2, previous.n as f64, last.n as f64))
}

/// Classifies the complexity of a single search out of two size levels -- both must have had their searches measured.\
/// As the number of search keys never changes, the elapsed times are compared directly.
pub fn analyse_search_complexity(previous: &LevelMeasurement, last: &LevelMeasurement) -> Option<BigOAlgorithmComplexity> {
    match (previous.search, last.search) {
        (SearchOutcome::Measured { elapsed: t1, .. }, SearchOutcome::Measured { elapsed: t2, .. }) => {
            if !comparable_sizes(previous.n, last.n) {
                return None
            }
            let (u1, u2) = (t1.as_secs_f64(), t2.as_secs_f64());
            comparable_utilizations(u1, u2)
                .then(|| analyse_complexity(u1, u2, previous.n as f64, last.n as f64))
        },
        _ => None,
    }
}

// log2(n1) must not be zero
fn comparable_sizes(n1: u64, n2: u64) -> bool {
    n1 > 1 && n2 > n1
}

fn comparable_utilizations(u1: f64, u2: f64) -> bool {
    u1 > 0.0 && u2 > 0.0 && u1.is_finite() && u2.is_finite()
}


#[cfg(test)]
mod tests {

    //! Unit tests for [low_level_analysis](super) module

    use super::*;
    use crate::{
        containers::{ContainerVariant, OperationKind},
        low_level_analysis::types::LevelSpaceMeasurements,
    };
    use std::time::Duration;

    fn level(n: u64, load_micros: u64, search: SearchOutcome) -> LevelMeasurement {
        LevelMeasurement {
            variant:   ContainerVariant::Vector,
            operation: OperationKind::Append,
            n,
            load_time: Duration::from_micros(load_micros),
            search,
            space:     LevelSpaceMeasurements::default(),
        }
    }

    fn searched(micros: u64) -> SearchOutcome {
        SearchOutcome::Measured { elapsed: Duration::from_micros(micros), hits: 0 }
    }

    /// test algorithm complexity analysis progression when resource utilization increase
    #[test]
    fn smooth_transitions() {
        let mut last_complexity = BigOAlgorithmComplexity::BetterThanO1;
        for u2 in 0..2_000 {
            let current_complexity = analyse_complexity(10.0, u2 as f64, 2.0, 14.0);
            let delta = current_complexity as i32 - last_complexity as i32;
            assert!(delta == 0 || delta == 1, "'analyse_complexity(..., {}, ..., ...)' suddenly went from {:?} to {:?} when `u2` went from {} to {}", u2, last_complexity, current_complexity, u2-1, u2);
            last_complexity = current_complexity;
        }
        assert_eq!(last_complexity, BigOAlgorithmComplexity::WorseThanON2, "Please update this test to cycle through all variants of `BigOAlgorithmComplexity`");
    }

    /// tests the classification results based on some known-to-be-correct measurement times
    #[test]
    fn analyse_algorithm_theoretical_test() {
        let assert = |measurement_name, expected_complexity, u1, u2| {
            let observed_complexity = analyse_complexity(u1, u2, 1000.0, 2000.0);
            assert_eq!(observed_complexity, expected_complexity, "Complexity analysis for '{}' check failed!", measurement_name);
        };
        assert("Theoretical better than O(1) algorithm", BigOAlgorithmComplexity::BetterThanO1, 100.0,  89.0);
        assert("Theoretical O(1) algorithm",             BigOAlgorithmComplexity::O1,           100.0, 100.0);
        assert("Theoretical O(log(n)) algorithm",        BigOAlgorithmComplexity::OLogN,        100.0, 111.0);
        assert("Theoretical between O(log(n)) and O(n)", BigOAlgorithmComplexity::BetweenOLogNAndON, 100.0, 150.0);
        assert("Theoretical O(n) algorithm",             BigOAlgorithmComplexity::ON,           100.0, 200.0);
        assert("Theoretical O(n.log(n)) algorithm",      BigOAlgorithmComplexity::ONLogN,       100.0, 225.0);
        assert("Theoretical O(n²) algorithm",            BigOAlgorithmComplexity::ON2,          100.0, 400.0);
        assert("Theoretical worse than O(n²) algorithm", BigOAlgorithmComplexity::WorseThanON2, 100.0, 800.0);
    }

    #[test]
    fn load_complexity_is_per_element() {
        // whole workload time doubling along with `n` means each append costs the same
        let constant = analyse_load_complexity(&level(1024, 100, SearchOutcome::Skipped), &level(2048, 200, SearchOutcome::Skipped));
        assert_eq!(constant, Some(BigOAlgorithmComplexity::O1));
        // whole workload time quadrupling means each prepend costs proportionally to `n`
        let linear = analyse_load_complexity(&level(1024, 100, SearchOutcome::Skipped), &level(2048, 400, SearchOutcome::Skipped));
        assert_eq!(linear, Some(BigOAlgorithmComplexity::ON));
    }

    #[test]
    fn search_complexity_needs_two_measured_searches() {
        let linear = analyse_search_complexity(&level(1024, 1, searched(1000)), &level(2048, 2, searched(2000)));
        assert_eq!(linear, Some(BigOAlgorithmComplexity::ON));
        let constant = analyse_search_complexity(&level(1024, 1, searched(1000)), &level(2048, 2, searched(1000)));
        assert_eq!(constant, Some(BigOAlgorithmComplexity::O1));
        assert_eq!(analyse_search_complexity(&level(1024, 1, searched(1000)), &level(2048, 2, SearchOutcome::Skipped)), None);
    }

    #[test]
    fn unusable_measurements_are_inconclusive() {
        // below the clock's resolution
        assert_eq!(analyse_load_complexity(&level(256, 0, SearchOutcome::Skipped), &level(512, 3, SearchOutcome::Skipped)), None);
        // non growing `n`
        assert_eq!(analyse_load_complexity(&level(512, 2, SearchOutcome::Skipped), &level(512, 3, SearchOutcome::Skipped)), None);
        // log2(1) == 0
        assert_eq!(analyse_load_complexity(&level(1, 2, SearchOutcome::Skipped), &level(2, 3, SearchOutcome::Skipped)), None);
    }
}
