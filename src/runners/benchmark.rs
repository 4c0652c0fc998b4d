//! Knows how to run the whole benchmark for a [ContainerVariant] -- picking the concrete container & the phases
//! its capability group allows, while reporting each measurement as soon as it is taken.

use crate::{
    containers::{AssociativeContainer, ContainerLifecycle, ContainerVariant, SequentialContainer},
    low_level_analysis::types::PhaseSummary,
    report,
    runners::{
        adaptive::{associative_phases, sequential_phases, AdaptiveDriver, PhaseLimits, PhasePlan},
        common::Stopwatch,
    },
};
use rand::Rng;
use std::collections::{BTreeSet, HashSet, LinkedList};


/// Runs every phase `variant` supports -- append & search, then prepend, for sequential containers;
/// insert & search for associative ones -- sending the report to `output`.\
/// Returns the summary of each phase, in the order they ran.
pub fn run_benchmark<R: Rng, S: Stopwatch>(variant:     ContainerVariant,
                                           search_keys: &[u64],
                                           limits:      PhaseLimits,
                                           rng:         R,
                                           stopwatch:   S,
                                           mut output:  impl FnMut(&str))
                                          -> Vec<PhaseSummary> {
    let mut driver = AdaptiveDriver::new(variant, search_keys, limits, rng, stopwatch);
    output(&report::header(variant));
    let summaries = match variant {
        ContainerVariant::Vector     => run_sequential::<Vec<u64>, _, _>(&mut driver, &mut output),
        ContainerVariant::List       => run_sequential::<LinkedList<u64>, _, _>(&mut driver, &mut output),
        ContainerVariant::OrderedSet => run_associative::<BTreeSet<u64>, _, _>(&mut driver, &mut output),
        ContainerVariant::HashSet    => run_associative::<HashSet<u64>, _, _>(&mut driver, &mut output),
    };
    output(report::completion());
    summaries
}

fn run_sequential<C: SequentialContainer, R: Rng, S: Stopwatch>(driver: &mut AdaptiveDriver<R, S>, output: &mut impl FnMut(&str)) -> Vec<PhaseSummary> {
    sequential_phases::<C>().iter()
        .map(|plan| run_reported_phase(driver, plan, output))
        .collect()
}

fn run_associative<C: AssociativeContainer, R: Rng, S: Stopwatch>(driver: &mut AdaptiveDriver<R, S>, output: &mut impl FnMut(&str)) -> Vec<PhaseSummary> {
    associative_phases::<C>().iter()
        .map(|plan| run_reported_phase(driver, plan, output))
        .collect()
}

fn run_reported_phase<C: ContainerLifecycle, R: Rng, S: Stopwatch>(driver: &mut AdaptiveDriver<R, S>, plan: &PhasePlan<C>, output: &mut impl FnMut(&str)) -> PhaseSummary {
    output(&report::table_header(plan.phase));
    let summary = driver.run_phase(plan, |level| output(&format!("{}\n", level)));
    output(&report::table_footer(&summary));
    summary
}
