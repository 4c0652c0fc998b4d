//! Generates the integer sequences used as workloads.
//!
//! The random engine is always given by the caller: the binary seeds its engines from OS entropy
//! (so no two runs are alike) while tests seed them with a constant, for reproducible workloads.

use rand::{seq::SliceRandom, Rng};


/// Returns `size` values, each independently drawn from `[1, max_val]` -- repetitions are allowed.\
/// Used to build the fixed set of search keys.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, size: usize, max_val: u64) -> Vec<u64> {
    (0..size)
        .map(|_| rng.gen_range(1..=max_val))
        .collect()
}

/// Returns a random permutation of `[start, start+size)`: every value is unique and the range is
/// covered exactly once, so the only thing varying between size levels is how many elements there are.
pub fn shuffled_sequence<R: Rng + ?Sized>(rng: &mut R, size: u64, start: u64) -> Vec<u64> {
    let mut sequence: Vec<u64> = (start..start + size).collect();
    sequence.shuffle(rng);
    sequence
}
