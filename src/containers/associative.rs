//! [AssociativeContainer] implementations for `BTreeSet` & `HashSet`

use super::{AssociativeContainer, ContainerLifecycle};
use std::collections::{BTreeSet, HashSet};


impl ContainerLifecycle for BTreeSet<u64> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
    fn reserved_capacity(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl AssociativeContainer for BTreeSet<u64> {
    fn insert(&mut self, value: u64) {
        BTreeSet::insert(self, value);
    }
    fn contains(&self, value: &u64) -> bool {
        BTreeSet::contains(self, value)
    }
}

impl ContainerLifecycle for HashSet<u64> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }
    fn reserved_capacity(&self) -> usize {
        self.capacity()
    }
}

impl AssociativeContainer for HashSet<u64> {
    fn insert(&mut self, value: u64) {
        HashSet::insert(self, value);
    }
    fn contains(&self, value: &u64) -> bool {
        HashSet::contains(self, value)
    }
}
