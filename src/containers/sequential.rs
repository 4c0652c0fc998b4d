//! [SequentialContainer] implementations for `Vec` & `LinkedList`

use super::{ContainerLifecycle, SequentialContainer};
use std::collections::LinkedList;


impl ContainerLifecycle for Vec<u64> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
    fn reserved_capacity(&self) -> usize {
        self.capacity()
    }
}

impl SequentialContainer for Vec<u64> {
    fn append(&mut self, value: u64) {
        self.push(value);
    }
    fn prepend(&mut self, value: u64) {
        self.insert(0, value);
    }
    fn linear_contains(&self, value: &u64) -> bool {
        self.iter().any(|element| element == value)
    }
}

// every node is allocated & freed on its own: the length is all the memory there is
impl ContainerLifecycle for LinkedList<u64> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
    fn reserved_capacity(&self) -> usize {
        LinkedList::len(self)
    }
}

impl SequentialContainer for LinkedList<u64> {
    fn append(&mut self, value: u64) {
        self.push_back(value);
    }
    fn prepend(&mut self, value: u64) {
        self.push_front(value);
    }
    fn linear_contains(&self, value: &u64) -> bool {
        self.iter().any(|element| element == value)
    }
}
