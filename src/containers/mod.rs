//! The containers that may be put under test, split by capability group:
//!   - [SequentialContainer]s keep the insertion order, so they can grow at either end and are searched by a linear scan;
//!   - [AssociativeContainer]s decide where each element goes, so they only offer `insert` and their own, native search.
//!
//! [ContainerVariant] tags which of the 4 supported containers is in use -- see [crate::features::SELECTED_VARIANT].

mod sequential;
mod associative;

use std::fmt::{Display, Formatter};


/// Operations every container under test has, no matter its capability group
pub trait ContainerLifecycle: Default {
    /// number of elements currently stored
    fn len(&self) -> usize;
    /// number of elements the backing memory currently has room for -- for node based containers, the same as [Self::len()]
    fn reserved_capacity(&self) -> usize;
    /// Destroys this instance -- releasing all its backing memory -- and puts a fresh, empty one in its place.\
    /// Clearing is not enough: some containers keep their capacity after a `clear()`, which would skew the
    /// timings of the next, bigger, size level.
    fn recreate(&mut self) {
        drop(std::mem::take(self));
    }
}

/// Containers keeping the insertion order: contiguous arrays & linked lists
pub trait SequentialContainer: ContainerLifecycle {
    /// adds `value` after the last element
    fn append(&mut self, value: u64);
    /// adds `value` before the first element
    fn prepend(&mut self, value: u64);
    /// tells if `value` is present by visiting the elements in order, from the first one
    fn linear_contains(&self, value: &u64) -> bool;
}

/// Containers that place elements on their own terms: ordered (tree) sets & hash sets
pub trait AssociativeContainer: ContainerLifecycle {
    fn insert(&mut self, value: u64);
    /// tells if `value` is present using the container's own lookup
    fn contains(&self, value: &u64) -> bool;
}

/// The operations measured by the benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Append,
    Prepend,
    Insert,
    Search,
}
impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Append  => "APPEND",
            Self::Prepend => "PREPEND",
            Self::Insert  => "INSERT",
            Self::Search  => "SEARCH",
        }
    }
}

/// The 4 interchangeable containers this crate knows how to measure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerVariant {
    /// contiguous array: `Vec<u64>`
    Vector,
    /// doubly linked list: `LinkedList<u64>`
    List,
    /// ordered, balanced tree set: `BTreeSet<u64>`
    OrderedSet,
    /// `HashSet<u64>`
    HashSet,
}

impl ContainerVariant {

    pub const ALL: [ContainerVariant; 4] = [Self::Vector, Self::List, Self::OrderedSet, Self::HashSet];

    /// the title used in the report's header
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vector     => "VECTOR",
            Self::List       => "LIST",
            Self::OrderedSet => "SET",
            Self::HashSet    => "UNORDERED_SET",
        }
    }

    /// the concrete Rust type backing this variant
    pub fn rust_type(&self) -> &'static str {
        match self {
            Self::Vector     => "Vec<u64>",
            Self::List       => "LinkedList<u64>",
            Self::OrderedSet => "BTreeSet<u64>",
            Self::HashSet    => "HashSet<u64>",
        }
    }

    /// true for [SequentialContainer]s, which also get the prepend phase
    pub fn is_sequential(&self) -> bool {
        matches!(self, Self::Vector | Self::List)
    }

    /// the operations this variant supports, in report order, along with their theoretical time complexity
    pub fn theoretical_complexities(&self) -> &'static [(OperationKind, &'static str)] {
        match self {
            Self::Vector => &[
                (OperationKind::Append,  "O(1) amortized [realloc: O(n)]"),
                (OperationKind::Prepend, "O(n)"),
                (OperationKind::Search,  "O(n) [linear scan]"),
            ],
            Self::List => &[
                (OperationKind::Append,  "O(1)"),
                (OperationKind::Prepend, "O(1)"),
                (OperationKind::Search,  "O(n) [linear scan]"),
            ],
            Self::OrderedSet => &[
                (OperationKind::Insert,  "O(log(n))"),
                (OperationKind::Search,  "O(log(n))"),
            ],
            Self::HashSet => &[
                (OperationKind::Insert,  "O(1) average, O(n) worst case"),
                (OperationKind::Search,  "O(1) average, O(n) worst case"),
            ],
        }
    }
}

impl Display for ContainerVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.rust_type())
    }
}
