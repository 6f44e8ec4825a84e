#[cfg(test)]
#[path = "../../tests/unit/models/allocation_test.rs"]
mod allocation_test;

use std::fmt;
use tinyvec::TinyVec;

/// Most buckets have a handful of eligible vehicle types, so counts are kept inline.
type Counts = TinyVec<[u32; 8]>;

/// An allocation (a solution): a count of units per vehicle type, indexed by the stable position of
/// the vehicle type within its bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Allocation {
    counts: Counts,
}

impl Allocation {
    /// Creates an allocation with zero units of each of `size` vehicle types.
    pub fn new(size: usize) -> Self {
        let mut counts = Counts::default();
        counts.resize(size, 0);

        Self { counts }
    }

    /// Creates an allocation from counts.
    pub fn from_counts(counts: &[u32]) -> Self {
        Self { counts: counts.iter().copied().collect() }
    }

    /// Returns counts of all vehicle types.
    pub fn counts(&self) -> &[u32] {
        self.counts.as_slice()
    }

    /// Returns amount of vehicle types.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if there are no vehicle types.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns count of the vehicle type with given index.
    pub fn get(&self, idx: usize) -> u32 {
        self.counts[idx]
    }

    /// Sets count of the vehicle type with given index.
    pub fn set(&mut self, idx: usize, count: u32) {
        self.counts[idx] = count;
    }

    /// Adds one unit of the vehicle type.
    pub fn increment(&mut self, idx: usize) {
        self.counts[idx] += 1;
    }

    /// Removes one unit of the vehicle type. Returns false when there is nothing to remove.
    pub fn decrement(&mut self, idx: usize) -> bool {
        match self.counts[idx] {
            0 => false,
            _ => {
                self.counts[idx] -= 1;
                true
            }
        }
    }

    /// Moves one unit from one vehicle type to another. Returns false if source has no units.
    pub fn transfer(&mut self, from: usize, to: usize) -> bool {
        if self.decrement(from) {
            self.increment(to);
            true
        } else {
            false
        }
    }

    /// Returns total amount of units.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Returns indices of vehicle types with at least one unit.
    pub fn used(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.iter().enumerate().filter(|(_, count)| **count > 0).map(|(idx, _)| idx)
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.counts.iter().map(|count| count.to_string()).collect::<Vec<_>>().join(","))
    }
}
