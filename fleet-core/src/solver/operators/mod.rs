//! Contains genetic operators used to produce offspring.

use crate::models::{Allocation, BucketContext};
use nsga_kit::prelude::Random;

mod crossover;
pub use self::crossover::crossover;

mod mutation;
pub use self::mutation::*;

mod selection;
pub use self::selection::tournament;

/// Keeps data shared by genetic operators of one bucket.
pub struct OperatorContext<'a> {
    /// A bucket.
    pub bucket: &'a BucketContext,
    /// A basic feasible allocation used as the last resort.
    pub basic: &'a Allocation,
    /// A random generator owned by the bucket run.
    pub random: &'a dyn Random,
}

impl OperatorContext<'_> {
    /// Returns the first feasible candidate or basic allocation.
    pub(crate) fn first_feasible<'b>(&self, candidates: impl IntoIterator<Item = &'b Allocation>) -> Allocation {
        candidates
            .into_iter()
            .find(|allocation| self.bucket.is_feasible(allocation))
            .unwrap_or(self.basic)
            .clone()
    }
}
