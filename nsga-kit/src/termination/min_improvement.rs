#[cfg(test)]
#[path = "../../tests/unit/termination/min_improvement_test.rs"]
mod min_improvement_test;

use super::*;

/// A termination criteria which stops the search when the best known solution has not been
/// improved for the given amount of consecutive generations.
pub struct MinImprovement {
    stall_limit: usize,
}

impl MinImprovement {
    /// Creates a new instance of `MinImprovement`.
    pub fn new(stall_limit: usize) -> Self {
        Self { stall_limit }
    }
}

impl Termination for MinImprovement {
    fn is_termination(&self, statistics: &HeuristicStatistics) -> bool {
        statistics.stall_generations >= self.stall_limit
    }

    /// Stall can be reset by any improvement, so it gives no progress estimation.
    fn estimate(&self, _: &HeuristicStatistics) -> Float {
        0.
    }
}
