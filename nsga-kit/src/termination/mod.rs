//! The termination module contains logic which defines termination criteria for metaheuristic,
//! e.g. when to stop evolution in evolutionary algorithms.

use crate::HeuristicStatistics;
use crate::utils::{Float, compare_floats};

/// A trait which specifies criteria when metaheuristic should stop searching for improved solution.
pub trait Termination {
    /// Returns true if termination condition is met.
    fn is_termination(&self, statistics: &HeuristicStatistics) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, statistics: &HeuristicStatistics) -> Float;
}

mod max_generation;
pub use self::max_generation::MaxGeneration;

mod max_time;
pub use self::max_time::MaxTime;

mod min_improvement;
pub use self::min_improvement::MinImprovement;

/// A boxed termination which can be shared between threads.
pub type BoxedTermination = Box<dyn Termination + Send + Sync>;

/// A termination which encapsulates multiple termination criteria: any of them stops the search.
pub struct CompositeTermination {
    terminations: Vec<BoxedTermination>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<BoxedTermination>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, statistics: &HeuristicStatistics) -> bool {
        self.terminations.iter().any(|t| t.is_termination(statistics))
    }

    fn estimate(&self, statistics: &HeuristicStatistics) -> Float {
        self.terminations.iter().map(|t| t.estimate(statistics)).max_by(|a, b| compare_floats(*a, *b)).unwrap_or(0.)
    }
}
