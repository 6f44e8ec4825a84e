//! This crate exposes NSGA-II ranking primitives, termination criteria and some helper
//! functionality which can be used to build an evolutionary solver for multi objective problems.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod termination;
pub mod utils;

use crate::utils::{Float, Timer};

/// A statistics about the search progress of one evolution run.
#[derive(Clone)]
pub struct HeuristicStatistics {
    /// A number of the current generation.
    pub generation: usize,
    /// Amount of consecutive generations without improvement of the best known solution.
    pub stall_generations: usize,
    /// Ratio of improving generations among all generations.
    pub improvement_all_ratio: Float,
    /// A timer started when the run began.
    pub time: Timer,
}

impl Default for HeuristicStatistics {
    fn default() -> Self {
        Self { generation: 0, stall_generations: 0, improvement_all_ratio: 0., time: Timer::start() }
    }
}

impl HeuristicStatistics {
    /// Advances statistics to the next generation.
    pub fn on_generation(&mut self, is_improved: bool) {
        let total_improvements = self.improvement_all_ratio * self.generation as Float;

        self.generation += 1;
        self.stall_generations = if is_improved { 0 } else { self.stall_generations + 1 };
        self.improvement_all_ratio =
            (total_improvements + if is_improved { 1. } else { 0. }) / self.generation as Float;
    }
}
