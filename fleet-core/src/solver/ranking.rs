#[cfg(test)]
#[path = "../../tests/unit/solver/ranking_test.rs"]
mod ranking_test;

use crate::construction::ObjectiveValues;
use crate::models::Allocation;
use nsga_kit::algorithms::nsga2::{BoxedObjective, MultiObjective, Objective, non_dominated_sort};
use nsga_kit::prelude::{Float, compare_floats};
use std::cmp::Ordering;

/// An evaluated allocation.
#[derive(Clone, Debug)]
pub struct Individual {
    /// An allocation.
    pub allocation: Allocation,
    /// Objective values.
    pub values: ObjectiveValues,
    /// A scalar fitness, higher is better.
    pub fitness: Float,
}

struct CostObjective;

impl Objective for CostObjective {
    type Solution = Individual;

    fn total_order(&self, a: &Self::Solution, b: &Self::Solution) -> Ordering {
        compare_floats(self.fitness(a), self.fitness(b))
    }

    fn fitness(&self, solution: &Self::Solution) -> Float {
        solution.values.ranking_pair().0
    }
}

struct EmissionObjective;

impl Objective for EmissionObjective {
    type Solution = Individual;

    fn total_order(&self, a: &Self::Solution, b: &Self::Solution) -> Ordering {
        compare_floats(self.fitness(a), self.fitness(b))
    }

    fn fitness(&self, solution: &Self::Solution) -> Float {
        solution.values.ranking_pair().1
    }
}

/// A multi objective over total cost and total emissions. Infeasible individuals are ranked
/// as having infinite cost and emissions.
pub struct FleetObjective {
    objectives: Vec<BoxedObjective<Individual>>,
}

impl Default for FleetObjective {
    fn default() -> Self {
        Self { objectives: vec![Box::new(CostObjective), Box::new(EmissionObjective)] }
    }
}

impl MultiObjective for FleetObjective {
    type Solution = Individual;

    fn objectives<'a>(&'a self) -> Box<dyn Iterator<Item = &'a BoxedObjective<Self::Solution>> + 'a> {
        Box::new(self.objectives.iter())
    }
}

/// Returns Pareto front rank of each individual, zero is the non-dominated front.
pub fn rank_population(population: &[Individual]) -> Vec<usize> {
    let objective = FleetObjective::default();
    let mut ranks = vec![0; population.len()];

    let mut front = non_dominated_sort(population, &objective);
    while !front.is_empty() {
        let rank = front.rank();
        front.iter().for_each(|(_, idx)| ranks[idx] = rank);
        front = front.next_front();
    }

    ranks
}
