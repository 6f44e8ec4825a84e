#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/crowding_distance_test.rs"]
mod crowding_distance_test;

use super::{Front, MultiObjective};
use crate::utils::Float;

/// A solution from a front with its assigned crowding distance.
pub struct AssignedCrowdingDistance<'a, S>
where
    S: 'a,
{
    /// Index of the solution in the original slice.
    pub index: usize,
    /// A reference to the solution.
    pub solution: &'a S,
    /// Rank of the front the solution belongs to.
    pub rank: usize,
    /// Crowding distance: sum of normalized neighbour distances over all objectives.
    pub crowding_distance: Float,
}

/// Keeps per objective information collected while assigning crowding distance.
pub struct ObjectiveStat {
    /// A distance between extreme solutions of the front.
    pub spread: Float,
}

/// Assigns a crowding distance to each solution in `front`.
///
/// For each objective, the two boundary solutions get infinite distance, an interior one gets the
/// distance between its neighbours divided by the objective range. An objective with zero or
/// non finite range gives no contribution to interior solutions.
pub fn assign_crowding_distance<'a, S>(
    front: &Front<'a, S>,
    multi_objective: &impl MultiObjective<Solution = S>,
) -> (Vec<AssignedCrowdingDistance<'a, S>>, Vec<ObjectiveStat>) {
    let mut assigned: Vec<_> = front
        .iter()
        .map(|(solution, index)| AssignedCrowdingDistance { index, solution, rank: front.rank(), crowding_distance: 0. })
        .collect();

    if assigned.is_empty() {
        return (assigned, vec![]);
    }

    let objective_stat = multi_objective
        .objectives()
        .map(|objective| {
            // sort is stable, so equal solutions keep front order
            assigned.sort_by(|a, b| objective.total_order(a.solution, b.solution));

            let last_idx = assigned.len() - 1;
            assigned[0].crowding_distance = Float::INFINITY;
            assigned[last_idx].crowding_distance = Float::INFINITY;

            let spread = objective.distance(assigned[last_idx].solution, assigned[0].solution).abs();

            if spread.is_finite() && spread > 0. {
                for i in 1..last_idx {
                    let distance = objective.distance(assigned[i + 1].solution, assigned[i - 1].solution).abs();
                    assigned[i].crowding_distance += distance / spread;
                }
            }

            ObjectiveStat { spread }
        })
        .collect();

    (assigned, objective_stat)
}
