#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/nsga2_sort_test.rs"]
mod nsga2_sort_test;

use super::*;
use crate::utils::compare_floats;

/// Selects at most `n` solutions by front rank and crowding distance.
///
/// Whole fronts are taken in rank order while they fit. The first front which does not fit is
/// truncated: its most isolated solutions (largest crowding distance) are kept. Members of fully
/// taken fronts keep their original order.
pub fn select_and_rank<'a, S: 'a>(
    solutions: &'a [S],
    n: usize,
    multi_objective: &impl MultiObjective<Solution = S>,
) -> Vec<AssignedCrowdingDistance<'a, S>> {
    let target = solutions.len().min(n);
    let mut selected = Vec::with_capacity(target);
    let mut front = non_dominated_sort(solutions, multi_objective);

    while selected.len() < target && !front.is_empty() {
        let (mut candidates, _) = assign_crowding_distance(&front, multi_objective);
        let room = target - selected.len();

        if candidates.len() > room {
            candidates.sort_by(|a, b| compare_floats(b.crowding_distance, a.crowding_distance));
            candidates.truncate(room);
        } else {
            candidates.sort_by_key(|candidate| candidate.index);
        }

        selected.append(&mut candidates);
        front = front.next_front();
    }

    debug_assert_eq!(target, selected.len());

    selected
}
