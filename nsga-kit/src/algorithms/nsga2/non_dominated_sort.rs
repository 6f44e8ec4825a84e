//! Fast non-dominated sorting which splits solutions into Pareto fronts.
//!
//! Dominance relations are computed once for every pair of solutions, `O(K * N^2)` in total for
//! `K` objectives. Next fronts are peeled off lazily by releasing the solutions dominated by the
//! current one.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/non_dominated_sort_test.rs"]
mod non_dominated_sort_test;

use super::MultiObjective;
use std::cmp::Ordering;

/// A Pareto front: solutions which are not dominated by any solution left after removing
/// all lower ranked fronts.
#[derive(Debug, Clone)]
pub struct Front<'s, S: 's> {
    solutions: &'s [S],
    dominates: Vec<Vec<usize>>,
    dominated_by: Vec<usize>,
    members: Vec<usize>,
    rank: usize,
}

impl<'s, S: 's> Front<'s, S> {
    /// Returns rank of the front: zero is the non-dominated one.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns amount of solutions in the front.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if front has no solutions.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns indices of front members in the original slice, ascending.
    pub fn members(&self) -> &[usize] {
        self.members.as_slice()
    }

    /// Iterates over front members together with their index in the original slice.
    pub fn iter(&self) -> impl Iterator<Item = (&'s S, usize)> + '_ {
        let solutions = self.solutions;
        self.members.iter().map(move |&idx| (&solutions[idx], idx))
    }

    /// Consumes the front and returns the next one.
    pub fn next_front(mut self) -> Self {
        let mut released = Vec::new();

        for &member in self.members.iter() {
            for &dominated in self.dominates[member].iter() {
                debug_assert!(self.dominated_by[dominated] > 0);

                self.dominated_by[dominated] -= 1;
                if self.dominated_by[dominated] == 0 {
                    released.push(dominated);
                }
            }
        }

        released.sort_unstable();

        Self { members: released, rank: self.rank + 1, ..self }
    }
}

/// Performs a non-dominated sort of `solutions`. Returns the first Pareto front.
pub fn non_dominated_sort<'s, S, O>(solutions: &'s [S], objective: &O) -> Front<'s, S>
where
    O: MultiObjective<Solution = S>,
{
    let size = solutions.len();
    let mut dominates = vec![Vec::new(); size];
    let mut dominated_by = vec![0_usize; size];

    for left in 0..size {
        for right in (left + 1)..size {
            let (winner, loser) = match objective.total_order(&solutions[left], &solutions[right]) {
                Ordering::Less => (left, right),
                Ordering::Greater => (right, left),
                Ordering::Equal => continue,
            };

            dominates[winner].push(loser);
            dominated_by[loser] += 1;
        }
    }

    let members = (0..size).filter(|&idx| dominated_by[idx] == 0).collect();

    Front { solutions, dominates, dominated_by, members, rank: 0 }
}
