use crate::utils::Float;
use std::cmp::Ordering;

/// A single minimized criterion over solutions of some type.
pub trait Objective {
    /// A solution type the objective is defined on.
    type Solution;

    /// Compares two solutions: `Less` means `a` is better than `b`.
    fn total_order(&self, a: &Self::Solution, b: &Self::Solution) -> Ordering;

    /// Returns signed difference between two solutions, zero when they are equal for this objective.
    fn distance(&self, a: &Self::Solution, b: &Self::Solution) -> Float {
        self.fitness(a) - self.fitness(b)
    }

    /// Returns objective value of the solution. Lower is better.
    fn fitness(&self, solution: &Self::Solution) -> Float;
}

/// A boxed objective which can be shared between threads.
pub type BoxedObjective<S> = Box<dyn Objective<Solution = S> + Send + Sync>;

/// A multi objective which orders solutions by Pareto dominance.
pub trait MultiObjective {
    /// A solution type the objective is defined on.
    type Solution;

    /// Returns `Less` if `a` dominates `b`, `Greater` if `b` dominates `a` and `Equal` when
    /// neither of them dominates another.
    fn total_order(&self, a: &Self::Solution, b: &Self::Solution) -> Ordering {
        dominance_order(a, b, self.objectives())
    }

    /// Returns an iterator over the inner objectives.
    fn objectives<'a>(&'a self) -> Box<dyn Iterator<Item = &'a BoxedObjective<Self::Solution>> + 'a>;
}

/// Calculates dominance order of two solutions using multiple objectives.
pub fn dominance_order<'a, S: 'a>(a: &S, b: &S, objectives: impl Iterator<Item = &'a BoxedObjective<S>>) -> Ordering {
    let (a_better, b_better) = objectives.fold((false, false), |(a_better, b_better), objective| {
        match objective.total_order(a, b) {
            Ordering::Less => (true, b_better),
            Ordering::Greater => (a_better, true),
            Ordering::Equal => (a_better, b_better),
        }
    });

    match (a_better, b_better) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
