//! Multi objective selection primitives of NSGA-II: non-dominated sorting into Pareto fronts,
//! crowding distance within a front and elitist truncation of a merged population.
//!
//! See "A fast and elitist multiobjective genetic algorithm: NSGA-II", Deb et al. (2002).

mod crowding_distance;
pub use self::crowding_distance::*;

mod non_dominated_sort;
pub use self::non_dominated_sort::*;

mod nsga2_sort;
pub use self::nsga2_sort::select_and_rank;

mod objective;
pub use self::objective::*;
