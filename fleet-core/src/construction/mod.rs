//! The construction module contains building blocks to evaluate, repair and create allocations.

mod evaluator;
pub use self::evaluator::*;

mod fitness;
pub use self::fitness::FitnessFunction;

mod initial;
pub use self::initial::{DesirabilitySource, create_initial_population};

mod repair;
pub use self::repair::{create_basic_allocation, greedy_fill, repair};
