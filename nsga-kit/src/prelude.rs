//! This module reimports commonly used types.

pub use crate::HeuristicStatistics;

pub use crate::algorithms::nsga2::MultiObjective;
pub use crate::algorithms::nsga2::Objective;
pub use crate::algorithms::nsga2::select_and_rank;

pub use crate::termination::Termination;

pub use crate::utils::CumulativeSampler;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::Timer;
pub use crate::utils::compare_floats;
pub use crate::utils::{DefaultRandom, Random};
pub use crate::utils::{GenericError, GenericResult};
