#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use crate::construction::DesirabilitySource;
use crate::models::ObjectiveVariant;
use nsga_kit::prelude::{Float, GenericResult};
use nsga_kit::termination::*;

/// Specifies how mutation rate changes during the search.
#[derive(Clone, Debug, PartialEq)]
pub enum MutationSchedule {
    /// The same rate for the whole run.
    Constant {
        /// A mutation rate.
        rate: Float,
    },
    /// A rate which decays linearly from initial value and reaches zero when `decay_ratio` of
    /// the run is done. It is never lower than `min_rate`.
    LinearDecay {
        /// An initial rate.
        initial: Float,
        /// A share of the run after which decay is complete.
        decay_ratio: Float,
        /// A lower bound.
        min_rate: Float,
    },
}

impl Default for MutationSchedule {
    fn default() -> Self {
        Self::LinearDecay { initial: 0.3, decay_ratio: 0.7, min_rate: 0.02 }
    }
}

impl MutationSchedule {
    /// Returns mutation rate for given search progress in `[0, 1]` range.
    pub fn rate(&self, progress: Float) -> Float {
        match self {
            Self::Constant { rate } => *rate,
            Self::LinearDecay { initial, decay_ratio, min_rate } => {
                let decay = if *decay_ratio > 0. { (progress.max(0.) / decay_ratio).min(1.) } else { 1. };

                (initial * (1. - decay)).max(*min_rate)
            }
        }
    }

    fn validate(&self) -> GenericResult<()> {
        let is_rate = |value: Float| (0. ..=1.).contains(&value);

        match self {
            Self::Constant { rate } if !is_rate(*rate) => Err(format!("mutation rate must be in [0, 1]: {rate}").into()),
            Self::LinearDecay { initial, decay_ratio, min_rate }
                if !is_rate(*initial) || !is_rate(*min_rate) || !decay_ratio.is_finite() || *decay_ratio < 0. =>
            {
                Err(format!(
                    "invalid mutation decay: initial={initial}, decay ratio={decay_ratio}, min rate={min_rate}"
                )
                .into())
            }
            _ => Ok(()),
        }
    }
}

/// Specifies when evolution of a bucket stops. Any of the criteria stops it.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminationConfig {
    /// Max amount of generations.
    pub max_generations: usize,
    /// Max amount of generations without improvement of the best fitness.
    pub stall_generations: Option<usize>,
    /// Max running time of one bucket in seconds.
    pub max_time: Option<Float>,
}

impl Default for TerminationConfig {
    fn default() -> Self {
        Self { max_generations: 150, stall_generations: Some(50), max_time: None }
    }
}

impl TerminationConfig {
    /// Creates a termination from the configuration.
    pub fn create_termination(&self) -> CompositeTermination {
        let mut terminations: Vec<BoxedTermination> = vec![Box::new(MaxGeneration::new(self.max_generations))];

        if let Some(limit) = self.stall_generations {
            terminations.push(Box::new(MinImprovement::new(limit)));
        }

        if let Some(limit) = self.max_time {
            terminations.push(Box::new(MaxTime::new(limit)));
        }

        CompositeTermination::new(terminations)
    }
}

/// A configuration of the evolution run on each bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// A population size, also the amount of offspring per generation.
    pub population_size: usize,
    /// Amount of participants in parent selection tournament.
    pub tournament_size: usize,
    /// Max amount of cut resampling in crossover.
    pub crossover_attempts: usize,
    /// A mutation rate schedule.
    pub mutation: MutationSchedule,
    /// A probability of emission swap mutation.
    pub emission_swap_probability: Float,
    /// A probability of consolidation mutation.
    pub consolidation_probability: Float,
    /// A source of weights for random construction.
    pub desirability: DesirabilitySource,
    /// An objective variant.
    pub objective: ObjectiveVariant,
    /// Termination criteria.
    pub termination: TerminationConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            tournament_size: 3,
            crossover_attempts: 10,
            mutation: MutationSchedule::default(),
            emission_swap_probability: 0.4,
            consolidation_probability: 0.3,
            desirability: DesirabilitySource::default(),
            objective: ObjectiveVariant::default(),
            termination: TerminationConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Checks that configuration values are in valid ranges.
    pub fn validate(&self) -> GenericResult<()> {
        if self.population_size == 0 {
            return Err("population size must be positive".into());
        }

        if self.tournament_size == 0 {
            return Err("tournament size must be positive".into());
        }

        if self.crossover_attempts == 0 {
            return Err("crossover attempts must be positive".into());
        }

        self.mutation.validate()?;

        for (name, probability) in
            [("emission swap", self.emission_swap_probability), ("consolidation", self.consolidation_probability)]
        {
            if !(0. ..=1.).contains(&probability) {
                return Err(format!("{name} probability must be in [0, 1]: {probability}").into());
            }
        }

        if let ObjectiveVariant::Tradeoff { cost_weight, emission_weight } = &self.objective {
            let is_weight = |value: &Float| value.is_finite() && *value >= 0.;
            if !is_weight(cost_weight) || !is_weight(emission_weight) || cost_weight + emission_weight <= 0. {
                return Err(format!(
                    "objective weights must be non negative with positive sum: cost={cost_weight}, emission={emission_weight}"
                )
                .into());
            }
        }

        if self.termination.max_generations == 0 {
            return Err("max generations must be positive".into());
        }

        if let Some(max_time) = self.termination.max_time.filter(|time| !time.is_finite() || *time <= 0.) {
            return Err(format!("max time must be positive: {max_time}").into());
        }

        Ok(())
    }
}
