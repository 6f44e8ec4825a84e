#[cfg(test)]
#[path = "../../tests/unit/solver/builder_test.rs"]
mod builder_test;

use crate::construction::DesirabilitySource;
use crate::models::ObjectiveVariant;
use crate::solver::{MutationSchedule, Solver, SolverConfig, TelemetryMode};
use nsga_kit::prelude::{Environment, Float, GenericResult};
use std::ops::Deref;

/// Provides configurable way to build solver.
pub struct SolverBuilder {
    environment: Environment,
    config: SolverConfig,
    telemetry_mode: TelemetryMode,
}

impl SolverBuilder {
    /// Creates a new instance of `SolverBuilder` with default configuration.
    pub fn new(environment: Environment) -> Self {
        Self { environment, config: SolverConfig::default(), telemetry_mode: TelemetryMode::None }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets population size.
    /// Default is 100.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.log(format!("configured to use population size={size}").as_str());
        self.config.population_size = size;
        self
    }

    /// Sets tournament size.
    /// Default is 3.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.log(format!("configured to use tournament size={size}").as_str());
        self.config.tournament_size = size;
        self
    }

    /// Sets max amount of crossover attempts.
    /// Default is 10.
    pub fn with_crossover_attempts(mut self, attempts: usize) -> Self {
        self.log(format!("configured to use crossover attempts={attempts}").as_str());
        self.config.crossover_attempts = attempts;
        self
    }

    /// Sets mutation schedule.
    /// Default is linear decay from 0.3 to 0.02.
    pub fn with_mutation_schedule(mut self, schedule: MutationSchedule) -> Self {
        self.log(format!("configured to use mutation schedule {schedule:?}").as_str());
        self.config.mutation = schedule;
        self
    }

    /// Sets probabilities of emission swap and consolidation mutations.
    /// Default is 0.4 and 0.3.
    pub fn with_mutation_probabilities(mut self, emission_swap: Float, consolidation: Float) -> Self {
        self.log(
            format!("configured to use emission swap probability={emission_swap}, consolidation={consolidation}")
                .as_str(),
        );
        self.config.emission_swap_probability = emission_swap;
        self.config.consolidation_probability = consolidation;
        self
    }

    /// Sets a source of desirability weights.
    /// Default is score.
    pub fn with_desirability_source(mut self, source: DesirabilitySource) -> Self {
        self.log(format!("configured to use desirability {source:?}").as_str());
        self.config.desirability = source;
        self
    }

    /// Sets objective variant.
    /// Default is trade-off with equal weights.
    pub fn with_objective(mut self, objective: ObjectiveVariant) -> Self {
        self.log(format!("configured to use {} objective", objective.name()).as_str());
        self.config.objective = objective;
        self
    }

    /// Sets max generations to be run per bucket.
    /// Default is 150.
    pub fn with_max_generations(mut self, limit: usize) -> Self {
        self.log(format!("configured to use max-generations {limit}").as_str());
        self.config.termination.max_generations = limit;
        self
    }

    /// Sets amount of generations without improvement which stops the search.
    /// Default is 50.
    pub fn with_stall_generations(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.log(format!("configured to use stall generations {limit}").as_str());
        }
        self.config.termination.stall_generations = limit;
        self
    }

    /// Sets max running time limit of one bucket in seconds.
    /// Default is none.
    pub fn with_max_time(mut self, limit: Option<Float>) -> Self {
        if let Some(limit) = limit {
            self.log(format!("configured to use max-time {limit}s").as_str());
        }
        self.config.termination.max_time = limit;
        self
    }

    /// Sets telemetry mode.
    /// Default is none.
    pub fn with_telemetry(mut self, mode: TelemetryMode) -> Self {
        self.telemetry_mode = mode;
        self
    }

    /// Builds solver with parameters specified.
    pub fn build(self) -> GenericResult<Solver> {
        self.config.validate().map_err(|err| err.context("invalid solver configuration"))?;

        Ok(Solver::new(self.environment, self.config, self.telemetry_mode))
    }

    fn log(&self, message: &str) {
        self.environment.logger.deref()(message)
    }
}
