//! Solver configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use fleet_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies evolution configuration.
    pub evolution: Option<EvolutionConfig>,
    /// Specifies objective variant.
    pub objective: Option<ObjectiveType>,
    /// Specifies termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// An evolution configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionConfig {
    pub population_size: Option<usize>,
    pub tournament_size: Option<usize>,
    pub crossover_attempts: Option<usize>,
    pub mutation: Option<MutationType>,
    pub emission_swap_probability: Option<f64>,
    pub consolidation_probability: Option<f64>,
    pub desirability: Option<DesirabilityType>,
}

/// A mutation rate schedule.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum MutationType {
    #[serde(rename(deserialize = "constant"))]
    Constant { rate: f64 },

    #[serde(rename(deserialize = "decay"))]
    #[serde(rename_all = "camelCase")]
    Decay {
        /// An initial rate. Default is 0.3.
        initial: Option<f64>,
        /// A share of run after which decay is complete. Default is 0.7.
        decay_ratio: Option<f64>,
        /// A lower bound of rate. Default is 0.02.
        min: Option<f64>,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DesirabilityType {
    Score,
    Rank,
}

/// An objective variant.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ObjectiveType {
    #[serde(rename(deserialize = "tradeoff"))]
    #[serde(rename_all = "camelCase")]
    Tradeoff { cost_weight: Option<f64>, emission_weight: Option<f64> },

    #[serde(rename(deserialize = "cost"))]
    Cost,

    #[serde(rename(deserialize = "emission"))]
    Emission,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    pub max_generations: Option<usize>,
    pub max_time: Option<f64>,
    /// Amount of generations without improvement. Zero disables the criteria.
    pub stall_generations: Option<usize>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// A random seed. Taken from entropy when not set.
    pub seed: Option<u64>,
    /// Amount of worker threads. Default is amount of cpus.
    pub threads: Option<usize>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TelemetryConfig {
    pub logging: Option<LoggingConfig>,
    pub metrics: Option<MetricsConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies how often best individual is logged. Default is 50 (generations).
    pub log_best: Option<usize>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsConfig {
    /// Specifies whether metrics collection is enabled. Default is false.
    pub enabled: bool,
    /// Specifies how often generation is tracked. Default is 1 (generation).
    pub track_best: Option<usize>,
}

impl ObjectiveType {
    /// Converts the type into objective variant.
    pub fn to_variant(&self) -> ObjectiveVariant {
        match self {
            Self::Tradeoff { cost_weight, emission_weight } => ObjectiveVariant::Tradeoff {
                cost_weight: cost_weight.unwrap_or(0.5),
                emission_weight: emission_weight.unwrap_or(0.5),
            },
            Self::Cost => ObjectiveVariant::CostMinimizing,
            Self::Emission => ObjectiveVariant::EmissionMinimizing,
        }
    }
}

impl Config {
    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.telemetry.as_ref().and_then(|t| t.logging.as_ref()).is_some_and(|logging| logging.enabled)
    }
}

fn configure_from_evolution(mut builder: SolverBuilder, evolution_config: &Option<EvolutionConfig>) -> SolverBuilder {
    if let Some(config) = evolution_config {
        if let Some(size) = config.population_size {
            builder = builder.with_population_size(size);
        }

        if let Some(size) = config.tournament_size {
            builder = builder.with_tournament_size(size);
        }

        if let Some(attempts) = config.crossover_attempts {
            builder = builder.with_crossover_attempts(attempts);
        }

        if let Some(mutation) = &config.mutation {
            builder = builder.with_mutation_schedule(match mutation {
                MutationType::Constant { rate } => MutationSchedule::Constant { rate: *rate },
                MutationType::Decay { initial, decay_ratio, min } => MutationSchedule::LinearDecay {
                    initial: initial.unwrap_or(0.3),
                    decay_ratio: decay_ratio.unwrap_or(0.7),
                    min_rate: min.unwrap_or(0.02),
                },
            });
        }

        if config.emission_swap_probability.is_some() || config.consolidation_probability.is_some() {
            let defaults = SolverConfig::default();
            builder = builder.with_mutation_probabilities(
                config.emission_swap_probability.unwrap_or(defaults.emission_swap_probability),
                config.consolidation_probability.unwrap_or(defaults.consolidation_probability),
            );
        }

        if let Some(desirability) = &config.desirability {
            builder = builder.with_desirability_source(match desirability {
                DesirabilityType::Score => DesirabilitySource::Score,
                DesirabilityType::Rank => DesirabilitySource::Rank,
            });
        }
    }

    builder
}

fn configure_from_termination(
    mut builder: SolverBuilder,
    termination_config: &Option<TerminationConfig>,
) -> SolverBuilder {
    if let Some(config) = termination_config {
        if let Some(limit) = config.max_generations {
            builder = builder.with_max_generations(limit);
        }

        if let Some(limit) = config.stall_generations {
            builder = builder.with_stall_generations(Some(limit).filter(|limit| *limit > 0));
        }

        builder = builder.with_max_time(config.max_time);
    }

    builder
}

fn configure_from_telemetry(
    builder: SolverBuilder,
    telemetry_config: &Option<TelemetryConfig>,
    logger: InfoLogger,
) -> SolverBuilder {
    const LOG_BEST: usize = 50;
    const TRACK_BEST: usize = 1;

    let logging = telemetry_config.as_ref().and_then(|t| t.logging.as_ref()).filter(|logging| logging.enabled);
    let metrics = telemetry_config.as_ref().and_then(|t| t.metrics.as_ref()).filter(|metrics| metrics.enabled);

    let telemetry_mode = match (logging, metrics) {
        (Some(logging), Some(metrics)) => TelemetryMode::All {
            logger,
            log_best: logging.log_best.unwrap_or(LOG_BEST),
            track_best: metrics.track_best.unwrap_or(TRACK_BEST),
        },
        (Some(logging), None) => TelemetryMode::OnlyLogging { logger, log_best: logging.log_best.unwrap_or(LOG_BEST) },
        (None, Some(metrics)) => TelemetryMode::OnlyMetrics { track_best: metrics.track_best.unwrap_or(TRACK_BEST) },
        (None, None) => TelemetryMode::None,
    };

    builder.with_telemetry(telemetry_mode)
}

fn create_environment(environment_config: &Option<EnvironmentConfig>, logger: InfoLogger) -> Environment {
    let (seed, threads) =
        environment_config.as_ref().map_or((None, None), |environment| (environment.seed, environment.threads));

    Environment::new(seed, Parallelism::new(threads.unwrap_or_else(num_cpus::get)), logger)
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a solver builder from config. Logger is used by solver and by telemetry.
pub fn create_builder_from_config(config: &Config, logger: InfoLogger) -> SolverBuilder {
    let builder = SolverBuilder::new(create_environment(&config.environment, logger.clone()));

    let builder = configure_from_telemetry(builder, &config.telemetry, logger);
    let builder = configure_from_evolution(builder, &config.evolution);
    let builder = configure_from_termination(builder, &config.termination);

    match &config.objective {
        Some(objective) => builder.with_objective(objective.to_variant()),
        None => builder,
    }
}

/// Creates a logger which does nothing.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}
