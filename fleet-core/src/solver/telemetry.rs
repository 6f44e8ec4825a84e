//! A module which provides the logic to collect metrics about evolution of a bucket and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use nsga_kit::prelude::{Float, HeuristicStatistics, InfoLogger, Timer};
use serde::Serialize;
use std::ops::Deref;

/// Encapsulates different measurements regarding evolution of one bucket.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TelemetryMetrics {
    /// Evolution duration in milliseconds.
    pub duration: usize,
    /// Total amount of generations.
    pub generations: usize,
    /// Speed: generations per second.
    pub speed: Float,
    /// Evolution progress.
    pub evolution: Vec<Generation>,
}

/// Represents information about generation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    /// Generation sequence number.
    pub number: usize,
    /// Time since evolution started.
    pub timestamp: Float,
    /// Overall improvement ratio.
    pub i_all_ratio: Float,
    /// True if this generation considered as improvement.
    pub is_improvement: bool,
    /// A best known fitness.
    pub best_fitness: Option<Float>,
    /// Amount of individuals in the non-dominated front.
    pub front_size: usize,
    /// A mutation rate used in this generation.
    pub mutation_rate: Float,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often generation is tracked.
        track_best: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
        /// Specifies how often generation is tracked.
        track_best: usize,
    },
}

/// A state of generation passed to telemetry.
pub struct GenerationInfo {
    /// A best known fitness.
    pub best_fitness: Option<Float>,
    /// Amount of individuals in the non-dominated front.
    pub front_size: usize,
    /// A mutation rate used in this generation.
    pub mutation_rate: Float,
    /// True if best fitness was improved.
    pub is_improvement: bool,
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
    prefix: String,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { metrics: TelemetryMetrics::default(), time: Timer::start(), mode, prefix: String::new() }
    }

    /// Creates a new instance of `Telemetry` which prefixes every message with given name.
    pub fn new_with_prefix(mode: TelemetryMode, prefix: &str) -> Self {
        Self { prefix: format!("{prefix}: "), ..Self::new(mode) }
    }

    /// Starts telemetry reporting.
    pub fn start(&mut self) {
        self.time = Timer::start();
    }

    /// Reports initial population statistics.
    pub fn on_initial(&mut self, population_size: usize, max_vehicles: u32, best_fitness: Option<Float>, time: Timer) {
        self.log(
            format!(
                "[{}s] created initial population of {} allocations (max vehicles: {}) in {}ms, best fitness: {}",
                self.time.elapsed_secs(),
                population_size,
                max_vehicles,
                time.elapsed_millis(),
                format_fitness(best_fitness)
            )
            .as_str(),
        );
    }

    /// Reports generation statistics.
    pub fn on_generation(&mut self, statistics: &HeuristicStatistics, info: GenerationInfo, generation_time: Timer) {
        let (log_best, track_best) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best, .. } => (Some(*log_best), None),
            TelemetryMode::OnlyMetrics { track_best } => (None, Some(*track_best)),
            TelemetryMode::All { log_best, track_best, .. } => (Some(*log_best), Some(*track_best)),
        };

        let generation = statistics.generation;
        self.metrics.generations = generation;

        let is_nth = |frequency: Option<usize>| frequency.is_some_and(|frequency| generation % frequency.max(1) == 0);

        if is_nth(log_best) {
            self.log(
                format!(
                    "[{}s] generation {} took {}ms, best fitness: {}, front size: {}, mutation rate: {:.3}, improvement ratio: {:.3}",
                    self.time.elapsed_secs(),
                    generation,
                    generation_time.elapsed_millis(),
                    format_fitness(info.best_fitness),
                    info.front_size,
                    info.mutation_rate,
                    statistics.improvement_all_ratio,
                )
                .as_str(),
            );
        }

        if is_nth(track_best) {
            self.metrics.evolution.push(Generation {
                number: generation,
                timestamp: self.time.elapsed_secs_as_float(),
                i_all_ratio: statistics.improvement_all_ratio,
                is_improvement: info.is_improvement,
                best_fitness: info.best_fitness,
                front_size: info.front_size,
                mutation_rate: info.mutation_rate,
            });
        }
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, statistics: &HeuristicStatistics, best_fitness: Option<Float>) {
        let elapsed = self.time.elapsed_secs_as_float();
        let speed = if elapsed > 0. { statistics.generation as Float / elapsed } else { 0. };

        self.log(
            format!(
                "[{}s] total generations: {}, speed: {:.2} gen/sec, best fitness: {}",
                self.time.elapsed_secs(),
                statistics.generation,
                speed,
                format_fitness(best_fitness)
            )
            .as_str(),
        );

        self.metrics.generations = statistics.generation;
        self.metrics.duration = self.time.elapsed_millis() as usize;
        self.metrics.speed = speed;
    }

    /// Gets metrics.
    pub fn get_metrics(self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => Some(self.metrics),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } | TelemetryMode::All { logger, .. } => {
                logger.deref()(format!("{}{}", self.prefix, message).as_str())
            }
            _ => {}
        }
    }
}

fn format_fitness(fitness: Option<Float>) -> String {
    fitness.map_or("n/a".to_string(), |fitness| format!("{fitness:.4}"))
}
