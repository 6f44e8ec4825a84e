#[cfg(test)]
#[path = "../../tests/unit/solver/evolution_test.rs"]
mod evolution_test;

use crate::construction::*;
use crate::models::{Allocation, BucketContext};
use crate::solver::operators::{Mutation, OperatorContext, crossover, tournament};
use crate::solver::ranking::{FleetObjective, Individual};
use crate::solver::telemetry::{GenerationInfo, Telemetry, TelemetryMetrics};
use crate::solver::SolverConfig;
use nsga_kit::prelude::*;
use std::sync::Arc;

/// A result of evolution on one bucket.
pub struct BucketOutcome {
    /// The best feasible individual found, if any.
    pub best: Option<Individual>,
    /// Amount of generations run.
    pub generations: usize,
    /// Duration in milliseconds.
    pub duration_ms: usize,
    /// Collected metrics, if telemetry is configured to track them.
    pub metrics: Option<TelemetryMetrics>,
}

/// Runs evolution on one bucket and returns the best feasible allocation by fitness.
pub fn solve_bucket(
    bucket: Arc<BucketContext>,
    config: &SolverConfig,
    random: &dyn Random,
    mut telemetry: Telemetry,
) -> BucketOutcome {
    telemetry.start();

    let evaluator = ObjectiveEvaluator::new(bucket.clone(), &config.objective);
    let fitness_fn = FitnessFunction::new(&evaluator, &config.objective);
    let objective = FleetObjective::default();
    let termination = config.termination.create_termination();
    let mutation = Mutation::new(config.emission_swap_probability, config.consolidation_probability);

    let basic = create_basic_allocation(bucket.as_ref());
    let ctx = OperatorContext { bucket: bucket.as_ref(), basic: &basic, random };

    let evaluate = |allocation: Allocation| {
        let values = evaluator.evaluate(&allocation);
        let fitness = fitness_fn.fitness(bucket.as_ref(), &allocation, &values);

        Individual { allocation, values, fitness }
    };

    let mut statistics = HeuristicStatistics::default();

    let initial_time = Timer::start();
    let initial_rate = config.mutation.rate(0.);
    let mut population = create_initial_population(
        bucket.as_ref(),
        config.population_size,
        &config.desirability,
        random,
        |allocation| mutation.mutate(&ctx, initial_rate, allocation),
    )
    .into_iter()
    .map(evaluate)
    .collect::<Vec<_>>();

    let mut best = get_best(population.as_slice()).cloned();
    telemetry.on_initial(population.len(), bucket.max_vehicles, best.as_ref().map(|b| b.fitness), initial_time);

    while !population.is_empty() && !termination.is_termination(&statistics) {
        let generation_time = Timer::start();
        let mutation_rate = config.mutation.rate(termination.estimate(&statistics));

        let fitness = population.iter().map(|individual| individual.fitness).collect::<Vec<_>>();
        let mut offspring = Vec::with_capacity(config.population_size);

        while offspring.len() < config.population_size {
            let left = &population[tournament(fitness.as_slice(), config.tournament_size, random)];
            let right = &population[tournament(fitness.as_slice(), config.tournament_size, random)];

            let (first, second) = crossover(&ctx, (&left.allocation, &right.allocation), config.crossover_attempts);

            offspring.push(evaluate(mutation.mutate(&ctx, mutation_rate, &first)));
            if offspring.len() < config.population_size {
                offspring.push(evaluate(mutation.mutate(&ctx, mutation_rate, &second)));
            }
        }

        let merged = population.into_iter().chain(offspring).collect::<Vec<_>>();
        let selected = select_and_rank(merged.as_slice(), config.population_size, &objective);
        let front_size = selected.iter().filter(|assigned| assigned.rank == 0).count();

        population = selected.iter().map(|assigned| merged[assigned.index].clone()).collect();

        let is_improvement = match (get_best(population.as_slice()), best.as_ref()) {
            (Some(candidate), Some(current)) => candidate.fitness > current.fitness,
            (Some(_), None) => true,
            _ => false,
        };

        if is_improvement {
            best = get_best(population.as_slice()).cloned();
        }

        statistics.on_generation(is_improvement);
        telemetry.on_generation(
            &statistics,
            GenerationInfo { best_fitness: best.as_ref().map(|b| b.fitness), front_size, mutation_rate, is_improvement },
            generation_time,
        );
    }

    telemetry.on_result(&statistics, best.as_ref().map(|b| b.fitness));

    BucketOutcome {
        best,
        generations: statistics.generation,
        duration_ms: statistics.time.elapsed_millis() as usize,
        metrics: telemetry.get_metrics(),
    }
}

/// Returns feasible individual with the highest fitness. The first one wins ties.
fn get_best(population: &[Individual]) -> Option<&Individual> {
    population.iter().filter(|individual| individual.values.is_feasible).fold(None, |best, individual| match best {
        Some(best) if best.fitness >= individual.fitness => Some(best),
        _ => Some(individual),
    })
}
