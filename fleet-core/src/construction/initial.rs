#[cfg(test)]
#[path = "../../tests/unit/construction/initial_test.rs"]
mod initial_test;

use crate::construction::{create_basic_allocation, greedy_fill};
use crate::models::{Allocation, BucketContext};
use nsga_kit::prelude::{CumulativeSampler, Float, Random};
use rustc_hash::FxHashSet;

/// A probability to add sampled vehicle type during random construction.
const ADD_PROBABILITY: Float = 0.7;

/// A probability to stop random construction when sampled vehicle type is not added.
const STOP_PROBABILITY: Float = 0.2;

/// Specifies which desirability attribute biases random construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DesirabilitySource {
    /// Use desirability score as weight.
    #[default]
    Score,
    /// Use rank as weight: dense rank ascending by score, so the best vehicle has the highest rank.
    /// Vehicles without rank get zero weight.
    Rank,
}

impl DesirabilitySource {
    /// Returns sampling weights of bucket's vehicles.
    pub fn weights(&self, bucket: &BucketContext) -> Vec<Float> {
        bucket
            .vehicles
            .iter()
            .map(|vehicle| match self {
                Self::Score => vehicle.desirability_score,
                Self::Rank => vehicle.desirability_rank.map_or(0., |rank| rank as Float),
            })
            .collect()
    }
}

/// Creates initial population of given size. All members are feasible:
/// - greedy allocations by ascending emission and by descending range (if feasible)
/// - desirability biased random allocations, feasible and distinct ones only
/// - mutated copies of random existing members (or basic allocation) till population is full
pub fn create_initial_population<F>(
    bucket: &BucketContext,
    population_size: usize,
    source: &DesirabilitySource,
    random: &dyn Random,
    mutate: F,
) -> Vec<Allocation>
where
    F: Fn(&Allocation) -> Allocation,
{
    let mut population: Vec<Allocation> = Vec::with_capacity(population_size);
    let mut known = FxHashSet::default();

    let mut try_add = |population: &mut Vec<Allocation>, allocation: Allocation| {
        if population.len() < population_size && bucket.is_feasible(&allocation) && known.insert(allocation.clone())
        {
            population.push(allocation);
        }
    };

    try_add(&mut population, greedy_fill(bucket, bucket.sorted_indices(|v| v.emission_per_km).as_slice()));
    try_add(&mut population, greedy_fill(bucket, bucket.sorted_indices(|v| -v.yearly_range).as_slice()));

    if let Some(sampler) = CumulativeSampler::new(source.weights(bucket).as_slice()) {
        let max_attempts = population_size * 10;
        let mut attempts = 0;

        while population.len() < population_size && attempts < max_attempts {
            attempts += 1;
            try_add(&mut population, create_random_allocation(bucket, &sampler, random));
        }
    }

    if population.is_empty() && population_size > 0 {
        population.push(create_basic_allocation(bucket));
    }

    while population.len() < population_size {
        let base = &population[random.uniform_index(population.len())];
        let mutated = mutate(base);

        let allocation = if bucket.is_feasible(&mutated) { mutated } else { base.clone() };
        population.push(allocation);
    }

    population
}

fn create_random_allocation(bucket: &BucketContext, sampler: &CumulativeSampler, random: &dyn Random) -> Allocation {
    let mut allocation = Allocation::new(bucket.size());

    while allocation.total() < bucket.max_vehicles {
        let idx = sampler.sample(random);

        if random.is_hit(ADD_PROBABILITY) {
            allocation.increment(idx);
        } else if random.is_hit(STOP_PROBABILITY) {
            break;
        }
    }

    allocation
}
